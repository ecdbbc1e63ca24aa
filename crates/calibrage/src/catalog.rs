//! Collection catalog loading
//!
//! A catalog is read from a flat table, either CSV or the first sheet of a
//! workbook, holding at least a collection name column and a characters-per-page
//! column. Rows that cannot be used are dropped silently; only an unreadable
//! source, a missing column or an empty result is fatal.

use crate::options::CatalogOptions;
use crate::types::{CollectionEntry, LoadError};
use calamine::{Data, Range, Reader};
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// How a catalog file is parsed, decided by its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    /// xlsx, xlsm, xlsb, xls or ods; the first sheet is read
    Spreadsheet,
}

impl SourceFormat {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => SourceFormat::Spreadsheet,
            _ => SourceFormat::Csv,
        }
    }
}

/// Sorted, deduplicated collections. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<CollectionEntry>,
}

impl Catalog {
    /// Parse a CSV table. The first row must be the header row.
    ///
    /// Fields that are not valid UTF-8 (legacy exports) are decoded lossily
    /// rather than failing the whole table.
    pub fn from_reader<R: Read>(reader: R, options: &CatalogOptions) -> Result<Self, LoadError> {
        options.check().map_err(LoadError::InvalidOptions)?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter as u8)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .byte_headers()?
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect();
        let (name_idx, density_idx) = locate_columns(&headers, options)?;

        let mut rows = Vec::new();
        let mut total = 0usize;
        for result in reader.byte_records() {
            let record = result?;
            total += 1;

            let name = record
                .get(name_idx)
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .unwrap_or_default();
            let density = record
                .get(density_idx)
                .and_then(|field| parse_density(&String::from_utf8_lossy(field)));
            if let Some(density) = density {
                rows.push(CollectionEntry { name, density });
            }
        }

        let catalog = Self::from_entries(rows)?;
        log::debug!(
            "catalog cleaning kept {} of {} rows",
            catalog.len(),
            total
        );
        Ok(catalog)
    }

    /// Parse the first sheet of a workbook (xlsx, xls, ods...)
    pub fn from_workbook<RS>(reader: RS, options: &CatalogOptions) -> Result<Self, LoadError>
    where
        RS: Read + Seek + Clone,
    {
        let mut workbook = calamine::open_workbook_auto_from_rs(reader)?;
        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range?,
            None => Range::empty(),
        };
        Self::from_range(&range, options)
    }

    /// Build from a sheet whose first row holds the headers.
    /// Empty cells count as missing; numeric cells are densities as-is.
    pub fn from_range(range: &Range<Data>, options: &CatalogOptions) -> Result<Self, LoadError> {
        options.check().map_err(LoadError::InvalidOptions)?;

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .map(|header| {
                header
                    .iter()
                    .map(|cell| cell_text(cell).unwrap_or_default())
                    .collect()
            })
            .unwrap_or_default();
        let (name_idx, density_idx) = locate_columns(&headers, options)?;

        let mut entries = Vec::new();
        let mut total = 0usize;
        for row in rows {
            total += 1;

            let name = row.get(name_idx).and_then(cell_text);
            let density = row.get(density_idx).and_then(cell_number);
            if let (Some(name), Some(density)) = (name, density) {
                entries.push(CollectionEntry { name, density });
            }
        }

        let catalog = Self::from_entries(entries)?;
        log::debug!(
            "catalog cleaning kept {} of {} sheet rows",
            catalog.len(),
            total
        );
        Ok(catalog)
    }

    /// Build a catalog from raw entries: names are trimmed, unusable entries
    /// dropped, the rest sorted by name with the first of each name kept.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CollectionEntry>,
    ) -> Result<Self, LoadError> {
        let mut rows: Vec<CollectionEntry> = entries
            .into_iter()
            .filter_map(|entry| {
                let name = entry.name.trim();
                if name.is_empty() || !entry.density.is_finite() || entry.density <= 0.0 {
                    return None;
                }
                Some(CollectionEntry {
                    name: name.to_string(),
                    density: entry.density,
                })
            })
            .collect();

        // Stable: equal names keep their source order
        rows.sort_by(|a, b| a.name.cmp(&b.name));

        let mut kept: Vec<CollectionEntry> = Vec::with_capacity(rows.len());
        for row in rows {
            match kept.last() {
                Some(first) if first.name == row.name => {
                    if first.density != row.density {
                        log::warn!(
                            "duplicate collection '{}': keeping {} characters/page, ignoring {}",
                            first.name,
                            first.density,
                            row.density
                        );
                    }
                }
                _ => kept.push(row),
            }
        }

        if kept.is_empty() {
            return Err(LoadError::NoValidRows);
        }

        Ok(Self { entries: kept })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CollectionEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CollectionEntry> {
        self.entries.iter()
    }

    /// Collection names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&CollectionEntry> {
        self.position(name).map(|index| &self.entries[index])
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .binary_search_by(|entry| entry.name.as_str().cmp(name))
            .ok()
    }

    /// The default selection
    pub fn first(&self) -> Option<&CollectionEntry> {
        self.entries.first()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CollectionEntry;
    type IntoIter = std::slice::Iter<'a, CollectionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Read a catalog file, CSV or workbook depending on its extension.
/// Parsing runs on a blocking task.
pub async fn load_catalog(
    path: impl AsRef<Path>,
    options: &CatalogOptions,
) -> Result<Catalog, LoadError> {
    options.check().map_err(LoadError::InvalidOptions)?;

    let path = path.as_ref().to_owned();
    let options = options.clone();
    let format = SourceFormat::from_path(&path);

    let contents = tokio::fs::read(&path).await.map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    let catalog = tokio::task::spawn_blocking(move || match format {
        SourceFormat::Csv => Catalog::from_reader(contents.as_slice(), &options),
        SourceFormat::Spreadsheet => Catalog::from_workbook(Cursor::new(contents), &options),
    })
    .await??;

    log::info!(
        "Loaded {} collections from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

fn locate_columns(
    headers: &[String],
    options: &CatalogOptions,
) -> Result<(usize, usize), LoadError> {
    let find = |wanted: &str| {
        let wanted = wanted.trim();
        headers
            .iter()
            .position(|header| header.trim_start_matches('\u{feff}').trim() == wanted)
    };

    let name_idx = find(&options.collection_column);
    let density_idx = find(&options.density_column);

    match (name_idx, density_idx) {
        (Some(name_idx), Some(density_idx)) => Ok((name_idx, density_idx)),
        _ => {
            let mut missing = Vec::new();
            if name_idx.is_none() {
                missing.push(options.collection_column.clone());
            }
            if density_idx.is_none() {
                missing.push(options.density_column.clone());
            }
            Err(LoadError::MissingColumns(missing))
        }
    }
}

/// Empty and non-numeric cells count as missing
fn parse_density(field: &str) -> Option<f64> {
    let field = field.trim();
    if field.is_empty() {
        return None;
    }
    field.parse::<f64>().ok()
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(value) => Some(*value),
        Data::Int(value) => Some(*value as f64),
        Data::String(text) => parse_density(text),
        _ => None,
    }
}
