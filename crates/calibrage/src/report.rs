//! Display strings shared by the command line and the desktop shell

use crate::calculator::paginate;
use crate::constants::{PLACEHOLDER, ROUNDING_RULE};
use crate::types::{CollectionEntry, PaginationError, PaginationResult};

/// What the user sees for one collection and character count
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationReport {
    pub collection: String,
    pub density: f64,
    pub character_count: u64,
    /// `None` when no characters were entered
    pub result: Option<PaginationResult>,
}

impl PaginationReport {
    pub fn new(
        entry: &CollectionEntry,
        character_count: u64,
    ) -> std::result::Result<Self, PaginationError> {
        let result = if character_count == 0 {
            None
        } else {
            Some(paginate(character_count, entry.density)?)
        };

        Ok(Self {
            collection: entry.name.clone(),
            density: entry.density,
            character_count,
            result,
        })
    }

    /// "120 pages", or the placeholder when there is nothing to compute
    pub fn headline(&self) -> String {
        match &self.result {
            Some(result) => format!("{} pages", result.page_count),
            None => PLACEHOLDER.to_string(),
        }
    }

    pub fn collection_line(&self) -> String {
        format!("Collection: {}", self.collection)
    }

    /// Density is shown truncated to whole characters
    pub fn density_line(&self) -> String {
        format!("Characters/page: {}", self.density.trunc() as u64)
    }

    pub fn theoretical_line(&self) -> Option<String> {
        self.result
            .map(|result| format!("Theoretical pages: {:.2}", result.theoretical_pages))
    }

    pub fn details(&self) -> Vec<String> {
        let mut lines = vec![self.collection_line(), self.density_line()];
        if let Some(line) = self.theoretical_line() {
            lines.push(line);
        }
        lines.push(format!("Rule: {}", ROUNDING_RULE));
        lines
    }
}
