use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`crate::Catalog`]. All of them are fatal to startup.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("Invalid catalog options: {0}")]
    InvalidOptions(String),
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("no valid collection rows after cleaning")]
    NoValidRows,
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// The calculator was handed a density that cannot divide a character count.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("density must be a positive number, got {density}")]
pub struct DivisionError {
    pub density: f64,
}

/// Why a page count could not be computed
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PaginationError {
    #[error(transparent)]
    Division(#[from] DivisionError),
    #[error("{character_count} characters at {density} characters/page exceeds the largest page count")]
    Overflow { character_count: u64, density: f64 },
}

#[derive(Error, Debug)]
pub enum CalibrageError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    #[error("unknown collection: {0}")]
    UnknownCollection(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalibrageError>;

/// One publishing collection and its average characters per printed page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectionEntry {
    /// Trimmed, non-empty, unique within a catalog
    pub name: String,
    /// Characters per page, always > 0
    pub density: f64,
}

/// A single user request: how many characters, laid out in which collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationQuery {
    pub character_count: u64,
    pub collection: String,
}

impl PaginationQuery {
    pub fn new(character_count: u64, collection: impl Into<String>) -> Self {
        Self {
            character_count,
            collection: collection.into(),
        }
    }

    /// Nothing to compute; shells show a placeholder instead of a page count
    pub fn is_empty(&self) -> bool {
        self.character_count == 0
    }
}

/// Predicted pagination for one query
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PaginationResult {
    /// Page count rounded up to a whole number of signatures
    pub page_count: u64,
    /// Unrounded character count / density
    pub theoretical_pages: f64,
    /// Number of 8-page signatures needed
    pub signatures: u64,
}
