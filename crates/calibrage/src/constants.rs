//! Shared constants for pagination estimates
//!
//! Column names and file names here are only defaults; the loader reads
//! the actual names from [`crate::CatalogOptions`].

// =============================================================================
// Signature Rounding
// =============================================================================

/// Pages per print signature. Page counts are always rounded up to a multiple of this.
pub const SIGNATURE_PAGES: u64 = 8;

// =============================================================================
// Catalog Source
// =============================================================================

/// Default catalog file, looked up relative to the working directory
pub const DEFAULT_CATALOG_FILE: &str = "Calibrage_Collections.xlsx";

/// Default header of the column holding the collection name
pub const DEFAULT_COLLECTION_COLUMN: &str = "Collection";

/// Default header of the column holding the characters-per-page density
pub const DEFAULT_DENSITY_COLUMN: &str = "NB signes par page";

/// Default field delimiter of the catalog file
pub const DEFAULT_DELIMITER: char = ',';

// =============================================================================
// Presentation
// =============================================================================

/// Largest character count the shells accept
pub const MAX_CHARACTER_COUNT: u64 = 1_000_000_000_000;

/// Suggested increment for character count inputs
pub const CHARACTER_COUNT_STEP: u64 = 1000;

/// Shown in place of a page count when no characters were entered
pub const PLACEHOLDER: &str = "—";

/// Human-readable statement of the rounding rule
pub const ROUNDING_RULE: &str = "Rounded up to the next multiple of 8";
