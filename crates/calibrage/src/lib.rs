pub mod cache;
pub mod catalog;
pub mod constants;
mod calculator;
mod options;
mod report;
mod types;

pub use cache::{CatalogCache, SourceSignature};
pub use calculator::{compute_pages, estimate, theoretical_pages};
pub use catalog::{Catalog, SourceFormat, load_catalog};
pub use options::*;
pub use report::PaginationReport;
pub use types::*;
