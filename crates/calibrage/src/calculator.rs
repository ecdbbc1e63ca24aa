use crate::catalog::Catalog;
use crate::constants::SIGNATURE_PAGES;
use crate::types::*;

/// Unrounded page count: characters divided by characters per page
pub fn theoretical_pages(
    character_count: u64,
    density: f64,
) -> std::result::Result<f64, DivisionError> {
    if !density.is_finite() || density <= 0.0 {
        return Err(DivisionError { density });
    }
    Ok(character_count as f64 / density)
}

/// Page count rounded up to the next multiple of [`SIGNATURE_PAGES`].
///
/// Zero characters give zero pages; any non-zero count gives at least one
/// full signature. Counts too large for a `u64` are an error, never wrapped.
pub fn compute_pages(
    character_count: u64,
    density: f64,
) -> std::result::Result<u64, PaginationError> {
    Ok(paginate(character_count, density)?.page_count)
}

/// Look the collection up and compute the full pagination estimate
pub fn estimate(catalog: &Catalog, query: &PaginationQuery) -> Result<PaginationResult> {
    let entry = catalog
        .get(&query.collection)
        .ok_or_else(|| CalibrageError::UnknownCollection(query.collection.clone()))?;

    Ok(paginate(query.character_count, entry.density)?)
}

pub(crate) fn paginate(
    character_count: u64,
    density: f64,
) -> std::result::Result<PaginationResult, PaginationError> {
    let theoretical_pages = theoretical_pages(character_count, density)?;
    let page_count =
        round_to_signature(theoretical_pages).ok_or(PaginationError::Overflow {
            character_count,
            density,
        })?;

    Ok(PaginationResult {
        page_count,
        theoretical_pages,
        signatures: page_count / SIGNATURE_PAGES,
    })
}

/// `None` when the rounded count does not fit in a `u64`
fn round_to_signature(pages: f64) -> Option<u64> {
    // Float-to-int casts saturate, so an out-of-range quotient fails the multiply
    let signatures = (pages / SIGNATURE_PAGES as f64).ceil() as u64;
    signatures.checked_mul(SIGNATURE_PAGES)
}
