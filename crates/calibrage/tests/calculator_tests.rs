use calibrage::*;
use proptest::prelude::*;

fn catalog(entries: &[(&str, f64)]) -> Catalog {
    Catalog::from_entries(entries.iter().map(|(name, density)| CollectionEntry {
        name: name.to_string(),
        density: *density,
    }))
    .unwrap()
}

#[test]
fn test_pages_exact_signature_multiple() {
    // 180000 / 1500 = 120, already 15 signatures
    assert_eq!(compute_pages(180_000, 1500.0).unwrap(), 120);
}

#[test]
fn test_pages_rounded_up_to_signature() {
    // 125 theoretical pages round up to 128
    assert_eq!(compute_pages(187_500, 1500.0).unwrap(), 128);
    assert_eq!(compute_pages(180_001, 1500.0).unwrap(), 128);
}

#[test]
fn test_pages_minimum_one_signature() {
    assert_eq!(compute_pages(1, 2000.0).unwrap(), 8);
    assert_eq!(compute_pages(1, 1_000_000.0).unwrap(), 8);
}

#[test]
fn test_pages_zero_characters() {
    assert_eq!(compute_pages(0, 1500.0).unwrap(), 0);
    assert_eq!(theoretical_pages(0, 1500.0).unwrap(), 0.0);
}

#[test]
fn test_pages_invalid_density() {
    assert_eq!(
        compute_pages(1000, 0.0),
        Err(PaginationError::Division(DivisionError { density: 0.0 }))
    );
    assert!(compute_pages(1000, -5.0).is_err());
    assert!(compute_pages(1000, f64::NAN).is_err());
    assert!(compute_pages(1000, f64::INFINITY).is_err());
}

#[test]
fn test_pages_too_large_for_u64() {
    match compute_pages(u64::MAX, 1.0) {
        Err(PaginationError::Overflow {
            character_count,
            density,
        }) => {
            assert_eq!(character_count, u64::MAX);
            assert_eq!(density, 1.0);
        }
        other => panic!("Expected Overflow error, got {:?}", other),
    }

    // Tiny densities reach the limit with ordinary counts
    assert!(matches!(
        compute_pages(100_000_000_000_000_000, 0.001),
        Err(PaginationError::Overflow { .. })
    ));
}

#[test]
fn test_pages_at_input_limit() {
    let pages = compute_pages(constants::MAX_CHARACTER_COUNT, 1.0).unwrap();
    assert_eq!(pages, constants::MAX_CHARACTER_COUNT);

    let pages = compute_pages(constants::MAX_CHARACTER_COUNT, 1500.0).unwrap();
    assert_eq!(pages % constants::SIGNATURE_PAGES, 0);
    assert!(pages >= constants::MAX_CHARACTER_COUNT / 1500);
}

#[test]
fn test_estimate_overflow() {
    let catalog = catalog(&[("Micro", 0.5)]);
    let query = PaginationQuery::new(u64::MAX, "Micro");

    assert!(matches!(
        estimate(&catalog, &query),
        Err(CalibrageError::Pagination(PaginationError::Overflow { .. }))
    ));
}

#[test]
fn test_estimate_romans() {
    let catalog = catalog(&[("Romans", 1500.0)]);
    let query = PaginationQuery::new(180_000, "Romans");

    let result = estimate(&catalog, &query).unwrap();
    assert_eq!(result.page_count, 120);
    assert!((result.theoretical_pages - 120.0).abs() < 1e-9);
    assert_eq!(result.signatures, 15);
}

#[test]
fn test_estimate_poche_single_character() {
    let catalog = catalog(&[("Poche", 2000.0)]);
    let query = PaginationQuery::new(1, "Poche");

    let result = estimate(&catalog, &query).unwrap();
    assert_eq!(result.page_count, 8);
    assert!((result.theoretical_pages - 0.0005).abs() < 1e-12);
    assert_eq!(result.signatures, 1);
}

#[test]
fn test_estimate_unknown_collection() {
    let catalog = catalog(&[("Poche", 2000.0)]);
    let query = PaginationQuery::new(1000, "Romans");

    match estimate(&catalog, &query) {
        Err(CalibrageError::UnknownCollection(name)) => assert_eq!(name, "Romans"),
        other => panic!("Expected UnknownCollection error, got {:?}", other),
    }
}

#[test]
fn test_query_is_empty() {
    assert!(PaginationQuery::new(0, "Romans").is_empty());
    assert!(!PaginationQuery::new(1, "Romans").is_empty());
}

proptest! {
    #[test]
    fn test_pages_multiple_of_signature(
        characters in 0u64..50_000_000,
        density in 1.0f64..10_000.0
    ) {
        let pages = compute_pages(characters, density).unwrap();
        prop_assert_eq!(pages % constants::SIGNATURE_PAGES, 0);
    }

    #[test]
    fn test_pages_within_one_signature_of_theoretical(
        characters in 0u64..50_000_000,
        density in 0.5f64..10_000.0
    ) {
        let pages = compute_pages(characters, density).unwrap();
        let minimum = (characters as f64 / density).ceil() as u64;
        prop_assert!(pages >= minimum);
        prop_assert!(pages < minimum + 8);
    }

    #[test]
    fn test_pages_non_zero_for_any_characters(
        characters in 1u64..1_000_000,
        density in 1.0f64..1_000_000.0
    ) {
        prop_assert!(compute_pages(characters, density).unwrap() >= 8);
    }
}
