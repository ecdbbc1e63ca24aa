use calibrage::*;

fn entry(name: &str, density: f64) -> CollectionEntry {
    CollectionEntry {
        name: name.to_string(),
        density,
    }
}

#[test]
fn test_report_headline() {
    let report = PaginationReport::new(&entry("Romans", 1500.0), 187_500).unwrap();
    assert_eq!(report.headline(), "128 pages");
    assert_eq!(report.collection_line(), "Collection: Romans");
}

#[test]
fn test_report_placeholder_for_zero_characters() {
    let report = PaginationReport::new(&entry("Romans", 1500.0), 0).unwrap();
    assert!(report.result.is_none());
    assert_eq!(report.headline(), constants::PLACEHOLDER);
    assert_eq!(report.theoretical_line(), None);
}

#[test]
fn test_report_details() {
    let report = PaginationReport::new(&entry("Poche", 2000.9), 1).unwrap();

    assert_eq!(
        report.details(),
        vec![
            "Collection: Poche".to_string(),
            "Characters/page: 2000".to_string(),
            "Theoretical pages: 0.00".to_string(),
            "Rule: Rounded up to the next multiple of 8".to_string(),
        ]
    );
}

#[test]
fn test_report_details_without_characters() {
    let report = PaginationReport::new(&entry("Romans", 1500.0), 0).unwrap();
    let details = report.details();

    assert_eq!(details.len(), 3);
    assert!(!details.iter().any(|line| line.starts_with("Theoretical")));
}

#[test]
fn test_report_theoretical_two_decimals() {
    let report = PaginationReport::new(&entry("Romans", 1500.0), 100_000).unwrap();
    assert_eq!(
        report.theoretical_line().as_deref(),
        Some("Theoretical pages: 66.67")
    );
    assert_eq!(report.headline(), "72 pages");
}

#[test]
fn test_report_overflow() {
    let result = PaginationReport::new(&entry("Micro", 0.001), u64::MAX);
    assert!(matches!(result, Err(PaginationError::Overflow { .. })));
}

#[test]
fn test_report_invalid_density() {
    let result = PaginationReport::new(&entry("Broken", 0.0), 1000);
    assert!(result.is_err());
}
