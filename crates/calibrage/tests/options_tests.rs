use calibrage::*;

#[test]
fn test_default_options() {
    let options = CatalogOptions::default();
    assert_eq!(options.collection_column, "Collection");
    assert_eq!(options.density_column, "NB signes par page");
    assert_eq!(options.delimiter, ',');
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_empty_columns() {
    let options = CatalogOptions {
        collection_column: "  ".to_string(),
        ..Default::default()
    };
    match options.validate() {
        Err(CalibrageError::Config(msg)) => assert!(msg.contains("Collection column")),
        _ => panic!("Expected Config error"),
    }

    let options = CatalogOptions {
        density_column: String::new(),
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_same_columns() {
    let options = CatalogOptions {
        collection_column: "Name".to_string(),
        density_column: " Name ".to_string(),
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_delimiter() {
    let mut options = CatalogOptions::default();

    options.delimiter = ';';
    assert!(options.validate().is_ok());

    options.delimiter = '\t';
    assert!(options.validate().is_ok());

    options.delimiter = '"';
    assert!(options.validate().is_err());

    options.delimiter = '\n';
    assert!(options.validate().is_err());

    options.delimiter = '§';
    assert!(options.validate().is_err());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = CatalogOptions {
        collection_column: "Imprint".to_string(),
        density_column: "Chars per page".to_string(),
        delimiter: ';',
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = CatalogOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_options() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "delimiter": ";" }"#).unwrap();

    let loaded = CatalogOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.delimiter, ';');
    assert_eq!(loaded.collection_column, "Collection");
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_options() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "not json").unwrap();

    match CatalogOptions::load(temp_file.path()).await {
        Err(CalibrageError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        _ => panic!("Expected Config error"),
    }
}
