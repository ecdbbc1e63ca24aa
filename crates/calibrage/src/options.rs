use crate::constants::{DEFAULT_COLLECTION_COLUMN, DEFAULT_DELIMITER, DEFAULT_DENSITY_COLUMN};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How to read a catalog source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogOptions {
    /// Header of the column holding the collection name
    pub collection_column: String,
    /// Header of the column holding characters per page
    pub density_column: String,
    /// Field delimiter (spreadsheet exports often use ';')
    pub delimiter: char,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            collection_column: DEFAULT_COLLECTION_COLUMN.to_string(),
            density_column: DEFAULT_DENSITY_COLUMN.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl CatalogOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| CalibrageError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CalibrageError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.check().map_err(CalibrageError::Config)
    }

    /// Same rules as [`Self::validate`]; the loader reports them as a `LoadError`
    pub(crate) fn check(&self) -> std::result::Result<(), String> {
        let collection = self.collection_column.trim();
        let density = self.density_column.trim();

        if collection.is_empty() {
            return Err("Collection column name is empty".to_string());
        }
        if density.is_empty() {
            return Err("Density column name is empty".to_string());
        }
        if collection == density {
            return Err(format!(
                "Collection and density columns must differ (both are '{}')",
                collection
            ));
        }

        match self.delimiter {
            '"' | '\n' | '\r' => Err(format!(
                "{:?} cannot be used as a delimiter",
                self.delimiter
            )),
            c if !c.is_ascii() => Err(format!(
                "Delimiter must be a single ASCII character, got {:?}",
                c
            )),
            _ => Ok(()),
        }
    }
}
