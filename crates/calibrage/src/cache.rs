//! Load-once catalog cache
//!
//! A catalog is reused for as long as its source file keeps the same
//! identity: canonical path, modification time and length, read with the same
//! options. Any change triggers a fresh load on the next request.

use crate::catalog::{Catalog, load_catalog};
use crate::options::CatalogOptions;
use crate::types::LoadError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

/// Identity of a catalog source at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSignature {
    pub path: PathBuf,
    pub modified: Option<SystemTime>,
    pub len: u64,
}

impl SourceSignature {
    pub async fn probe(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let io_error = |source: std::io::Error| LoadError::Io {
            path: path.to_owned(),
            source,
        };

        let canonical = tokio::fs::canonicalize(path).await.map_err(io_error)?;
        let metadata = tokio::fs::metadata(&canonical).await.map_err(io_error)?;

        Ok(Self {
            path: canonical,
            modified: metadata.modified().ok(),
            len: metadata.len(),
        })
    }
}

#[derive(Debug)]
struct CachedCatalog {
    signature: SourceSignature,
    options: CatalogOptions,
    catalog: Arc<Catalog>,
}

/// Holds at most one loaded catalog, owned by whoever serves queries
#[derive(Debug, Default)]
pub struct CatalogCache {
    cached: Option<CachedCatalog>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached catalog if the source is unchanged, otherwise load it
    pub async fn get_or_load(
        &mut self,
        path: impl AsRef<Path>,
        options: &CatalogOptions,
    ) -> Result<Arc<Catalog>, LoadError> {
        let signature = SourceSignature::probe(path).await?;

        if let Some(cached) = &self.cached {
            if cached.signature == signature && cached.options == *options {
                log::debug!("catalog cache hit for {}", signature.path.display());
                return Ok(Arc::clone(&cached.catalog));
            }
        }

        log::debug!("catalog cache miss for {}", signature.path.display());
        let catalog = Arc::new(load_catalog(&signature.path, options).await?);

        // A rewrite during the load would pair new contents with the old identity
        let settled = SourceSignature::probe(&signature.path).await?;
        if settled != signature {
            log::debug!(
                "{} changed while loading, not caching",
                signature.path.display()
            );
            self.cached = None;
            return Ok(catalog);
        }

        self.cached = Some(CachedCatalog {
            signature,
            options: options.clone(),
            catalog: Arc::clone(&catalog),
        });
        Ok(catalog)
    }

    /// Force the next request to reload
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn signature(&self) -> Option<&SourceSignature> {
        self.cached.as_ref().map(|cached| &cached.signature)
    }
}
