use calibrage::{Catalog, CollectionEntry};

/// Current user input. Rebuilt results are never stored here.
#[derive(Debug, Default)]
pub struct EstimateState {
    pub character_count: u64,
    /// `None` selects the first collection
    pub collection: Option<String>,
}

impl EstimateState {
    pub fn selected_entry<'a>(&self, catalog: &'a Catalog) -> Option<&'a CollectionEntry> {
        self.collection
            .as_deref()
            .and_then(|name| catalog.get(name))
            .or_else(|| catalog.first())
    }

    /// Keep the selection across reloads when the collection still exists
    pub fn adopt(&mut self, catalog: &Catalog) {
        if let Some(name) = &self.collection {
            if catalog.get(name).is_none() {
                log::info!("collection '{}' no longer in catalog", name);
                self.collection = None;
            }
        }
    }
}
