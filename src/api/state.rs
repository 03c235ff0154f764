use std::sync::Arc;

use crate::catalog::{InMemoryCatalog, PlantCatalog};
use crate::logic::rules::ZoneRules;

/// Shared, read-only application state handed to every worker.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn PlantCatalog>,
    pub rules: Arc<ZoneRules>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn PlantCatalog>, rules: ZoneRules) -> Self {
        Self {
            catalog,
            rules: Arc::new(rules),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryCatalog::default()), ZoneRules::default())
    }
}
