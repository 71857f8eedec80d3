use nd_core::{Article, Catalog, Result};

/// Shared by every request. The catalog is immutable, so handlers never lock.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn article(&self, id: &str) -> Result<&Article> {
        self.catalog.get(id)
    }
}
