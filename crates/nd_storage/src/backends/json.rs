use std::path::{Path, PathBuf};

use async_trait::async_trait;
use nd_core::{Catalog, CatalogDocument, CatalogSource, Result};
use tracing::debug;

/// Catalog read from a JSON file holding either an article array or an
/// `{ "articles": [...], "trendingTopics": [...] }` object.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = format!("file://{}", path.display());
        Self { path, name }
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<Catalog> {
        debug!("Reading catalog from {}", self.path.display());
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let document: CatalogDocument = serde_json::from_str(&raw)?;
        Catalog::try_from(document)
    }
}
