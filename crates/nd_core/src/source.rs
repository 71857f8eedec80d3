use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::Result;

/// Where the catalog comes from. Loaded once at startup; the returned
/// catalog is immutable for the life of the process.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn name(&self) -> &str;

    async fn load(&self) -> Result<Catalog>;
}
