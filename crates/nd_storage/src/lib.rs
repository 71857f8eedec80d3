use std::sync::Arc;

use nd_core::config::CatalogConfig;
use nd_core::{Catalog, CatalogSource, CatalogSourceKind, Error, Result};
use tracing::info;

pub mod backends;

pub use backends::*;

/// Builds the source named by the configuration.
pub fn create_source(config: &CatalogConfig) -> Result<Arc<dyn CatalogSource>> {
    let location = || {
        config.location.as_deref().ok_or_else(|| {
            Error::Config(format!("catalog source '{}' needs a location", config.source))
        })
    };
    let source: Arc<dyn CatalogSource> = match config.source {
        CatalogSourceKind::Builtin => Arc::new(BuiltinSource::new()),
        CatalogSourceKind::Json => Arc::new(JsonFileSource::new(location()?)),
        CatalogSourceKind::Http => Arc::new(HttpSource::new(location()?)?),
    };
    Ok(source)
}

/// Creates the configured source and loads the catalog from it.
pub async fn load_catalog(config: &CatalogConfig) -> Result<Catalog> {
    let source = create_source(config)?;
    let catalog = source.load().await?;
    info!(
        "📚 Catalog loaded from {} ({} articles, {} trending topics)",
        source.name(),
        catalog.len(),
        catalog.trending_topics().len()
    );
    Ok(catalog)
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_source, load_catalog};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_config_loads_builtin_catalog() {
        let catalog = load_catalog(&CatalogConfig::default()).await.unwrap();
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_file_source_without_location_is_rejected() {
        let config = CatalogConfig {
            source: CatalogSourceKind::Json,
            location: None,
        };
        assert!(matches!(create_source(&config), Err(Error::Config(_))));
    }
}
