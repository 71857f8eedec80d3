pub mod catalog;
pub mod config;
pub mod error;
pub mod feed;
pub mod matcher;
pub mod source;
pub mod types;

pub use catalog::{Catalog, CatalogDocument};
pub use config::{CatalogSourceKind, PortalConfig, WidgetConfig};
pub use error::{Error, Result};
pub use feed::{CategoryFilter, FeedLayout, FeedQuery, FeedState};
pub use source::CatalogSource;
pub use types::{Article, Category, ALL_CATEGORIES};

pub mod prelude {
    pub use super::{Article, Catalog, CatalogSource, Category, Error, FeedQuery, Result};
}
