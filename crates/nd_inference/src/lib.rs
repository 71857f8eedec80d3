pub mod generators;
pub mod insights;
pub mod keywords;
pub mod responders;

pub use insights::ArticleInsights;
pub use keywords::{extract_keywords, KeywordSet};
pub use responders::{create_responder, AssistantMode, Reply, Responder};

pub mod prelude {
    pub use super::generators::*;
    pub use super::responders::{create_responder, AssistantMode, Reply, Responder};
    pub use super::{extract_keywords, ArticleInsights, KeywordSet};
    pub use nd_core::{Article, Catalog, Error, Result};
}
