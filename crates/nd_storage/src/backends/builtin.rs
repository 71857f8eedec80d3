use async_trait::async_trait;
use nd_core::{Catalog, CatalogDocument, CatalogSource, Result};

const SEED: &str = include_str!("../../data/catalog.json");

/// The catalog shipped with the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSource;

impl BuiltinSource {
    pub fn new() -> Self {
        Self
    }

    pub fn catalog() -> Result<Catalog> {
        let document: CatalogDocument = serde_json::from_str(SEED)?;
        Catalog::try_from(document)
    }
}

#[async_trait]
impl CatalogSource for BuiltinSource {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn load(&self) -> Result<Catalog> {
        Self::catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_core::feed::FeedLayout;
    use nd_core::{Category, FeedQuery};

    fn seed() -> Catalog {
        BuiltinSource::catalog().unwrap()
    }

    #[test]
    fn test_seed_shape() {
        let catalog = seed();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.trending_topics().len(), 5);
        assert!(catalog.iter().all(|a| a.category.is_known()));
        assert_eq!(catalog.iter().filter(|a| a.is_featured).count(), 1);
    }

    #[test]
    fn test_every_category_filter_is_sound() {
        let catalog = seed();
        for category in Category::menu().into_iter().skip(1) {
            let spellings = [
                category.to_string(),
                category.to_lowercase(),
                category.to_uppercase(),
            ];
            for spelling in spellings {
                let filtered = catalog.filter(&FeedQuery::new().category(spelling.as_str()));
                assert!(
                    filtered.iter().all(|a| a.category.matches_name(category)),
                    "{} let through another category",
                    spelling
                );
            }
        }
        let business = catalog.filter(&FeedQuery::new().category("Business"));
        let ids: Vec<&str> = business.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "9"]);
    }

    #[test]
    fn test_text_filter_is_sound() {
        let catalog = seed();
        for query in ["Climate", "tech giants", "rates", "MARS", "business", "2035"] {
            let needle = query.to_lowercase();
            let filtered = catalog.filter(&FeedQuery::new().text(query));
            assert!(!filtered.is_empty(), "nothing matched {}", query);
            assert!(filtered.iter().all(|a| a.contains_text(&needle)));
        }
        // "tech" and "giants" occur in other articles, but not side by side.
        let filtered = catalog.filter(&FeedQuery::new().text("tech giants"));
        let ids: Vec<&str> = filtered.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_front_page_layout() {
        let catalog = seed();
        let layout = catalog.feed(&FeedQuery::new());
        assert_eq!(layout.featured.unwrap().id, "1");
        assert_eq!(layout.grid.len(), 4);
        assert_eq!(layout.more.len(), 5);
    }

    #[test]
    fn test_single_featured_article_wins_anywhere() {
        let catalog = seed();
        let mut filtered = catalog.filter(&FeedQuery::new());
        filtered.rotate_left(4);
        let layout = FeedLayout::from_filtered(filtered);
        assert_eq!(layout.featured.unwrap().id, "1");
    }

    #[test]
    fn test_missing_article_is_not_found() {
        let catalog = seed();
        assert!(catalog.find("999").is_none());
        assert!(catalog.get("999").unwrap_err().is_not_found());
    }
}
