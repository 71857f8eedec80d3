use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::feed::{self, FeedLayout, FeedQuery};
use crate::types::Article;
use crate::{Error, Result};

/// The read-only article collection, built once at startup.
///
/// Cloning is cheap: the articles live behind an `Arc` and are never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    articles: Arc<[Article]>,
    trending_topics: Arc<[String]>,
}

impl Catalog {
    pub fn new(articles: Vec<Article>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(articles.len());
        for article in &articles {
            if article.id.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!(
                    "article \"{}\" has an empty id",
                    article.title
                )));
            }
            if !seen.insert(article.id.as_str()) {
                return Err(Error::DuplicateId(article.id.clone()));
            }
        }
        debug!("Catalog built with {} articles", articles.len());
        Ok(Self {
            articles: articles.into(),
            trending_topics: Arc::from(Vec::new()),
        })
    }

    pub fn with_trending_topics(mut self, topics: Vec<String>) -> Self {
        self.trending_topics = topics.into();
        self
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn trending_topics(&self) -> &[String] {
        &self.trending_topics
    }

    pub fn find(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    /// Like [`Catalog::find`] but reports a missing id as [`Error::NotFound`].
    pub fn get(&self, id: &str) -> Result<&Article> {
        self.find(id).ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Other articles of the same category, in catalog order.
    pub fn related(&self, article: &Article, limit: usize) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|other| other.id != article.id && other.category == article.category)
            .take(limit)
            .collect()
    }

    /// Featured selection applied to the whole catalog.
    pub fn top_story(&self) -> Option<&Article> {
        let all: Vec<&Article> = self.articles.iter().collect();
        feed::select_featured(&all)
    }

    pub fn filter(&self, query: &FeedQuery) -> Vec<&Article> {
        feed::filter_articles(&self.articles, query)
    }

    pub fn feed(&self, query: &FeedQuery) -> FeedLayout<'_> {
        FeedLayout::from_filtered(self.filter(query))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            articles: Arc::from(Vec::new()),
            trending_topics: Arc::from(Vec::new()),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serialized catalog shape accepted by external sources: either a bare
/// article array or an object carrying trending topics alongside.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogDocument {
    Full {
        articles: Vec<Article>,
        #[serde(default, rename = "trendingTopics")]
        trending_topics: Vec<String>,
    },
    Articles(Vec<Article>),
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = Error;

    fn try_from(document: CatalogDocument) -> Result<Self> {
        match document {
            CatalogDocument::Full {
                articles,
                trending_topics,
            } => Ok(Catalog::new(articles)?.with_trending_topics(trending_topics)),
            CatalogDocument::Articles(articles) => Catalog::new(articles),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn article(id: &str, category: Category, featured: bool) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Story {}", id),
            excerpt: "Excerpt".to_string(),
            content: "Body text".to_string(),
            category,
            author: "Reporter".to_string(),
            published_at: "1 hour ago".to_string(),
            image_url: "https://example.com/img.jpg".to_string(),
            is_featured: featured,
            read_time: 3,
        }
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = Catalog::new(vec![
            article("1", Category::Health, false),
            article("1", Category::Sports, false),
        ]);
        assert!(matches!(result, Err(Error::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let catalog = Catalog::new(vec![article("1", Category::Health, false)]).unwrap();
        assert!(catalog.find("999").is_none());
        let err = catalog.get("999").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Article not found: 999");
    }

    #[test]
    fn test_related_excludes_self_and_other_categories() {
        let catalog = Catalog::new(vec![
            article("1", Category::Business, false),
            article("2", Category::Health, false),
            article("3", Category::Business, false),
            article("4", Category::Business, false),
        ])
        .unwrap();
        let source = catalog.get("1").unwrap();
        let related: Vec<&str> = catalog.related(source, 3).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(related, vec!["3", "4"]);
        assert_eq!(catalog.related(source, 1).len(), 1);
    }

    #[test]
    fn test_top_story_prefers_featured() {
        let catalog = Catalog::new(vec![
            article("1", Category::Business, false),
            article("2", Category::Health, true),
        ])
        .unwrap();
        assert_eq!(catalog.top_story().unwrap().id, "2");
        assert!(Catalog::default().top_story().is_none());
    }

    #[test]
    fn test_document_accepts_bare_array_and_full_object() {
        let bare = r#"[{"id":"1","title":"T","excerpt":"E","content":"C","category":"Local",
            "author":"A","publishedAt":"now","imageUrl":"u","readTime":1}]"#;
        let document: CatalogDocument = serde_json::from_str(bare).unwrap();
        let catalog = Catalog::try_from(document).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.trending_topics().is_empty());

        let full = r#"{"articles":[],"trendingTopics":["Mars Landing"]}"#;
        let document: CatalogDocument = serde_json::from_str(full).unwrap();
        let catalog = Catalog::try_from(document).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.trending_topics(), &["Mars Landing".to_string()]);
    }
}
