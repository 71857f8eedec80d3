//! Feed pipeline: category filter, whole-query text filter and the
//! featured/grid/more layout rendered on the front page.

use serde::Serialize;

use crate::types::{Article, ALL_CATEGORIES};

/// Number of articles shown in the grid below the featured story.
pub const GRID_SIZE: usize = 4;

pub const EMPTY_STATE_TITLE: &str = "No articles found";
pub const EMPTY_STATE_HINT: &str = "Try adjusting your search or category filter.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => article.category.matches_name(name),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(name) => name,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() || name == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(name.to_string())
        }
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(name: Option<&str>) -> Self {
        name.map(Self::from).unwrap_or_default()
    }
}

/// Category plus free-text query. Both parts are optional and compose:
/// the category filter runs first, then the text filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    pub category: CategoryFilter,
    pub text: Option<String>,
}

impl FeedQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = (!text.is_empty()).then_some(text);
        self
    }

    pub fn matches(&self, article: &Article) -> bool {
        if !self.category.matches(article) {
            return false;
        }
        match &self.text {
            // The query is matched as one contiguous substring, never per word.
            Some(text) => article.contains_text(&text.to_lowercase()),
            None => true,
        }
    }
}

pub fn filter_articles<'a>(articles: &'a [Article], query: &FeedQuery) -> Vec<&'a Article> {
    articles.iter().filter(|article| query.matches(article)).collect()
}

/// First flagged article, or the first article when none is flagged.
pub fn select_featured<'a>(articles: &[&'a Article]) -> Option<&'a Article> {
    articles
        .iter()
        .find(|article| article.is_featured)
        .or_else(|| articles.first())
        .copied()
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedLayout<'a> {
    pub featured: Option<&'a Article>,
    pub grid: Vec<&'a Article>,
    pub more: Vec<&'a Article>,
}

impl<'a> FeedLayout<'a> {
    pub fn from_filtered(filtered: Vec<&'a Article>) -> Self {
        let featured = select_featured(&filtered);
        let mut others: Vec<&'a Article> = filtered
            .into_iter()
            .filter(|article| featured.map_or(true, |f| f.id != article.id))
            .collect();
        let more = others.split_off(GRID_SIZE.min(others.len()));
        Self {
            featured,
            grid: others,
            more,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.featured.is_none()
    }

    pub fn total(&self) -> usize {
        usize::from(self.featured.is_some()) + self.grid.len() + self.more.len()
    }
}

/// Front page selection state. Picking a category clears the search and
/// searching resets the category, although [`FeedQuery`] accepts both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedState {
    category: CategoryFilter,
    search: String,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_category(&mut self, category: &str) {
        self.category = CategoryFilter::from(category);
        self.search.clear();
    }

    pub fn search(&mut self, query: &str) {
        self.search = query.to_string();
        self.category = CategoryFilter::All;
    }

    pub fn select_topic(&mut self, topic: &str) {
        self.search(topic);
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn query(&self) -> FeedQuery {
        FeedQuery::new()
            .category(self.category.clone())
            .text(self.search.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn article(id: &str, title: &str, category: Category, featured: bool) -> Article {
        Article {
            id: id.to_string(),
            title: title.to_string(),
            excerpt: format!("Excerpt for {}", id),
            content: format!("Content for {}", id),
            category,
            author: "Reporter".to_string(),
            published_at: "1 hour ago".to_string(),
            image_url: "https://example.com/img.jpg".to_string(),
            is_featured: featured,
            read_time: 3,
        }
    }

    fn sample() -> Vec<Article> {
        vec![
            article("1", "Tech Giants Face Regulation", Category::Technology, false),
            article("2", "Giants of tech meet", Category::Business, false),
            article("3", "Rate cuts ahead", Category::Business, true),
            article("4", "Local bridges", Category::Local, false),
            article("5", "Cup upset", Category::Sports, false),
            article("6", "Festival film", Category::Entertainment, false),
            article("7", "Weather front", Category::Other("Weather".into()), false),
        ]
    }

    fn ids(articles: &[&Article]) -> Vec<String> {
        articles.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_all_sentinel_skips_category_filter() {
        let articles = sample();
        let filtered = filter_articles(&articles, &FeedQuery::new().category("All"));
        assert_eq!(filtered.len(), articles.len());
    }

    #[test]
    fn test_blank_category_means_all() {
        assert_eq!(CategoryFilter::from(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::from("   "), CategoryFilter::All);
        let articles = sample();
        let query = FeedQuery::new().category("").text("giants");
        assert_eq!(ids(&filter_articles(&articles, &query)), vec!["1", "2"]);
    }

    #[test]
    fn test_category_filter_ignores_case() {
        let articles = sample();
        let filtered = filter_articles(&articles, &FeedQuery::new().category("business"));
        assert_eq!(ids(&filtered), vec!["2", "3"]);
        assert!(filtered.iter().all(|a| a.category.matches_name("BUSINESS")));

        let filtered = filter_articles(&articles, &FeedQuery::new().category("weather"));
        assert_eq!(ids(&filtered), vec!["7"]);
    }

    #[test]
    fn test_text_filter_is_whole_substring() {
        let articles = sample();
        let filtered = filter_articles(&articles, &FeedQuery::new().text("tech giants"));
        assert_eq!(ids(&filtered), vec!["1"]);

        let filtered = filter_articles(&articles, &FeedQuery::new().text("GIANTS"));
        assert_eq!(ids(&filtered), vec!["1", "2"]);
    }

    #[test]
    fn test_text_filter_checks_category_field() {
        let articles = sample();
        let filtered = filter_articles(&articles, &FeedQuery::new().text("entertain"));
        assert_eq!(ids(&filtered), vec!["6"]);
    }

    #[test]
    fn test_category_and_text_compose() {
        let articles = sample();
        let query = FeedQuery::new().category("Business").text("giants");
        assert_eq!(ids(&filter_articles(&articles, &query)), vec!["2"]);
    }

    #[test]
    fn test_empty_text_does_not_filter() {
        let query = FeedQuery::new().text("");
        assert!(query.text.is_none());
    }

    #[test]
    fn test_featured_wins_regardless_of_position() {
        let articles = sample();
        let all: Vec<&Article> = articles.iter().collect();
        let layout = FeedLayout::from_filtered(all);
        assert_eq!(layout.featured.unwrap().id, "3");
        assert_eq!(ids(&layout.grid), vec!["1", "2", "4", "5"]);
        assert_eq!(ids(&layout.more), vec!["6", "7"]);
        assert_eq!(layout.total(), articles.len());
    }

    #[test]
    fn test_featured_falls_back_to_first() {
        let articles = sample();
        let filtered = filter_articles(&articles, &FeedQuery::new().category("Local"));
        let layout = FeedLayout::from_filtered(filtered);
        assert_eq!(layout.featured.unwrap().id, "4");
        assert!(layout.grid.is_empty());
        assert!(layout.more.is_empty());
    }

    #[test]
    fn test_empty_result_gives_empty_layout() {
        let articles = sample();
        let filtered = filter_articles(&articles, &FeedQuery::new().text("no such words"));
        let layout = FeedLayout::from_filtered(filtered);
        assert!(layout.is_empty());
        assert_eq!(layout.total(), 0);
    }

    #[test]
    fn test_feed_state_keeps_category_and_search_exclusive() {
        let mut state = FeedState::new();
        state.search("climate");
        state.select_category("Health");
        assert_eq!(state.search_text(), "");
        assert_eq!(state.category(), &CategoryFilter::Only("Health".to_string()));

        state.select_topic("Mars Landing SpaceX");
        assert_eq!(state.category(), &CategoryFilter::All);
        assert_eq!(state.query().text.as_deref(), Some("Mars Landing SpaceX"));
    }
}
