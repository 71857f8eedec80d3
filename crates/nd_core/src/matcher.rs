//! Per-keyword matching used by the chat assistants.
//!
//! Unlike the feed filter, the query is split into words and an article
//! matches when any single word appears in its title, category or content.

use crate::types::Article;

/// Words of this many characters or fewer are not used as search keywords.
pub const MIN_KEYWORD_CHARS: usize = 3;

pub fn query_keywords(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split(' ')
        .filter(|word| word.chars().count() > MIN_KEYWORD_CHARS)
        .map(str::to_string)
        .collect()
}

pub fn matches_any_keyword(article: &Article, keywords: &[String]) -> bool {
    let title = article.title.to_lowercase();
    let category = article.category.as_str().to_lowercase();
    let content = article.content.to_lowercase();
    keywords.iter().any(|keyword| {
        title.contains(keyword.as_str())
            || category.contains(keyword.as_str())
            || content.contains(keyword.as_str())
    })
}

/// Articles matching any keyword of `query`, in catalog order, capped at `limit`.
pub fn search_by_keywords<'a>(
    articles: impl IntoIterator<Item = &'a Article>,
    query: &str,
    limit: usize,
) -> Vec<&'a Article> {
    let keywords = query_keywords(query);
    if keywords.is_empty() {
        return Vec::new();
    }
    articles
        .into_iter()
        .filter(|article| matches_any_keyword(article, &keywords))
        .take(limit)
        .collect()
}
