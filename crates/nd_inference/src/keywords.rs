use std::collections::HashMap;

use nd_core::Article;
use serde::Serialize;

/// Maximum number of keywords shown for an article.
pub const MAX_KEYWORDS: usize = 12;

/// Words this short or shorter never count as keywords.
pub const MIN_KEYWORD_LEN: usize = 3;

pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "shall", "can", "that",
    "this", "these", "those", "it", "its", "they", "their", "them", "we", "our", "you", "your",
    "he", "she", "his", "her", "him", "who", "what", "which", "when", "where", "why", "how",
    "all", "each", "every", "both", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "just", "also",
];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Term frequencies for one article, most frequent first. Equal counts keep
/// the order in which the terms first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordSet {
    terms: Vec<(String, usize)>,
}

impl KeywordSet {
    pub fn from_article(article: &Article) -> Self {
        Self::from_text(&format!("{} {}", article.title, article.content))
    }

    pub fn from_text(text: &str) -> Self {
        let normalized: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
            .collect();

        let mut terms: Vec<(String, usize)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for word in normalized.split_whitespace() {
            if word.len() <= MIN_KEYWORD_LEN || is_stop_word(word) {
                continue;
            }
            match positions.get(word) {
                Some(&index) => terms[index].1 += 1,
                None => {
                    positions.insert(word, terms.len());
                    terms.push((word.to_string(), 1));
                }
            }
        }
        // sort_by is stable, which keeps first-occurrence order on ties
        terms.sort_by(|a, b| b.1.cmp(&a.1));
        Self { terms }
    }

    pub fn terms(&self) -> &[(String, usize)] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// The `limit` most frequent terms, capitalized for display.
    pub fn top(&self, limit: usize) -> Vec<String> {
        self.terms
            .iter()
            .take(limit)
            .map(|(term, _)| capitalize(term))
            .collect()
    }
}

pub fn extract_keywords(article: &Article) -> Vec<String> {
    KeywordSet::from_article(article).top(MAX_KEYWORDS)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
