use serde::{Deserialize, Serialize};
use std::fmt;

/// Category name that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Politics,
    Business,
    Technology,
    Science,
    Health,
    Sports,
    Entertainment,
    Local,
    Environment,
    /// Anything outside the known set. Generators fall back to their default entry.
    Other(String),
}

impl Category {
    pub const KNOWN: [Category; 9] = [
        Category::Politics,
        Category::Business,
        Category::Technology,
        Category::Science,
        Category::Health,
        Category::Sports,
        Category::Entertainment,
        Category::Local,
        Category::Environment,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Politics => "Politics",
            Self::Business => "Business",
            Self::Technology => "Technology",
            Self::Science => "Science",
            Self::Health => "Health",
            Self::Sports => "Sports",
            Self::Entertainment => "Entertainment",
            Self::Local => "Local",
            Self::Environment => "Environment",
            Self::Other(name) => name,
        }
    }

    /// Case-insensitive comparison against a user supplied category name.
    pub fn matches_name(&self, name: &str) -> bool {
        self.as_str().to_lowercase() == name.to_lowercase()
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Names offered to readers, starting with the "All" sentinel.
    pub fn menu() -> Vec<&'static str> {
        let mut names = vec![ALL_CATEGORIES];
        names.extend([
            "Politics",
            "Business",
            "Technology",
            "Science",
            "Health",
            "Sports",
            "Entertainment",
            "Local",
            "Environment",
        ]);
        names
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self::KNOWN
            .iter()
            .find(|known| known.as_str() == name)
            .cloned()
            .unwrap_or(Self::Other(name))
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Paragraphs are separated by a blank line.
    pub content: String,
    pub category: Category,
    pub author: String,
    /// Display string such as "2 hours ago", not a timestamp.
    pub published_at: String,
    pub image_url: String,
    #[serde(default)]
    pub is_featured: bool,
    pub read_time: u32,
}

impl Article {
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content.split("\n\n")
    }

    /// Whole-needle substring test over title, excerpt, content and category.
    /// `needle` must already be lowercased.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
    }
}
