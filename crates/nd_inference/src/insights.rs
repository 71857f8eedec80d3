//! Side panel content for the article page: summary points, keywords,
//! future scope and related stories.

use nd_core::{Article, Catalog, Category};
use serde::Serialize;

use crate::keywords::extract_keywords;

pub const SUMMARY_POINTS: usize = 4;
pub const RELATED_LIMIT: usize = 3;

/// Sentences shorter than this are skipped when building summary points.
const MIN_SENTENCE_CHARS: usize = 20;

/// The first four sentences of the content that are long enough to stand alone.
pub fn summary_points(article: &Article) -> Vec<String> {
    article
        .content
        .split(|c| matches!(c, '.' | '!' | '?'))
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_CHARS)
        .take(SUMMARY_POINTS)
        .map(str::to_string)
        .collect()
}

const ENVIRONMENT_SCOPE: [&str; 4] = [
    "Policy implementation across participating nations will require significant infrastructure investments",
    "Renewable energy sectors may see accelerated growth and job creation",
    "Carbon markets could emerge as major financial instruments",
    "International cooperation mechanisms will need strengthening",
];

const TECHNOLOGY_SCOPE: [&str; 4] = [
    "Market dynamics may shift toward more decentralized platforms",
    "Innovation in privacy-preserving technologies could accelerate",
    "Smaller tech companies may find new competitive opportunities",
    "Consumer data rights awareness will likely increase",
];

const BUSINESS_SCOPE: [&str; 4] = [
    "Investment strategies may need recalibration based on new economic conditions",
    "Corporate planning horizons might extend with improved market stability",
    "Cross-sector impacts could create unexpected opportunities",
    "Workforce dynamics may shift in response to policy changes",
];

const HEALTH_SCOPE: [&str; 4] = [
    "Treatment protocols could evolve significantly within the next decade",
    "Research funding priorities may shift toward translational applications",
    "Patient outcomes could improve with new therapeutic approaches",
    "Healthcare costs may be impacted by new treatment availability",
];

const DEFAULT_SCOPE: [&str; 4] = [
    "This development could have far-reaching implications across multiple sectors",
    "Stakeholders should monitor ongoing developments closely",
    "Related policy discussions may intensify in coming months",
    "Public engagement on this topic is likely to increase",
];

pub fn future_scope(category: &Category) -> &'static [&'static str] {
    match category {
        Category::Environment => &ENVIRONMENT_SCOPE,
        Category::Technology => &TECHNOLOGY_SCOPE,
        Category::Business => &BUSINESS_SCOPE,
        Category::Health => &HEALTH_SCOPE,
        _ => &DEFAULT_SCOPE,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedArticle {
    pub id: String,
    pub title: String,
    pub read_time: u32,
}

impl From<&Article> for RelatedArticle {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            read_time: article.read_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleInsights {
    pub summary: Vec<String>,
    pub keywords: Vec<String>,
    pub future_scope: Vec<String>,
    pub related: Vec<RelatedArticle>,
}

impl ArticleInsights {
    pub fn build(catalog: &Catalog, article: &Article) -> Self {
        Self {
            summary: summary_points(article),
            keywords: extract_keywords(article),
            future_scope: future_scope(&article.category)
                .iter()
                .map(|line| line.to_string())
                .collect(),
            related: catalog
                .related(article, RELATED_LIMIT)
                .into_iter()
                .map(RelatedArticle::from)
                .collect(),
        }
    }
}
