use nd_core::{Article, Catalog};

use super::{ArticleContext, Reply, Responder, Rule, RuleSet};
use crate::insights::RELATED_LIMIT;
use crate::keywords::extract_keywords;

pub const NAME: &str = "Article Assistant";

/// Excerpts quoted in the related list are cut to this many characters.
const EXCERPT_PREVIEW_CHARS: usize = 80;

/// Number of keywords listed by the keyword rule.
const KEYWORD_PREVIEW: usize = 5;

pub const SUGGESTIONS: [&str; 3] = [
    "Summarize this article",
    "What's the main impact?",
    "Find related articles",
];

/// Chat tab on the article page.
#[derive(Debug)]
pub struct ArticleAssistant {
    context: ArticleContext,
    rules: RuleSet<ArticleContext>,
}

impl ArticleAssistant {
    pub fn new(catalog: Catalog, article: Article) -> Self {
        Self {
            context: ArticleContext { catalog, article },
            rules: RuleSet::new(
                vec![
                    Rule::new("summary", &["summary", "summarize", "about"], summary),
                    Rule::new("author", &["author", "who wrote"], author),
                    Rule::new("impact", &["impact", "effect", "consequence"], impact),
                    Rule::new("related", &["related", "similar", "more"], related),
                    Rule::new("keywords", &["keyword", "key term", "main topic"], keywords),
                ],
                "overview",
                overview,
            ),
        }
    }

    pub fn article(&self) -> &Article {
        &self.context.article
    }
}

impl Responder for ArticleAssistant {
    fn name(&self) -> &str {
        NAME
    }

    fn respond(&self, query: &str) -> Reply {
        self.rules.respond(&self.context, query)
    }
}

fn sector(article: &Article) -> String {
    article.category.as_str().to_lowercase()
}

fn summary(context: &ArticleContext, _query: &str) -> String {
    let article = &context.article;
    format!(
        "**Article Summary:**\n\n{}\n\nThis article by {} covers key developments in the {} sector. The main points discussed include the implications and potential outcomes of the events described.",
        article.excerpt,
        article.author,
        sector(article)
    )
}

fn author(context: &ArticleContext, _query: &str) -> String {
    let article = &context.article;
    format!(
        "This article was written by **{}** and was published {}. The estimated reading time is {} minutes.",
        article.author, article.published_at, article.read_time
    )
}

fn impact(context: &ArticleContext, _query: &str) -> String {
    format!(
        "**Potential Impacts:**\n\n\
         Based on the article content, the key impacts include:\n\n\
         1. **Immediate effects:** The developments described will likely have short-term implications for stakeholders in the {} sector.\n\n\
         2. **Long-term implications:** The broader consequences may reshape how related industries and communities operate.\n\n\
         3. **Stakeholder response:** Various groups are expected to adapt their strategies in response to these changes.",
        sector(&context.article)
    )
}

fn related(context: &ArticleContext, _query: &str) -> String {
    let article = &context.article;
    let related = context.catalog.related(article, RELATED_LIMIT);
    if related.is_empty() {
        return format!(
            "I couldn't find other articles in the {} category at this time.",
            article.category
        );
    }
    let items: Vec<String> = related
        .iter()
        .enumerate()
        .map(|(i, other)| {
            let preview: String = other.excerpt.chars().take(EXCERPT_PREVIEW_CHARS).collect();
            format!("{}. **{}** - {}...", i + 1, other.title, preview)
        })
        .collect();
    format!(
        "**Related Articles in {}:**\n\n{}",
        article.category,
        items.join("\n\n")
    )
}

fn keywords(context: &ArticleContext, _query: &str) -> String {
    let article = &context.article;
    let terms: Vec<String> = extract_keywords(article)
        .into_iter()
        .take(KEYWORD_PREVIEW)
        .map(|keyword| format!("• {}", keyword))
        .collect();
    format!(
        "**Key Topics in this Article:**\n\n{}\n\nThese terms represent the core themes discussed in this {} piece.",
        terms.join("\n"),
        sector(article)
    )
}

fn overview(context: &ArticleContext, _query: &str) -> String {
    let article = &context.article;
    format!(
        "Based on the article \"{}\":\n\n{}\n\n\
         The piece by {} explores important developments in {}. Would you like me to provide more specific information about any aspect of this story? I can discuss:\n\n\
         • **Summary** - Key points and takeaways\n\
         • **Impact** - Potential effects and implications\n\
         • **Related content** - Similar articles on this topic\n\
         • **Keywords** - Main terms and concepts",
        article.title,
        article.excerpt,
        article.author,
        sector(article)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_storage::BuiltinSource;

    fn assistant(id: &str) -> ArticleAssistant {
        let catalog = BuiltinSource::catalog().unwrap();
        let article = catalog.get(id).unwrap().clone();
        ArticleAssistant::new(catalog, article)
    }

    #[test]
    fn test_suggestions_reach_their_rules() {
        let assistant = assistant("3");
        let rules: Vec<&str> = SUGGESTIONS
            .iter()
            .map(|suggestion| assistant.respond(suggestion).rule)
            .collect();
        assert_eq!(rules, vec!["summary", "impact", "related"]);
    }

    #[test]
    fn test_author_reply() {
        let reply = assistant("3").respond("Who wrote this?");
        assert_eq!(reply.rule, "author");
        assert!(reply.text.contains("**Jennifer Walsh**"));
        assert!(reply.text.contains("published 5 hours ago"));
    }

    #[test]
    fn test_related_lists_same_category_with_preview() {
        let reply = assistant("3").respond("similar stories");
        assert_eq!(reply.rule, "related");
        assert!(reply.text.starts_with("**Related Articles in Business:**"));
        assert!(reply.text.contains("1. **Housing Market Shows Signs of Stabilization"));
        assert!(reply.text.ends_with("..."));
    }

    #[test]
    fn test_related_without_peers() {
        let reply = assistant("6").respond("more like this");
        assert_eq!(
            reply.text,
            "I couldn't find other articles in the Sports category at this time."
        );
    }

    #[test]
    fn test_keyword_reply_lists_five_terms() {
        let reply = assistant("1").respond("What are the keywords?");
        assert_eq!(reply.rule, "keywords");
        assert_eq!(reply.text.matches("• ").count(), 5);
        assert!(reply.text.contains("• Carbon"));
    }

    #[test]
    fn test_fallback_overview() {
        let reply = assistant("7").respond("hello");
        assert_eq!(reply.rule, "overview");
        assert!(reply.text.contains("developments in entertainment"));
    }
}
