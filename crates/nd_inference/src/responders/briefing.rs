use nd_core::{Article, Catalog};

use super::{ArticleContext, Reply, Responder, Rule, RuleSet};

pub const NAME: &str = "Article Briefing";

/// The floating assistant after "Ask AI about this" on an article card.
#[derive(Debug)]
pub struct ArticleBriefing {
    context: ArticleContext,
    rules: RuleSet<ArticleContext>,
}

impl ArticleBriefing {
    pub fn new(catalog: Catalog, article: Article) -> Self {
        Self {
            context: ArticleContext { catalog, article },
            rules: RuleSet::new(
                vec![
                    Rule::new("summary", &["summary", "about"], summary),
                    Rule::new("questions", &["question"], questions),
                ],
                "intro",
                intro,
            ),
        }
    }

    /// The message posted on the reader's behalf when the briefing opens.
    pub fn opening_prompt(article: &Article) -> String {
        format!("Tell me about this article: \"{}\"", article.title)
    }
}

impl Responder for ArticleBriefing {
    fn name(&self) -> &str {
        NAME
    }

    fn respond(&self, query: &str) -> Reply {
        self.rules.respond(&self.context, query)
    }
}

fn summary(context: &ArticleContext, _query: &str) -> String {
    let article = &context.article;
    format!(
        "## Summary: {}\n\n{}\n\n**Key Points:**\n- Category: {}\n- Author: {}\n- Reading time: {} minutes\n\nWould you like me to suggest related questions or find similar articles?",
        article.title, article.excerpt, article.category, article.author, article.read_time
    )
}

fn questions(context: &ArticleContext, _query: &str) -> String {
    let article = &context.article;
    format!(
        "## Related Questions for \"{}\"\n\n\
         1. What are the broader implications of this {} story?\n\
         2. How does this compare to similar events in recent history?\n\
         3. What reactions have key stakeholders expressed?\n\
         4. What might be the long-term effects of this development?\n\
         5. Are there any opposing viewpoints on this matter?\n\n\
         Click any question to explore further!",
        article.title,
        article.category.as_str().to_lowercase()
    )
}

fn intro(context: &ArticleContext, _query: &str) -> String {
    let article = &context.article;
    format!(
        "I can help you understand this article better!\n\n**\"{}\"**\n\n{}\n\n*Ask me for a summary, related questions, or to find similar articles.*",
        article.title, article.excerpt
    )
}
