use nd_core::matcher::search_by_keywords;
use nd_core::Catalog;

use super::{Reply, Responder, Rule, RuleSet};

pub const NAME: &str = "News Assistant";

/// Search replies list at most this many articles.
pub const SEARCH_LIMIT: usize = 3;

/// Front page assistant. Answers without an article in context.
#[derive(Debug)]
pub struct NewsAssistant {
    catalog: Catalog,
    rules: RuleSet<Catalog>,
}

impl NewsAssistant {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            rules: rules(),
        }
    }

    pub fn rules(&self) -> &RuleSet<Catalog> {
        &self.rules
    }
}

impl Responder for NewsAssistant {
    fn name(&self) -> &str {
        NAME
    }

    fn respond(&self, query: &str) -> Reply {
        self.rules.respond(&self.catalog, query)
    }
}

fn rules() -> RuleSet<Catalog> {
    RuleSet::new(
        vec![
            Rule::new("summary", &["summary", "summarize", "about"], top_story_summary),
            Rule::new("questions", &["question", "related"], discussion_questions),
            Rule::new("search", &["find", "search", "about"], search_results),
        ],
        "help",
        help,
    )
}

fn top_story_summary(catalog: &Catalog, _query: &str) -> String {
    match catalog.top_story() {
        Some(story) => format!(
            "## Today's Top Story Summary\n\n**{}**\n\n{}\n\n---\n\n*{} • {}*\n\nWould you like me to summarize another article or suggest related reading?",
            story.title, story.excerpt, story.author, story.published_at
        ),
        None => "There are no stories to summarize yet. \
                 Check back once the newsroom has published something!"
            .to_string(),
    }
}

fn discussion_questions(_catalog: &Catalog, _query: &str) -> String {
    "## Explore Today's News\n\n\
     Here are some thought-provoking questions about current events:\n\n\
     1. **Climate Summit** - What will the new carbon reduction targets mean for everyday consumers?\n\n\
     2. **Tech Regulation** - How might antitrust laws change the apps we use daily?\n\n\
     3. **Federal Reserve** - What do rate cuts mean for homebuyers and investors?\n\n\
     4. **Space Exploration** - What's next after the Mars landing success?\n\n\
     Ask me about any of these topics!"
        .to_string()
}

fn search_results(catalog: &Catalog, query: &str) -> String {
    let matches = search_by_keywords(catalog, query, SEARCH_LIMIT);
    if matches.is_empty() {
        return "I couldn't find articles matching your query. Try searching for topics like:\n\n\
                - **Climate** - Environmental news\n\
                - **Technology** - Tech industry updates\n\
                - **Sports** - Latest game results\n\
                - **Business** - Market and economy news\n\n\
                Or browse the categories above!"
            .to_string();
    }

    let plural = if matches.len() > 1 { "s" } else { "" };
    let mut reply = format!("## Found {} relevant article{}:\n\n", matches.len(), plural);
    for (i, article) in matches.iter().enumerate() {
        reply.push_str(&format!(
            "**{}. {}**\n*{} • {}*\n\n",
            i + 1,
            article.title,
            article.category,
            article.published_at
        ));
    }
    reply.push_str(
        "\nOpen any article in the main feed to read more, or ask me to summarize one of these!",
    );
    reply
}

fn help(_catalog: &Catalog, _query: &str) -> String {
    "👋 Hello! I'm your **News Assistant**.\n\n\
     I can help you:\n\n\
     - 📰 **Summarize articles** - Get quick overviews of any story\n\
     - ❓ **Generate questions** - Explore topics deeper\n\
     - 🔍 **Find relevant news** - Search across all categories\n\
     - 💡 **Explain context** - Understand complex stories\n\n\
     *Try asking:*\n\
     - \"Summarize today's top story\"\n\
     - \"Find articles on technology\"\n\
     - \"What questions should I ask about climate?\"\n\n\
     Or click **\"Ask AI about this\"** on any article!"
        .to_string()
}
