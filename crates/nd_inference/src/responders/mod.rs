//! Canned chat assistants.
//!
//! Every assistant is an ordered list of keyword rules plus a fallback. The
//! lowercased query is checked against each rule in turn and the first rule
//! that fires writes the reply, so priority is the position in the list.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use nd_core::{Article, Catalog, Error};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod article;
pub mod briefing;
pub mod news;

pub use article::ArticleAssistant;
pub use briefing::ArticleBriefing;
pub use news::NewsAssistant;

/// Builds the reply text for a matched rule.
pub type Handler<C> = fn(&C, &str) -> String;

pub struct Rule<C> {
    pub name: &'static str,
    /// The rule fires when the lowercased query contains any of these.
    pub keywords: &'static [&'static str],
    pub handler: Handler<C>,
}

impl<C> Rule<C> {
    pub const fn new(
        name: &'static str,
        keywords: &'static [&'static str],
        handler: Handler<C>,
    ) -> Self {
        Self {
            name,
            keywords,
            handler,
        }
    }

    pub fn matches(&self, lowered_query: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered_query.contains(keyword))
    }
}

impl<C> fmt::Debug for Rule<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("keywords", &self.keywords)
            .finish()
    }
}

/// Ordered rules with a fallback. Always produces a reply.
pub struct RuleSet<C> {
    rules: Vec<Rule<C>>,
    fallback: (&'static str, Handler<C>),
}

impl<C> RuleSet<C> {
    pub fn new(rules: Vec<Rule<C>>, fallback_name: &'static str, fallback: Handler<C>) -> Self {
        Self {
            rules,
            fallback: (fallback_name, fallback),
        }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .map(|rule| rule.name)
            .chain(std::iter::once(self.fallback.0))
            .collect()
    }

    pub fn respond(&self, context: &C, query: &str) -> Reply {
        let lowered = query.to_lowercase();
        let (name, handler) = self
            .rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| (rule.name, rule.handler))
            .unwrap_or(self.fallback);
        debug!("Query {:?} dispatched to rule '{}'", query, name);
        Reply {
            rule: name,
            text: handler(context, query),
        }
    }
}

impl<C> fmt::Debug for RuleSet<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules)
            .field("fallback", &self.fallback.0)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Name of the rule that produced the text.
    pub rule: &'static str,
    pub text: String,
}

pub trait Responder: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    fn respond(&self, query: &str) -> Reply;
}

/// Catalog and article a contextual assistant answers about.
#[derive(Debug, Clone)]
pub struct ArticleContext {
    pub catalog: Catalog,
    pub article: Article,
}

/// Which assistant answers questions about an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantMode {
    /// The floating assistant opened from an article card.
    Briefing,
    /// The chat tab on the article page.
    #[default]
    Article,
}

impl FromStr for AssistantMode {
    type Err = Error;

    fn from_str(s: &str) -> nd_core::Result<Self> {
        match s.to_lowercase().as_str() {
            "briefing" => Ok(Self::Briefing),
            "article" => Ok(Self::Article),
            other => Err(Error::Config(format!("unknown assistant mode: {}", other))),
        }
    }
}

/// Picks the assistant: the news assistant without an article, otherwise the
/// one named by `mode`.
pub fn create_responder(
    catalog: &Catalog,
    article: Option<&Article>,
    mode: AssistantMode,
) -> Arc<dyn Responder> {
    match (article, mode) {
        (None, _) => Arc::new(NewsAssistant::new(catalog.clone())),
        (Some(article), AssistantMode::Briefing) => {
            Arc::new(ArticleBriefing::new(catalog.clone(), article.clone()))
        }
        (Some(article), AssistantMode::Article) => {
            Arc::new(ArticleAssistant::new(catalog.clone(), article.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(_: &(), query: &str) -> String {
        query.to_uppercase()
    }

    fn whisper(_: &(), query: &str) -> String {
        query.to_lowercase()
    }

    fn shrug(_: &(), _: &str) -> String {
        "?".to_string()
    }

    fn rules() -> RuleSet<()> {
        RuleSet::new(
            vec![
                Rule::new("shout", &["loud", "yell"], shout),
                Rule::new("whisper", &["quiet", "loud"], whisper),
            ],
            "shrug",
            shrug,
        )
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let reply = rules().respond(&(), "Quiet but LOUD");
        assert_eq!(reply.rule, "shout");
        assert_eq!(reply.text, "QUIET BUT LOUD");
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let reply = rules().respond(&(), "hello");
        assert_eq!(reply, Reply { rule: "shrug", text: "?".to_string() });
        assert_eq!(rules().rule_names(), vec!["shout", "whisper", "shrug"]);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Briefing".parse::<AssistantMode>().unwrap(), AssistantMode::Briefing);
        assert!("oracle".parse::<AssistantMode>().is_err());
    }

    #[test]
    fn test_create_responder_without_article_is_news_assistant() {
        let responder = create_responder(&Catalog::default(), None, AssistantMode::Briefing);
        assert_eq!(responder.name(), news::NAME);
    }
}
