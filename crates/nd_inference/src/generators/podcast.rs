use nd_core::Article;
use serde::Serialize;

pub const SHOW_NAME: &str = "NewsDeep Dive";
pub const HOST_NAME: &str = "Alex Chen (Host)";
pub const AUDIENCE_NAME: &str = "You (Audience)";

/// Audience questions are quoted up to this many characters in the reply.
const QUESTION_PREVIEW_CHARS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Host,
    Expert,
    Audience,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodcastLine {
    pub id: String,
    pub speaker: Speaker,
    pub name: String,
    pub content: String,
}

impl PodcastLine {
    pub fn new(
        id: impl Into<String>,
        speaker: Speaker,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            speaker,
            name: name.into(),
            content: content.into(),
        }
    }

    /// Two-letter avatar label.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

pub fn expert_name(article: &Article) -> String {
    format!("Dr. Sarah Webb ({} Expert)", article.category)
}

/// The scripted conversation between host and expert, in speaking order.
pub fn podcast_script(article: &Article) -> Vec<PodcastLine> {
    let expert = expert_name(article);
    let sector = article.category.as_str().to_lowercase();
    let lines: [(Speaker, String); 9] = [
        (
            Speaker::Host,
            format!(
                "Welcome to {}! Today we're breaking down a major story: \"{}\". I'm your host Alex Chen, and joining me is our subject matter expert.",
                SHOW_NAME, article.title
            ),
        ),
        (
            Speaker::Expert,
            format!(
                "Thanks Alex! This is really a fascinating development. The key thing people need to understand is that {}",
                article.excerpt.to_lowercase()
            ),
        ),
        (
            Speaker::Host,
            "Can you break down the main implications for our audience? What should people be paying attention to?".to_string(),
        ),
        (
            Speaker::Expert,
            format!(
                "Absolutely. There are three major takeaways here. First, the immediate impact on stakeholders in the {} sector is significant. Second, we're seeing a shift in how policy makers approach these issues. And third, the long-term ripple effects could reshape the landscape entirely.",
                sector
            ),
        ),
        (
            Speaker::Host,
            "That's really insightful. Now, some of our listeners might be wondering about the practical implications for everyday people. How does this affect the average person?".to_string(),
        ),
        (
            Speaker::Expert,
            "Great question. On a day-to-day basis, people might not feel the effects immediately. But over the next 6 to 12 months, we'll likely see changes in how related services and products are offered. It's something everyone should keep an eye on.".to_string(),
        ),
        (
            Speaker::Host,
            "Let's also talk about the controversy around this. Not everyone agrees with the direction things are heading. What are the main counterarguments?".to_string(),
        ),
        (
            Speaker::Expert,
            "The critics raise some valid points. There are concerns about implementation feasibility, economic costs, and whether the timeline is realistic. However, the data largely supports the approach being taken, with some caveats.".to_string(),
        ),
        (
            Speaker::Host,
            "We're now opening the floor to audience questions. If you have a question about this topic, feel free to ask below!".to_string(),
        ),
    ];

    lines
        .into_iter()
        .enumerate()
        .map(|(i, (speaker, content))| {
            let name = match speaker {
                Speaker::Host => HOST_NAME.to_string(),
                _ => expert.clone(),
            };
            PodcastLine::new((i + 1).to_string(), speaker, name, content)
        })
        .collect()
}

/// The expert's canned answer to an audience question.
pub fn expert_reply(article: &Article, question: &str, id: impl Into<String>) -> PodcastLine {
    let preview: String = question.chars().take(QUESTION_PREVIEW_CHARS).collect();
    PodcastLine::new(
        id,
        Speaker::Expert,
        expert_name(article),
        format!(
            "That's a great audience question! Regarding \"{}...\", based on the current evidence and trends in {}, I'd say we need to look at multiple factors. The short answer is that this development will have cascading effects, and staying informed is key.",
            preview,
            article.category.as_str().to_lowercase()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_storage::BuiltinSource;

    #[test]
    fn test_script_alternates_host_and_expert() {
        let catalog = BuiltinSource::catalog().unwrap();
        let script = podcast_script(catalog.get("8").unwrap());
        assert_eq!(script.len(), 9);
        for (i, line) in script.iter().enumerate() {
            let expected = if i % 2 == 0 { Speaker::Host } else { Speaker::Expert };
            assert_eq!(line.speaker, expected);
            assert_eq!(line.id, (i + 1).to_string());
        }
        assert_eq!(script[1].name, "Dr. Sarah Webb (Science Expert)");
        assert!(script[0]
            .content
            .contains("\"SpaceX Successfully Lands First Private Mission on Mars Surface\""));
        assert!(script[1].content.ends_with(
            "historic landing marks new era of commercial space exploration as starship \
             delivers science payload to red planet."
        ));
        assert_eq!(script[0].initials(), "AL");
    }

    #[test]
    fn test_expert_reply_quotes_question_preview() {
        let catalog = BuiltinSource::catalog().unwrap();
        let reply = expert_reply(
            catalog.get("3").unwrap(),
            "Will mortgage rates drop before the end of next year?",
            "resp-1",
        );
        assert_eq!(reply.speaker, Speaker::Expert);
        assert!(reply.content.contains("\"Will mortgage rates drop before the end ...\""));
        assert!(reply.content.contains("trends in business"));
    }
}
