use nd_core::{Article, Category};
use serde::Serialize;

/// Titles quoted in poll questions are cut to this many characters.
const TITLE_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollOption {
    pub id: String,
    pub text: String,
    pub votes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Poll {
    pub question: String,
    pub options: Vec<PollOption>,
}

fn options(entries: [(&str, u32); 4]) -> Vec<PollOption> {
    entries
        .iter()
        .enumerate()
        .map(|(i, (text, votes))| PollOption {
            id: (i + 1).to_string(),
            text: text.to_string(),
            votes: *votes,
        })
        .collect()
}

fn title_preview(article: &Article) -> String {
    let preview: String = article.title.chars().take(TITLE_PREVIEW_CHARS).collect();
    format!("{}...", preview)
}

/// Community poll for the article's category, with seeded vote counts.
pub fn generate_poll(article: &Article) -> Poll {
    match article.category {
        Category::Environment => Poll {
            question: format!(
                "Do you believe the targets discussed in \"{}\" are achievable?",
                title_preview(article)
            ),
            options: options([
                ("Yes, with strong international cooperation", 234),
                ("Partially, since only developed nations can meet them", 187),
                ("No, they are too ambitious", 93),
                ("Undecided, I need more information", 56),
            ]),
        },
        Category::Technology => Poll {
            question: "How will new tech regulations impact innovation?".to_string(),
            options: options([
                ("Positively, it levels the playing field", 312),
                ("Negatively, it stifles growth", 198),
                ("Mixed, it depends on implementation", 267),
                ("No significant impact", 45),
            ]),
        },
        Category::Business => Poll {
            question: "What's your outlook on the economy based on this development?".to_string(),
            options: options([
                ("Optimistic, recovery is underway", 289),
                ("Cautiously optimistic", 356),
                ("Pessimistic, more challenges ahead", 134),
                ("Neutral, too early to tell", 98),
            ]),
        },
        Category::Health => Poll {
            question: "How hopeful are you about this medical breakthrough?".to_string(),
            options: options([
                ("Very hopeful, it's a game changer", 445),
                ("Cautiously optimistic", 312),
                ("Skeptical, it needs more research", 89),
                ("Need to understand more first", 67),
            ]),
        },
        _ => Poll {
            question: format!("What's your take on \"{}\"?", title_preview(article)),
            options: options([
                ("Strongly support this development", 203),
                ("Support with reservations", 178),
                ("Oppose this direction", 95),
                ("Need more information", 112),
            ]),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_storage::BuiltinSource;

    #[test]
    fn test_category_specific_poll() {
        let catalog = BuiltinSource::catalog().unwrap();
        let poll = generate_poll(catalog.get("2").unwrap());
        assert_eq!(poll.question, "How will new tech regulations impact innovation?");
        assert_eq!(poll.options.len(), 4);
        assert_eq!(poll.options[0].id, "1");
        assert_eq!(poll.options[2].votes, 267);
    }

    #[test]
    fn test_default_poll_quotes_truncated_title() {
        let catalog = BuiltinSource::catalog().unwrap();
        let poll = generate_poll(catalog.get("6").unwrap());
        assert_eq!(
            poll.question,
            "What's your take on \"National Team Advances to World Cup Semifinals in ...\"?"
        );
    }

    #[test]
    fn test_unknown_category_uses_default() {
        let mut article = BuiltinSource::catalog().unwrap().get("4").unwrap().clone();
        article.category = Category::Other("Weather".to_string());
        assert!(generate_poll(&article).question.starts_with("What's your take on"));
    }
}
