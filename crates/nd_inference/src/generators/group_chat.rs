use nd_core::Article;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulatedUser {
    pub name: &'static str,
    pub avatar: &'static str,
}

pub const SIMULATED_USERS: [SimulatedUser; 5] = [
    SimulatedUser { name: "Alex R.", avatar: "AR" },
    SimulatedUser { name: "Priya M.", avatar: "PM" },
    SimulatedUser { name: "Jordan K.", avatar: "JK" },
    SimulatedUser { name: "Sam L.", avatar: "SL" },
    SimulatedUser { name: "Casey T.", avatar: "CT" },
];

/// Posted by simulated readers in this order, wrapping around.
pub const SIMULATED_RESPONSES: [&str; 8] = [
    "That's a really good point! I hadn't considered that angle.",
    "I think the long-term impact will be even bigger than what's reported here.",
    "Has anyone seen the follow-up coverage on this?",
    "This could reshape the entire industry, honestly.",
    "I'm cautiously optimistic. Let's see how things unfold.",
    "Great discussion everyone! Really learning a lot from different perspectives.",
    "The data backing this is quite compelling if you look at the source studies.",
    "I wonder how this compares to similar situations in other countries.",
];

pub const CURRENT_USER: SimulatedUser = SimulatedUser { name: "You", avatar: "YO" };

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMessage {
    pub id: String,
    pub user: String,
    pub avatar: String,
    pub content: String,
    /// Display string such as "just now".
    pub timestamp: String,
    pub is_current_user: bool,
}

impl GroupMessage {
    pub fn new(
        id: impl Into<String>,
        user: SimulatedUser,
        content: impl Into<String>,
        timestamp: &str,
    ) -> Self {
        Self {
            id: id.into(),
            user: user.name.to_string(),
            avatar: user.avatar.to_string(),
            content: content.into(),
            timestamp: timestamp.to_string(),
            is_current_user: user == CURRENT_USER,
        }
    }
}

/// The conversation already under way when a reader joins.
pub fn opening_messages(article: &Article) -> Vec<GroupMessage> {
    vec![
        GroupMessage::new(
            "1",
            SIMULATED_USERS[0],
            format!(
                "Just read this article about {}, really interesting developments!",
                article.category.as_str().to_lowercase()
            ),
            "2 min ago",
        ),
        GroupMessage::new(
            "2",
            SIMULATED_USERS[1],
            "I agree. The implications are huge if this plays out as described.",
            "1 min ago",
        ),
        GroupMessage::new(
            "3",
            SIMULATED_USERS[2],
            "Does anyone know more background on this? I'd love a deeper dive.",
            "just now",
        ),
    ]
}

/// Canned response number `index`, wrapping around the list.
pub fn simulated_response(index: usize) -> &'static str {
    SIMULATED_RESPONSES[index % SIMULATED_RESPONSES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_storage::BuiltinSource;

    #[test]
    fn test_opening_messages_mention_category() {
        let catalog = BuiltinSource::catalog().unwrap();
        let messages = opening_messages(catalog.get("5").unwrap());
        assert_eq!(messages.len(), 3);
        assert!(messages[0].content.contains("about local"));
        assert_eq!(messages[1].avatar, "PM");
        assert!(messages.iter().all(|m| !m.is_current_user));
    }

    #[test]
    fn test_responses_wrap_around() {
        assert_eq!(simulated_response(0), SIMULATED_RESPONSES[0]);
        assert_eq!(simulated_response(9), SIMULATED_RESPONSES[1]);
    }

    #[test]
    fn test_current_user_messages_are_flagged() {
        let message = GroupMessage::new("9", CURRENT_USER, "Hello", "just now");
        assert!(message.is_current_user);
        assert_eq!(message.user, "You");
    }
}
