use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use nd_core::{Article, Catalog, Error, Result, WidgetConfig};
use nd_inference::responders::ArticleBriefing;
use nd_inference::{create_responder, AssistantMode, Responder};
use serde::Serialize;
use tokio::sync::Notify;
use tracing::{debug, info};
use uuid::Uuid;

use crate::tasks::{Shared, TaskSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }
}

#[derive(Debug, Default)]
struct ChatState {
    messages: Vec<ChatMessage>,
    loading: bool,
    closed: bool,
}

/// A conversation with one assistant. Replies arrive after a fixed delay
/// and at most one reply is pending at a time.
pub struct ChatSession {
    responder: Arc<dyn Responder>,
    state: Shared<ChatState>,
    replied: Arc<Notify>,
    tasks: TaskSet,
    reply_delay: Duration,
}

impl ChatSession {
    pub fn new(responder: Arc<dyn Responder>, config: &WidgetConfig) -> Self {
        Self {
            responder,
            state: Shared::new(ChatState::default()),
            replied: Arc::new(Notify::new()),
            tasks: TaskSet::new("chat"),
            reply_delay: config.chat_reply_delay(),
        }
    }

    /// Opens the briefing for `article` and asks about it on the reader's behalf.
    pub fn open_with_article(
        catalog: &Catalog,
        article: &Article,
        config: &WidgetConfig,
    ) -> Result<Self> {
        let responder = create_responder(catalog, Some(article), AssistantMode::Briefing);
        let mut session = Self::new(responder, config);
        session.submit(&ArticleBriefing::opening_prompt(article))?;
        Ok(session)
    }

    pub fn assistant_name(&self) -> &str {
        self.responder.name()
    }

    pub fn submit(&mut self, input: &str) -> Result<()> {
        let query = input.trim();
        if query.is_empty() {
            return Err(Error::Widget("message is empty".to_string()));
        }

        self.state.with(|state| {
            if state.closed {
                return Err(Error::Widget("chat is closed".to_string()));
            }
            if state.loading {
                return Err(Error::Widget("still waiting for the previous reply".to_string()));
            }
            state.messages.push(ChatMessage::new(Role::User, input));
            state.loading = true;
            Ok(())
        })?;

        let responder = self.responder.clone();
        let state = self.state.clone();
        let replied = self.replied.clone();
        let query = query.to_string();
        self.tasks.schedule(self.reply_delay, move || {
            let reply = responder.respond(&query);
            debug!("💬 {} answered with rule '{}'", responder.name(), reply.rule);
            state.with(|state| {
                if state.closed {
                    return;
                }
                state.messages.push(ChatMessage::new(Role::Assistant, reply.text));
                state.loading = false;
            });
            replied.notify_waiters();
        });
        Ok(())
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.state.lock().messages.clone()
    }

    pub fn last_reply(&self) -> Option<ChatMessage> {
        self.state
            .lock()
            .messages
            .iter()
            .rev()
            .find(|message| message.role == Role::Assistant)
            .cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Resolves once no reply is pending.
    pub async fn wait_for_reply(&self) {
        loop {
            let notified = self.replied.notified();
            if !self.is_loading() {
                return;
            }
            notified.await;
        }
    }

    pub fn close(&mut self) {
        let cancelled = self.tasks.cancel_all();
        self.state.with(|state| {
            state.closed = true;
            state.loading = false;
        });
        self.replied.notify_waiters();
        info!("Closed {} ({} pending reply cancelled)", self.responder.name(), cancelled);
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("responder", &self.responder.name())
            .field("reply_delay", &self.reply_delay)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_storage::BuiltinSource;

    fn news_session() -> ChatSession {
        let catalog = BuiltinSource::catalog().unwrap();
        ChatSession::new(
            create_responder(&catalog, None, AssistantMode::default()),
            &WidgetConfig::default(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let mut session = news_session();
        session.submit("find spacex").unwrap();
        assert!(session.is_loading());
        assert_eq!(session.messages().len(), 1);

        tokio::time::sleep(Duration::from_millis(900)).await;
        assert!(session.is_loading());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!session.is_loading());
        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].role, Role::Assistant);
    }

    #[tokio::test(start_paused = true)]
    async fn test_user_message_keeps_raw_input() {
        let mut session = news_session();
        session.submit("  find spacex \n").unwrap();
        assert_eq!(session.messages()[0].content, "  find spacex \n");
        session.wait_for_reply().await;
        assert!(session.last_reply().unwrap().content.contains("SpaceX"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_and_busy_submissions_are_rejected() {
        let mut session = news_session();
        assert!(session.submit("   ").is_err());
        session.submit("hello").unwrap();
        assert!(session.submit("again").is_err());
        session.wait_for_reply().await;
        assert!(session.submit("again").is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_cancels_pending_reply() {
        let mut session = news_session();
        session.submit("hello").unwrap();
        session.close();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_loading());
        assert!(session.is_closed());
        assert!(session.submit("hello").is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_with_article_posts_opening_prompt() {
        let catalog = BuiltinSource::catalog().unwrap();
        let article = catalog.get("5").unwrap();
        let session =
            ChatSession::open_with_article(&catalog, article, &WidgetConfig::default()).unwrap();
        assert_eq!(
            session.messages()[0].content,
            format!("Tell me about this article: \"{}\"", article.title)
        );

        session.wait_for_reply().await;
        assert!(session.last_reply().is_some());
        assert_eq!(session.assistant_name(), "Article Briefing");
    }
}
