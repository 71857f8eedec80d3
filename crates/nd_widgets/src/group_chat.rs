use nd_core::{Article, Error, Result, WidgetConfig};
use nd_inference::generators::group_chat::{simulated_response, CURRENT_USER, SIMULATED_USERS};
use nd_inference::generators::{opening_messages, GroupMessage};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::tasks::{jittered, rng_from_seed, Shared, TaskSet};

const ONLINE_RANGE: std::ops::Range<u32> = 5..17;
const NEW_MESSAGE_TIMESTAMP: &str = "just now";

#[derive(Debug)]
struct GroupState {
    messages: Vec<GroupMessage>,
    next_response: usize,
    next_id: usize,
}

impl GroupState {
    fn push(&mut self, message: impl FnOnce(String) -> GroupMessage) {
        self.next_id += 1;
        let id = format!("msg-{}", self.next_id);
        self.messages.push(message(id));
    }
}

/// Discussion room next to an article. While open, simulated readers keep
/// posting canned responses.
#[derive(Debug)]
pub struct GroupChatSession {
    state: Shared<GroupState>,
    rng: Shared<StdRng>,
    tasks: TaskSet,
    online: u32,
    base_ms: u64,
    jitter_ms: u64,
    open: bool,
}

impl GroupChatSession {
    pub fn new(article: &Article, config: &WidgetConfig) -> Self {
        let mut rng = rng_from_seed(config.seed);
        let online = rng.gen_range(ONLINE_RANGE);
        let messages = opening_messages(article);
        let next_id = messages.len();
        Self {
            state: Shared::new(GroupState {
                messages,
                next_response: 0,
                next_id,
            }),
            rng: Shared::new(rng),
            tasks: TaskSet::new("group chat"),
            online,
            base_ms: config.group_chat_delay_ms,
            jitter_ms: config.group_chat_jitter_ms,
            open: false,
        }
    }

    pub fn online_count(&self) -> u32 {
        self.online
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn messages(&self) -> Vec<GroupMessage> {
        self.state.lock().messages.clone()
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        info!("👥 Group chat opened ({} online)", self.online);

        let state = self.state.clone();
        let rng = self.rng.clone();
        let (base, jitter) = (self.base_ms, self.jitter_ms);
        self.tasks.spawn(async move {
            loop {
                let delay = rng.with(|rng| jittered(rng, base, jitter));
                tokio::time::sleep(delay).await;
                let user = rng.with(|rng| SIMULATED_USERS[rng.gen_range(0..SIMULATED_USERS.len())]);
                state.with(|state| {
                    let content = simulated_response(state.next_response);
                    state.next_response += 1;
                    state.push(|id| GroupMessage::new(id, user, content, NEW_MESSAGE_TIMESTAMP));
                });
                debug!("👥 {} posted", user.name);
            }
        });
    }

    pub fn send(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Widget("message is empty".to_string()));
        }
        self.state.with(|state| {
            state.push(|id| GroupMessage::new(id, CURRENT_USER, text, NEW_MESSAGE_TIMESTAMP))
        });
        Ok(())
    }

    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.tasks.cancel_all();
        info!("👥 Group chat closed");
    }
}
