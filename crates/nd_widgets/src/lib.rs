//! Stateful widgets shown next to an article. Each session owns its timers
//! and cancels them when closed or dropped.

pub mod chat;
pub mod group_chat;
pub mod podcast;
pub mod poll;
pub mod quiz;
pub mod speech;
pub mod tasks;

pub use chat::{ChatMessage, ChatSession, Role};
pub use group_chat::GroupChatSession;
pub use podcast::PodcastSession;
pub use poll::{PollResult, PollSession};
pub use quiz::{AnswerOutcome, QuizClock, QuizSession};
pub use speech::{
    select_voice, NullSpeech, RecordingSpeech, SpeechSynthesizer, TracingSpeech, Utterance, Voice,
};
pub use tasks::TaskSet;

pub mod prelude {
    pub use super::{
        AnswerOutcome, ChatSession, GroupChatSession, PodcastSession, PollSession, QuizClock,
        QuizSession, SpeechSynthesizer, TracingSpeech,
    };
}
