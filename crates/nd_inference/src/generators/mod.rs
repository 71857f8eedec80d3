//! Per-article content for the interactive widgets. Each generator is a
//! lookup keyed by category with a default entry for anything else.

pub mod group_chat;
pub mod podcast;
pub mod poll;
pub mod quiz;

pub use group_chat::{opening_messages, GroupMessage, SimulatedUser};
pub use podcast::{expert_reply, podcast_script, PodcastLine, Speaker};
pub use poll::{generate_poll, Poll, PollOption};
pub use quiz::{generate_quiz, points_for_correct, QuizQuestion};
