//! Chat domain - transcript state for conversational shells

mod message;
mod session;

pub use message::{ChatMessage, Sender};
pub use session::{ChatSession, GREETING, QUICK_QUESTIONS};
