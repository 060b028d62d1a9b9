pub mod command;
pub mod completion;
pub mod conversation;
pub mod persona;
pub mod registry;
pub mod session;

pub use command::{classify, Submission, COMMAND_PREFIXES};
pub use completion::{CompletionAdapter, CompletionOutcome};
pub use conversation::Conversation;
pub use registry::{SessionHandle, SessionRegistry};
pub use session::{ChatSession, Turn};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("Submission is empty")]
    EmptySubmission,
    #[error("User message must not be empty")]
    EmptyMessage,
}
