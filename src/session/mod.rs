//! Interactive quiz session
//!
//! The [`Orchestrator`] owns the question pool and decides what to ask next;
//! [`run`] carries its prompts to a [`TerminalUi`] and the answers back.

pub mod driver;
pub mod farewell;
pub mod orchestrator;
pub mod prompt;
pub mod sampler;

pub use driver::{run, Response, SessionOutcome, TerminalUi};
pub use farewell::{farewell_message, FarewellHook, TerminalCapabilities};
pub use orchestrator::{Orchestrator, SessionEvent, SessionState};
pub use prompt::{PromptKind, PromptSpec, CONTINUE_PROMPT_NAME};
pub use sampler::Sampler;

/// An answer delivered back to the orchestrator, tagged with its prompt's name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Transformed answer of a question prompt
    Choice { name: String, value: String },
    /// Answer of the continue prompt
    Confirm { name: String, value: bool },
}

impl Answer {
    pub fn name(&self) -> &str {
        match self {
            Answer::Choice { name, .. } | Answer::Confirm { name, .. } => name,
        }
    }
}

/// Errors raised while running a session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Cannot sample from an empty question pool")]
    EmptyPool,

    #[error("Unexpected answer for prompt {got:?} (expected {expected:?})")]
    UnexpectedAnswer { expected: String, got: String },

    #[error("Session already completed")]
    SessionCompleted,

    #[error("Session event channel closed")]
    ChannelClosed,

    #[error("Choice {0} is out of range")]
    InvalidChoice(usize),

    #[error("Response does not match a {0:?} prompt")]
    MismatchedResponse(PromptKind),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
