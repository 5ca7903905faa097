//! Session state machine
//!
//! ```text
//!            start (pool not empty)
//!                   |
//!                   v
//!   +---> AwaitingQuestion --answer--> AwaitingContinue
//!   |                                     |       |
//!   +------------- yes, pool left --------+       | no / pool empty
//!                                                 v
//!   start (pool empty) -------------------->  Completed
//! ```
//!
//! Every transition publishes its output on the session channel; exactly one
//! prompt is outstanding until its answer comes back through [`Orchestrator::handle`].

use super::prompt::{PromptSpec, CONTINUE_PROMPT_NAME};
use super::sampler::Sampler;
use super::{Answer, SessionError};
use rand::Rng;
use tokio::sync::mpsc::UnboundedSender;

/// What the orchestrator hands to the terminal side
#[derive(Debug)]
pub enum SessionEvent {
    /// Ask the user
    Prompt(PromptSpec),
    /// Show the transformed answer of a question
    Display(String),
    /// No more prompts will follow
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// A question prompt with this name is outstanding
    AwaitingQuestion { name: String },
    /// The continue prompt is outstanding
    AwaitingContinue,
    Completed,
}

impl SessionState {
    /// Name of the prompt whose answer is awaited
    pub fn expected_prompt(&self) -> Option<&str> {
        match self {
            SessionState::AwaitingQuestion { name } => Some(name),
            SessionState::AwaitingContinue => Some(CONTINUE_PROMPT_NAME),
            SessionState::Completed => None,
        }
    }
}

/// Sequences question and continue prompts over a sampled pool
pub struct Orchestrator<R> {
    sampler: Sampler<R>,
    state: SessionState,
    wrap_width: usize,
    events: UnboundedSender<SessionEvent>,
}

impl<R: Rng> Orchestrator<R> {
    /// Start a session, emitting the first question or completing at once on an empty pool
    pub fn start(
        sampler: Sampler<R>,
        wrap_width: usize,
        events: UnboundedSender<SessionEvent>,
    ) -> Result<Self, SessionError> {
        let mut orchestrator = Self {
            sampler,
            state: SessionState::Completed,
            wrap_width,
            events,
        };

        if orchestrator.sampler.is_empty() {
            orchestrator.complete()?;
        } else {
            orchestrator.ask_question()?;
        }
        Ok(orchestrator)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Questions not asked yet
    pub fn remaining(&self) -> usize {
        self.sampler.len()
    }

    /// Route an answer to the transition of the outstanding prompt
    pub fn handle(&mut self, answer: Answer) -> Result<(), SessionError> {
        match (self.state.clone(), answer) {
            (SessionState::Completed, _) => Err(SessionError::SessionCompleted),
            (SessionState::AwaitingQuestion { name }, Answer::Choice { name: got, value })
                if name == got =>
            {
                self.emit(SessionEvent::Display(value))?;
                self.emit(SessionEvent::Prompt(PromptSpec::continue_prompt()))?;
                self.transition(SessionState::AwaitingContinue);
                Ok(())
            }
            (SessionState::AwaitingContinue, Answer::Confirm { name, value })
                if name == CONTINUE_PROMPT_NAME =>
            {
                if value && !self.sampler.is_empty() {
                    self.ask_question()
                } else {
                    self.complete()
                }
            }
            (state, answer) => Err(SessionError::UnexpectedAnswer {
                expected: state.expected_prompt().unwrap_or_default().to_string(),
                got: answer.name().to_string(),
            }),
        }
    }

    fn ask_question(&mut self) -> Result<(), SessionError> {
        let record = self.sampler.sample()?;
        let prompt = PromptSpec::question(&record, self.wrap_width);
        let name = prompt.name.clone();
        self.emit(SessionEvent::Prompt(prompt))?;
        self.transition(SessionState::AwaitingQuestion { name });
        Ok(())
    }

    fn complete(&mut self) -> Result<(), SessionError> {
        self.transition(SessionState::Completed);
        self.emit(SessionEvent::Completed)
    }

    fn transition(&mut self, next: SessionState) {
        tracing::debug!(from = ?self.state, to = ?next, "session transition");
        self.state = next;
    }

    fn emit(&self, event: SessionEvent) -> Result<(), SessionError> {
        self.events
            .send(event)
            .map_err(|_| SessionError::ChannelClosed)
    }
}
