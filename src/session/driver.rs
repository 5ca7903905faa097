use super::farewell::FarewellHook;
use super::orchestrator::{Orchestrator, SessionEvent};
use super::prompt::{PromptKind, PromptSpec};
use super::{Answer, SessionError};
use async_trait::async_trait;
use rand::Rng;
use std::future::Future;
use tokio::sync::mpsc::UnboundedReceiver;

/// What the user did with a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Index into the prompt's choices
    Selected(usize),
    Confirmed(bool),
    /// The user interrupted the prompt (Ctrl-C)
    Interrupted,
}

/// Terminal side of a session: shows prompts and collects responses
#[async_trait]
pub trait TerminalUi: Send {
    /// Display the prompt and wait for the user's response
    async fn ask(&mut self, prompt: &PromptSpec) -> std::io::Result<Response>;

    /// Show the transformed answer of a question
    fn show(&mut self, text: &str);

    /// Render the farewell line
    fn farewell(&mut self, message: &str);
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Declined to continue or ran out of questions
    Completed,
    /// Interrupted by the user or a termination signal
    Cancelled,
}

/// Drive a session until it completes or `cancel` resolves.
///
/// Events are taken from the orchestrator's channel in order; each prompt is
/// shown and its answer fed back before the next event is read. The farewell
/// is rendered once on every exit path, errors included.
pub async fn run<R, U, C>(
    mut orchestrator: Orchestrator<R>,
    mut events: UnboundedReceiver<SessionEvent>,
    ui: &mut U,
    farewell: &FarewellHook,
    cancel: C,
) -> Result<SessionOutcome, SessionError>
where
    R: Rng,
    U: TerminalUi + ?Sized,
    C: Future<Output = ()>,
{
    let result = drive(&mut orchestrator, &mut events, ui, cancel).await;
    if let Err(e) = &result {
        tracing::debug!(error = %e, "session aborted");
    }
    farewell.fire(ui);
    result
}

async fn drive<R, U, C>(
    orchestrator: &mut Orchestrator<R>,
    events: &mut UnboundedReceiver<SessionEvent>,
    ui: &mut U,
    cancel: C,
) -> Result<SessionOutcome, SessionError>
where
    R: Rng,
    U: TerminalUi + ?Sized,
    C: Future<Output = ()>,
{
    tokio::pin!(cancel);

    loop {
        let event = events.recv().await.ok_or(SessionError::ChannelClosed)?;

        let prompt = match event {
            SessionEvent::Display(text) => {
                ui.show(&text);
                continue;
            }
            SessionEvent::Completed => return Ok(SessionOutcome::Completed),
            SessionEvent::Prompt(prompt) => prompt,
        };

        let response = tokio::select! {
            response = ui.ask(&prompt) => response?,
            _ = &mut cancel => Response::Interrupted,
        };

        let answer = match (prompt.kind, response) {
            (_, Response::Interrupted) => {
                tracing::debug!(prompt = ?prompt.name, "session cancelled");
                return Ok(SessionOutcome::Cancelled);
            }
            (PromptKind::Question, Response::Selected(choice)) => {
                let text = prompt
                    .choices
                    .get(choice)
                    .ok_or(SessionError::InvalidChoice(choice))?;
                Answer::Choice {
                    name: prompt.name.clone(),
                    value: prompt.transform(text),
                }
            }
            (PromptKind::Continue, Response::Confirmed(value)) => Answer::Confirm {
                name: prompt.name.clone(),
                value,
            },
            (kind, _) => return Err(SessionError::MismatchedResponse(kind)),
        };

        orchestrator.handle(answer)?;
    }
}
