//! dialoguer-backed terminal for quiz sessions

use crate::session::{PromptKind, PromptSpec, Response, TerminalUi};
use async_trait::async_trait;
use colored::Colorize;
use dialoguer::console::Term;
use dialoguer::{Confirm, Select};
use std::io;

/// Prompts on stdout with dialoguer's `Select` and `Confirm` widgets
pub struct DialoguerUi {
    term: Term,
}

impl Default for DialoguerUi {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerUi {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

/// Owned copy of a prompt, movable onto the blocking thread
struct PendingPrompt {
    kind: PromptKind,
    message: String,
    choices: Vec<String>,
    default: Option<bool>,
    suffix: Option<String>,
}

impl From<&PromptSpec> for PendingPrompt {
    fn from(prompt: &PromptSpec) -> Self {
        Self {
            kind: prompt.kind,
            message: prompt.message.clone(),
            choices: prompt.choices.clone(),
            default: prompt.default,
            suffix: prompt.suffix.clone(),
        }
    }
}

/// Map a widget result: no answer (Esc / q) and Ctrl-C both interrupt the session
fn into_response<T>(
    result: Result<Option<T>, dialoguer::Error>,
    answered: impl FnOnce(T) -> Response,
) -> io::Result<Response> {
    match result {
        Ok(Some(value)) => Ok(answered(value)),
        Ok(None) => Ok(Response::Interrupted),
        Err(dialoguer::Error::IO(error)) if error.kind() == io::ErrorKind::Interrupted => {
            Ok(Response::Interrupted)
        }
        Err(dialoguer::Error::IO(error)) => Err(error),
    }
}

fn ask_blocking(term: &Term, prompt: PendingPrompt) -> io::Result<Response> {
    match prompt.kind {
        PromptKind::Question => {
            term.clear_screen()?;
            term.write_line(&format!("{} {}", "?".green().bold(), prompt.message))?;
            term.write_line("")?;

            let selection = Select::new()
                .with_prompt(prompt.suffix.unwrap_or_default())
                .items(&prompt.choices)
                .default(0)
                .interact_on_opt(term);

            into_response(selection, Response::Selected)
        }
        PromptKind::Continue => {
            let confirmed = Confirm::new()
                .with_prompt(prompt.message)
                .default(prompt.default.unwrap_or(true))
                .interact_on_opt(term);

            into_response(confirmed, Response::Confirmed)
        }
    }
}

#[async_trait]
impl TerminalUi for DialoguerUi {
    async fn ask(&mut self, prompt: &PromptSpec) -> io::Result<Response> {
        let term = self.term.clone();
        let pending = PendingPrompt::from(prompt);

        tokio::task::spawn_blocking(move || ask_blocking(&term, pending))
            .await
            .map_err(io::Error::other)?
    }

    fn show(&mut self, text: &str) {
        println!("{}", text);
    }

    fn farewell(&mut self, message: &str) {
        print!("{}", message.bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_failure(kind: io::ErrorKind) -> dialoguer::Error {
        dialoguer::Error::IO(io::Error::new(kind, "prompt failed"))
    }

    #[test]
    fn test_answer_maps_to_response() {
        assert_eq!(
            into_response(Ok(Some(2)), Response::Selected).unwrap(),
            Response::Selected(2)
        );
        assert_eq!(
            into_response(Ok(Some(false)), Response::Confirmed).unwrap(),
            Response::Confirmed(false)
        );
    }

    #[test]
    fn test_dismissed_prompt_interrupts() {
        assert_eq!(
            into_response::<usize>(Ok(None), Response::Selected).unwrap(),
            Response::Interrupted
        );
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        let result = into_response::<bool>(
            Err(io_failure(io::ErrorKind::Interrupted)),
            Response::Confirmed,
        );
        assert_eq!(result.unwrap(), Response::Interrupted);
    }

    #[test]
    fn test_other_io_errors_propagate() {
        let err = into_response::<usize>(
            Err(io_failure(io::ErrorKind::NotConnected)),
            Response::Selected,
        )
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotConnected);
    }
}
