//! Interactive quiz command

use super::{load_questions, SourceArgs};
use crate::session::{
    self, FarewellHook, Orchestrator, Sampler, SessionOutcome, TerminalCapabilities,
};
use crate::ui::DialoguerUi;
use crate::Result;
use colored::Colorize;
use tokio::sync::mpsc;

/// Resolves on Ctrl-C; never resolves if the handler cannot be installed
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Resolves on SIGTERM; never resolves if the handler cannot be installed
#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            if stream.recv().await.is_some() {
                return;
            }
        }
        Err(e) => tracing::warn!("Failed to listen for SIGTERM: {}", e),
    }
    std::future::pending::<()>().await
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await
}

/// Resolves when the process is asked to stop
async fn interrupt() {
    tokio::select! {
        _ = ctrl_c() => tracing::debug!("received Ctrl-C"),
        _ = terminate() => tracing::debug!("received SIGTERM"),
    }
}

/// Run a quiz session in the terminal
pub async fn run(args: &SourceArgs) -> Result<SessionOutcome> {
    let farewell = FarewellHook::new(TerminalCapabilities::detect());
    let mut ui = DialoguerUi::new();

    let result = play(args, &mut ui, &farewell).await;
    // Loading can fail or be interrupted before a session exists
    farewell.fire(&mut ui);
    result
}

async fn play(
    args: &SourceArgs,
    ui: &mut DialoguerUi,
    farewell: &FarewellHook,
) -> Result<SessionOutcome> {
    let cancel = interrupt();
    tokio::pin!(cancel);

    let (config, questions) = tokio::select! {
        loaded = load_questions(args) => loaded?,
        _ = &mut cancel => return Ok(SessionOutcome::Cancelled),
    };

    if questions.is_empty() {
        println!("{}", "⚠️  No questions found in the quiz document".yellow());
    } else {
        tracing::info!(questions = questions.len(), "starting session");
    }

    let (tx, rx) = mpsc::unbounded_channel();
    let orchestrator = Orchestrator::start(Sampler::from_os_rng(questions), config.wrap_width, tx)?;

    let outcome = session::run(orchestrator, rx, ui, farewell, cancel).await?;
    Ok(outcome)
}
