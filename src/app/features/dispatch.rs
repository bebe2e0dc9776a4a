use crate::app::{action::Action, command::Command};
use crate::domain::backend::QueryBackend;
use crate::domain::dispatch::dispatch;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs a command on its own task and reports back through `tx`. Overlapping
/// dispatches are allowed; each one sends exactly one completion.
pub fn handle_command(
    command: Command,
    backend: Arc<dyn QueryBackend>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::Dispatch { id, query } => {
            tracing::info!(id, query_len = query.len(), "dispatching query");
            tokio::spawn(async move {
                let text = dispatch(backend.as_ref(), &query).await;
                tracing::debug!(id, text_len = text.len(), "dispatch finished");
                let _ = tx.send(Action::DispatchCompleted { id, text }).await;
            });
        }
    }
    Ok(())
}
