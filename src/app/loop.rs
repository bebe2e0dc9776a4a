use crate::app::{
    action::Action, command::Command, input::map_event_to_action, reducer, state::AppState, ui,
};
use crate::domain::backend::QueryBackend;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn run_loop<'a, B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'a>,
    backend: Arc<dyn QueryBackend>,
) -> Result<AppState<'a>> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, backend, event_rx).await
}

pub async fn run_loop_with_events<'a, B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'a>,
    backend: Arc<dyn QueryBackend>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<AppState<'a>> {
    let (action_tx, mut action_rx) = mpsc::channel(100);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            // User Input
            res = event_rx.recv() => {
                let event = match res {
                    Some(Ok(e)) => e,
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                };
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, backend.clone(), action_tx.clone())?;
            }
        }
    }

    tracing::info!(in_flight = app_state.in_flight, "event loop finished");
    Ok(app_state)
}

pub(crate) fn handle_command(
    command: Command,
    backend: Arc<dyn QueryBackend>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    crate::app::features::handle_command(command, backend, tx)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
