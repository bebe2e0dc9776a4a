use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use analyst::app::{config::AppConfig, r#loop::run_loop, state::AppState};
use analyst::domain::backend::QueryBackend;
use analyst::infrastructure::http_backend::HttpBackend;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        );
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Logging is best effort; the app runs without it
    let log_error = analyst::logging::init_tracing().err();

    let config = AppConfig::load();

    // Validate the endpoint BEFORE terminal setup so a bad config
    // doesn't leave the terminal in raw mode.
    let backend: Arc<dyn QueryBackend> = Arc::new(HttpBackend::new(&config.endpoint)?);
    tracing::info!(endpoint = %backend.endpoint(), "starting");
    let app_state = AppState::new(&config, backend.endpoint());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, backend).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Some(err) = log_error {
        eprintln!("logging disabled: {err:?}");
    }
    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}
