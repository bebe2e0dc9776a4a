use super::config::AppConfig;
use super::keymap::{KeyConfig, KeyMap};
use chrono::{DateTime, Local};
use std::sync::Arc;

pub mod input;
pub mod output;

// Re-exports
pub use input::{AppTextArea, InputState};
pub use output::OutputState;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Focus {
    Query,  // Typing into the query box
    Output, // Scrolling the output box
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub focus: Focus,
    pub endpoint: String,

    // --- Input Capture ---
    pub input: InputState<'a>,

    // --- Output ---
    pub output: OutputState,

    // --- Dispatch Bookkeeping ---
    pub next_dispatch_id: u64,
    pub in_flight: usize,
    pub shown_dispatch_id: Option<u64>,
    pub last_completed_at: Option<DateTime<Local>>,
    pub fence_stale_responses: bool,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &AppConfig, endpoint: String) -> Self {
        Self {
            endpoint,
            fence_stale_responses: config.fence_stale_responses,
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            palette_type: config.theme,
            theme: crate::theme::Theme::from_palette_type(config.theme),
            ..Default::default()
        }
    }

    pub fn display_text(&self) -> &str {
        &self.output.text
    }

    /// Allocates the id for a new dispatch. Nothing is cancelled or blocked;
    /// earlier dispatches keep running.
    pub fn begin_dispatch(&mut self) -> u64 {
        let id = self.next_dispatch_id;
        self.next_dispatch_id += 1;
        self.in_flight += 1;
        id
    }

    /// Applies a finished dispatch. Returns `false` if the result was fenced
    /// off because a newer one is already shown.
    pub fn complete_dispatch(&mut self, id: u64, text: String) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        if self.fence_stale_responses && self.shown_dispatch_id.is_some_and(|shown| id < shown) {
            tracing::debug!(id, shown = ?self.shown_dispatch_id, "dropping stale response");
            return false;
        }

        self.output.replace(text);
        self.shown_dispatch_id = Some(id);
        self.last_completed_at = Some(Local::now());
        true
    }

    pub fn cycle_theme(&mut self) {
        self.palette_type = self.palette_type.next();
        self.theme = crate::theme::Theme::from_palette_type(self.palette_type);
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            focus: Focus::Query,
            endpoint: String::new(),
            input: InputState::default(),
            output: OutputState::default(),
            next_dispatch_id: 1,
            in_flight: 0,
            shown_dispatch_id: None,
            last_completed_at: None,
            fence_stale_responses: false,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: crate::theme::PaletteType::CatppuccinMocha,
            theme: crate::theme::Theme::default(),
        }
    }
}
