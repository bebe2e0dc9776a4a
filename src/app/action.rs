#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Resize(u16, u16),
    Quit,

    // --- Input Capture ---
    TextAreaInput(crossterm::event::KeyEvent), // Keystroke forwarded to the query box
    PasteText(String),                         // Bracketed paste into the query box

    // --- UI ---
    ToggleFocus,           // Switch between query and output
    FocusQuery,            // Return to the query box
    FocusOutput,           // Focus the output box for scrolling
    ScrollOutputUp(u16),   // Scroll output up
    ScrollOutputDown(u16), // Scroll output down
    CycleTheme,            // Next palette

    // --- Dispatch ---
    Dispatch, // POST the current query

    // --- Async Results ---
    DispatchCompleted { id: u64, text: String },
}
