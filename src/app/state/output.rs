/// Owns the DisplayText shown in the read-only output box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputState {
    pub text: String,
    pub scroll: u16,
    // Refreshed on every draw from the wrapped height of `text`
    pub max_scroll: u16,
}

impl OutputState {
    /// Overwrites the whole text; never appends.
    pub fn replace(&mut self, text: String) {
        self.text = text;
        self.scroll = 0;
        self.max_scroll = 0;
    }

    pub fn scroll_down(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_add(amount).min(self.max_scroll);
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_sub(amount);
    }
}
