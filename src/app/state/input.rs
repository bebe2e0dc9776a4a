use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

pub const QUERY_PLACEHOLDER: &str = "Type your question here...";

pub struct AppTextArea<'a>(pub TextArea<'a>);

impl AppTextArea<'_> {
    /// Builds a text area holding exactly `text`. Splitting on `\n` alone
    /// keeps `\r` and trailing newlines intact so the round trip is lossless.
    pub fn from_text(text: &str) -> Self {
        let mut area = TextArea::new(text.split('\n').map(str::to_string).collect());
        area.set_placeholder_text(QUERY_PLACEHOLDER);
        Self(area)
    }

    pub fn text(&self) -> String {
        self.0.lines().join("\n")
    }
}

impl Default for AppTextArea<'_> {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = Self::from_text(&self.text());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        area
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

/// Owns the QueryText.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputState<'a> {
    pub text_area: AppTextArea<'a>,
}

impl InputState<'_> {
    pub fn query_text(&self) -> String {
        self.text_area.text()
    }

    /// Replaces the whole query unconditionally; the cursor lands at the end.
    pub fn set_query_text(&mut self, text: &str) {
        self.text_area = AppTextArea::from_text(text);
        self.text_area.move_cursor(CursorMove::Bottom);
        self.text_area.move_cursor(CursorMove::End);
    }

    pub fn line_count(&self) -> usize {
        self.text_area.lines().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_set_query_text_round_trips() {
        let mut input = InputState::default();
        for s in [
            "",
            "hello",
            "two\nlines",
            "trailing newline\n",
            "\n\nleading",
            "crlf\r\nkept",
            "unicode ✓ ünïcödé",
            "  padded  ",
        ] {
            input.set_query_text(s);
            assert_eq!(input.query_text(), s);
        }
    }

    #[test]
    fn test_keystrokes_are_captured() {
        let mut input = InputState::default();
        for c in "hi there".chars() {
            input
                .text_area
                .input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        input
            .text_area
            .input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        input
            .text_area
            .input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));

        assert_eq!(input.query_text(), "hi there\nx");
        assert_eq!(input.line_count(), 2);
    }

    #[test]
    fn test_set_query_text_moves_cursor_to_end() {
        let mut input = InputState::default();
        input.set_query_text("ab\ncd");
        assert_eq!(input.text_area.cursor(), (1, 2));

        input
            .text_area
            .input(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE));
        assert_eq!(input.query_text(), "ab\ncde");
    }

    #[test]
    fn test_clone_preserves_text_and_cursor() {
        let mut input = InputState::default();
        input.set_query_text("one\ntwo");
        let cloned = input.clone();
        assert_eq!(cloned, input);
        assert_eq!(cloned.query_text(), "one\ntwo");
    }
}
