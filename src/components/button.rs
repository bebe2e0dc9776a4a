use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Paragraph, Widget},
};

pub const BUTTON_LABEL: &str = "[ Analyze ]";

/// Where the button sits inside its row; shared with mouse hit-testing.
pub fn button_area(row: Rect) -> Rect {
    let width = (BUTTON_LABEL.len() as u16).min(row.width.saturating_sub(1));
    Rect {
        x: row.x + 1.min(row.width),
        y: row.y,
        width,
        height: row.height.min(1),
    }
}

pub struct AnalyzeButton<'a> {
    pub theme: &'a Theme,
    pub highlighted: bool,
}

impl Widget for AnalyzeButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let target = button_area(area);
        if target.width == 0 || target.height == 0 {
            return;
        }

        let style = if self.highlighted {
            self.theme.button_focus
        } else {
            self.theme.button
        };
        Paragraph::new(Span::styled(BUTTON_LABEL, style)).render(target, buf);
    }
}
