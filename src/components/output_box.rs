use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

pub const OUTPUT_TITLE: &str = "Output";

/// Wrapped height of `text` at `width` columns.
pub fn wrapped_rows(text: &str, width: u16) -> usize {
    if width == 0 {
        return 0;
    }
    Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .line_count(width)
}

pub struct OutputBox<'a> {
    pub theme: &'a Theme,
    pub text: &'a str,
    pub scroll: u16,
    pub focused: bool,
}

impl Widget for OutputBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.title_active)
        } else {
            (self.theme.border, self.theme.title)
        };

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(OUTPUT_TITLE, title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        // Read-only: no cursor, just wrapped text
        Paragraph::new(self.text)
            .style(self.theme.text)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(block)
            .render(area, buf);
    }
}
