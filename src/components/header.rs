use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const APP_TITLE: &str = "DATA ANALYST AGENT";

pub struct Header<'a> {
    pub endpoint: &'a str,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans = vec![
            Span::styled(format!(" {APP_TITLE} "), self.theme.header_logo),
            Span::raw(" "),
            Span::styled(format!(" POST {} ", self.endpoint), self.theme.header_item),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
