use crate::app::state::AppTextArea;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

pub const QUERY_TITLE: &str = "Enter your query";

pub struct QueryBox<'a> {
    pub theme: &'a Theme,
    pub text_area: &'a AppTextArea<'a>,
    pub focused: bool,
}

impl Widget for QueryBox<'_> {
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
                Span::styled(QUERY_TITLE, title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let inner_area = block.inner(area);
        block.render(area, buf);

        if inner_area.width > 0 && inner_area.height > 0 {
            Widget::render(self.text_area, inner_area, buf);
        }
    }
}
