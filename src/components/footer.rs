use crate::app::state::{AppState, Focus};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

pub fn get_items(focus: Focus) -> Vec<FooterItem> {
    let mut items = vec![FooterItem {
        key: "^S",
        desc: "analyze",
    }];
    match focus {
        Focus::Query => items.push(FooterItem {
            key: "Tab",
            desc: "output",
        }),
        Focus::Output => {
            items.push(FooterItem {
                key: "j/k",
                desc: "scroll",
            });
            items.push(FooterItem {
                key: "Esc",
                desc: "query",
            });
        }
    }
    items.push(FooterItem {
        key: "^T",
        desc: "theme",
    });
    items.push(FooterItem {
        key: "^C",
        desc: "quit",
    });
    items
}

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Completion time only, no in-flight indicator
        let status_span = match &state.last_completed_at {
            Some(at) => Span::styled(
                format!("  LAST RESPONSE {}  ", at.format("%H:%M:%S")),
                theme.status_info,
            ),
            None => Span::styled("  READY  ", theme.status_ready),
        };

        let mut spans = vec![status_span, Span::raw(" ")];
        let available_width = area.width.saturating_sub(4) as usize;
        let mut current_width: usize = spans.iter().map(Span::width).sum();

        for item in get_items(state.focus) {
            let key_str = format!(" {} ", item.key);
            let desc_str = format!(" {} ", item.desc);

            let item_width = key_str.len() + desc_str.len();
            if current_width + item_width + 1 > available_width {
                break;
            }

            spans.push(Span::styled(key_str, theme.footer_segment_key));
            spans.push(Span::styled(desc_str, theme.footer_segment_val));
            spans.push(Span::raw(" "));
            current_width += item_width + 1;
        }

        let theme_label = format!(" {} ", state.palette_type.label());
        if current_width + theme_label.len() + 2 <= available_width {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(theme_label, theme.footer));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
