use crate::app::state::{AppState, Focus};
use crate::components::button::AnalyzeButton;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::output_box::{wrapped_rows, OutputBox};
use crate::components::query_box::QueryBox;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    Frame,
};

// Both boxes start at three text rows
pub const MIN_BOX_ROWS: u16 = 3;
const BORDER_ROWS: u16 = 2;

/// Rows a box shows for `content_rows` lines of text, capped at `max_rows`.
pub fn fit_rows(content_rows: usize, max_rows: u16) -> u16 {
    let wanted = u16::try_from(content_rows)
        .unwrap_or(u16::MAX)
        .max(MIN_BOX_ROWS);
    wanted.min(max_rows)
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppLayout {
    pub header: Rect,
    pub query: Rect,
    pub button: Rect,
    pub output: Rect,
    pub footer: Rect,
}

/// Sizes both boxes to their content: the query box may take up to half of
/// the body, the output box whatever is left after it.
pub fn get_layout(area: Rect, state: &AppState) -> AppLayout {
    let body = area.height.saturating_sub(3); // header + button + footer
    let inner_width = area.width.saturating_sub(BORDER_ROWS);

    let query_cap = (body / 2).saturating_sub(BORDER_ROWS);
    let query_height = (fit_rows(state.input.line_count(), query_cap) + BORDER_ROWS).min(body);

    let output_cap = body
        .saturating_sub(query_height)
        .saturating_sub(BORDER_ROWS);
    let output_content = wrapped_rows(&state.output.text, inner_width);
    let output_height =
        (fit_rows(output_content, output_cap) + BORDER_ROWS).min(body.saturating_sub(query_height));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Header
            Constraint::Length(query_height),  // Query
            Constraint::Length(1),             // Button
            Constraint::Length(output_height), // Output
            Constraint::Min(0),                // Slack
            Constraint::Length(1),             // Footer
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        query: chunks[1],
        button: chunks[2],
        output: chunks[3],
        footer: chunks[5],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area(), app_state);
    let focused_query = app_state.focus == Focus::Query;

    // --- Header ---
    f.render_widget(
        Header {
            endpoint: &app_state.endpoint,
            theme: &app_state.theme,
        },
        layout.header,
    );

    // --- Query ---
    {
        let theme = &app_state.theme;
        let text_area = &mut app_state.input.text_area;
        text_area.set_style(theme.text);
        text_area.set_placeholder_style(theme.placeholder);
        if focused_query {
            text_area.set_cursor_style(theme.cursor);
            text_area.set_cursor_line_style(theme.cursor_line);
        } else {
            text_area.set_cursor_style(Style::default());
            text_area.set_cursor_line_style(Style::default());
        }
    }
    f.render_widget(
        QueryBox {
            theme: &app_state.theme,
            text_area: &app_state.input.text_area,
            focused: focused_query,
        },
        layout.query,
    );

    // --- Button ---
    f.render_widget(
        AnalyzeButton {
            theme: &app_state.theme,
            highlighted: focused_query,
        },
        layout.button,
    );

    // --- Output ---
    let inner_height = layout.output.height.saturating_sub(BORDER_ROWS);
    let inner_width = layout.output.width.saturating_sub(BORDER_ROWS);
    let content_rows = wrapped_rows(&app_state.output.text, inner_width);
    let max_scroll = u16::try_from(content_rows.saturating_sub(inner_height as usize))
        .unwrap_or(u16::MAX);
    app_state.output.max_scroll = max_scroll;
    app_state.output.scroll = app_state.output.scroll.min(max_scroll);

    f.render_widget(
        OutputBox {
            theme: &app_state.theme,
            text: &app_state.output.text,
            scroll: app_state.output.scroll,
            focused: !focused_query,
        },
        layout.output,
    );

    // --- Footer ---
    f.render_widget(
        Footer {
            state: &*app_state,
            theme: &app_state.theme,
        },
        layout.footer,
    );
}
