use crate::app::{action::Action, state::AppState, state::Focus, ui};
use crate::components::button::button_area;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            if let Some(action) = app_state.keymap.get_action(key, app_state.focus) {
                return Some(action);
            }
            match app_state.focus {
                Focus::Query => Some(Action::TextAreaInput(key)),
                Focus::Output => None,
            }
        }
        Event::Paste(text) => Some(Action::PasteText(text)),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Mouse(mouse) => {
            let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
            let layout = ui::get_layout(area, app_state);
            let (column, row) = (mouse.column, mouse.row);

            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if contains(button_area(layout.button), column, row) {
                        Some(Action::Dispatch)
                    } else if contains(layout.query, column, row) {
                        Some(Action::FocusQuery)
                    } else if contains(layout.output, column, row) {
                        Some(Action::FocusOutput)
                    } else {
                        None
                    }
                }
                MouseEventKind::ScrollDown if contains(layout.output, column, row) => {
                    Some(Action::ScrollOutputDown(3))
                }
                MouseEventKind::ScrollUp if contains(layout.output, column, row) => {
                    Some(Action::ScrollOutputUp(3))
                }
                _ => None,
            }
        }
        _ => None,
    }
}
