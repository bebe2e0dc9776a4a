use super::{
    action::Action,
    command::Command,
    state::{AppState, Focus},
};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- Input Capture ---
        Action::TextAreaInput(key) => {
            state.input.text_area.input(key);
        }
        Action::PasteText(text) => {
            state.focus = Focus::Query;
            state.input.text_area.insert_str(text.replace("\r\n", "\n"));
        }

        // --- UI ---
        Action::ToggleFocus => {
            state.focus = match state.focus {
                Focus::Query => Focus::Output,
                Focus::Output => Focus::Query,
            };
        }
        Action::FocusQuery => {
            state.focus = Focus::Query;
        }
        Action::FocusOutput => {
            state.focus = Focus::Output;
        }
        Action::ScrollOutputDown(amount) => {
            state.output.scroll_down(amount);
        }
        Action::ScrollOutputUp(amount) => {
            state.output.scroll_up(amount);
        }
        Action::CycleTheme => {
            state.cycle_theme();
        }

        // --- Dispatch ---
        Action::Dispatch => {
            let id = state.begin_dispatch();
            return Some(Command::Dispatch {
                id,
                query: state.input.query_text(),
            });
        }

        // --- Async Results ---
        Action::DispatchCompleted { id, text } => {
            state.complete_dispatch(id, text);
        }

        Action::Quit => {
            state.should_quit = true;
        }
        Action::Resize(..) => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_str(state: &mut AppState, s: &str) {
        for c in s.chars() {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            update(state, Action::TextAreaInput(key));
        }
    }

    #[test]
    fn test_typing_updates_query_immediately() {
        let mut state = AppState::default();
        type_str(&mut state, "sales by region");
        assert_eq!(state.input.query_text(), "sales by region");
        assert_eq!(state.display_text(), "");
    }

    #[test]
    fn test_dispatch_packages_current_query() {
        let mut state = AppState::default();
        type_str(&mut state, "q1");

        let cmd = update(&mut state, Action::Dispatch);
        assert_eq!(
            cmd,
            Some(Command::Dispatch {
                id: 1,
                query: "q1".to_string()
            })
        );
        assert_eq!(state.in_flight, 1);
        // Query is never cleared automatically
        assert_eq!(state.input.query_text(), "q1");
    }

    #[test]
    fn test_empty_query_is_still_dispatched() {
        let mut state = AppState::default();
        let cmd = update(&mut state, Action::Dispatch);
        assert_eq!(
            cmd,
            Some(Command::Dispatch {
                id: 1,
                query: String::new()
            })
        );
    }

    #[test]
    fn test_completion_overwrites_display_text() {
        let mut state = AppState::default();
        update(&mut state, Action::Dispatch);
        update(
            &mut state,
            Action::DispatchCompleted {
                id: 1,
                text: "first".to_string(),
            },
        );
        assert_eq!(state.display_text(), "first");
        assert_eq!(state.in_flight, 0);
        assert!(state.last_completed_at.is_some());

        update(&mut state, Action::Dispatch);
        update(
            &mut state,
            Action::DispatchCompleted {
                id: 2,
                text: "second".to_string(),
            },
        );
        assert_eq!(state.display_text(), "second");
    }

    #[test]
    fn test_last_arrival_wins_without_fencing() {
        let mut state = AppState::default();
        update(&mut state, Action::Dispatch);
        update(&mut state, Action::Dispatch);
        assert_eq!(state.in_flight, 2);

        // Newer response lands first, older one after it
        update(
            &mut state,
            Action::DispatchCompleted {
                id: 2,
                text: "newer".to_string(),
            },
        );
        update(
            &mut state,
            Action::DispatchCompleted {
                id: 1,
                text: "older".to_string(),
            },
        );
        assert_eq!(state.display_text(), "older");
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_fencing_drops_stale_responses() {
        let mut state = AppState {
            fence_stale_responses: true,
            ..Default::default()
        };
        update(&mut state, Action::Dispatch);
        update(&mut state, Action::Dispatch);

        update(
            &mut state,
            Action::DispatchCompleted {
                id: 2,
                text: "newer".to_string(),
            },
        );
        update(
            &mut state,
            Action::DispatchCompleted {
                id: 1,
                text: "older".to_string(),
            },
        );
        assert_eq!(state.display_text(), "newer");
        assert_eq!(state.shown_dispatch_id, Some(2));
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_scroll_output() {
        let mut state = AppState::default();
        state.output.max_scroll = 12;

        update(&mut state, Action::ScrollOutputDown(10));
        assert_eq!(state.output.scroll, 10);

        update(&mut state, Action::ScrollOutputDown(10));
        assert_eq!(state.output.scroll, 12);

        update(&mut state, Action::ScrollOutputUp(5));
        assert_eq!(state.output.scroll, 7);

        update(&mut state, Action::ScrollOutputUp(50));
        assert_eq!(state.output.scroll, 0);
    }

    #[test]
    fn test_new_output_resets_scroll() {
        let mut state = AppState::default();
        state.output.max_scroll = 5;
        update(&mut state, Action::ScrollOutputDown(3));
        update(
            &mut state,
            Action::DispatchCompleted {
                id: 1,
                text: "fresh".to_string(),
            },
        );
        assert_eq!(state.output.scroll, 0);
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let mut state = AppState {
            focus: Focus::Output,
            ..Default::default()
        };
        update(&mut state, Action::PasteText("a\r\nb".to_string()));
        assert_eq!(state.input.query_text(), "a\nb");
        assert_eq!(state.focus, Focus::Query);
    }

    #[test]
    fn test_focus_and_theme() {
        let mut state = AppState::default();
        update(&mut state, Action::ToggleFocus);
        assert_eq!(state.focus, Focus::Output);
        update(&mut state, Action::FocusQuery);
        assert_eq!(state.focus, Focus::Query);

        let before = state.palette_type;
        update(&mut state, Action::CycleTheme);
        assert_ne!(state.palette_type, before);
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Action::Quit), None);
        assert!(state.should_quit);
    }
}
