use super::action::Action;
use super::state::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    // Action name -> key spec, e.g. `dispatch = "ctrl+enter"`
    pub custom: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    // Active regardless of focus
    pub global: HashMap<KeyEvent, Action>,
    // Only while the output box is focused; the query box takes raw text instead
    pub output_mode: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();
        let mut output_mode = HashMap::new();

        // --- Global ---
        global.insert(ctrl('s'), Action::Dispatch);
        global.insert(key(KeyCode::F(5)), Action::Dispatch);
        global.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT),
            Action::Dispatch,
        );
        global.insert(key(KeyCode::Tab), Action::ToggleFocus);
        global.insert(ctrl('t'), Action::CycleTheme);
        global.insert(ctrl('c'), Action::Quit);
        global.insert(ctrl('q'), Action::Quit);

        // --- Output Mode ---
        output_mode.insert(key(KeyCode::Char('j')), Action::ScrollOutputDown(1));
        output_mode.insert(key(KeyCode::Down), Action::ScrollOutputDown(1));
        output_mode.insert(key(KeyCode::Char('k')), Action::ScrollOutputUp(1));
        output_mode.insert(key(KeyCode::Up), Action::ScrollOutputUp(1));
        output_mode.insert(key(KeyCode::PageDown), Action::ScrollOutputDown(10));
        output_mode.insert(key(KeyCode::PageUp), Action::ScrollOutputUp(10));
        output_mode.insert(key(KeyCode::Esc), Action::FocusQuery);
        output_mode.insert(key(KeyCode::Char('q')), Action::Quit);

        if let Some(custom) = &config.custom {
            for (name, spec) in custom {
                let Some(action) = action_by_name(name) else {
                    tracing::warn!(%name, "unknown action in key config");
                    continue;
                };
                let Some(event) = parse_key_spec(spec) else {
                    tracing::warn!(%name, %spec, "unparseable key binding");
                    continue;
                };
                if matches!(action, Action::ScrollOutputUp(_) | Action::ScrollOutputDown(_)) {
                    output_mode.insert(event, action);
                } else {
                    global.insert(event, action);
                }
            }
        }

        Self {
            global,
            output_mode,
        }
    }

    pub fn get_action(&self, event: KeyEvent, focus: Focus) -> Option<Action> {
        if focus == Focus::Output {
            if let Some(action) = self.output_mode.get(&event) {
                return Some(action.clone());
            }
        }
        self.global.get(&event).cloned()
    }
}

fn action_by_name(name: &str) -> Option<Action> {
    match name {
        "dispatch" | "analyze" => Some(Action::Dispatch),
        "quit" => Some(Action::Quit),
        "focus" => Some(Action::ToggleFocus),
        "cycle_theme" => Some(Action::CycleTheme),
        "scroll_down" => Some(Action::ScrollOutputDown(1)),
        "scroll_up" => Some(Action::ScrollOutputUp(1)),
        _ => None,
    }
}

/// Parses bindings like `ctrl+s`, `alt+enter`, `f5` or `pagedown`.
pub fn parse_key_spec(spec: &str) -> Option<KeyEvent> {
    let spec = spec.trim().to_ascii_lowercase();
    let mut parts: Vec<&str> = spec.split('+').map(str::trim).collect();
    let key_part = parts.pop().filter(|k| !k.is_empty())?;

    let mut modifiers = KeyModifiers::empty();
    for part in parts {
        match part {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            _ => return None,
        }
    }

    let code = match key_part {
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        c => {
            let mut chars = c.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
