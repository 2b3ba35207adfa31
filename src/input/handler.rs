use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::RawInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the direction controller; the key layout decides what it means
    Steer(RawInput),
    Start,
    TogglePause,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up => KeyAction::Steer(RawInput::ArrowUp),
            KeyCode::Down => KeyAction::Steer(RawInput::ArrowDown),
            KeyCode::Left => KeyAction::Steer(RawInput::ArrowLeft),
            KeyCode::Right => KeyAction::Steer(RawInput::ArrowRight),

            // Controls
            KeyCode::Char(' ') | KeyCode::Enter => KeyAction::Start,
            KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::TogglePause,
            KeyCode::Esc => KeyAction::Quit,

            // Letters, both cases; WASD vs ZQSD is decided later
            KeyCode::Char(c) if c.is_ascii_alphabetic() => KeyAction::Steer(RawInput::Char(c)),

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
