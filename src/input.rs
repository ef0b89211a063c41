//! Key bindings for the terminal front end.

use crate::game::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the terminal loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Forward to the match.
    Game(Action),
    /// Leave the program.
    Quit,
    /// Key releases and repeats on terminals that report them.
    Ignore,
}

pub fn map_key(key: KeyEvent) -> KeyCommand {
    if key.kind != KeyEventKind::Press {
        return KeyCommand::Ignore;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyCommand::Quit;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => KeyCommand::Game(Action::Flap),
        KeyCode::Char('r') | KeyCode::Char('R') => KeyCommand::Game(Action::Restart),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
        _ => KeyCommand::Game(Action::Other),
    }
}
