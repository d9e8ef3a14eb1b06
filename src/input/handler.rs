use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::game::Command;

/// What a key press asks the event loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Game(Command),
    Restart,
    Quit,
}

/// Maps a key event to an action. Releases and unbound keys map to nothing.
pub fn handle_input(key: KeyEvent) -> Option<InputAction> {
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {}
        KeyEventKind::Release => return None,
    }

    let action = match key.code {
        KeyCode::Left => InputAction::Game(Command::MoveLeft),
        KeyCode::Right => InputAction::Game(Command::MoveRight),
        KeyCode::Down => InputAction::Game(Command::SoftDrop),
        KeyCode::Up => InputAction::Game(Command::Rotate),
        KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
        _ => return None,
    };
    Some(action)
}
