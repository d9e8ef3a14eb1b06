use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use blockfall::game::Command;
use blockfall::input::{handle_input, InputAction};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_arrows_map_to_game_commands() {
    assert_eq!(handle_input(press(KeyCode::Left)), Some(InputAction::Game(Command::MoveLeft)));
    assert_eq!(handle_input(press(KeyCode::Right)), Some(InputAction::Game(Command::MoveRight)));
    assert_eq!(handle_input(press(KeyCode::Down)), Some(InputAction::Game(Command::SoftDrop)));
    assert_eq!(handle_input(press(KeyCode::Up)), Some(InputAction::Game(Command::Rotate)));
}

#[test]
fn test_session_keys() {
    assert_eq!(handle_input(press(KeyCode::Char('q'))), Some(InputAction::Quit));
    assert_eq!(handle_input(press(KeyCode::Esc)), Some(InputAction::Quit));
    assert_eq!(handle_input(press(KeyCode::Char('R'))), Some(InputAction::Restart));
}

#[test]
fn test_releases_and_unbound_keys_are_ignored() {
    let release = KeyEvent {
        code: KeyCode::Left,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(handle_input(release), None);
    assert_eq!(handle_input(press(KeyCode::Char('x'))), None);
}
