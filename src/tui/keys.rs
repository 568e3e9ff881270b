//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Update(Action),
    Copy,
    Quit,
}

/// Map a key press to a widget command.
pub fn command(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    let cmd = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
        KeyCode::Char('c') => Command::Copy,
        KeyCode::Left | KeyCode::Char('-') => Command::Update(Action::DecreaseLength),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            Command::Update(Action::IncreaseLength)
        }
        KeyCode::Home => Command::Update(Action::SetLength(usize::MIN)),
        KeyCode::End => Command::Update(Action::SetLength(usize::MAX)),
        KeyCode::Char('l') => Command::Update(Action::ToggleLetters),
        KeyCode::Char('n') => Command::Update(Action::ToggleNumbers),
        KeyCode::Char('s') => Command::Update(Action::ToggleSymbols),
        KeyCode::Enter | KeyCode::Char('g') | KeyCode::Char('r') => {
            Command::Update(Action::Regenerate)
        }
        KeyCode::Char('t') => Command::Update(Action::ToggleTheme),
        _ => return None,
    };
    Some(cmd)
}
