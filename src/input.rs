use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::snake::Direction::{self, *};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    Turn(Direction),
    Quit,
}

pub fn map_key(ev: &KeyEvent) -> Option<KeyCommand> {
    if ev.kind != KeyEventKind::Press {
        return None;
    }
    if is_ctrl_c(ev) {
        return Some(KeyCommand::Quit);
    }

    let dir = match ev.code {
        KeyCode::Char('w') | KeyCode::Char('k') | KeyCode::Up => Up,
        KeyCode::Char('a') | KeyCode::Char('h') | KeyCode::Left => Left,
        KeyCode::Char('s') | KeyCode::Char('j') | KeyCode::Down => Down,
        KeyCode::Char('d') | KeyCode::Char('l') | KeyCode::Right => Right,
        _ => return None,
    };
    Some(KeyCommand::Turn(dir))
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers, .. } if modifiers.contains(KeyModifiers::CONTROL))
}
