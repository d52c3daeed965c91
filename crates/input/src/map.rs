//! Mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::swipe::SwipeTracker;
use crate::types::{Direction, GameAction};

/// Map keyboard input to game actions.
///
/// Unmapped keys return `None` and are never dispatched.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    let direction = match key.code {
        KeyCode::Up => Direction::Up,
        KeyCode::Down => Direction::Down,
        KeyCode::Left => Direction::Left,
        KeyCode::Right => Direction::Right,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'k' | 'w' => Direction::Up,
            'j' | 's' => Direction::Down,
            'h' | 'a' => Direction::Left,
            'l' | 'd' => Direction::Right,
            'r' => return Some(GameAction::Restart),
            _ => return None,
        },
        _ => return None,
    };
    Some(GameAction::Move(direction))
}

/// Feed a mouse event into `tracker`, returning a move when a left-button
/// drag completes as a swipe.
pub fn handle_mouse_event(tracker: &mut SwipeTracker, event: MouseEvent) -> Option<GameAction> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            tracker.start(event.column, event.row);
            None
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            tracker.update(event.column, event.row);
            None
        }
        MouseEventKind::Up(MouseButton::Left) => {
            tracker.update(event.column, event.row);
            tracker.end().map(GameAction::Move)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
