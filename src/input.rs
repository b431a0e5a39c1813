use macroquad::input::{KeyCode, get_keys_pressed};

use crate::game::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    /// Start, pause, resume or restart depending on the session state.
    Action,
}

pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Command::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::S => Some(Command::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::A => Some(Command::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::D => Some(Command::Turn(Direction::Right)),
        KeyCode::Space => Some(Command::Action),
        _ => None,
    }
}

/// Drains every key pressed since the last frame.
pub fn poll_commands() -> Vec<Command> {
    get_keys_pressed()
        .into_iter()
        .filter_map(command_for_key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_agree() {
        let pairs = [
            (KeyCode::Up, KeyCode::W),
            (KeyCode::Down, KeyCode::S),
            (KeyCode::Left, KeyCode::A),
            (KeyCode::Right, KeyCode::D),
        ];
        for (arrow, letter) in pairs {
            assert!(command_for_key(arrow).is_some());
            assert_eq!(command_for_key(arrow), command_for_key(letter));
        }
    }

    #[test]
    fn space_is_action() {
        assert_eq!(command_for_key(KeyCode::Space), Some(Command::Action));
    }

    #[test]
    fn other_keys_ignored() {
        for key in [KeyCode::Q, KeyCode::Escape, KeyCode::Enter, KeyCode::LeftShift] {
            assert_eq!(command_for_key(key), None);
        }
    }
}
