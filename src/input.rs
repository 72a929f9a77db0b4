use crate::game::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputIntent {
    Move(Direction),
    Restart,
}

/// Maps a key name (browser `KeyboardEvent.key` style) to a game intent.
pub fn map_key(key: &str) -> Option<InputIntent> {
    match key {
        "ArrowUp" | "w" | "W" => Some(InputIntent::Move(Direction::Up)),
        "ArrowDown" | "s" | "S" => Some(InputIntent::Move(Direction::Down)),
        "ArrowLeft" | "a" | "A" => Some(InputIntent::Move(Direction::Left)),
        "ArrowRight" | "d" | "D" => Some(InputIntent::Move(Direction::Right)),
        "Enter" | " " => Some(InputIntent::Restart),
        _ => None,
    }
}
