use super::types::Direction;

/// Arrow keys (browser `KeyboardEvent.key` names) and WASD in either case.
pub fn direction_from_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

/// Space and Escape toggle pause.
pub fn is_pause_key(key: &str) -> bool {
    matches!(key, " " | "Escape")
}
