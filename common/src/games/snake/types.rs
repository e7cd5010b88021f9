use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Unit step in `direction`; may leave the grid.
    pub fn step(&self, direction: Direction) -> Point {
        let (dx, dy) = direction.delta();
        Point::new(self.x + dx, self.y + dy)
    }

    /// Euclidean wrap onto a `grid_size` x `grid_size` torus.
    pub fn wrapped(&self, grid_size: u32) -> Point {
        let size = grid_size as i32;
        Point::new(self.x.rem_euclid(size), self.y.rem_euclid(size))
    }

    pub fn is_inside(&self, grid_size: u32) -> bool {
        let size = grid_size as i32;
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }

    /// Any change except a 180 degree reversal; keeping the same direction is valid.
    pub fn is_valid_change(current: Direction, next: Direction) -> bool {
        next != current.opposite()
    }

    /// Screen coordinates: y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Passthrough,
    Walls,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Passthrough => "passthrough",
            GameMode::Walls => "walls",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameMode::Passthrough => "Pass-Through Mode",
            GameMode::Walls => "Walls Mode",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passthrough" => Ok(GameMode::Passthrough),
            "walls" => Ok(GameMode::Walls),
            other => Err(format!("Unknown game mode '{}', expected 'passthrough' or 'walls'", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Paused,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn test_reversal_is_invalid() {
        for direction in Direction::ALL {
            assert!(!Direction::is_valid_change(direction, direction.opposite()));
            assert!(Direction::is_valid_change(direction, direction));
        }
    }

    #[test]
    fn test_quarter_turns_are_valid() {
        assert!(Direction::is_valid_change(Direction::Up, Direction::Left));
        assert!(Direction::is_valid_change(Direction::Up, Direction::Right));
        assert!(Direction::is_valid_change(Direction::Down, Direction::Left));
        assert!(Direction::is_valid_change(Direction::Down, Direction::Right));
        assert!(Direction::is_valid_change(Direction::Left, Direction::Up));
        assert!(Direction::is_valid_change(Direction::Left, Direction::Down));
        assert!(Direction::is_valid_change(Direction::Right, Direction::Up));
        assert!(Direction::is_valid_change(Direction::Right, Direction::Down));
    }

    #[test]
    fn test_wrapped_handles_negative_coordinates() {
        assert_eq!(Point::new(-1, 5).wrapped(20), Point::new(19, 5));
        assert_eq!(Point::new(3, -1).wrapped(20), Point::new(3, 19));
        assert_eq!(Point::new(20, 20).wrapped(20), Point::new(0, 0));
    }

    #[test]
    fn test_is_inside() {
        assert!(Point::new(0, 0).is_inside(10));
        assert!(Point::new(9, 9).is_inside(10));
        assert!(!Point::new(10, 0).is_inside(10));
        assert!(!Point::new(0, -1).is_inside(10));
    }

    #[test]
    fn test_game_mode_parse() {
        assert_eq!("walls".parse::<GameMode>(), Ok(GameMode::Walls));
        assert_eq!("Passthrough".parse::<GameMode>(), Ok(GameMode::Passthrough));
        assert!("portal".parse::<GameMode>().is_err());
        assert_eq!(GameMode::Walls.to_string(), "walls");
    }
}
