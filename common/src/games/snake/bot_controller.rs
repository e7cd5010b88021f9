use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::game_state::{SnakeGameState, check_collision};
use super::types::{Direction, GameMode, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnakeBotType {
    Efficient,
    Random,
}

impl fmt::Display for SnakeBotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeBotType::Efficient => write!(f, "efficient"),
            SnakeBotType::Random => write!(f, "random"),
        }
    }
}

impl FromStr for SnakeBotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "efficient" => Ok(SnakeBotType::Efficient),
            "random" => Ok(SnakeBotType::Random),
            other => Err(format!("Unknown bot type '{}', expected 'efficient' or 'random'", other)),
        }
    }
}

pub struct BotController;

impl BotController {
    pub fn calculate_move(
        bot_type: SnakeBotType,
        state: &SnakeGameState,
        rng: &mut SessionRng,
    ) -> Option<Direction> {
        if !state.is_running() {
            return None;
        }

        match bot_type {
            SnakeBotType::Efficient => Some(Self::efficient_pathfinding(state, rng)),
            SnakeBotType::Random => Some(Self::random_valid_move(state, rng)),
        }
    }

    fn efficient_pathfinding(state: &SnakeGameState, rng: &mut SessionRng) -> Direction {
        let head = state.head();

        let best = Self::safe_directions(state)
            .into_iter()
            .filter_map(|dir| {
                Self::calculate_next_position(head, dir, state)
                    .map(|pos| (dir, Self::manhattan_distance(pos, state.food, state)))
            })
            .min_by_key(|(_, distance)| *distance);

        match best {
            Some((dir, _)) => dir,
            None => Self::random_valid_move(state, rng),
        }
    }

    fn random_valid_move(state: &SnakeGameState, rng: &mut SessionRng) -> Direction {
        let safe = Self::safe_directions(state);
        rng.pick(&safe).copied().unwrap_or(state.direction)
    }

    fn safe_directions(state: &SnakeGameState) -> Vec<Direction> {
        let head = state.head();
        Direction::ALL
            .into_iter()
            .filter(|d| Direction::is_valid_change(state.direction, *d))
            .filter(|&d| {
                Self::calculate_next_position(head, d, state)
                    .is_some_and(|pos| Self::is_safe_position(pos, state))
            })
            .collect()
    }

    fn manhattan_distance(a: Point, b: Point, state: &SnakeGameState) -> i32 {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();

        match state.mode {
            GameMode::Walls => dx + dy,
            GameMode::Passthrough => {
                let size = state.grid_size as i32;
                dx.min(size - dx) + dy.min(size - dy)
            }
        }
    }

    fn calculate_next_position(from: Point, direction: Direction, state: &SnakeGameState) -> Option<Point> {
        let stepped = from.step(direction);
        match state.mode {
            GameMode::Passthrough => Some(stepped.wrapped(state.grid_size)),
            GameMode::Walls => stepped.is_inside(state.grid_size).then_some(stepped),
        }
    }

    fn is_safe_position(pos: Point, state: &SnakeGameState) -> bool {
        let body_without_tail = state.snake.iter().take(state.len().saturating_sub(1));
        !check_collision(pos, body_without_tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::INITIAL_SPEED;

    fn create_state(snake: &[(i32, i32)], food: (i32, i32), direction: Direction, mode: GameMode) -> SnakeGameState {
        SnakeGameState {
            snake: snake.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            food: Point::new(food.0, food.1),
            direction,
            next_direction: direction,
            score: 0,
            is_game_over: false,
            is_paused: false,
            mode,
            grid_size: 10,
            speed: INITIAL_SPEED,
        }
    }

    #[test]
    fn test_efficient_heads_towards_food() {
        let mut rng = SessionRng::new(1);
        let state = create_state(&[(5, 5), (4, 5), (3, 5)], (5, 1), Direction::Right, GameMode::Walls);
        assert_eq!(
            BotController::calculate_move(SnakeBotType::Efficient, &state, &mut rng),
            Some(Direction::Up)
        );
    }

    #[test]
    fn test_efficient_uses_wrap_distance() {
        let mut rng = SessionRng::new(2);
        let state = create_state(&[(1, 5), (1, 6), (1, 7)], (8, 5), Direction::Up, GameMode::Passthrough);
        assert_eq!(
            BotController::calculate_move(SnakeBotType::Efficient, &state, &mut rng),
            Some(Direction::Left)
        );
    }

    #[test]
    fn test_never_reverses() {
        let mut rng = SessionRng::new(3);
        let state = create_state(&[(5, 5), (4, 5), (3, 5)], (0, 5), Direction::Right, GameMode::Walls);
        for _ in 0..50 {
            let dir = BotController::calculate_move(SnakeBotType::Random, &state, &mut rng).unwrap();
            assert_ne!(dir, Direction::Left);
            let dir = BotController::calculate_move(SnakeBotType::Efficient, &state, &mut rng).unwrap();
            assert_ne!(dir, Direction::Left);
        }
    }

    #[test]
    fn test_avoids_walls() {
        let mut rng = SessionRng::new(4);
        let state = create_state(&[(9, 0), (8, 0), (7, 0)], (9, 9), Direction::Right, GameMode::Walls);
        for _ in 0..20 {
            assert_eq!(
                BotController::calculate_move(SnakeBotType::Random, &state, &mut rng),
                Some(Direction::Down)
            );
        }
    }

    #[test]
    fn test_no_move_when_paused() {
        let mut rng = SessionRng::new(5);
        let state = create_state(&[(5, 5), (4, 5), (3, 5)], (0, 0), Direction::Right, GameMode::Walls).toggle_pause();
        assert_eq!(BotController::calculate_move(SnakeBotType::Efficient, &state, &mut rng), None);
    }

    #[test]
    fn test_bot_type_parse() {
        assert_eq!("Efficient".parse::<SnakeBotType>(), Ok(SnakeBotType::Efficient));
        assert_eq!("random".parse::<SnakeBotType>(), Ok(SnakeBotType::Random));
        assert!("smart".parse::<SnakeBotType>().is_err());
    }
}
