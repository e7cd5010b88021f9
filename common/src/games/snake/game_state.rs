use std::collections::VecDeque;

use crate::games::SessionRng;
use super::food::generate_food;
use super::types::{Direction, GameMode, GamePhase, Point};

pub const INITIAL_SNAKE_LENGTH: usize = 3;
/// Tick interval in milliseconds.
pub const INITIAL_SPEED: u32 = 150;
pub const SPEED_INCREMENT: u32 = 5;
pub const MIN_SPEED: u32 = 50;
pub const FOOD_SCORE: u32 = 10;

/// One snapshot of a single-player game. Every transition returns a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeGameState {
    /// Head first, tail last.
    pub snake: VecDeque<Point>,
    pub food: Point,
    pub direction: Direction,
    pub next_direction: Direction,
    pub score: u32,
    pub is_game_over: bool,
    pub is_paused: bool,
    pub mode: GameMode,
    pub grid_size: u32,
    pub speed: u32,
}

impl SnakeGameState {
    /// Snake of `INITIAL_SNAKE_LENGTH` with its head on the center cell, body extending left.
    pub fn create_initial_state(grid_size: u32, mode: GameMode, rng: &mut SessionRng) -> Self {
        let center = (grid_size / 2) as i32;

        let snake: VecDeque<Point> = (0..INITIAL_SNAKE_LENGTH as i32)
            .map(|i| Point::new(center - i, center))
            .collect();
        let food = generate_food(&snake, grid_size, rng);

        Self {
            snake,
            food,
            direction: Direction::Right,
            next_direction: Direction::Right,
            score: 0,
            is_game_over: false,
            is_paused: false,
            mode,
            grid_size,
            speed: INITIAL_SPEED,
        }
    }

    pub fn head(&self) -> Point {
        *self.snake.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.snake.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn is_running(&self) -> bool {
        !self.is_game_over && !self.is_paused
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_game_over {
            GamePhase::GameOver
        } else if self.is_paused {
            GamePhase::Paused
        } else {
            GamePhase::Running
        }
    }

    /// Advances one tick. Paused and finished games come back unchanged.
    pub fn move_snake(&self, rng: &mut SessionRng) -> Self {
        if !self.is_running() {
            return self.clone();
        }

        let direction = self.next_direction;
        let stepped = self.head().step(direction);

        let new_head = match self.mode {
            GameMode::Passthrough => stepped.wrapped(self.grid_size),
            GameMode::Walls => {
                if !stepped.is_inside(self.grid_size) {
                    return self.finished(direction);
                }
                stepped
            }
        };

        // The tail cell is vacated this tick, so the head may enter it.
        let body_without_tail = self.snake.iter().take(self.snake.len().saturating_sub(1));
        if check_collision(new_head, body_without_tail) {
            return self.finished(direction);
        }

        let mut snake = self.snake.clone();
        snake.push_front(new_head);

        let mut next = Self {
            direction,
            ..self.clone()
        };

        if new_head == self.food {
            next.score += FOOD_SCORE;
            next.food = generate_food(&snake, self.grid_size, rng);
            next.speed = self.speed.saturating_sub(SPEED_INCREMENT).max(MIN_SPEED);
        } else {
            snake.pop_back();
        }
        next.snake = snake;

        next
    }

    /// Queues `direction` for the next tick. Reversals are judged against the
    /// applied direction, so two quick presses cannot turn the snake around.
    pub fn set_direction(&self, direction: Direction) -> Self {
        if !self.is_running() || !Direction::is_valid_change(self.direction, direction) {
            return self.clone();
        }

        Self {
            next_direction: direction,
            ..self.clone()
        }
    }

    pub fn toggle_pause(&self) -> Self {
        if self.is_game_over {
            return self.clone();
        }

        Self {
            is_paused: !self.is_paused,
            ..self.clone()
        }
    }

    pub fn reset_game(&self, rng: &mut SessionRng) -> Self {
        Self::create_initial_state(self.grid_size, self.mode, rng)
    }

    fn finished(&self, direction: Direction) -> Self {
        Self {
            is_game_over: true,
            direction,
            ..self.clone()
        }
    }
}

pub fn check_collision<'a, I>(position: Point, segments: I) -> bool
where
    I: IntoIterator<Item = &'a Point>,
{
    segments.into_iter().any(|segment| *segment == position)
}

/// Score implied by a snake of `snake_length` segments.
pub fn calculate_score(snake_length: usize) -> i64 {
    (snake_length as i64 - INITIAL_SNAKE_LENGTH as i64) * FOOD_SCORE as i64
}
