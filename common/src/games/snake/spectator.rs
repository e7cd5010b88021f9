use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use crate::id_generator::{generate_id, generate_player_name};
use crate::PlayerId;
use super::game_state::{FOOD_SCORE, SnakeGameState};
use super::types::{Direction, GameMode, Point};

pub const SIMULATION_SPEED_MS: u64 = 200;
pub const LIST_REFRESH_MS: u64 = 10_000;
const DIRECTION_CHANGE_CHANCE: f64 = 0.1;

/// Snapshot of someone else's game as the watch view sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePlayer {
    pub id: PlayerId,
    pub username: String,
    pub current_score: u32,
    pub mode: GameMode,
    pub snake: Vec<Point>,
    pub food: Point,
    pub direction: Direction,
    pub is_playing: bool,
}

impl ActivePlayer {
    pub fn from_state(id: PlayerId, username: String, state: &SnakeGameState) -> Self {
        Self {
            id,
            username,
            current_score: state.score,
            mode: state.mode,
            snake: state.snake.iter().copied().collect(),
            food: state.food,
            direction: state.direction,
            is_playing: !state.is_game_over,
        }
    }
}

/// Client-side animation of a watched player between server updates.
///
/// Cosmetic only: wraps at every edge regardless of mode and never collides.
pub fn simulate_player_move(player: &ActivePlayer, grid_size: u32, rng: &mut SessionRng) -> ActivePlayer {
    let mut next = player.clone();
    let Some(&head) = player.snake.first() else {
        return next;
    };

    if rng.chance(DIRECTION_CHANGE_CHANCE) {
        let choices: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|d| !d.is_opposite(&player.direction))
            .collect();
        if let Some(&direction) = rng.pick(&choices) {
            next.direction = direction;
        }
    }

    let new_head = head.step(next.direction).wrapped(grid_size);

    if new_head == player.food {
        next.snake = std::iter::once(new_head).chain(player.snake.iter().copied()).collect();
        let size = grid_size as i32;
        next.food = Point::new(rng.random_range(0..size), rng.random_range(0..size));
        next.current_score += FOOD_SCORE;
    } else {
        next.snake = std::iter::once(new_head)
            .chain(player.snake.iter().take(player.snake.len() - 1).copied())
            .collect();
    }

    next
}

#[derive(Clone, Debug, Default)]
pub struct WatchRoom {
    players: Vec<ActivePlayer>,
    selected: Option<ActivePlayer>,
}

impl WatchRoom {
    pub fn new(players: Vec<ActivePlayer>) -> Self {
        Self {
            players,
            selected: None,
        }
    }

    /// `count` freshly started players on a `grid_size` board, alternating modes.
    pub fn with_simulated_players(count: usize, grid_size: u32, rng: &mut SessionRng) -> Self {
        let players = (0..count)
            .map(|i| {
                let mode = if i % 2 == 0 { GameMode::Passthrough } else { GameMode::Walls };
                let state = SnakeGameState::create_initial_state(grid_size, mode, rng);
                ActivePlayer::from_state(
                    PlayerId::new(generate_id("player")),
                    generate_player_name(),
                    &state,
                )
            })
            .collect();
        Self::new(players)
    }

    pub fn players(&self) -> &[ActivePlayer] {
        &self.players
    }

    /// Refreshes the list. The watched copy is left alone and keeps animating.
    pub fn replace_players(&mut self, players: Vec<ActivePlayer>) {
        self.players = players;
    }

    pub fn select(&mut self, id: &PlayerId) -> bool {
        match self.players.iter().find(|p| &p.id == id) {
            Some(player) => {
                self.selected = Some(player.clone());
                true
            }
            None => false,
        }
    }

    pub fn back_to_list(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&ActivePlayer> {
        self.selected.as_ref()
    }

    pub fn tick(&mut self, grid_size: u32, rng: &mut SessionRng) -> Option<&ActivePlayer> {
        let current = self.selected.as_ref()?;
        self.selected = Some(simulate_player_move(current, grid_size, rng));
        self.selected.as_ref()
    }
}
