use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::bot_controller::SnakeBotType;
use super::types::GameMode;

pub const MIN_GRID_SIZE: u32 = 5;
pub const MAX_GRID_SIZE: u32 = 100;
pub const DEFAULT_GRID_SIZE: u32 = 20;

/// Per-game configuration. Changing either field means starting a new game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeSettings {
    pub grid_size: u32,
    pub mode: GameMode,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            mode: GameMode::Passthrough,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(format!(
                "grid_size must be between {} and {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub snake: SnakeSettings,
    /// Steers the snake itself when set.
    pub autopilot: Option<SnakeBotType>,
    pub exit_on_game_over: bool,
}

impl From<SnakeSettings> for SnakeSessionSettings {
    fn from(snake: SnakeSettings) -> Self {
        Self {
            snake,
            autopilot: None,
            exit_on_game_over: false,
        }
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()
    }
}
