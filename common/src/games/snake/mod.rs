mod bot_controller;
mod food;
mod game_state;
mod keys;
mod session;
mod settings;
mod spectator;
mod types;

pub use bot_controller::{BotController, SnakeBotType};
pub use food::generate_food;
pub use game_state::{
    FOOD_SCORE, INITIAL_SNAKE_LENGTH, INITIAL_SPEED, MIN_SPEED, SPEED_INCREMENT, SnakeGameState,
    calculate_score, check_collision,
};
pub use keys::{direction_from_key, is_pause_key};
pub use session::{SessionSummary, SnakeCommand, SnakeSession};
pub use settings::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE, SnakeSessionSettings, SnakeSettings};
pub use spectator::{ActivePlayer, LIST_REFRESH_MS, SIMULATION_SPEED_MS, WatchRoom, simulate_player_move};
pub use types::{Direction, GameMode, GamePhase, Point};
