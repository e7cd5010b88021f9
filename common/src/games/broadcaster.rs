use std::future::Future;

use crate::games::snake::{GameMode, Point, SnakeGameState};
use crate::leaderboard::{ScoreSubmission, SubmitScoreResult};

/// What a render surface needs to draw one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderFrame {
    pub snake: Vec<Point>,
    pub food: Point,
    pub grid_size: u32,
    pub mode: GameMode,
    pub is_game_over: bool,
    pub is_paused: bool,
    pub score: u32,
    pub speed: u32,
}

impl From<&SnakeGameState> for RenderFrame {
    fn from(state: &SnakeGameState) -> Self {
        Self {
            snake: state.snake.iter().copied().collect(),
            food: state.food,
            grid_size: state.grid_size,
            mode: state.mode,
            is_game_over: state.is_game_over,
            is_paused: state.is_paused,
            score: state.score,
            speed: state.speed,
        }
    }
}

pub trait FrameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_frame(&self, frame: RenderFrame) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        submission: ScoreSubmission,
        result: SubmitScoreResult,
    ) -> impl Future<Output = ()> + Send;
}
