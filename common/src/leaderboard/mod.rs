mod local;
mod reporter;
mod types;

pub use local::LocalLeaderboard;
pub use reporter::ScoreReporter;
pub use types::{LeaderboardEntry, ScoreSubmission, SubmitScoreResult};

/// Default page size of `top` queries.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;
