use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::games::snake::GameMode;
use crate::{EntryId, PlayerId};

/// The one report a finished game produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub score: u32,
    pub mode: GameMode,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitScoreResult {
    pub success: bool,
    /// 1-based position among scores of the same mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl SubmitScoreResult {
    pub fn ranked(rank: u32) -> Self {
        Self {
            success: true,
            rank: Some(rank),
        }
    }

    pub fn failed() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: EntryId,
    pub user_id: PlayerId,
    pub username: String,
    pub score: u32,
    pub mode: GameMode,
    pub date: DateTime<Utc>,
}
