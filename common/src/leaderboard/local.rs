use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::games::snake::GameMode;
use crate::id_generator::generate_id;
use crate::{EntryId, PlayerId, log};
use super::reporter::ScoreReporter;
use super::types::{LeaderboardEntry, ScoreSubmission, SubmitScoreResult};

#[derive(Default)]
struct LeaderboardData {
    entries: Vec<LeaderboardEntry>,
    high_scores: HashMap<PlayerId, u32>,
}

/// In-process leaderboard. Clones share storage; each handle submits as its own player.
#[derive(Clone)]
pub struct LocalLeaderboard {
    data: Arc<Mutex<LeaderboardData>>,
    player_id: PlayerId,
    username: String,
}

impl LocalLeaderboard {
    pub fn new(player_id: PlayerId, username: String) -> Self {
        Self {
            data: Arc::new(Mutex::new(LeaderboardData::default())),
            player_id,
            username,
        }
    }

    /// Another player's handle onto the same storage.
    pub fn for_player(&self, player_id: PlayerId, username: String) -> Self {
        Self {
            data: self.data.clone(),
            player_id,
            username,
        }
    }

    /// Highest scores first, newer first among equal scores.
    pub async fn top(&self, limit: usize, mode: Option<GameMode>) -> Vec<LeaderboardEntry> {
        let data = self.data.lock().await;
        let mut entries: Vec<LeaderboardEntry> = data
            .entries
            .iter()
            .filter(|e| mode.is_none_or(|m| e.mode == m))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score).then(b.date.cmp(&a.date)));
        entries.truncate(limit);
        entries
    }

    pub async fn high_score(&self) -> u32 {
        let data = self.data.lock().await;
        data.high_scores.get(&self.player_id).copied().unwrap_or(0)
    }
}

impl ScoreReporter for LocalLeaderboard {
    async fn submit_score(&self, submission: ScoreSubmission) -> SubmitScoreResult {
        let mut data = self.data.lock().await;

        data.entries.push(LeaderboardEntry {
            id: EntryId::new(generate_id("entry")),
            user_id: self.player_id.clone(),
            username: self.username.clone(),
            score: submission.score,
            mode: submission.mode,
            date: Utc::now(),
        });

        let high_score = data.high_scores.entry(self.player_id.clone()).or_insert(0);
        if submission.score > *high_score {
            *high_score = submission.score;
        }

        let higher = data
            .entries
            .iter()
            .filter(|e| e.mode == submission.mode && e.score > submission.score)
            .count();
        let rank = higher as u32 + 1;

        log!(
            "[leaderboard] {} scored {} in {} mode, rank #{}",
            self.username,
            submission.score,
            submission.mode,
            rank
        );

        SubmitScoreResult::ranked(rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(score: u32, mode: GameMode) -> ScoreSubmission {
        ScoreSubmission { score, mode }
    }

    #[tokio::test]
    async fn test_rank_counts_strictly_higher_scores_in_same_mode() {
        let alice = LocalLeaderboard::new(PlayerId::new("p-1"), "alice".to_string());
        let bob = alice.for_player(PlayerId::new("p-2"), "bob".to_string());

        assert_eq!(alice.submit_score(submission(50, GameMode::Walls)).await.rank, Some(1));
        assert_eq!(bob.submit_score(submission(30, GameMode::Walls)).await.rank, Some(2));
        assert_eq!(bob.submit_score(submission(50, GameMode::Walls)).await.rank, Some(1));
        assert_eq!(bob.submit_score(submission(10, GameMode::Passthrough)).await.rank, Some(1));
    }

    #[tokio::test]
    async fn test_top_filters_and_orders() {
        let board = LocalLeaderboard::new(PlayerId::new("p-1"), "alice".to_string());
        board.submit_score(submission(20, GameMode::Passthrough)).await;
        board.submit_score(submission(70, GameMode::Walls)).await;
        board.submit_score(submission(40, GameMode::Passthrough)).await;

        let all = board.top(10, None).await;
        let scores: Vec<u32> = all.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![70, 40, 20]);

        let passthrough = board.top(10, Some(GameMode::Passthrough)).await;
        assert_eq!(passthrough.len(), 2);
        assert!(passthrough.iter().all(|e| e.mode == GameMode::Passthrough));

        assert_eq!(board.top(1, None).await.len(), 1);
    }

    #[tokio::test]
    async fn test_high_score_tracked_per_player() {
        let alice = LocalLeaderboard::new(PlayerId::new("p-1"), "alice".to_string());
        let bob = alice.for_player(PlayerId::new("p-2"), "bob".to_string());

        alice.submit_score(submission(60, GameMode::Walls)).await;
        alice.submit_score(submission(30, GameMode::Walls)).await;
        bob.submit_score(submission(90, GameMode::Walls)).await;

        assert_eq!(alice.high_score().await, 60);
        assert_eq!(bob.high_score().await, 90);
    }

    #[test]
    fn test_entry_uses_backend_field_names() {
        let entry = LeaderboardEntry {
            id: EntryId::new("entry-1"),
            user_id: PlayerId::new("p-1"),
            username: "alice".to_string(),
            score: 40,
            mode: GameMode::Walls,
            date: Utc::now(),
        };
        let yaml = serde_yaml_ng::to_string(&entry).unwrap();
        assert!(yaml.contains("user_id: p-1"));
        assert!(yaml.contains("mode: walls"));
    }
}
