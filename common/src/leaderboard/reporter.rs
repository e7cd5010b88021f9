use std::future::Future;

use super::types::{ScoreSubmission, SubmitScoreResult};

/// Receives the final score of every completed game. Failures come back as
/// `SubmitScoreResult::failed()`, never as a panic.
pub trait ScoreReporter: Send + Sync + Clone + 'static {
    fn submit_score(
        &self,
        submission: ScoreSubmission,
    ) -> impl Future<Output = SubmitScoreResult> + Send;
}
