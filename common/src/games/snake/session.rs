use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use crate::games::{FrameBroadcaster, RenderFrame, SessionRng};
use crate::leaderboard::{ScoreReporter, ScoreSubmission, SubmitScoreResult};
use crate::log;
use super::bot_controller::BotController;
use super::game_state::SnakeGameState;
use super::settings::SnakeSessionSettings;
use super::types::{Direction, GameMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeCommand {
    Turn(Direction),
    TogglePause,
    Reset,
    ChangeMode(GameMode),
    Quit,
}

#[derive(Clone, Debug)]
pub struct SessionSummary {
    /// One entry per finished game, in order.
    pub reports: Vec<(ScoreSubmission, SubmitScoreResult)>,
    pub ticks: u64,
    pub final_state: SnakeGameState,
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives games until `Quit`, until the command channel closes, or until the
    /// first game over when `exit_on_game_over` is set.
    pub async fn run(
        settings: SnakeSessionSettings,
        mut rng: SessionRng,
        mut command_rx: mpsc::UnboundedReceiver<SnakeCommand>,
        broadcaster: impl FrameBroadcaster,
        reporter: impl ScoreReporter,
    ) -> SessionSummary {
        let mut state = SnakeGameState::create_initial_state(
            settings.snake.grid_size,
            settings.snake.mode,
            &mut rng,
        );
        log!(
            "[session:{}] new game, {} on a {}x{} grid",
            rng.seed(),
            state.mode,
            state.grid_size,
            state.grid_size
        );
        broadcaster.broadcast_frame(RenderFrame::from(&state)).await;

        let mut deadline = next_deadline(&state);
        let mut ticks: u64 = 0;
        let mut reports = Vec::new();

        loop {
            tokio::select! {
                _ = sleep_until(deadline), if state.is_running() => {
                    if let Some(bot_type) = settings.autopilot
                        && let Some(direction) = BotController::calculate_move(bot_type, &state, &mut rng)
                    {
                        state = state.set_direction(direction);
                    }

                    let next = state.move_snake(&mut rng);
                    ticks += 1;

                    if next.score > state.score {
                        log!(
                            "[session:{}] ate food at ({}, {}). Score: {}",
                            rng.seed(),
                            next.head().x,
                            next.head().y,
                            next.score
                        );
                    }

                    let finished = !state.is_game_over && next.is_game_over;
                    state = next;
                    broadcaster.broadcast_frame(RenderFrame::from(&state)).await;
                    deadline = next_deadline(&state);

                    if finished {
                        let report = Self::report_game_over(&state, &broadcaster, &reporter).await;
                        reports.push(report);
                        if settings.exit_on_game_over {
                            break;
                        }
                    }
                }
                command = command_rx.recv() => {
                    let Some(command) = command else {
                        log!("[session:{}] input closed", rng.seed());
                        break;
                    };

                    match command {
                        SnakeCommand::Quit => break,
                        SnakeCommand::Turn(direction) => {
                            state = state.set_direction(direction);
                        }
                        SnakeCommand::TogglePause => {
                            let was_running = state.is_running();
                            state = state.toggle_pause();
                            if !was_running && state.is_running() {
                                deadline = next_deadline(&state);
                            }
                            broadcaster.broadcast_frame(RenderFrame::from(&state)).await;
                        }
                        SnakeCommand::Reset => {
                            state = state.reset_game(&mut rng);
                            log!("[session:{}] game reset", rng.seed());
                            deadline = next_deadline(&state);
                            broadcaster.broadcast_frame(RenderFrame::from(&state)).await;
                        }
                        SnakeCommand::ChangeMode(mode) => {
                            if mode != state.mode {
                                state = SnakeGameState::create_initial_state(state.grid_size, mode, &mut rng);
                                log!("[session:{}] switched to {}", rng.seed(), mode.display_name());
                                deadline = next_deadline(&state);
                                broadcaster.broadcast_frame(RenderFrame::from(&state)).await;
                            }
                        }
                    }
                }
            }
        }

        SessionSummary {
            reports,
            ticks,
            final_state: state,
        }
    }

    async fn report_game_over(
        state: &SnakeGameState,
        broadcaster: &impl FrameBroadcaster,
        reporter: &impl ScoreReporter,
    ) -> (ScoreSubmission, SubmitScoreResult) {
        let submission = ScoreSubmission {
            score: state.score,
            mode: state.mode,
        };
        log!("Game over with score {} ({})", submission.score, submission.mode);

        let result = reporter.submit_score(submission).await;
        match result.rank {
            Some(rank) if result.success => log!("Score submitted, rank #{}", rank),
            _ => log!("Score submission failed"),
        }

        broadcaster.broadcast_game_over(submission, result).await;
        (submission, result)
    }
}

fn next_deadline(state: &SnakeGameState) -> Instant {
    Instant::now() + Duration::from_millis(state.speed as u64)
}
