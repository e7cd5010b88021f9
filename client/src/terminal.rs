use std::collections::HashSet;
use std::io::Write;

use common::games::snake::{GameMode, Point};
use common::games::{FrameBroadcaster, RenderFrame};
use common::leaderboard::{ScoreSubmission, SubmitScoreResult};
use common::log;

const HEAD: char = '@';
const BODY: char = 'o';
const FOOD: char = '*';
const EMPTY: char = '.';

/// Draws a board as text; walls mode gets a solid border, passthrough a dotted one.
pub fn render_board(snake: &[Point], food: Point, grid_size: u32, mode: GameMode) -> String {
    let body: HashSet<Point> = snake.iter().skip(1).copied().collect();
    let head = snake.first().copied();
    let (horizontal, vertical) = match mode {
        GameMode::Walls => ('#', '#'),
        GameMode::Passthrough => (':', ':'),
    };

    let size = grid_size as i32;
    let border: String = std::iter::repeat_n(horizontal, grid_size as usize + 2).collect();
    let mut out = String::with_capacity((grid_size as usize + 3) * (grid_size as usize + 2));
    out.push_str(&border);
    out.push('\n');

    for y in 0..size {
        out.push(vertical);
        for x in 0..size {
            let cell = Point::new(x, y);
            let c = if head == Some(cell) {
                HEAD
            } else if body.contains(&cell) {
                BODY
            } else if food == cell {
                FOOD
            } else {
                EMPTY
            };
            out.push(c);
        }
        out.push(vertical);
        out.push('\n');
    }

    out.push_str(&border);
    out.push('\n');
    out
}

pub fn render_frame(frame: &RenderFrame) -> String {
    let mut out = render_board(&frame.snake, frame.food, frame.grid_size, frame.mode);
    let status = if frame.is_game_over {
        "GAME OVER - r: restart, q: quit"
    } else if frame.is_paused {
        "PAUSED - p: resume"
    } else {
        "wasd: steer, p: pause, r: restart, q: quit"
    };
    out.push_str(&format!(
        "{} | score {} | {}ms/tick\n{}\n",
        frame.mode.display_name(),
        frame.score,
        frame.speed,
        status
    ));
    out
}

#[derive(Clone)]
pub struct TerminalBroadcaster {
    clear_screen: bool,
}

impl TerminalBroadcaster {
    pub fn new(clear_screen: bool) -> Self {
        Self { clear_screen }
    }

    fn print(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let result = if self.clear_screen {
            write!(stdout, "\x1B[2J\x1B[H{}", text)
        } else {
            write!(stdout, "{}", text)
        };
        if let Err(e) = result.and_then(|_| stdout.flush()) {
            log!("Failed to draw frame: {}", e);
        }
    }
}

impl FrameBroadcaster for TerminalBroadcaster {
    async fn broadcast_frame(&self, frame: RenderFrame) {
        self.print(&render_frame(&frame));
    }

    async fn broadcast_game_over(&self, submission: ScoreSubmission, result: SubmitScoreResult) {
        let message = match result.rank {
            Some(rank) if result.success => {
                format!("Final score {} in {} mode. Rank #{}\n", submission.score, submission.mode, rank)
            }
            _ => format!(
                "Final score {} in {} mode. Score could not be submitted.\n",
                submission.score, submission.mode
            ),
        };
        self.print(&message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board_marks_cells() {
        let snake = [Point::new(2, 1), Point::new(1, 1), Point::new(0, 1)];
        let board = render_board(&snake, Point::new(4, 4), 5, GameMode::Walls);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "#######");
        assert_eq!(lines[2], "#oo@..#");
        assert_eq!(lines[5], "#....*#");
    }

    #[test]
    fn test_passthrough_border() {
        let snake = [Point::new(0, 0)];
        let board = render_board(&snake, Point::new(1, 0), 3, GameMode::Passthrough);
        assert!(board.starts_with(":::::\n:@*.:\n"));
    }

    #[test]
    fn test_render_frame_status_line() {
        let frame = RenderFrame {
            snake: vec![Point::new(1, 1)],
            food: Point::new(0, 0),
            grid_size: 5,
            mode: GameMode::Walls,
            is_game_over: true,
            is_paused: false,
            score: 30,
            speed: 135,
        };
        let text = render_frame(&frame);
        assert!(text.contains("Walls Mode | score 30 | 135ms/tick"));
        assert!(text.contains("GAME OVER"));
    }
}
