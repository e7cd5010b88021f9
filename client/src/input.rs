use common::games::snake::{GameMode, SnakeCommand, direction_from_key, is_pause_key};
use common::log;
use std::io::BufRead;
use std::thread;

use tokio::sync::mpsc;

/// One stdin line to commands. Single-letter keys may be run together ("wwd").
pub fn parse_line(line: &str) -> Vec<SnakeCommand> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return if line.contains(' ') {
            vec![SnakeCommand::TogglePause]
        } else {
            Vec::new()
        };
    }

    if let Some(mode) = trimmed.strip_prefix("mode ") {
        return match mode.parse::<GameMode>() {
            Ok(mode) => vec![SnakeCommand::ChangeMode(mode)],
            Err(e) => {
                log!("{}", e);
                Vec::new()
            }
        };
    }

    if let Some(command) = parse_key(trimmed) {
        return vec![command];
    }

    trimmed
        .chars()
        .filter_map(|c| parse_key(c.encode_utf8(&mut [0; 4])))
        .collect()
}

fn parse_key(key: &str) -> Option<SnakeCommand> {
    if let Some(direction) = direction_from_key(key) {
        return Some(SnakeCommand::Turn(direction));
    }
    if is_pause_key(key) {
        return Some(SnakeCommand::TogglePause);
    }
    match key {
        "p" | "P" => Some(SnakeCommand::TogglePause),
        "r" | "R" => Some(SnakeCommand::Reset),
        "q" | "Q" | "quit" => Some(SnakeCommand::Quit),
        _ => None,
    }
}

/// Reads stdin on its own thread so a pending read never holds up runtime shutdown.
pub fn spawn_stdin_reader(command_tx: mpsc::UnboundedSender<SnakeCommand>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log!("Failed to read input: {}", e);
                    break;
                }
            };
            for command in parse_line(&line) {
                if command_tx.send(command).is_err() {
                    return;
                }
            }
        }
        let _ = command_tx.send(SnakeCommand::Quit);
    })
}
