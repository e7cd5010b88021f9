mod config;
mod input;
mod terminal;
mod watch;

use clap::{Parser, Subcommand};
use common::config::{ConfigManager, FileContentConfigProvider, Validate};
use common::games::SessionRng;
use common::games::snake::{GameMode, SnakeBotType, SnakeSession, SnakeSessionSettings, SnakeSettings};
use common::id_generator::{generate_id, generate_player_name};
use common::leaderboard::LocalLeaderboard;
use common::{PlayerId, log, logger};
use tokio::sync::mpsc;

use config::{ClientConfig, get_config_manager};
use input::spawn_stdin_reader;
use terminal::TerminalBroadcaster;
use watch::run_watch;

#[derive(Parser)]
#[command(name = "snake_client", version = common::version::VERSION)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file; defaults to snake_client_config.yaml next to the executable.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    grid_size: Option<u32>,

    /// passthrough or walls
    #[arg(long)]
    mode: Option<GameMode>,

    #[arg(long)]
    seed: Option<u64>,

    /// Let a bot steer (efficient or random); stdin is not read.
    #[arg(long)]
    autopilot: Option<SnakeBotType>,

    #[arg(long)]
    exit_on_game_over: bool,

    /// Append frames instead of redrawing the screen.
    #[arg(long)]
    no_clear: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Play a game in the terminal (default).
    Play,
    /// Watch simulated players.
    Watch {
        #[arg(long, default_value_t = 3)]
        players: usize,
        #[arg(long, default_value_t = 100)]
        ticks: u64,
    },
}

fn resolve_settings(args: &Args, config: &ClientConfig) -> Result<SnakeSessionSettings, String> {
    let snake = SnakeSettings {
        grid_size: args.grid_size.unwrap_or(config.snake.grid_size),
        mode: args.mode.unwrap_or(config.snake.mode),
    };
    let autopilot = args.autopilot.or(config.autopilot);
    // Nobody is at the keyboard to restart or quit an autopilot game.
    let settings = SnakeSessionSettings {
        snake,
        autopilot,
        exit_on_game_over: args.exit_on_game_over || autopilot.is_some(),
    };
    settings.validate()?;
    Ok(settings)
}

fn resolve_player_name(
    config_manager: &ConfigManager<FileContentConfigProvider, ClientConfig>,
    config: &ClientConfig,
) -> String {
    if let Some(name) = &config.player_name {
        return name.clone();
    }

    let name = generate_player_name();
    let updated = ClientConfig {
        player_name: Some(name.clone()),
        ..config.clone()
    };
    if let Err(e) = config_manager.set_config(&updated) {
        log!("Failed to save player name: {}", e);
    }
    name
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());
    let config = config_manager.get_or_init_config()?;
    let settings = resolve_settings(&args, &config)?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Using seed {}", rng.seed());

    match args.command.as_ref().unwrap_or(&Command::Play) {
        Command::Watch { players, ticks } => {
            run_watch(*players, *ticks, settings.snake.grid_size, rng).await;
        }
        Command::Play => {
            let player_name = resolve_player_name(&config_manager, &config);
            let leaderboard =
                LocalLeaderboard::new(PlayerId::new(generate_id("player")), player_name.clone());
            log!("Playing as {}", player_name);

            let (command_tx, command_rx) = mpsc::unbounded_channel();
            let _input_thread = settings
                .autopilot
                .is_none()
                .then(|| spawn_stdin_reader(command_tx.clone()));

            let summary = SnakeSession::run(
                settings,
                rng,
                command_rx,
                TerminalBroadcaster::new(!args.no_clear),
                leaderboard.clone(),
            )
            .await;
            drop(command_tx);

            log!(
                "Session over after {} ticks and {} finished games",
                summary.ticks,
                summary.reports.len()
            );

            println!("High score: {}", leaderboard.high_score().await);
            for (idx, entry) in leaderboard
                .top(config.leaderboard_limit, None)
                .await
                .iter()
                .enumerate()
            {
                println!(
                    "{:>3}. {:<20} {:>6}  {:<11} {}",
                    idx + 1,
                    entry.username,
                    entry.score,
                    entry.mode,
                    entry.date.format("%Y-%m-%d %H:%M")
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::parse_from([
            "snake_client",
            "--grid-size",
            "12",
            "--mode",
            "walls",
            "--autopilot",
            "random",
        ]);
        let settings = resolve_settings(&args, &ClientConfig::default()).unwrap();
        assert_eq!(settings.snake.grid_size, 12);
        assert_eq!(settings.snake.mode, GameMode::Walls);
        assert_eq!(settings.autopilot, Some(SnakeBotType::Random));
        assert!(settings.exit_on_game_over);
    }

    #[test]
    fn test_config_used_without_overrides() {
        let args = Args::parse_from(["snake_client"]);
        let settings = resolve_settings(&args, &ClientConfig::default()).unwrap();
        assert_eq!(settings.snake, SnakeSettings::default());
        assert_eq!(settings.autopilot, None);
    }

    #[test]
    fn test_invalid_grid_size_rejected() {
        let args = Args::parse_from(["snake_client", "--grid-size", "3"]);
        assert!(resolve_settings(&args, &ClientConfig::default()).is_err());
    }

    #[test]
    fn test_watch_subcommand() {
        let args = Args::parse_from(["snake_client", "watch", "--players", "5"]);
        match args.command {
            Some(Command::Watch { players, ticks }) => {
                assert_eq!(players, 5);
                assert_eq!(ticks, 100);
            }
            _ => panic!("expected watch subcommand"),
        }
    }
}
