use std::time::Duration;

use common::games::SessionRng;
use common::games::snake::{
    ActivePlayer, LIST_REFRESH_MS, SIMULATION_SPEED_MS, WatchRoom, simulate_player_move,
};
use common::log;
use tokio::time::{MissedTickBehavior, interval};

use crate::terminal::render_board;

pub fn format_player_list(players: &[ActivePlayer]) -> String {
    let mut out = format!("{} active players\n", players.len());
    for (idx, player) in players.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} - {} pts ({}){}\n",
            idx + 1,
            player.username,
            player.current_score,
            player.mode,
            if player.is_playing { "" } else { " [finished]" }
        ));
    }
    out
}

/// Offline stand-in for re-fetching the list: every listed player advances
/// as many moves as fit in one refresh period.
pub fn refreshed_players(players: &[ActivePlayer], grid_size: u32, rng: &mut SessionRng) -> Vec<ActivePlayer> {
    let steps = LIST_REFRESH_MS / SIMULATION_SPEED_MS;
    players
        .iter()
        .map(|player| {
            (0..steps).fold(player.clone(), |current, _| {
                simulate_player_move(&current, grid_size, rng)
            })
        })
        .collect()
}

/// Watches one simulated player for `ticks` animation steps.
pub async fn run_watch(player_count: usize, ticks: u64, grid_size: u32, mut rng: SessionRng) {
    let mut room = WatchRoom::with_simulated_players(player_count, grid_size, &mut rng);
    print!("{}", format_player_list(room.players()));

    let Some(first) = room.players().first().map(|p| p.id.clone()) else {
        log!("Nobody is playing right now");
        return;
    };
    room.select(&first);

    let mut animation = interval(Duration::from_millis(SIMULATION_SPEED_MS));
    let mut refresh = interval(Duration::from_millis(LIST_REFRESH_MS));
    refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The list was just built; skip the immediate first refresh.
    refresh.tick().await;

    let mut animated = 0;
    while animated < ticks {
        tokio::select! {
            _ = animation.tick() => {
                animated += 1;
                if let Some(player) = room.tick(grid_size, &mut rng) {
                    print!(
                        "\x1B[2J\x1B[H{}watching {} - {} pts\n",
                        render_board(&player.snake, player.food, grid_size, player.mode),
                        player.username,
                        player.current_score
                    );
                }
            }
            _ = refresh.tick() => {
                let players = refreshed_players(room.players(), grid_size, &mut rng);
                room.replace_players(players);
                log!("Refreshed {} active players", room.players().len());
            }
        }
    }

    room.back_to_list();
    log!("Stopped watching {}", first);
}
