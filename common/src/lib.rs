pub mod config;
pub mod games;
pub mod id_generator;
pub mod identifiers;
pub mod leaderboard;
pub mod logger;

pub use identifiers::*;

pub mod version {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
