use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "Swift", "Brave", "Clever", "Mighty", "Silent", "Golden", "Wild", "Noble",
    "Fierce", "Gentle", "Quick", "Wise", "Bold", "Proud", "Cunning", "Sly",
];

const NOUNS: &[&str] = &[
    "Python", "Cobra", "Viper", "Mamba", "Adder", "Boa", "Krait", "Asp",
    "Anaconda", "Taipan", "Racer", "Garter", "Kingsnake", "Rattler", "Sidewinder", "Copperhead",
];

/// Guest display name such as "Swift Viper".
pub fn generate_player_name() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    format!("{} {}", adjective, noun)
}

/// Unique id for a player or leaderboard entry: `<prefix>-<16 hex digits>`.
pub fn generate_id(prefix: &str) -> String {
    let value: u64 = rand::rng().random();
    format!("{}-{:016x}", prefix, value)
}
