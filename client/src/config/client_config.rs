use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::{SnakeBotType, SnakeSettings};
use common::leaderboard::DEFAULT_LEADERBOARD_LIMIT;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "snake_client_config.yaml";

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::yaml_next_to_executable(CONFIG_FILE_NAME),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    /// Generated on first start when absent.
    pub player_name: Option<String>,
    pub snake: SnakeSettings,
    #[serde(default = "default_leaderboard_limit")]
    pub leaderboard_limit: usize,
    #[serde(default)]
    pub autopilot: Option<SnakeBotType>,
}

fn default_leaderboard_limit() -> usize {
    DEFAULT_LEADERBOARD_LIMIT
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        if let Some(name) = &self.player_name
            && name.trim().is_empty()
        {
            return Err("player_name must not be empty if provided".to_string());
        }
        if self.leaderboard_limit == 0 {
            return Err("leaderboard_limit must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            player_name: None,
            snake: SnakeSettings::default(),
            leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
            autopilot: None,
        }
    }
}
