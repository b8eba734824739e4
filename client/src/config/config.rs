use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_common::config::Validate;

use super::{
    ConfigManager, DisplayConfig, FileContentConfigProvider, GameConfig, YamlConfigSerializer,
};

pub const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.display.validate()?;
        Ok(())
    }
}
