mod config;
mod display_config;
mod game_config;

pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use config::{CONFIG_FILE_NAME, Config, get_config_manager};
pub use display_config::DisplayConfig;
pub use game_config::GameConfig;
