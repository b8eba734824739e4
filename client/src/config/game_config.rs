use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{FirstPlayerMode, Matchup};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub mode: Matchup,
    pub first_player: FirstPlayerMode,
    /// Fixed seed for the first-player draw; a fresh one is picked when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Matchup::HumanVsEngine,
            first_player: FirstPlayerMode::Human,
            seed: None,
        }
    }
}
