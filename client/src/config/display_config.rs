use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Mark of the side that moves first, human or engine.
    pub first_symbol: char,
    pub second_symbol: char,
    #[serde(default)]
    pub show_engine_score: bool,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        for symbol in [self.first_symbol, self.second_symbol] {
            if symbol.is_whitespace() || symbol.is_ascii_digit() {
                return Err(format!(
                    "symbol '{}' must not be whitespace or a digit",
                    symbol
                ));
            }
        }
        if self.first_symbol == self.second_symbol {
            return Err("first_symbol and second_symbol must differ".to_string());
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            first_symbol: 'O',
            second_symbol: 'X',
            show_engine_score: false,
        }
    }
}
