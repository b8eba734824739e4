use serde::Serialize;
use serde::de::DeserializeOwned;

use super::ConfigError;

/// Text format a config is stored in.
pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError>;
    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: DeserializeOwned + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError> {
        serde_yaml_ng::to_string(config).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError> {
        Ok(serde_yaml_ng::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Pair {
        name: String,
        enabled: bool,
    }

    #[test]
    fn test_yaml_text_shape() {
        let pair = Pair {
            name: "engine".to_string(),
            enabled: true,
        };
        let text = YamlConfigSerializer::new().serialize(&pair).unwrap();
        assert_eq!(text, "name: engine\nenabled: true\n");
    }

    #[test]
    fn test_unknown_shape_is_deserialize_error() {
        let result: Result<Pair, _> = YamlConfigSerializer::new().deserialize("- 1\n- 2\n");
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }
}
