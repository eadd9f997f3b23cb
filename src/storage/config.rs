use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub ui: UiConfig,
    pub chart: ChartConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    /// Width fed to the SVG exporter; clamped by the chart layout.
    pub export_width: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Overrides the platform data dir for the state blob.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chronowheel")
            .join("config.toml")
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .expect("Failed to serialize config");
        std::fs::write(&config_path, content)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig {
                theme: "default".to_string(),
            },
            chart: ChartConfig { export_width: 900 },
            storage: StorageConfig { data_dir: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_default_theme() {
        let config = Config::default();
        assert_eq!(config.ui.theme, "default");
    }

    #[test]
    fn default_export_width_is_900() {
        let config = Config::default();
        assert_eq!(config.chart.export_width, 900);
    }

    #[test]
    fn default_config_has_no_data_dir_override() {
        let config = Config::default();
        assert_eq!(config.storage.data_dir, None);
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r#"
            [ui]
            theme = "gruvbox"

            [chart]
            export_width = 640

            [storage]
            data_dir = "/tmp/chronowheel-state"
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.ui.theme, "gruvbox");
        assert_eq!(config.chart.export_width, 640);
        assert_eq!(
            config.storage.data_dir,
            Some(PathBuf::from("/tmp/chronowheel-state"))
        );
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let invalid_toml = "this is not valid toml";
        let result = Config::from_toml(invalid_toml);
        assert!(result.is_err());
    }
}
