use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::Cell;

/// Settings for new games started by the front-ends.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player on turn for the first game and after every restart.
    pub starting_player: Cell,
    /// Refuse drops once a game is won or drawn instead of forwarding them.
    pub strict: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starting_player: Cell::Yellow,
            strict: true,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
    /// Log file. The terminal UI only logs when this is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "warn".to_string(),
            file: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub log: LogConfig,
}

/// Where a resolved configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. The caller decides how to report the fallback.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.game.starting_player.is_player() {
            return Err(ConfigError::Validation(
                "game.starting_player must be red or yellow".into(),
            ));
        }
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "log.filter must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.starting_player, Cell::Yellow);
        assert!(config.game.strict);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
starting_player = "red"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.starting_player, Cell::Red);
        // Other fields should be defaults
        assert!(config.game.strict);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game.starting_player, Cell::Yellow);
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_validation_rejects_no_starting_player() {
        let config: AppConfig = toml::from_str("[game]\nstarting_player = \"none\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_player_fails_to_parse() {
        let result: Result<AppConfig, _> = toml::from_str("[game]\nstarting_player = \"blue\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_blank_filter() {
        let mut config = AppConfig::default();
        config.log.filter = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let (config, source) =
            AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config.game.starting_player, Cell::Yellow);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
strict = false

[log]
filter = "connect_four=debug"
"#
        )
        .unwrap();

        let (config, source) = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(source, ConfigSource::File);
        assert!(!config.game.strict);
        assert_eq!(config.log.filter, "connect_four=debug");
        // Others are defaults
        assert_eq!(config.game.starting_player, Cell::Yellow);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[game]\nstarting_player = \"empty\"\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert!(toml_str.contains("starting_player = \"yellow\""));
    }
}
