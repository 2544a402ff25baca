use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AutosuggestError, Result};
use crate::suggest::SuggestOptions;

/// Root application configuration, loaded from `~/.config/autosuggest/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub suggest: SuggestConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Queries shorter than this (in characters) produce no suggestions.
    pub min_query_len: usize,
    pub max_suggestions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_rate_ms: u64,
    pub prompt: String,
    pub show_hints: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

// ─── Defaults ──────────────────────────────────────────────

impl Default for SuggestConfig {
    fn default() -> Self {
        let options = SuggestOptions::default();
        Self {
            min_query_len: options.min_query_len,
            max_suggestions: options.max_suggestions,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            prompt: "> ".to_string(),
            show_hints: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

// ─── Load / Save ───────────────────────────────────────────

impl AppConfig {
    /// Standard config file path: `~/.config/autosuggest/config.toml`
    pub fn config_path() -> PathBuf {
        // Allow override via env var
        if let Ok(path) = std::env::var("AUTOSUGGEST_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("autosuggest")
            .join("config.toml")
    }

    /// Load config from disk, falling back to defaults if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        Self::load_from(&path)
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the standard path.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        self.save_to(&path)
    }

    /// Save config to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.suggest.max_suggestions == 0 {
            return Err(AutosuggestError::ConfigError(
                "suggest.max_suggestions must be at least 1".to_string(),
            ));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(AutosuggestError::ConfigError(
                "ui.tick_rate_ms must be at least 1".to_string(),
            ));
        }
        let level = self.log.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AutosuggestError::ConfigError(format!(
                "log.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log.level
            )));
        }
        Ok(())
    }

    /// Engine options derived from the `[suggest]` section.
    pub fn suggest_options(&self) -> SuggestOptions {
        SuggestOptions {
            min_query_len: self.suggest.min_query_len,
            max_suggestions: self.suggest.max_suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.suggest.min_query_len, 2);
        assert_eq!(cfg.suggest.max_suggestions, 6);
        assert_eq!(cfg.ui.tick_rate_ms, 250);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = AppConfig::default();
        cfg.suggest.max_suggestions = 10;
        cfg.log.file = Some("/tmp/autosuggest.log".to_string());
        cfg.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.suggest.max_suggestions, 10);
        assert_eq!(loaded.ui.prompt, cfg.ui.prompt);
        assert_eq!(loaded.log.file.as_deref(), Some("/tmp/autosuggest.log"));
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let cfg =
            AppConfig::load_from(Path::new("/tmp/nonexistent_autosuggest_config.toml")).unwrap();
        assert_eq!(cfg.suggest.max_suggestions, 6);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[suggest]\nmin_query_len = 3\n").unwrap();

        let cfg = AppConfig::load_from(&path).unwrap();
        assert_eq!(cfg.suggest.min_query_len, 3);
        assert_eq!(cfg.suggest.max_suggestions, 6);
        assert_eq!(cfg.log.level, "warn");
    }

    #[test]
    fn test_zero_max_suggestions_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[suggest]\nmax_suggestions = 0\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, AutosuggestError::ConfigError(_)));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let mut cfg = AppConfig::default();
        cfg.log.level = "loud".to_string();
        assert!(cfg.validate().is_err());

        cfg.log.level = "DEBUG".to_string();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_suggest_options_follow_config() {
        let mut cfg = AppConfig::default();
        cfg.suggest.min_query_len = 1;
        let options = cfg.suggest_options();
        assert_eq!(options.min_query_len, 1);
        assert_eq!(options.max_suggestions, 6);
    }
}
