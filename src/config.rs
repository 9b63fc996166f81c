//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.mathdemo.toml` in the working directory
//! 4. `~/.config/mathdemo/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub text: TextConfig,
}

/// Paragraph generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Number of words in the generated paragraph.
    pub words: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { words: 40 }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, then the local config in `base_dir`,
    /// then applies environment variable overrides.
    pub fn load(base_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = base_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for
    /// non-default values).
    fn merge(&mut self, other: Config) {
        if other.text.words != TextConfig::default().words {
            self.text.words = other.text.words;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.get(crate::constants::ENV_WORDS) {
            match val.parse::<usize>() {
                Ok(words) => self.text.words = words,
                Err(_) => eprintln!(
                    "Warning: ignoring invalid {} value: {val}",
                    crate::constants::ENV_WORDS
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.text.words, 40);
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[text]
words = 12
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.text.words, 12);
    }

    #[test]
    fn parse_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.text.words, 40);
    }

    #[test]
    fn merge_overrides_non_default_values() {
        let mut base = Config::default();
        let mut other = Config::default();
        other.text.words = 7;

        base.merge(other);
        assert_eq!(base.text.words, 7);
    }

    #[test]
    fn merge_keeps_base_when_other_is_default() {
        let mut base = Config::default();
        base.text.words = 99;

        base.merge(Config::default());
        assert_eq!(base.text.words, 99);
    }

    #[test]
    fn env_var_overrides_words() {
        let mut config = Config::default();
        config.apply_env_vars(&Env::fixed([(crate::constants::ENV_WORDS, "5")]));
        assert_eq!(config.text.words, 5);
    }

    #[test]
    fn invalid_env_var_is_ignored() {
        let mut config = Config::default();
        config.apply_env_vars(&Env::fixed([(crate::constants::ENV_WORDS, "lots")]));
        assert_eq!(config.text.words, 40);
    }

    #[test]
    fn load_reads_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(crate::constants::CONFIG_FILENAME),
            "[text]\nwords = 3\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), &Env::fixed(Vec::<(&str, &str)>::new()))
            .unwrap();
        assert_eq!(config.text.words, 3);
    }

    #[test]
    fn load_tolerates_missing_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path()), &Env::fixed(Vec::<(&str, &str)>::new()))
            .unwrap();
        assert_eq!(config.text.words, 40);
    }

    #[test]
    fn load_reports_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(crate::constants::CONFIG_FILENAME),
            "not = [valid",
        )
        .unwrap();

        let err = Config::load(Some(dir.path()), &Env::fixed(Vec::<(&str, &str)>::new()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseFile { .. }));
    }

    #[test]
    fn env_beats_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(crate::constants::CONFIG_FILENAME),
            "[text]\nwords = 3\n",
        )
        .unwrap();

        let config = Config::load(
            Some(dir.path()),
            &Env::fixed([(crate::constants::ENV_WORDS, "8")]),
        )
        .unwrap();
        assert_eq!(config.text.words, 8);
    }
}
