// config.rs

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "openclaw.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub prompt: String,
    /// Line-editor recall history. Not the console scrollback.
    pub history_file: Option<PathBuf>,
    pub show_banner: bool,
    pub max_line_history: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: "$ ".to_string(),
            history_file: None,
            show_banner: true,
            max_line_history: 1000,
        }
    }
}

impl Settings {
    /// Reads `OPENCLAW_CONFIG` or `openclaw.toml`, then the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os("OPENCLAW_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::figment(path).extract().map_err(|e| ConfigError::Invalid(Box::new(e)))
    }

    fn figment(path: &Path) -> Figment {
        // a missing file is skipped by Toml::file
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("OPENCLAW_").ignore(&["config", "log"]))
            .merge(Env::raw().only(&["HISTFILE"]).map(|_| "history_file".into()))
    }
}
