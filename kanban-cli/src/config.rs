//! Configuration loading using Figment
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Built-in defaults
//! 2. User config file (`<config dir>/kanban/config.toml`)
//! 3. Project config file (`./.kanban.toml`)
//! 4. Environment variables with the `KANBAN_` prefix
//! 5. Command line flags

use anyhow::{Context, Result};
use clap::ValueEnum;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use kanban_board::{validate_key, DEFAULT_STORAGE_KEY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "KANBAN_";

/// Project-local config file name
pub const LOCAL_CONFIG_FILE: &str = ".kanban.toml";

/// How fresh ids are generated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random `task-<ulid>` ids
    #[default]
    Ulid,
    /// Predictable `task-N` ids
    Sequential,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanConfig {
    /// Directory the board is stored in
    pub data_dir: PathBuf,
    /// Key the board is stored under
    pub storage_key: String,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Id generation for new tasks and columns
    pub id_strategy: IdStrategy,
}

impl Default for KanbanConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: "warn".to_string(),
            id_strategy: IdStrategy::default(),
        }
    }
}

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_strategy: Option<IdStrategy>,
}

impl KanbanConfig {
    /// Load from the standard locations
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        Self::load_from(user_config_file().as_deref(), Path::new(LOCAL_CONFIG_FILE), overrides)
    }

    /// Load with explicit config file locations. Missing files are skipped.
    pub fn load_from(
        user_file: Option<&Path>,
        local_file: &Path,
        overrides: &ConfigOverrides,
    ) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = user_file {
            figment = figment.merge(Toml::file(path));
        }
        let config: Self = figment
            .merge(Toml::file(local_file))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
            .extract()
            .context("Failed to load kanban configuration")?;
        validate_key(&config.storage_key).context("Failed to load kanban configuration")?;

        Ok(config)
    }
}

/// `<data dir>/kanban`, or `./.kanban` where the platform has no data dir
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("kanban"))
        .unwrap_or_else(|| PathBuf::from(".kanban"))
}

/// `<config dir>/kanban/config.toml`
pub fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kanban").join("config.toml"))
}
