//! Configuration for the showcase store.
//!
//! Settings come from a TOML file with a `[storage]` and a `[logging]`
//! section. Every key is optional; missing keys take their defaults.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_DATABASE_URL};
use crate::logger;
use crate::utils::datetime;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Which storage backend serves requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Process-local collections, lost on exit
    #[default]
    Memory,
    /// SQLite database through SeaORM
    Database,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: BackendKind,
    /// SQLite connection URL, used by the database backend
    pub database_url: String,
    /// Populate an empty store with the sample catalogue
    pub seed_sample_data: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Append log lines to this file instead of stderr
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Memory,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            seed_sample_data: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Discover a configuration file, or fall back to defaults when none exists.
    pub fn load() -> Result<Self> {
        match Self::candidate_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate the TOML file at `path`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config =
            toml::from_str(&raw).with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Where `load` looks, highest precedence first: the working directory,
    /// then the per-user config directory.
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Ok(user_config) = Self::get_default_config_path() {
            paths.push(user_config);
        }
        paths
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage.backend == BackendKind::Database {
            let url = self.storage.database_url.trim();
            if url.is_empty() {
                anyhow::bail!("database_url cannot be empty when backend = \"database\"");
            }
            if !url.starts_with("sqlite:") {
                anyhow::bail!("Unsupported database_url '{}': only sqlite URLs are supported", url);
            }
        }

        logger::parse_level(&self.logging.level).context("Invalid logging level")?;
        Ok(())
    }

    /// Write the default configuration, with a short explanatory header, to `path`.
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let body = toml::to_string_pretty(&Self::default()).context("Failed to serialize default config")?;
        let header = format!(
            "# Showcase Store Configuration File\n# Generated on {}\n#\n# storage.backend is \"memory\" or \"database\"\n\n",
            datetime::date_of(datetime::now())
        );

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }
        std::fs::write(path, header + &body)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.display());
        Ok(())
    }

    /// Per-user configuration directory (`$XDG_CONFIG_HOME/showcase-store` on Linux)
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join(CONFIG_DIR_NAME))
    }

    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
