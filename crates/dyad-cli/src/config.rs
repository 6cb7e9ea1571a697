//! Configuration management for Dyad CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project config file.
pub const CONFIG_FILE: &str = "dyad.toml";

/// Name of the per-project data directory.
pub const DATA_DIR: &str = ".dyad";

/// Dyad project configuration. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub display: DisplayConfig,

    /// Directory relative store paths resolve against.
    #[serde(skip)]
    root: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Snapshot file; relative paths are taken from the project root.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub color: bool,
    /// Print the per-class score breakdown after classifying.
    #[serde(default = "default_true")]
    pub show_analysis: bool,
}

fn default_store_path() -> PathBuf {
    Path::new(DATA_DIR).join("knowledge.json")
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            show_analysis: default_true(),
        }
    }
}

impl Config {
    /// Load config from dyad.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Self::load_from(&cwd)
    }

    /// Load config by searching upward from `start`.
    ///
    /// Without a config file, defaults apply and `start` is the root.
    pub fn load_from(start: &Path) -> Result<Self> {
        match find_config_file(start) {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                let mut config: Config = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config: {}", path.display()))?;
                config.root = path.parent().map(Path::to_path_buf);
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            None => Ok(Config {
                root: Some(start.to_path_buf()),
                ..Config::default()
            }),
        }
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Absolute location of the snapshot file.
    pub fn store_path(&self) -> PathBuf {
        if self.store.path.is_absolute() {
            return self.store.path.clone();
        }
        match &self.root {
            Some(root) => root.join(&self.store.path),
            None => self.store.path.clone(),
        }
    }
}

/// Find dyad.toml in `start` or its parents.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
