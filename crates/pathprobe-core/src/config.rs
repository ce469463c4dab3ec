use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::registry::{PathEntry, Registry};

/// Global configuration loaded from `~/.config/pathprobe/config.toml`.
///
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Quiet period after the last keystroke before the input is probed.
    pub debounce_ms: u64,
    /// Simulated backend round trip for each classification.
    pub backend_latency_ms: u64,
    /// Known paths; if missing, the builtin storage is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<Vec<PathEntry>>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 100,
            backend_latency_ms: 0,
            registry: None,
        }
    }
}

impl ProbeConfig {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn backend_latency(&self) -> Duration {
        Duration::from_millis(self.backend_latency_ms)
    }

    /// Builds the read-only registry from config entries, or the builtin set.
    pub fn build_registry(&self) -> Result<Registry> {
        match &self.registry {
            Some(entries) => Registry::from_entries(entries.clone())
                .context("invalid [[registry]] entries in config"),
            None => Ok(Registry::builtin()),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pathprobe")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ProbeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ProbeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<ProbeConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ProbeConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
