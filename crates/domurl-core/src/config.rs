use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url::{BaseProvider, CurrentDir, FixedBase, ParseOptions};

/// How the CLI prints a parsed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `name: value` line per component.
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/domurl/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomurlConfig {
    /// Base for relative references when none is given on the command line.
    /// Falls back to the current working directory.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Default for `--no-transform`: keep relative references as found.
    #[serde(default)]
    pub no_transform: bool,
    /// Output format for `parse`: "text" (default) or "json".
    #[serde(default)]
    pub output: Option<OutputFormat>,
}

impl DomurlConfig {
    /// Base provider for relative references: `cli_base` beats the configured
    /// `base_url`, which beats the working directory.
    pub fn base_provider(&self, cli_base: Option<&str>) -> Box<dyn BaseProvider> {
        match cli_base.or(self.base_url.as_deref()) {
            Some(base) => Box::new(FixedBase::new(base)),
            None => Box::new(CurrentDir),
        }
    }

    pub fn parse_options(&self, cli_no_transform: bool) -> ParseOptions {
        ParseOptions {
            no_transform: cli_no_transform || self.no_transform,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("domurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DomurlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DomurlConfig::default();
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
pub fn load_from(path: &Path) -> Result<DomurlConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: DomurlConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
