//! Optional settings file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::MarkRange;

/// Top-level marksheet configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarksheetConfig {
    /// Title shown in the menu banner.
    #[serde(default = "default_title")]
    pub title: String,
    /// Lowest accepted mark.
    #[serde(default = "default_mark_min")]
    pub mark_min: f64,
    /// Highest accepted mark.
    #[serde(default = "default_mark_max")]
    pub mark_max: f64,
}

fn default_title() -> String {
    "Student Mark Management System".to_string()
}
fn default_mark_min() -> f64 {
    0.0
}
fn default_mark_max() -> f64 {
    20.0
}

impl Default for MarksheetConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            mark_min: default_mark_min(),
            mark_max: default_mark_max(),
        }
    }
}

impl MarksheetConfig {
    pub fn mark_range(&self) -> MarkRange {
        MarkRange::new(self.mark_min, self.mark_max)
    }

    /// Reject bounds that would make every mark unacceptable.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.mark_min.is_finite() && self.mark_max.is_finite(),
            "mark bounds must be finite numbers"
        );
        anyhow::ensure!(
            self.mark_min < self.mark_max,
            "mark_min ({}) must be below mark_max ({})",
            self.mark_min,
            self.mark_max
        );
        Ok(())
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `marksheet.toml` in the current directory
/// 2. `~/.config/marksheet/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<MarksheetConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("marksheet.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<MarksheetConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => MarksheetConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("marksheet"))
}
