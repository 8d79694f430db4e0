use anyhow::Result;
use serde::{Deserialize, Serialize};
use statusline_git::style::color_to_ansi;
use statusline_git::{DEFAULT_TIMEOUT, Icons, Palette};
use std::fs;
use std::path::Path;
use std::time::Duration;

use super::parse_duration;
use crate::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub git: GitConfig,
    pub context: ContextConfig,
    pub colors: ColorConfig,
    pub icons: IconConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Show repository status at all
    pub enabled: bool,
    /// Per-query timeout, e.g. "500ms" or "1s"
    pub timeout: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Real context usage (percent) that reads as 100% on the meter
    pub limit_percent: f64,
}

/// Color names per status part, e.g. "green", "bold yellow", "#ff8800".
/// Unset fields keep the built-in palette.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub remote: Option<String>,
    pub reference: Option<String>,
    pub wip: Option<String>,
    pub sync: Option<String>,
    pub stash: Option<String>,
    pub action: Option<String>,
    pub conflicted: Option<String>,
    pub staged: Option<String>,
    pub unstaged: Option<String>,
    pub untracked: Option<String>,
}

/// Icon overrides. Unset fields keep the built-in Nerd Font glyphs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub branch: Option<String>,
    pub tag: Option<String>,
    pub commit: Option<String>,
    pub github: Option<String>,
    pub gitlab: Option<String>,
    pub bitbucket: Option<String>,
    pub git: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Claude data directory (default: ~/.claude)
    pub claude_dir: Option<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout: format!("{}ms", DEFAULT_TIMEOUT.as_millis()),
        }
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            limit_percent: 80.0,
        }
    }
}

impl GitConfig {
    /// Parsed query timeout; invalid or zero values use the default.
    pub fn timeout(&self) -> Duration {
        parse_duration(&self.timeout)
            .filter(|d| !d.is_zero())
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}

impl ColorConfig {
    /// Build the renderer palette, resolving color names to ANSI codes.
    pub fn palette(&self) -> Palette {
        let mut palette = Palette::default();
        let slots = [
            (&self.remote, &mut palette.remote),
            (&self.reference, &mut palette.reference),
            (&self.wip, &mut palette.wip),
            (&self.sync, &mut palette.sync),
            (&self.stash, &mut palette.stash),
            (&self.action, &mut palette.action),
            (&self.conflicted, &mut palette.conflicted),
            (&self.staged, &mut palette.staged),
            (&self.unstaged, &mut palette.unstaged),
            (&self.untracked, &mut palette.untracked),
        ];
        for (name, slot) in slots {
            if let Some(name) = name {
                let code = color_to_ansi(name);
                if !code.is_empty() {
                    *slot = code;
                }
            }
        }
        palette
    }
}

impl IconConfig {
    /// Build the renderer icon set.
    pub fn icons(&self) -> Icons {
        let mut icons = Icons::default();
        let slots = [
            (&self.branch, &mut icons.branch),
            (&self.tag, &mut icons.tag),
            (&self.commit, &mut icons.commit),
            (&self.github, &mut icons.github),
            (&self.gitlab, &mut icons.gitlab),
            (&self.bitbucket, &mut icons.bitbucket),
            (&self.git, &mut icons.git),
        ];
        for (icon, slot) in slots {
            if let Some(icon) = icon {
                slot.clone_from(icon);
            }
        }
        icons
    }
}

impl Config {
    /// Load from the default config file; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_file())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn limit_percent(&self) -> f64 {
        let limit = self.context.limit_percent;
        if limit.is_finite() && limit > 0.0 {
            limit
        } else {
            ContextConfig::default().limit_percent
        }
    }
}
