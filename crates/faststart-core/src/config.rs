use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::relocate::CommandRelocator;
use crate::suffix::{sanitize_suffix, Suffix, DEFAULT_SUFFIX};

/// External relocation tool (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelocatorConfig {
    /// Program to run, looked up on PATH if not absolute.
    pub program: String,
    /// Arguments; `{input}` and `{output}` are replaced by the file paths.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for RelocatorConfig {
    fn default() -> Self {
        Self {
            program: "qtfaststart".to_string(),
            args: vec!["{input}".to_string(), "{output}".to_string()],
        }
    }
}

/// Global configuration loaded from `~/.config/faststart/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaststartConfig {
    /// Suffix for the fast-start companion (e.g. "-faststart", "_optimized").
    /// Invalid characters are replaced; blank means the default.
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Optional relocation tool; if missing, `qtfaststart {input} {output}` is used.
    #[serde(default)]
    pub relocator: Option<RelocatorConfig>,
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

impl Default for FaststartConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            relocator: None,
        }
    }
}

impl FaststartConfig {
    pub fn sanitized_suffix(&self) -> Suffix {
        sanitize_suffix(&self.suffix)
    }

    pub fn command_relocator(&self) -> CommandRelocator {
        let cfg = self.relocator.clone().unwrap_or_default();
        CommandRelocator::new(cfg.program, cfg.args)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("faststart")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FaststartConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<FaststartConfig> {
    if !path.exists() {
        let default_cfg = FaststartConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FaststartConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
