// src/config/io.rs
//! Reading `costar.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use super::types::{Config, CostarToml};

/// Loads `path` into `config`. A missing file leaves `config` untouched.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_toml_config(config: &mut Config, path: &Path) -> Result<bool> {
    if !path.exists() {
        debug!("no config at {}, using defaults", path.display());
        return Ok(false);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_toml(config, &content).with_context(|| format!("invalid config {}", path.display()))?;
    debug!("loaded config from {}", path.display());
    Ok(true)
}

/// # Errors
/// Returns error if `content` is not a valid `costar.toml`.
pub fn parse_toml(config: &mut Config, content: &str) -> Result<()> {
    let parsed: CostarToml = toml::from_str(content)?;
    config.input = parsed.input;
    config.game = parsed.game;
    config.preferences = parsed.preferences;
    Ok(())
}
