// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, CostarToml, GameConfig, InputConfig, Preferences};
use anyhow::{bail, Result};
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "costar.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config from `costar.toml` in the working directory, if any.
    ///
    /// # Errors
    /// Returns error if the file exists but is invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Creates a config from `path`; a missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::new();
        io::load_toml_config(&mut config, path)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns error if the delimiter is not a single ASCII character or the
    /// default center is blank.
    pub fn validate(&self) -> Result<()> {
        if !self.input.delimiter.is_ascii() {
            bail!("delimiter {:?} must be an ASCII character", self.input.delimiter);
        }
        if self.game.default_center.trim().is_empty() {
            bail!("default_center must not be empty");
        }
        Ok(())
    }
}
