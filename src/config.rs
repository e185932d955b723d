use crate::core::{Result, RosterError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level configuration structure parsed from an optional TOML file.
///
/// The tool runs with built-in defaults when no file is present; the
/// configuration only overrides where the roster database lives.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub database: Option<DatabaseConfig>,
}

/// Database-related configuration.
#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub path: Option<String>,
}

/// Loads configuration from a TOML file at the given path.
///
/// # Arguments
///
/// * `path` - The file path to the TOML configuration file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| RosterError::Config(e.to_string()))
}
