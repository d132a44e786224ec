//! Configuration loading from TOML and JSON files

mod catalog;
mod constants;

pub use catalog::Catalog;
pub use constants::{
    default_constants, AdditiveReactionConstants, AmplifyingReactionConstants, BaselineConstants,
    FormulaConstants, ResonanceConstants,
};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a JSON string and deserialize it
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = serde_json::from_str(content)?;
    Ok(config)
}

/// Load and validate a catalog, picking the format from the file extension
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => {
            let catalog: Catalog = load_toml(path)?;
            catalog.validate()?;
            Ok(catalog)
        }
        Some("json") => Catalog::from_json_str(&fs::read_to_string(path)?),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}
