//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ConfigRoot;
use crate::validate::validate_config;
use std::path::Path;

/// Loads and validates a configuration file, choosing the parser by
/// extension (`.json` or `.toml`).
pub fn load_config(path: &Path) -> Result<ConfigRoot, ConfigError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if ext != "json" && ext != "toml" {
        return Err(ConfigError::UnsupportedFormat(ext));
    }
    let content = std::fs::read_to_string(path)?;
    if ext == "json" {
        load_config_from_json(&content)
    } else {
        load_config_from_toml(&content)
    }
}

/// Parses and validates a configuration from a JSON string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_json(content: &str) -> Result<ConfigRoot, ConfigError> {
    let config: ConfigRoot =
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Parses and validates a configuration from a TOML string.
pub fn load_config_from_toml(content: &str) -> Result<ConfigRoot, ConfigError> {
    let config: ConfigRoot =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}
