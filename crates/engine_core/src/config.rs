// crates/engine_core/src/config.rs

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use engine_shared::GameConfig;
use tracing::info;

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

pub fn parse_config(text: &str) -> Result<GameConfig, ConfigError> {
    Ok(serde_json::from_str(text)?)
}

/// Reads a JSON config. A missing file is not an error: defaults are used.
pub fn load_config(path: &Path) -> Result<GameConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => parse_config(&text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no config file; using defaults");
            Ok(GameConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = load_config(Path::new("definitely/not/here.json")).expect("defaults");
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn bad_json_is_a_parse_error() {
        let err = parse_config("{ hold_threshold: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn capacity_round_trips_from_json() {
        let cfg = parse_config(r#"{ "inventory_capacity": 3 }"#).expect("valid");
        assert_eq!(cfg.inventory_capacity, 3);
    }
}
