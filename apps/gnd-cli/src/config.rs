//! Optional ambient configuration, loaded from `~/.config/gnd/config.toml`.
//!
//! Nothing in the interpreter core depends on this file existing; it only
//! supplies defaults the CLI flags can override. A missing or unreadable
//! config file is silently treated as "no defaults" rather than an error —
//! this is strictly quality-of-life, not part of the scripting language.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default `--log-level`, overridden by an explicit CLI flag.
    pub log_level: Option<String>,
}

impl Config {
    /// Loads the config file if present, returning defaults otherwise.
    pub fn load() -> Config {
        let Some(path) = config_path() else {
            return Config::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gnd").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn parses_log_level_key() {
        let config: Config = toml::from_str("log_level = \"debug\"").unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }
}
