// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Tool configuration.
//!
//! Every field has a default, so a config file only needs the keys it changes.
//! Command-line flags are applied on top of the loaded file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmdConfig {
    /// Default log filter; `RUST_LOG` still wins when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Inputs larger than this are refused before decoding.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,

    /// On failure, print the partially decoded value labelled `PARTIAL`.
    #[serde(default)]
    pub print_partial: bool,

    /// Indent unit for pretty-printed output.
    #[serde(default = "default_indent")]
    pub indent: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_max_input_bytes() -> usize {
    16 * 1024 * 1024
}

fn default_indent() -> String {
    "\t".to_string()
}

impl Default for CmdConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            max_input_bytes: default_max_input_bytes(),
            print_partial: false,
            indent: default_indent(),
        }
    }
}

impl CmdConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.level_filter()?;
        if self.max_input_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_input_bytes must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        log::LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::Invalid(format!("unknown log level '{}'", self.log_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config: CmdConfig = toml::from_str("print_partial = true").expect("parse");
        assert!(config.print_partial);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.indent, "\t");
        assert_eq!(config.max_input_bytes, 16 * 1024 * 1024);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "log_level = \"debug\"\nmax_input_bytes = 1024\nindent = \"  \""
        )
        .expect("write config");

        let config = CmdConfig::from_file(file.path()).expect("load");
        assert_eq!(config.level_filter().expect("level"), log::LevelFilter::Debug);
        assert_eq!(config.max_input_bytes, 1024);
        assert_eq!(config.indent, "  ");
        assert!(!config.print_partial);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = CmdConfig {
            log_level: "loud".into(),
            ..CmdConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = CmdConfig {
            max_input_bytes: 0,
            ..CmdConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "max_input_bytes = \"lots\"").expect("write config");
        assert!(matches!(
            CmdConfig::from_file(file.path()),
            Err(ConfigError::Toml(_))
        ));
    }
}
