//! Persistence error type.

use std::io;

use derive_more::{Display, Error, From};

use crate::core::ConfigError;

/// Failure reading or writing the score file or the config file.
#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    #[display("I/O error: {_0}")]
    Io(io::Error),
    #[display("malformed score file: {_0}")]
    Json(serde_json::Error),
    #[display("malformed config file: {_0}")]
    Parse(toml::de::Error),
    #[display("failed to serialize config: {_0}")]
    Serialize(toml::ser::Error),
    #[display("invalid configuration: {_0}")]
    Config(ConfigError),
}
