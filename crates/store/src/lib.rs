//! Persistence for blockfall: the score history file and the config file.

pub mod config_file;
pub mod error;
pub mod paths;
pub mod scores;

pub use blockfall_core as core;

pub use config_file::{load_config, save_config, ConfigFile, DisplaySection};
pub use error::StoreError;
pub use paths::{default_config_path, default_scores_path};
pub use scores::JsonScoreFile;
