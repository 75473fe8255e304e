//! Default locations for the score and config files.
//!
//! An environment variable overrides each location; otherwise the platform
//! data/config directory is used, falling back to the working directory.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "blockfall";

pub const SCORES_ENV: &str = "BLOCKFALL_SCORES";
pub const CONFIG_ENV: &str = "BLOCKFALL_CONFIG";

pub fn default_scores_path() -> PathBuf {
    resolve(env::var_os(SCORES_ENV).map(PathBuf::from), dirs::data_dir(), "scores.json")
}

pub fn default_config_path() -> PathBuf {
    resolve(env::var_os(CONFIG_ENV).map(PathBuf::from), dirs::config_dir(), "config.toml")
}

fn resolve(overridden: Option<PathBuf>, base: Option<PathBuf>, file: &str) -> PathBuf {
    if let Some(path) = overridden.filter(|p| !p.as_os_str().is_empty()) {
        return path;
    }
    match base {
        Some(dir) => dir.join(APP_DIR).join(file),
        None => PathBuf::from(file),
    }
}
