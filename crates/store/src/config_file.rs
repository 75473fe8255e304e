//! TOML configuration file.
//!
//! ```toml
//! [board]
//! width = 10
//! height = 20
//!
//! [timing]
//! initial_interval_ms = 1000
//! min_interval_ms = 200
//! interval_step_ms = 100
//!
//! [scoring]
//! points_per_line = 100
//! level_up_score_step = 1000
//!
//! [display]
//! cell_width = 2
//! cell_height = 1
//! ```
//!
//! Every key is optional and falls back to its default.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::GameConfig;
use crate::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardSection {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingSection {
    pub initial_interval_ms: u32,
    pub min_interval_ms: u32,
    pub interval_step_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringSection {
    pub points_per_line: u32,
    pub level_up_score_step: u32,
}

/// Terminal characters per board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySection {
    pub cell_width: u16,
    pub cell_height: u16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub board: BoardSection,
    pub timing: TimingSection,
    pub scoring: ScoringSection,
    pub display: DisplaySection,
}

impl Default for BoardSection {
    fn default() -> Self {
        let game = GameConfig::default();
        Self {
            width: game.width,
            height: game.height,
        }
    }
}

impl Default for TimingSection {
    fn default() -> Self {
        let game = GameConfig::default();
        Self {
            initial_interval_ms: game.initial_interval_ms,
            min_interval_ms: game.min_interval_ms,
            interval_step_ms: game.interval_step_ms,
        }
    }
}

impl Default for ScoringSection {
    fn default() -> Self {
        let game = GameConfig::default();
        Self {
            points_per_line: game.points_per_line,
            level_up_score_step: game.level_up_score_step,
        }
    }
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            cell_width: 2,
            cell_height: 1,
        }
    }
}

impl ConfigFile {
    /// The engine configuration, validated.
    pub fn game_config(&self) -> Result<GameConfig, StoreError> {
        let config = GameConfig {
            width: self.board.width,
            height: self.board.height,
            initial_interval_ms: self.timing.initial_interval_ms,
            min_interval_ms: self.timing.min_interval_ms,
            interval_step_ms: self.timing.interval_step_ms,
            level_up_score_step: self.scoring.level_up_score_step,
            points_per_line: self.scoring.points_per_line,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Read and validate the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<ConfigFile, StoreError> {
    let file = match fs::read_to_string(path) {
        Ok(text) => toml::from_str::<ConfigFile>(&text)?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            ConfigFile::default()
        }
        Err(err) => return Err(err.into()),
    };
    file.game_config()?;
    Ok(file)
}

pub fn save_config(path: &Path, config: &ConfigFile) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    info!(path = %path.display(), "config written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigError;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(&dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, ConfigFile::default());
        assert_eq!(loaded.game_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[board]\nwidth = 12\n\n[timing]\nmin_interval_ms = 150\n\n[display]\ncell_height = 2\n",
        )
        .unwrap();

        let loaded = load_config(&path).unwrap();
        let game = loaded.game_config().unwrap();
        assert_eq!(game.width, 12);
        assert_eq!(game.height, 20);
        assert_eq!(game.min_interval_ms, 150);
        assert_eq!(game.initial_interval_ms, 1000);
        assert_eq!(loaded.display.cell_width, 2);
        assert_eq!(loaded.display.cell_height, 2);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[board]\nheight = 0\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, StoreError::Config(ConfigError::ZeroHeight)));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[board]\ndepth = 3\n").unwrap();

        assert!(matches!(load_config(&path), Err(StoreError::Parse(_))));
    }

    #[test]
    fn test_saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");
        let mut config = ConfigFile::default();
        config.scoring.level_up_score_step = 500;
        config.display.cell_width = 3;

        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }
}
