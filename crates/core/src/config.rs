//! Game configuration - board geometry, timing and scoring constants
//!
//! Values are fixed for the lifetime of an engine. Misconfiguration is caught
//! up front by [`GameConfig::validate`] instead of producing undefined geometry.

use derive_more::{Display, Error};

use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_INTERVAL_MS, INTERVAL_STEP_MS, LEVEL_UP_SCORE_STEP,
    MIN_INTERVAL_MS, POINTS_PER_LINE,
};

/// Construction-time configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("board width must be at least 1")]
    ZeroWidth,
    #[display("board height must be at least 1")]
    ZeroHeight,
    #[display("tick intervals must be positive")]
    ZeroInterval,
    #[display("minimum interval {min_ms}ms exceeds initial interval {initial_ms}ms")]
    MinAboveInitial { min_ms: u32, initial_ms: u32 },
    #[display("level-up score step must be positive")]
    ZeroLevelStep,
    #[display("board rows must all be {expected} cells wide (row {row} has {found})")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[display("board is {width}x{height}, configuration expects {expected_width}x{expected_height}")]
    BoardSizeMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board columns.
    pub width: u16,
    /// Board rows.
    pub height: u16,
    pub initial_interval_ms: u32,
    /// Floor for the interval as levels rise.
    pub min_interval_ms: u32,
    pub interval_step_ms: u32,
    /// Level `n` ends when the score reaches `n * level_up_score_step`.
    pub level_up_score_step: u32,
    pub points_per_line: u32,
}

impl GameConfig {
    /// Check the configuration for values that cannot produce a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.initial_interval_ms == 0 || self.min_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.min_interval_ms > self.initial_interval_ms {
            return Err(ConfigError::MinAboveInitial {
                min_ms: self.min_interval_ms,
                initial_ms: self.initial_interval_ms,
            });
        }
        if self.level_up_score_step == 0 {
            return Err(ConfigError::ZeroLevelStep);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            initial_interval_ms: DEFAULT_INTERVAL_MS,
            min_interval_ms: MIN_INTERVAL_MS,
            interval_step_ms: INTERVAL_STEP_MS,
            level_up_score_step: LEVEL_UP_SCORE_STEP,
            points_per_line: POINTS_PER_LINE,
        }
    }
}
