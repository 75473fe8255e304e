//! Scoring module - line-clear points, levels and tick interval
//!
//! Rules:
//! - Every cleared row is worth `points_per_line`.
//! - Level `n` ends when the score reaches `n * level_up_score_step`; each
//!   boundary reached raises the level by exactly one.
//! - Every level increase shortens the interval by `interval_step_ms`, never
//!   below `min_interval_ms`.

use crate::config::GameConfig;

/// Level and interval after applying a score change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    pub interval_ms: u32,
    /// Number of level boundaries crossed by this update.
    pub levels_gained: u32,
}

impl LevelProgress {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Points for clearing `rows` rows in a single lock.
pub fn line_clear_points(rows: usize, points_per_line: u32) -> u32 {
    (rows as u32).saturating_mul(points_per_line)
}

/// Interval after one level increase.
pub fn next_interval(current_ms: u32, config: &GameConfig) -> u32 {
    current_ms
        .saturating_sub(config.interval_step_ms)
        .max(config.min_interval_ms)
}

/// Raise `level` once per boundary `score` has reached.
///
/// The level is computed directly from the score, so huge scores with a small
/// step cost the same as any other update. Levels saturate at `u32::MAX`.
pub fn apply_level_ups(score: u32, level: u32, interval_ms: u32, config: &GameConfig) -> LevelProgress {
    let step = u64::from(config.level_up_score_step.max(1));
    let reached = u32::try_from(u64::from(score) / step + 1).unwrap_or(u32::MAX);
    let levels_gained = reached.saturating_sub(level);
    let interval_ms = if levels_gained == 0 {
        interval_ms
    } else {
        interval_ms
            .saturating_sub(config.interval_step_ms.saturating_mul(levels_gained))
            .max(config.min_interval_ms)
    };
    LevelProgress {
        level: level.max(reached),
        interval_ms,
        levels_gained,
    }
}
