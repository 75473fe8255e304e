//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminals, timers, or files, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised by calling the engine directly
//! - **Portable**: The host decides how ticks are produced and scores are stored
//!
//! # Module Structure
//!
//! - [`board`]: occupancy grid with line clearing
//! - [`pieces`]: tetromino shape matrices and clockwise rotation
//! - [`collision`]: placement validity checks
//! - [`scoring`]: points per row, level boundaries and tick interval
//! - [`config`]: construction-time configuration and its validation
//! - [`rng`]: uniform piece selection behind the [`PieceSource`] trait
//! - [`score_store`]: the [`ScoreStore`] port and an in-memory implementation
//! - [`game_engine`]: the session state machine tying it all together
//! - [`snapshot`]: read-only views for presentation adapters
//!
//! # Game Rules
//!
//! - Pieces spawn at column `width / 2 - 1`, row 0, with a uniformly random kind
//! - Moves and rotations are built as candidates and committed only if they fit
//! - A blocked downward move locks the piece, clears complete rows and spawns the next
//! - Each cleared row scores 100; every 1000 points raises the level
//! - Each level shortens the tick interval by 100ms, down to 200ms
//! - A spawn that collides ends the game and records the score
//!
//! # Example
//!
//! ```
//! use blockfall_core::{FixedPieces, GameEngine, MoveOutcome};
//! use blockfall_core::types::{PieceKind, Phase};
//!
//! let mut engine = GameEngine::in_memory(FixedPieces::repeat(PieceKind::O));
//! engine.start();
//!
//! // Drop the O piece until it lands on the floor.
//! while engine.tick() == MoveOutcome::Moved {}
//!
//! assert!(engine.board().is_occupied(4, 19));
//! assert_eq!(engine.score(), 0);
//! assert_eq!(engine.phase(), Phase::Running);
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod game_engine;
pub mod pieces;
pub mod rng;
pub mod score_store;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use config::{ConfigError, GameConfig};
pub use game_engine::{DriverCommand, GameEngine, LockEvent, MoveOutcome};
pub use pieces::{Piece, Shape};
pub use rng::{FixedPieces, PieceSource, RandomPieces, SimpleRng};
pub use score_store::{MemoryScoreStore, ScoreStore};
pub use scoring::{apply_level_ups, line_clear_points, next_interval, LevelProgress};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
