//! Shared vocabulary for blockfall crates
//!
//! Piece kinds, session phases, player actions and the default rule numbers.
//! Nothing here depends on another crate, so the engine, the terminal layer
//! and the persistence layer can all agree on these names.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (overridable through `GameConfig`):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn column**: `width / 2 - 1` (4 on the default board), row 0
//!
//! # Timing And Scoring Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_INTERVAL_MS` | 1000 | Tick interval at level 1 |
//! | `MIN_INTERVAL_MS` | 200 | Interval floor |
//! | `INTERVAL_STEP_MS` | 100 | Interval reduction per level |
//! | `LEVEL_UP_SCORE_STEP` | 1000 | Score per level boundary |
//! | `POINTS_PER_LINE` | 100 | Points per cleared row |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, Phase, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.color_id(), 4);
//! assert_eq!(PieceKind::from_color_id(4), Some(piece));
//!
//! assert!(Phase::Running.accepts_input());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Tick interval at level 1 (1000ms = one row per second)
pub const DEFAULT_INTERVAL_MS: u32 = 1000;

/// The tick interval never drops below this value
pub const MIN_INTERVAL_MS: u32 = 200;

/// Interval reduction applied on every level increase
pub const INTERVAL_STEP_MS: u32 = 100;

/// A new level is reached every time the score crosses `level * LEVEL_UP_SCORE_STEP`
pub const LEVEL_UP_SCORE_STEP: u32 = 1000;

/// Points awarded per cleared row
pub const POINTS_PER_LINE: u32 = 100;

/// Number of scores shown in the high-score list
pub const TOP_SCORES_LIMIT: usize = 10;

/// Largest shape matrix dimension (the I piece is 4 cells long)
pub const MAX_SHAPE_DIM: usize = 4;

/// The seven tetromino piece kinds
///
/// Each kind has a fixed palette slot (its `color_id`):
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **S**: Green
/// - **Z**: Red (mirror of S)
/// - **T**: Purple
/// - **L**: Orange
/// - **J**: Blue (mirror of L)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    S,
    Z,
    T,
    L,
    J,
}

impl PieceKind {
    /// All kinds in palette order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Index into the fixed seven-colour palette.
    pub fn color_id(&self) -> u8 {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::S => 2,
            PieceKind::Z => 3,
            PieceKind::T => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }

    /// Inverse of [`PieceKind::color_id`].
    pub fn from_color_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }
}

/// Lifecycle phase of a game session
///
/// ```text
/// Idle --start--> Running --pause--> Paused --start--> Running
///                    |
///               spawn collision
///                    v
///                  Over --start/reset--> ...
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No timer running and no active piece
    #[default]
    Idle,
    /// Timer active, piece falling, input accepted
    Running,
    /// Timer stopped, piece frozen
    Paused,
    /// Terminal for the current game
    Over,
}

impl Phase {
    /// Movement and rotation intents are only honoured while running.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Phase::Running)
    }
}

/// Intents and lifecycle commands forwarded by a presentation adapter
///
/// The first four mutate the active piece; the last three drive the
/// session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one row down, landing it if blocked
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Start a new game or resume a paused one
    Start,
    /// Pause a running game
    Pause,
    /// Return to idle with a cleared board
    Restart,
}
