//! Game engine - owns the board, the falling piece and the session state
//!
//! The engine is driven from outside: a host timer calls [`GameEngine::tick`]
//! and input handlers call the movement methods, all on one thread. The engine
//! never owns a timer. Whenever the tick cadence must change it leaves a
//! [`DriverCommand`] for the host to pick up with
//! [`GameEngine::take_driver_command`].

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::collision::collides;
use crate::config::{ConfigError, GameConfig};
use crate::pieces::Piece;
use crate::rng::{PieceSource, RandomPieces};
use crate::score_store::{MemoryScoreStore, ScoreStore};
use crate::scoring::{apply_level_ups, line_clear_points};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, Phase, TOP_SCORES_LIMIT};

/// Request to the host's tick driver.
///
/// Only the most recent request matters: `Schedule` replaces whatever timer
/// is running, `Stop` cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCommand {
    Schedule { interval_ms: u32 },
    Stop,
}

/// Summary of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub rows_cleared: usize,
    pub points: u32,
    pub level_up: bool,
    /// The replacement piece could not spawn.
    pub game_over: bool,
}

/// Result of a movement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Not running, or no active piece.
    Ignored,
    Moved,
    /// Candidate collided; the piece is unchanged.
    Blocked,
    /// Downward move was blocked: the piece locked and a new one spawned.
    Locked { rows_cleared: usize },
    /// The piece locked and the next spawn collided.
    ToppedOut,
}

impl MoveOutcome {
    /// Whether the board or the active piece changed.
    pub fn changed(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored | MoveOutcome::Blocked)
    }
}

/// Complete game session
#[derive(Debug)]
pub struct GameEngine<S: ScoreStore = MemoryScoreStore> {
    config: GameConfig,
    board: Board,
    active: Option<Piece>,
    pieces: Box<dyn PieceSource>,
    store: S,
    score: u32,
    level: u32,
    tick_interval_ms: u32,
    phase: Phase,
    /// Pending request for the host timer (consumed by the host).
    driver_command: Option<DriverCommand>,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameEngine<MemoryScoreStore> {
    /// Default 10x20 rules with an in-memory score list.
    pub fn in_memory(pieces: impl PieceSource + 'static) -> Self {
        Self::assemble(
            GameConfig::default(),
            Board::default(),
            MemoryScoreStore::new(),
            Box::new(pieces),
        )
    }
}

impl<S: ScoreStore> GameEngine<S> {
    /// Create an idle engine.
    pub fn new(
        config: GameConfig,
        store: S,
        pieces: Box<dyn PieceSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.width, config.height)?;
        Ok(Self::assemble(config, board, store, pieces))
    }

    /// Create an idle engine with uniformly random pieces.
    pub fn with_seed(config: GameConfig, store: S, seed: u32) -> Result<Self, ConfigError> {
        Self::new(config, store, Box::new(RandomPieces::new(seed)))
    }

    /// Create an idle engine over a pre-filled board.
    ///
    /// The board must match the configured dimensions.
    pub fn from_board(
        config: GameConfig,
        board: Board,
        store: S,
        pieces: Box<dyn PieceSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.width() != config.width as usize || board.height() != config.height as usize {
            return Err(ConfigError::BoardSizeMismatch {
                expected_width: config.width as usize,
                expected_height: config.height as usize,
                width: board.width(),
                height: board.height(),
            });
        }
        Ok(Self::assemble(config, board, store, pieces))
    }

    fn assemble(config: GameConfig, board: Board, store: S, pieces: Box<dyn PieceSource>) -> Self {
        Self {
            board,
            active: None,
            pieces,
            store,
            score: 0,
            level: 1,
            tick_interval_ms: config.initial_interval_ms,
            phase: Phase::Idle,
            driver_command: None,
            last_event: None,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score_store(&self) -> &S {
        &self.store
    }

    /// Take the pending timer request, if any.
    pub fn take_driver_command(&mut self) -> Option<DriverCommand> {
        self.driver_command.take()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Best scores for display, highest first.
    ///
    /// A failing store reads as an empty list.
    pub fn top_scores(&self) -> Vec<u32> {
        self.store.top_n(TOP_SCORES_LIMIT).unwrap_or_else(|err| {
            warn!(%err, "failed to read score store");
            Vec::new()
        })
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.level = self.level;
        out.interval_ms = self.tick_interval_ms;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Begin (or resume) play.
    ///
    /// Idle and Paused resume with the current piece, spawning one if none is
    /// active. Over starts a fresh game. Already running is a no-op.
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::Running => return false,
            Phase::Over => self.reset(),
            Phase::Idle | Phase::Paused => {}
        }

        self.phase = Phase::Running;
        self.driver_command = Some(DriverCommand::Schedule {
            interval_ms: self.tick_interval_ms,
        });
        debug!(interval_ms = self.tick_interval_ms, "game running");

        if self.active.is_none() {
            self.spawn_piece();
        }
        true
    }

    /// Freeze a running game.
    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Paused;
        self.driver_command = Some(DriverCommand::Stop);
        debug!(score = self.score, "game paused");
        true
    }

    /// Return to Idle with an empty board and initial score, level and interval.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.tick_interval_ms = self.config.initial_interval_ms;
        self.phase = Phase::Idle;
        self.driver_command = Some(DriverCommand::Stop);
        self.last_event = None;
        debug!("game reset");
    }

    /// One gravity step: move the piece down, landing it if blocked.
    pub fn tick(&mut self) -> MoveOutcome {
        if self.phase != Phase::Running {
            return MoveOutcome::Ignored;
        }
        self.move_piece(0, 1)
    }

    /// Translate the active piece.
    ///
    /// A colliding candidate is discarded. When a downward move is blocked the
    /// piece has landed: it locks, completed rows clear and the next piece
    /// spawns.
    pub fn move_piece(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        if !self.phase.accepts_input() {
            return MoveOutcome::Ignored;
        }
        let Some(active) = self.active else {
            return MoveOutcome::Ignored;
        };

        let candidate = active.translated(dx, dy);
        if !collides(&self.board, &candidate) {
            self.active = Some(candidate);
            return MoveOutcome::Moved;
        }

        if dy > 0 {
            return self.land(active);
        }
        MoveOutcome::Blocked
    }

    /// Rotate the active piece clockwise if the rotated shape fits.
    pub fn rotate(&mut self) -> bool {
        if !self.phase.accepts_input() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let candidate = active.rotated();
        if collides(&self.board, &candidate) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Apply an adapter intent or lifecycle command.
    ///
    /// Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1, 0).changed(),
            GameAction::MoveRight => self.move_piece(1, 0).changed(),
            GameAction::SoftDrop => self.move_piece(0, 1).changed(),
            GameAction::Rotate => self.rotate(),
            GameAction::Start => self.start(),
            GameAction::Pause => self.pause(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Lock `piece` (its last accepted placement), score, and spawn the next piece.
    fn land(&mut self, piece: Piece) -> MoveOutcome {
        self.board.lock(piece.cells());
        self.active = None;

        let rows_cleared = self.board.clear_completed_rows();
        let points = line_clear_points(rows_cleared, self.config.points_per_line);
        self.score = self.score.saturating_add(points);

        let progress = apply_level_ups(self.score, self.level, self.tick_interval_ms, &self.config);
        if progress.leveled_up() {
            self.level = progress.level;
            self.tick_interval_ms = progress.interval_ms;
            self.driver_command = Some(DriverCommand::Schedule {
                interval_ms: self.tick_interval_ms,
            });
            info!(
                level = self.level,
                interval_ms = self.tick_interval_ms,
                "level up"
            );
        }

        let spawned = self.spawn_piece();
        self.last_event = Some(LockEvent {
            rows_cleared,
            points,
            level_up: progress.leveled_up(),
            game_over: !spawned,
        });

        if spawned {
            MoveOutcome::Locked { rows_cleared }
        } else {
            MoveOutcome::ToppedOut
        }
    }

    /// Spawn the next piece; a collision at the spawn position ends the game.
    fn spawn_piece(&mut self) -> bool {
        let kind = self.pieces.next_kind();
        let piece = Piece::spawn(kind, self.board.width());
        if collides(&self.board, &piece) {
            self.game_over();
            return false;
        }
        self.active = Some(piece);
        true
    }

    fn game_over(&mut self) {
        self.phase = Phase::Over;
        self.active = None;
        self.driver_command = Some(DriverCommand::Stop);
        info!(score = self.score, level = self.level, "game over");

        if let Err(err) = self.store.append(self.score) {
            warn!(%err, score = self.score, "failed to persist score");
        }
    }
}
