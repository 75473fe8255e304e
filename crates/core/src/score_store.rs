//! Score store port - persisted list of finished-game scores
//!
//! The engine appends one score per finished game and reads the list back in
//! descending order. The concrete medium (file, database, memory) belongs to
//! the host.

use std::convert::Infallible;
use std::fmt;

/// Ordered-descending store of past scores.
pub trait ScoreStore: fmt::Debug {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Record the score of a finished game.
    fn append(&mut self, score: u32) -> Result<(), Self::Error>;

    /// Up to `n` highest scores, highest first.
    fn top_n(&self, n: usize) -> Result<Vec<u32>, Self::Error>;
}

/// Sort descending and keep the first `n`.
pub fn top_n_of(scores: &[u32], n: usize) -> Vec<u32> {
    let mut sorted = scores.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.truncate(n);
    sorted
}

/// Process-local store, for tests and headless runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    scores: Vec<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores in append order.
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl ScoreStore for MemoryScoreStore {
    type Error = Infallible;

    fn append(&mut self, score: u32) -> Result<(), Self::Error> {
        self.scores.push(score);
        Ok(())
    }

    fn top_n(&self, n: usize) -> Result<Vec<u32>, Self::Error> {
        Ok(top_n_of(&self.scores, n))
    }
}
