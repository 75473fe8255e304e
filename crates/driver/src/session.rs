//! Session: an engine paired with the timer that drives it.
//!
//! Every call into the engine is followed by draining its pending
//! [`DriverCommand`](crate::core::DriverCommand), so the driver always mirrors
//! the engine's phase and interval.

use tracing::trace;

use crate::core::{GameEngine, MemoryScoreStore, MoveOutcome, ScoreStore};
use crate::tick_driver::TickDriver;
use crate::types::GameAction;

pub struct Session<S: ScoreStore = MemoryScoreStore> {
    engine: GameEngine<S>,
    driver: TickDriver,
}

impl<S: ScoreStore> Session<S> {
    pub fn new(engine: GameEngine<S>, driver: TickDriver) -> Self {
        let mut session = Self { engine, driver };
        session.sync_driver();
        session
    }

    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    pub fn driver(&self) -> &TickDriver {
        &self.driver
    }

    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let changed = self.engine.apply_action(action);
        self.sync_driver();
        changed
    }

    /// Apply one gravity step.
    pub fn on_tick(&mut self) -> MoveOutcome {
        let outcome = self.engine.tick();
        self.sync_driver();
        outcome
    }

    /// Apply every tick that is already due. Returns how many were applied.
    pub fn pump_ticks(&mut self) -> usize {
        let mut applied = 0;
        while self.driver.try_next().is_some() {
            self.on_tick();
            applied += 1;
        }
        applied
    }

    /// Wait for the next tick and apply it.
    pub async fn next_tick(&mut self) -> MoveOutcome {
        self.driver.next().await;
        self.on_tick()
    }

    fn sync_driver(&mut self) {
        if let Some(command) = self.engine.take_driver_command() {
            trace!(?command, "driver command");
            self.driver.apply(command);
        }
    }
}
