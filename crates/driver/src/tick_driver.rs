//! TickDriver: the host timer that feeds `GameEngine::tick`.
//!
//! At most one timer task is alive at any instant. Every (re)schedule aborts
//! the previous task and bumps a generation counter; ticks carry the
//! generation they were produced under, and ticks from an older generation
//! that were already queued are discarded on receive. A level-up reschedule
//! therefore never yields a duplicate tick from the old period.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use crate::core::DriverCommand;

/// One timer firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

pub struct TickDriver {
    handle: Handle,
    tx: mpsc::UnboundedSender<Tick>,
    rx: mpsc::UnboundedReceiver<Tick>,
    generation: u64,
    task: Option<JoinHandle<()>>,
    interval_ms: Option<u32>,
}

impl TickDriver {
    /// Create a stopped driver whose timer tasks run on `handle`.
    pub fn new(handle: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            tx,
            rx,
            generation: 0,
            task: None,
            interval_ms: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Period of the live timer, if any.
    pub fn interval_ms(&self) -> Option<u32> {
        self.interval_ms
    }

    /// Generation of the live timer; ticks from other generations are dropped.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace any running timer with one firing every `interval_ms`.
    ///
    /// The first tick arrives one full period after this call.
    pub fn schedule(&mut self, interval_ms: u32) {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let period = Duration::from_millis(u64::from(interval_ms.max(1)));
        let first = Instant::now() + period;
        let tx = self.tx.clone();
        self.task = Some(self.handle.spawn(async move {
            let mut ticker = time::interval_at(first, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(Tick { generation }).is_err() {
                    break;
                }
            }
        }));
        self.interval_ms = Some(interval_ms);
        debug!(interval_ms, generation, "tick driver scheduled");
    }

    /// Cancel the running timer, if any.
    pub fn stop(&mut self) {
        if self.cancel() {
            self.generation += 1;
            debug!(generation = self.generation, "tick driver stopped");
        }
    }

    pub fn apply(&mut self, command: DriverCommand) {
        match command {
            DriverCommand::Schedule { interval_ms } => self.schedule(interval_ms),
            DriverCommand::Stop => self.stop(),
        }
    }

    /// Next current-generation tick that is already due, without waiting.
    pub fn try_next(&mut self) -> Option<Tick> {
        while let Ok(tick) = self.rx.try_recv() {
            if tick.generation == self.generation {
                return Some(tick);
            }
        }
        None
    }

    /// Wait for the next current-generation tick.
    ///
    /// Stays pending while the driver is stopped.
    pub async fn next(&mut self) -> Tick {
        loop {
            match self.rx.recv().await {
                Some(tick) if tick.generation == self.generation => return tick,
                Some(_) => continue,
                // The driver holds a sender, so the channel never closes.
                None => std::future::pending::<()>().await,
            }
        }
    }

    fn cancel(&mut self) -> bool {
        self.interval_ms = None;
        match self.task.take() {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.cancel();
    }
}
