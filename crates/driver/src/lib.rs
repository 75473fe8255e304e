//! Tick driver for the blockfall engine.
//!
//! The engine never owns a timer; it emits [`DriverCommand`](core::DriverCommand)s
//! and this crate turns them into a single tokio interval task whose ticks are
//! delivered back to the (synchronous) game loop.

pub mod session;
pub mod tick_driver;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use session::Session;
pub use tick_driver::{Tick, TickDriver};
