//! blockfall (workspace facade crate).
//!
//! Re-exports the member crates under short names so binaries, integration
//! tests and benches can write `blockfall::core::GameEngine` and friends.

pub use blockfall_core as core;
pub use blockfall_driver as driver;
pub use blockfall_input as input;
pub use blockfall_store as store;
pub use blockfall_term as term;
pub use blockfall_types as types;
