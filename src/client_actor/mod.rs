//! Simulated customers. Each runs as its own task and books exactly once.

mod actor;
pub mod error;

pub use actor::*;
pub use error::*;
