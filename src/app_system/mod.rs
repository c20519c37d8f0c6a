//! System orchestration, startup, and shutdown logic.

pub mod booking_system;
pub mod error;
pub mod logging;

pub use booking_system::*;
pub use error::*;
pub use logging::*;
