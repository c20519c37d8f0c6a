//! The sequential booking loop that owns and mutates the seat inventory.

pub mod error;
mod service;
pub mod validation;

pub use error::*;
pub use service::*;
pub use validation::*;
