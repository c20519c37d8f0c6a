use thiserror::Error;

use crate::arbiter::ArbiterError;
use crate::config::ConfigError;

/// Failures that end a run with a non-zero exit status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SystemError {
    #[error("Setup failed: {0}")]
    Config(#[from] ConfigError),
    #[error("Client count ({clients}) does not match scripted requests ({requests})")]
    ScriptMismatch { clients: usize, requests: usize },
    #[error("Booking run aborted: {0}")]
    Arbiter(#[from] ArbiterError),
}
