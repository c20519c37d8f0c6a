use thiserror::Error;

use crate::domain::ClientId;

/// Transport failures. Any of these aborts the run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArbiterError {
    #[error("Failed to receive request from client {client}: channel closed")]
    RequestReceive { client: ClientId },
    #[error("Failed to send decision to client {client}: channel closed")]
    ResponseSend { client: ClientId },
}
