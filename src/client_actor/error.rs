use thiserror::Error;

use crate::domain::ClientId;

/// Delivery failures that end a client actor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("Client {client}: request channel closed before sending")]
    RequestSend { client: ClientId },
    #[error("Client {client}: response channel closed before a decision arrived")]
    ResponseReceive { client: ClientId },
}
