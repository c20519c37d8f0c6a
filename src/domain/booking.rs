use std::fmt;

use super::ShowingId;

/// Index of a client actor. The arbiter services clients in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(pub usize);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The single request a client submits.
///
/// Nothing here guarantees `ticket_count > 0` or that `showing_id` exists;
/// the arbiter validates both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRequest {
    pub ticket_count: u32,
    pub showing_id: ShowingId,
}

impl BookingRequest {
    pub fn new(ticket_count: u32, showing_id: ShowingId) -> Self {
        Self {
            ticket_count,
            showing_id,
        }
    }
}

/// Outcome the arbiter sends back to a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingDecision {
    Success,
    Failure,
}

impl fmt::Display for BookingDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingDecision::Success => write!(f, "Success"),
            BookingDecision::Failure => write!(f, "Failure"),
        }
    }
}
