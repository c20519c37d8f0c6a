use std::fmt;
use thiserror::Error;

/// Identity of a showing. Doubles as its index in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShowingId(pub u32);

impl ShowingId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ShowingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Returned by [`Showing::reserve`] when the showing cannot cover a request.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Insufficient seats: requested {requested}, available {available}")]
pub struct InsufficientSeats {
    pub requested: u32,
    pub available: u32,
}

/// One bookable movie slot with a finite seat inventory.
///
/// Seat count and counters are only reachable through [`Showing::reserve`] and
/// [`Showing::record_rejection`], so `available_seats` can never grow and never
/// exceeds the capacity the showing was created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showing {
    pub id: ShowingId,
    pub start_hour: u8,
    pub end_hour: u8,
    pub price_per_seat: u32,
    initial_capacity: u32,
    available_seats: u32,
    successful: u32,
    unsuccessful: u32,
}

impl Showing {
    pub fn new(id: ShowingId, start_hour: u8, end_hour: u8, capacity: u32, price_per_seat: u32) -> Self {
        Self {
            id,
            start_hour,
            end_hour,
            price_per_seat,
            initial_capacity: capacity,
            available_seats: capacity,
            successful: 0,
            unsuccessful: 0,
        }
    }

    pub fn initial_capacity(&self) -> u32 {
        self.initial_capacity
    }

    pub fn available_seats(&self) -> u32 {
        self.available_seats
    }

    pub fn successful(&self) -> u32 {
        self.successful
    }

    pub fn unsuccessful(&self) -> u32 {
        self.unsuccessful
    }

    /// Requests concerning this showing, whatever their outcome.
    pub fn requests(&self) -> u32 {
        self.successful + self.unsuccessful
    }

    /// Books `ticket_count` seats if enough remain and returns the cost.
    ///
    /// On failure the inventory is untouched and only the unsuccessful counter moves.
    pub fn reserve(&mut self, ticket_count: u32) -> Result<u64, InsufficientSeats> {
        if self.available_seats >= ticket_count {
            self.available_seats -= ticket_count;
            self.successful += 1;
            Ok(u64::from(ticket_count) * u64::from(self.price_per_seat))
        } else {
            self.unsuccessful += 1;
            Err(InsufficientSeats {
                requested: ticket_count,
                available: self.available_seats,
            })
        }
    }

    /// Scores a malformed request against this showing without touching seats.
    pub fn record_rejection(&mut self) {
        self.unsuccessful += 1;
    }
}
