use thiserror::Error;

use crate::catalog::Catalog;
use crate::domain::{BookingRequest, Showing, ShowingId};

/// Malformed request content. Scored as a failed booking, never fatal.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Ticket count must be positive")]
    ZeroTickets,
    #[error("Unknown showing {showing}: catalog has {showings} showings")]
    UnknownShowing { showing: ShowingId, showings: usize },
}

/// Resolves the showing a request names and checks the request against it.
///
/// The showing id is checked first, so a request that is wrong on both counts
/// is reported as an unknown showing.
pub fn validate<'a>(request: &BookingRequest, catalog: &'a mut Catalog) -> Result<&'a mut Showing, ValidationError> {
    let showings = catalog.len();
    let showing = catalog
        .get_mut(request.showing_id)
        .ok_or(ValidationError::UnknownShowing {
            showing: request.showing_id,
            showings,
        })?;
    if request.ticket_count == 0 {
        return Err(ValidationError::ZeroTickets);
    }
    Ok(showing)
}
