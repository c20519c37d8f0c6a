//! Run-wide accounting folded alongside the arbiter's decisions.

use crate::arbiter::ValidationError;
use crate::domain::{BookingDecision, BookingRequest, ClientId, InsufficientSeats, RunSummary};

/// Why the arbiter decided the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionReason {
    Booked { cost: u64 },
    InsufficientSeats(InsufficientSeats),
    Rejected(ValidationError),
}

impl DecisionReason {
    pub fn decision(&self) -> BookingDecision {
        match self {
            DecisionReason::Booked { .. } => BookingDecision::Success,
            DecisionReason::InsufficientSeats(_) | DecisionReason::Rejected(_) => BookingDecision::Failure,
        }
    }
}

/// One processed request, in service order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerEntry {
    pub client: ClientId,
    pub request: BookingRequest,
    pub reason: DecisionReason,
}

impl LedgerEntry {
    pub fn decision(&self) -> BookingDecision {
        self.reason.decision()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregator {
    summary: RunSummary,
    ledger: Vec<LedgerEntry>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a request as soon as it has been received, before it is judged.
    pub fn record_received(&mut self) {
        self.summary.total_requests += 1;
    }

    pub fn record_decision(&mut self, client: ClientId, request: BookingRequest, reason: DecisionReason) {
        match reason {
            DecisionReason::Booked { cost } => {
                self.summary.total_successes += 1;
                self.summary.total_tickets_sold += u64::from(request.ticket_count);
                self.summary.total_revenue += cost;
            }
            DecisionReason::InsufficientSeats(_) => {}
            DecisionReason::Rejected(_) => self.summary.rejected_requests += 1,
        }
        self.ledger.push(LedgerEntry {
            client,
            request,
            reason,
        });
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    #[cfg(test)]
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    pub fn into_parts(self) -> (RunSummary, Vec<LedgerEntry>) {
        (self.summary, self.ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShowingId;

    #[test]
    fn folds_each_reason() {
        let mut aggregator = Aggregator::new();

        aggregator.record_received();
        aggregator.record_decision(ClientId(0), BookingRequest::new(2, ShowingId(0)), DecisionReason::Booked { cost: 22 });

        aggregator.record_received();
        aggregator.record_decision(
            ClientId(1),
            BookingRequest::new(3, ShowingId(0)),
            DecisionReason::InsufficientSeats(InsufficientSeats { requested: 3, available: 1 }),
        );

        aggregator.record_received();
        aggregator.record_decision(
            ClientId(2),
            BookingRequest::new(0, ShowingId(1)),
            DecisionReason::Rejected(ValidationError::ZeroTickets),
        );

        let summary = aggregator.summary();
        assert_eq!(summary.total_requests, 3);
        assert_eq!(summary.total_successes, 1);
        assert_eq!(summary.total_failures(), 2);
        assert_eq!(summary.total_tickets_sold, 2);
        assert_eq!(summary.total_revenue, 22);
        assert_eq!(summary.rejected_requests, 1);

        let decisions: Vec<_> = aggregator.ledger().iter().map(LedgerEntry::decision).collect();
        assert_eq!(
            decisions,
            vec![BookingDecision::Success, BookingDecision::Failure, BookingDecision::Failure]
        );
    }
}
