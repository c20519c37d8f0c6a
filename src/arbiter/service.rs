use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::error::ArbiterError;
use super::validation::{validate, ValidationError};
use crate::aggregator::{Aggregator, DecisionReason};
use crate::catalog::Catalog;
use crate::domain::{BookingDecision, BookingRequest, Showing};
use crate::messages::ArbiterEndpoint;

/// What the arbiter hands back once every client has been serviced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArbiterOutcome {
    pub catalog: Catalog,
    pub aggregator: Aggregator,
}

/// The single authority over seat inventory.
///
/// Owns the catalog outright and services one client at a time, end to end, so no
/// two decisions ever overlap and the catalog needs no lock.
pub struct BookingArbiter {
    catalog: Catalog,
    aggregator: Aggregator,
    service_time: Duration,
}

impl BookingArbiter {
    pub fn new(catalog: Catalog, service_time: Duration) -> Self {
        Self {
            catalog,
            aggregator: Aggregator::new(),
            service_time,
        }
    }

    /// Services every client exactly once, in client-index order.
    ///
    /// A transport failure stops the loop. The endpoints not yet serviced are dropped
    /// with it, which closes their channels and releases the clients waiting on them.
    #[instrument(name = "booking_arbiter", skip_all, fields(clients = endpoints.len()))]
    pub async fn process_all(mut self, mut endpoints: Vec<ArbiterEndpoint>) -> Result<ArbiterOutcome, ArbiterError> {
        info!("Arbiter starting");

        // Service order is client-index order, whatever order the endpoints arrive in.
        endpoints.sort_by_key(|endpoint| endpoint.client);

        for endpoint in endpoints {
            self.process_one(endpoint).await?;
        }

        let summary = self.aggregator.summary();
        info!(
            total_requests = summary.total_requests,
            successes = summary.total_successes,
            revenue = summary.total_revenue,
            remaining_seats = self.catalog.available_seats(),
            "Arbiter finished"
        );

        Ok(ArbiterOutcome {
            catalog: self.catalog,
            aggregator: self.aggregator,
        })
    }

    #[instrument(fields(client = %endpoint.client), skip(self, endpoint))]
    async fn process_one(&mut self, endpoint: ArbiterEndpoint) -> Result<BookingDecision, ArbiterError> {
        let ArbiterEndpoint {
            client,
            request_rx,
            response_tx,
        } = endpoint;

        let request = match request_rx.await {
            Ok(request) => request,
            Err(_) => {
                error!("Request channel closed before a request arrived");
                return Err(ArbiterError::RequestReceive { client });
            }
        };
        self.aggregator.record_received();
        debug!(tickets = request.ticket_count, showing = %request.showing_id, "Processing booking request");

        let validation = validate(&request, &mut self.catalog);

        tokio::time::sleep(self.service_time).await;

        let reason = match validation {
            Ok(showing) => book(showing, request.ticket_count),
            Err(err) => self.reject(request, err),
        };
        let decision = reason.decision();
        self.aggregator.record_decision(client, request, reason);

        if response_tx.send(decision).is_err() {
            error!(%decision, "Response channel closed before the decision was delivered");
            return Err(ArbiterError::ResponseSend { client });
        }

        Ok(decision)
    }

    fn reject(&mut self, request: BookingRequest, err: ValidationError) -> DecisionReason {
        warn!(error = %err, "Request rejected");
        if let Some(showing) = self.catalog.get_mut(request.showing_id) {
            showing.record_rejection();
        }
        DecisionReason::Rejected(err)
    }
}

fn book(showing: &mut Showing, ticket_count: u32) -> DecisionReason {
    match showing.reserve(ticket_count) {
        Ok(cost) => {
            info!(cost, remaining_seats = showing.available_seats(), "Booking accepted");
            DecisionReason::Booked { cost }
        }
        Err(shortfall) => {
            warn!(
                requested = shortfall.requested,
                available = shortfall.available,
                "Insufficient seats"
            );
            DecisionReason::InsufficientSeats(shortfall)
        }
    }
}
