use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, error, info, instrument, warn};

use super::error::ClientError;
use crate::domain::{BookingDecision, BookingRequest, ClientId, ShowingId};
use crate::messages::ClientEndpoint;

/// Derives a per-client seed so clients sharing a run seed draw unrelated sequences.
pub fn client_seed(run_seed: u64, client: ClientId) -> u64 {
    run_seed ^ (client.0 as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Where a client's single request comes from.
pub enum RequestSource {
    /// Draws `1..=max_tickets` tickets for a showing in `0..showings`.
    Random {
        rng: ChaCha20Rng,
        max_tickets: u32,
        showings: u32,
    },
    Scripted(BookingRequest),
}

impl RequestSource {
    pub fn random(run_seed: u64, client: ClientId, max_tickets: u32, showings: u32) -> Self {
        RequestSource::Random {
            rng: ChaCha20Rng::seed_from_u64(client_seed(run_seed, client)),
            max_tickets,
            showings,
        }
    }

    fn draw(self) -> BookingRequest {
        match self {
            RequestSource::Random {
                mut rng,
                max_tickets,
                showings,
            } => {
                let ticket_count = rng.gen_range(1..=max_tickets);
                let showing_id = ShowingId(rng.gen_range(0..showings));
                BookingRequest::new(ticket_count, showing_id)
            }
            RequestSource::Scripted(request) => request,
        }
    }
}

/// What a client saw once its exchange with the arbiter completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOutcome {
    pub client: ClientId,
    pub request: BookingRequest,
    pub decision: BookingDecision,
}

impl ClientOutcome {
    /// Human-readable line shown under the client's status line.
    pub fn message(&self) -> String {
        let BookingRequest {
            ticket_count,
            showing_id,
        } = self.request;
        match self.decision {
            BookingDecision::Success => {
                format!("We Booked {ticket_count} Tickets For Movie With ID: {showing_id}")
            }
            BookingDecision::Failure => {
                format!("We Couldn't Book {ticket_count} Tickets For Movie With ID: {showing_id}")
            }
        }
    }
}

/// The client's status line and message, printed as one block.
impl fmt::Display for ClientOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Client {}: {}\n{}", self.client, self.decision, self.message())
    }
}

/// One simulated customer: sends exactly one request and waits for exactly one decision.
pub struct ClientActor {
    endpoint: ClientEndpoint,
    source: RequestSource,
}

impl ClientActor {
    pub fn new(endpoint: ClientEndpoint, source: RequestSource) -> Self {
        Self { endpoint, source }
    }

    pub fn client(&self) -> ClientId {
        self.endpoint.client
    }

    #[instrument(name = "client_actor", skip(self), fields(client = %self.client()))]
    pub async fn run(self) -> Result<ClientOutcome, ClientError> {
        let ClientEndpoint {
            client,
            request_tx,
            response_rx,
        } = self.endpoint;

        let request = self.source.draw();
        debug!(tickets = request.ticket_count, showing = %request.showing_id, "Sending request");

        if request_tx.send(request).is_err() {
            error!("Request channel closed");
            return Err(ClientError::RequestSend { client });
        }

        let decision = match response_rx.await {
            Ok(decision) => decision,
            Err(_) => {
                error!("Response channel closed");
                return Err(ClientError::ResponseReceive { client });
            }
        };

        let outcome = ClientOutcome {
            client,
            request,
            decision,
        };

        println!("{outcome}");

        match decision {
            BookingDecision::Success => info!(tickets = request.ticket_count, showing = %request.showing_id, "Booking confirmed"),
            BookingDecision::Failure => warn!(tickets = request.ticket_count, showing = %request.showing_id, "Booking denied"),
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::channel_pair;
    use crate::mock_framework::{expect_request, respond};

    #[test]
    fn random_draws_stay_in_range() {
        for index in 0..200 {
            let request = RequestSource::random(11, ClientId(index), 3, 10).draw();
            assert!((1..=3).contains(&request.ticket_count));
            assert!(request.showing_id.0 < 10);
        }
    }

    #[test]
    fn seeds_differ_per_client_and_repeat_per_run() {
        assert_ne!(client_seed(5, ClientId(0)), client_seed(5, ClientId(1)));
        assert_eq!(client_seed(5, ClientId(3)), client_seed(5, ClientId(3)));

        let a = RequestSource::random(99, ClientId(2), 3, 10).draw();
        let b = RequestSource::random(99, ClientId(2), 3, 10).draw();
        assert_eq!(a, b);
    }

    #[test]
    fn outcome_messages() {
        let request = BookingRequest::new(2, ShowingId(6));
        let booked = ClientOutcome {
            client: ClientId(0),
            request,
            decision: BookingDecision::Success,
        };
        assert_eq!(booked.message(), "We Booked 2 Tickets For Movie With ID: 6");

        let denied = ClientOutcome {
            decision: BookingDecision::Failure,
            ..booked
        };
        assert_eq!(denied.message(), "We Couldn't Book 2 Tickets For Movie With ID: 6");
    }

    #[test]
    fn status_and_message_render_as_one_block() {
        let outcome = ClientOutcome {
            client: ClientId(7),
            request: BookingRequest::new(1, ShowingId(4)),
            decision: BookingDecision::Success,
        };
        assert_eq!(
            outcome.to_string(),
            "Client 7: Success\nWe Booked 1 Tickets For Movie With ID: 4"
        );
    }

    #[tokio::test]
    async fn sends_once_and_reports_decision() {
        let (endpoint, mut arbiter_side) = channel_pair(ClientId(1));
        let request = BookingRequest::new(3, ShowingId(2));
        let actor = ClientActor::new(endpoint, RequestSource::Scripted(request));
        let task = tokio::spawn(actor.run());

        let received = expect_request(&mut arbiter_side).await.expect("Expected a request");
        assert_eq!(received, request);
        respond(arbiter_side, BookingDecision::Failure).expect("Client hung up");

        let outcome = task.await.unwrap().unwrap();
        assert_eq!(outcome.client, ClientId(1));
        assert_eq!(outcome.decision, BookingDecision::Failure);
    }

    #[tokio::test]
    async fn closed_response_is_delivery_failure() {
        let (endpoint, mut arbiter_side) = channel_pair(ClientId(4));
        let actor = ClientActor::new(endpoint, RequestSource::Scripted(BookingRequest::new(1, ShowingId(0))));
        let task = tokio::spawn(actor.run());

        expect_request(&mut arbiter_side).await.expect("Expected a request");
        drop(arbiter_side);

        let result = task.await.unwrap();
        assert_eq!(result, Err(ClientError::ResponseReceive { client: ClientId(4) }));
    }

    #[tokio::test]
    async fn closed_request_is_delivery_failure() {
        let (endpoint, arbiter_side) = channel_pair(ClientId(5));
        drop(arbiter_side);

        let actor = ClientActor::new(endpoint, RequestSource::Scripted(BookingRequest::new(1, ShowingId(0))));
        let result = actor.run().await;
        assert_eq!(result, Err(ClientError::RequestSend { client: ClientId(5) }));
    }
}
