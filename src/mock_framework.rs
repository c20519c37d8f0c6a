//! # Mock Framework
//!
//! Utilities for testing one side of the booking protocol in isolation.
//!
//! A test that exercises a [`ClientActor`](crate::client_actor::ClientActor) holds the
//! arbiter's half of the channel pair and plays the arbiter with [`expect_request`] and
//! [`respond`]. A test that exercises the arbiter uses [`scripted_client`] to stand in for
//! a client that has already sent its request.

use crate::domain::{BookingDecision, BookingRequest, ClientId};
use crate::messages::{channel_pair, ArbiterEndpoint, DecisionReceiver};

/// Waits for the client's request. `None` if the client hung up without sending.
pub async fn expect_request(endpoint: &mut ArbiterEndpoint) -> Option<BookingRequest> {
    (&mut endpoint.request_rx).await.ok()
}

/// Answers the client, consuming the arbiter's half.
pub fn respond(endpoint: ArbiterEndpoint, decision: BookingDecision) -> Result<(), BookingDecision> {
    endpoint.response_tx.send(decision)
}

/// A client that has already sent `request`. The returned receiver gets the arbiter's decision.
pub fn scripted_client(client: ClientId, request: BookingRequest) -> (ArbiterEndpoint, DecisionReceiver) {
    let (client_side, arbiter_side) = channel_pair(client);
    // The arbiter half is alive, so the send cannot fail.
    let _ = client_side.request_tx.send(request);
    (arbiter_side, client_side.response_rx)
}

/// A client that vanished without ever sending.
pub fn silent_client(client: ClientId) -> ArbiterEndpoint {
    let (_, arbiter_side) = channel_pair(client);
    arbiter_side
}

/// A client that sent `request` and then dropped its response receiver.
pub fn departed_client(client: ClientId, request: BookingRequest) -> ArbiterEndpoint {
    let (arbiter_side, response_rx) = scripted_client(client, request);
    drop(response_rx);
    arbiter_side
}

/// Collects decisions from scripted clients in order. Missing decisions come back as `None`.
pub async fn collect_decisions(receivers: Vec<DecisionReceiver>) -> Vec<Option<BookingDecision>> {
    let mut decisions = Vec::with_capacity(receivers.len());
    for receiver in receivers {
        decisions.push(receiver.await.ok());
    }
    decisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShowingId;

    #[tokio::test]
    async fn scripted_client_round_trip() {
        let request = BookingRequest::new(1, ShowingId(3));
        let (mut endpoint, response_rx) = scripted_client(ClientId(0), request);

        assert_eq!(expect_request(&mut endpoint).await, Some(request));
        respond(endpoint, BookingDecision::Success).unwrap();

        assert_eq!(collect_decisions(vec![response_rx]).await, vec![Some(BookingDecision::Success)]);
    }

    #[tokio::test]
    async fn silent_and_departed_clients() {
        let mut silent = silent_client(ClientId(1));
        assert_eq!(expect_request(&mut silent).await, None);

        let departed = departed_client(ClientId(2), BookingRequest::new(1, ShowingId(0)));
        assert_eq!(respond(departed, BookingDecision::Failure), Err(BookingDecision::Failure));
    }
}
