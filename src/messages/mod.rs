use tokio::sync::oneshot;

use crate::domain::{BookingDecision, BookingRequest, ClientId};

/// Single-use paths between one client and the arbiter. Sending consumes the
/// sender, and dropping either half closes the path for its peer.
pub type RequestSender = oneshot::Sender<BookingRequest>;
pub type RequestReceiver = oneshot::Receiver<BookingRequest>;
pub type DecisionSender = oneshot::Sender<BookingDecision>;
pub type DecisionReceiver = oneshot::Receiver<BookingDecision>;

/// The client's half of its channel pair.
#[derive(Debug)]
pub struct ClientEndpoint {
    pub client: ClientId,
    pub request_tx: RequestSender,
    pub response_rx: DecisionReceiver,
}

/// The arbiter's half of one client's channel pair.
#[derive(Debug)]
pub struct ArbiterEndpoint {
    pub client: ClientId,
    pub request_rx: RequestReceiver,
    pub response_tx: DecisionSender,
}

pub fn channel_pair(client: ClientId) -> (ClientEndpoint, ArbiterEndpoint) {
    let (request_tx, request_rx) = oneshot::channel();
    let (response_tx, response_rx) = oneshot::channel();
    (
        ClientEndpoint {
            client,
            request_tx,
            response_rx,
        },
        ArbiterEndpoint {
            client,
            request_rx,
            response_tx,
        },
    )
}

/// Opens one pair per client. Both vectors are indexed by client.
pub fn open_channels(clients: usize) -> (Vec<ClientEndpoint>, Vec<ArbiterEndpoint>) {
    (0..clients).map(|index| channel_pair(ClientId(index))).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShowingId;

    #[tokio::test]
    async fn pair_carries_one_message_each_way() {
        let (client, arbiter) = channel_pair(ClientId(3));
        assert_eq!(client.client, arbiter.client);

        let request = BookingRequest::new(2, ShowingId(4));
        client.request_tx.send(request).unwrap();
        assert_eq!(arbiter.request_rx.await.unwrap(), request);

        arbiter.response_tx.send(BookingDecision::Success).unwrap();
        assert_eq!(client.response_rx.await.unwrap(), BookingDecision::Success);
    }

    #[tokio::test]
    async fn dropped_peer_closes_path() {
        let (client, arbiter) = channel_pair(ClientId(0));
        drop(arbiter);

        assert!(client.request_tx.send(BookingRequest::new(1, ShowingId(0))).is_err());
        assert!(client.response_rx.await.is_err());
    }

    #[test]
    fn open_channels_aligns_indices() {
        let (clients, arbiters) = open_channels(4);
        assert_eq!(clients.len(), 4);
        for (index, (client, arbiter)) in clients.iter().zip(&arbiters).enumerate() {
            assert_eq!(client.client, ClientId(index));
            assert_eq!(arbiter.client, ClientId(index));
        }
    }
}
