use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use super::error::SystemError;
use crate::aggregator::LedgerEntry;
use crate::arbiter::BookingArbiter;
use crate::catalog::Catalog;
use crate::client_actor::{ClientActor, ClientError, ClientOutcome, RequestSource};
use crate::config::{BookingConfig, ConfigError};
use crate::domain::{BookingRequest, ClientId, RunSummary};
use crate::messages::open_channels;

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub catalog: Catalog,
    pub summary: RunSummary,
    pub ledger: Vec<LedgerEntry>,
    /// Clients that completed their exchange, in client order.
    pub clients: Vec<ClientOutcome>,
}

/// Wires the catalog, the channel pairs, the client tasks and the arbiter together.
///
/// **Lifecycle:**
/// 1. Validate the config and build the catalog
/// 2. Open one channel pair per client and spawn every client
/// 3. Drive the arbiter over all clients in index order
/// 4. Wait for every client task to terminate, then report
pub struct BookingSystem {
    config: BookingConfig,
    catalog: Catalog,
    sources: Vec<RequestSource>,
}

impl BookingSystem {
    /// A system with a random catalog and randomly drawing clients.
    #[instrument(name = "booking_system", skip_all)]
    pub fn new(config: BookingConfig) -> Result<Self, SystemError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        info!(seed, clients = config.clients, showings = config.catalog.showings, "Preparing booking system");

        let catalog = Catalog::generate(&config.catalog, &mut ChaCha20Rng::seed_from_u64(seed));
        let sources = (0..config.clients)
            .map(|index| RequestSource::random(seed, ClientId(index), config.max_tickets, config.catalog.showings))
            .collect();

        Ok(Self {
            config,
            catalog,
            sources,
        })
    }

    /// A system over a fixed catalog where client `i` sends `requests[i]`.
    #[allow(dead_code)]
    pub fn scripted(config: BookingConfig, catalog: Catalog, requests: Vec<BookingRequest>) -> Result<Self, SystemError> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(ConfigError::NoShowings.into());
        }
        if requests.len() != config.clients {
            return Err(SystemError::ScriptMismatch {
                clients: config.clients,
                requests: requests.len(),
            });
        }

        let sources = requests.into_iter().map(RequestSource::Scripted).collect();
        Ok(Self {
            config,
            catalog,
            sources,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn run(self) -> Result<RunReport, SystemError> {
        self.run_with(|actor| tokio::spawn(actor.run())).await
    }

    /// Runs the system, starting each client through `spawn`.
    #[instrument(name = "booking_run", skip_all, fields(clients = self.sources.len()))]
    pub(crate) async fn run_with<F>(self, mut spawn: F) -> Result<RunReport, SystemError>
    where
        F: FnMut(ClientActor) -> JoinHandle<Result<ClientOutcome, ClientError>>,
    {
        let (client_endpoints, arbiter_endpoints) = open_channels(self.sources.len());

        let handles: Vec<_> = client_endpoints
            .into_iter()
            .zip(self.sources)
            .map(|(endpoint, source)| spawn(ClientActor::new(endpoint, source)))
            .collect();
        info!("Clients started");

        let arbiter = BookingArbiter::new(self.catalog, self.config.service_time);
        let result = arbiter.process_all(arbiter_endpoints).await;

        // Every response has been sent or its channel closed, so no client can still be blocked.
        let clients = join_clients(handles).await;

        let outcome = result.inspect_err(|e| error!(error = %e, "Booking run aborted"))?;
        let (summary, ledger) = outcome.aggregator.into_parts();
        info!(completed_clients = clients.len(), "All clients finished");

        Ok(RunReport {
            catalog: outcome.catalog,
            summary,
            ledger,
            clients,
        })
    }
}

async fn join_clients(handles: Vec<JoinHandle<Result<ClientOutcome, ClientError>>>) -> Vec<ClientOutcome> {
    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(Ok(outcome)) => outcomes.push(outcome),
            Ok(Err(e)) => error!(error = %e, "Client delivery failure"),
            Err(e) => error!(error = ?e, "Client task failed"),
        }
    }
    outcomes
}
