//! # Cinema Booking
//!
//! A fixed population of client actors concurrently request tickets from a single
//! booking arbiter that owns the whole seat inventory.
//!
//! - **Domain types** - showings, requests, decisions and run counters → [`domain`]
//! - **Channels** - one single-use request path and one response path per client → [`messages`]
//! - **Client actors** - one task per customer, one request each → [`client_actor`]
//! - **Arbiter** - the sequential loop that decides and mutates inventory → [`arbiter`]
//! - **Aggregator** - run-wide accounting and the decision ledger → [`aggregator`]
//! - **System coordinator** - startup, the final barrier, and the run report → [`app_system`]
//!
//! ## Expected Output
//!
//! ```text
//!         ============ Movies ============
//! ID  Start   End     Available Seats   Price
//! 0   14:00   15:30   3                 11
//! ...
//! Client 0: Success
//! We Booked 2 Tickets For Movie With ID: 4
//! ...
//!         ============ Summary ============
//! Total Requests: 10
//! ```

mod aggregator;
mod app_system;
mod arbiter;
mod catalog;
mod client_actor;
mod config;
mod domain;
mod messages;
mod report;

#[cfg(test)]
mod mock_framework;

use tracing::{debug, error, info};

use crate::app_system::{setup_tracing, BookingSystem, SystemError};
use crate::config::BookingConfig;
use crate::report::{Banner, CatalogTable, ResultsTable, SummaryBlock};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting cinema booking simulation");

    // Build the catalog and every client before anything runs
    let system = BookingSystem::new(BookingConfig::default()).map_err(exit_error)?;

    print!("{}", Banner("Movies"));
    println!("{}", CatalogTable(system.catalog()));

    // Clients print their own results as the arbiter answers them
    let report = system.run().await.map_err(exit_error)?;

    for entry in &report.ledger {
        debug!(client = %entry.client, decision = %entry.decision(), reason = ?entry.reason, "Ledger entry");
    }

    print!("{}", Banner("Update Movies Table"));
    println!("{}", CatalogTable(&report.catalog));

    print!("{}", Banner("Results"));
    println!("{}", ResultsTable(&report.catalog));

    print!("{}", Banner("Summary"));
    println!("{}", SummaryBlock(&report.summary));

    info!(
        completed_clients = report.clients.len(),
        failures = report.summary.total_failures(),
        "Simulation completed successfully"
    );
    Ok(())
}

fn exit_error(e: SystemError) -> String {
    error!(error = %e, "Simulation failed");
    e.to_string()
}
