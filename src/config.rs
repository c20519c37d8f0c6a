//! Run parameters. The binary takes no flags; it runs with [`BookingConfig::default`].

use std::ops::RangeInclusive;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CLIENTS: usize = 10;
pub const DEFAULT_SHOWINGS: u32 = 10;
pub const DEFAULT_MAX_SEATS: u32 = 5;
pub const DEFAULT_MAX_TICKETS: u32 = 3;
pub const DEFAULT_SERVICE_TIME: Duration = Duration::from_millis(500);

/// Latest hour a showing may start at.
pub const LAST_START_HOUR: u8 = 21;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("At least one client is required")]
    NoClients,
    #[error("At least one showing is required")]
    NoShowings,
    #[error("Seat cap must be positive")]
    NoSeats,
    #[error("Ticket cap per request must be positive")]
    NoTickets,
    #[error("Invalid price range: {min}..={max}")]
    InvalidPriceRange { min: u32, max: u32 },
}

/// Parameters for generating the showing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub showings: u32,
    pub max_seats: u32,
    pub price_range: RangeInclusive<u32>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            showings: DEFAULT_SHOWINGS,
            max_seats: DEFAULT_MAX_SEATS,
            price_range: 7..=15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfig {
    pub clients: usize,
    pub catalog: CatalogConfig,
    /// Upper bound of tickets a random client asks for; the lower bound is 1.
    pub max_tickets: u32,
    /// Simulated work the arbiter performs per request.
    pub service_time: Duration,
    /// Seeds the catalog and every client. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            clients: DEFAULT_CLIENTS,
            catalog: CatalogConfig::default(),
            max_tickets: DEFAULT_MAX_TICKETS,
            service_time: DEFAULT_SERVICE_TIME,
            seed: None,
        }
    }
}

impl BookingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clients == 0 {
            return Err(ConfigError::NoClients);
        }
        if self.catalog.showings == 0 {
            return Err(ConfigError::NoShowings);
        }
        if self.catalog.max_seats == 0 {
            return Err(ConfigError::NoSeats);
        }
        if self.max_tickets == 0 {
            return Err(ConfigError::NoTickets);
        }
        let (min, max) = (*self.catalog.price_range.start(), *self.catalog.price_range.end());
        if min == 0 || min > max {
            return Err(ConfigError::InvalidPriceRange { min, max });
        }
        Ok(())
    }
}
