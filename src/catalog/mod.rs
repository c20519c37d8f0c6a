//! The showing table the arbiter books against.

use rand::Rng;
use tracing::{debug, instrument};

use crate::config::{CatalogConfig, LAST_START_HOUR};
use crate::domain::{Showing, ShowingId};

/// Ordered set of showings. A showing's id is its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    showings: Vec<Showing>,
}

impl Catalog {
    /// Draws a fresh showing table.
    ///
    /// Every showing gets `1..=max_seats` seats, a price from `price_range`,
    /// a start hour in `0..=21` and runs one or two hours.
    #[instrument(name = "generate_catalog", skip(config, rng), fields(showings = config.showings))]
    pub fn generate<R: Rng>(config: &CatalogConfig, rng: &mut R) -> Self {
        let showings = (0..config.showings)
            .map(|id| {
                let start_hour = rng.gen_range(0..=LAST_START_HOUR);
                let end_hour = start_hour + rng.gen_range(1..=2u8);
                let capacity = rng.gen_range(1..=config.max_seats);
                let price = rng.gen_range(config.price_range.clone());
                Showing::new(ShowingId(id), start_hour, end_hour, capacity, price)
            })
            .collect::<Vec<_>>();

        debug!(total_seats = showings.iter().map(Showing::initial_capacity).sum::<u32>(), "Catalog generated");
        Self { showings }
    }

    /// Builds a catalog from explicit showings, renumbering them by position.
    #[allow(dead_code)]
    pub fn from_showings(showings: impl IntoIterator<Item = Showing>) -> Self {
        let showings = showings
            .into_iter()
            .enumerate()
            .map(|(index, mut showing)| {
                showing.id = ShowingId(index as u32);
                showing
            })
            .collect();
        Self { showings }
    }

    pub fn len(&self) -> usize {
        self.showings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.showings.is_empty()
    }

    #[allow(dead_code)]
    pub fn contains(&self, id: ShowingId) -> bool {
        id.index() < self.showings.len()
    }

    #[allow(dead_code)]
    pub fn get(&self, id: ShowingId) -> Option<&Showing> {
        self.showings.get(id.index())
    }

    pub fn get_mut(&mut self, id: ShowingId) -> Option<&mut Showing> {
        self.showings.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Showing> {
        self.showings.iter()
    }

    pub fn available_seats(&self) -> u32 {
        self.showings.iter().map(Showing::available_seats).sum()
    }
}
