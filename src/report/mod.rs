//! Plain-text tables for the console report.

use std::fmt;

use crate::catalog::Catalog;
use crate::domain::RunSummary;

/// Section heading, e.g. `============ Movies ============`.
pub struct Banner<'a>(pub &'a str);

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "\t============ {} ============", self.0)
    }
}

/// `ID Start End Available Seats Price`, one row per showing.
pub struct CatalogTable<'a>(pub &'a Catalog);

impl fmt::Display for CatalogTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<4}{:<8}{:<8}{:<18}{}", "ID", "Start", "End", "Available Seats", "Price")?;
        for showing in self.0.iter() {
            writeln!(
                f,
                "{:<4}{:<8}{:<8}{:<18}{}",
                showing.id,
                format!("{:02}:00", showing.start_hour),
                format!("{:02}:30", showing.end_hour),
                showing.available_seats(),
                showing.price_per_seat
            )?;
        }
        Ok(())
    }
}

/// Per-showing request outcomes.
pub struct ResultsTable<'a>(pub &'a Catalog);

impl fmt::Display for ResultsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<7}{:<10}{:<12}{}", "Movie", "Requests", "Successful", "Unsuccessful")?;
        for showing in self.0.iter() {
            writeln!(
                f,
                "{:<7}{:<10}{:<12}{}",
                showing.id,
                showing.requests(),
                showing.successful(),
                showing.unsuccessful()
            )?;
        }
        Ok(())
    }
}

pub struct SummaryBlock<'a>(pub &'a RunSummary);

impl fmt::Display for SummaryBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        writeln!(f, "Total Requests: {}", summary.total_requests)?;
        writeln!(f, "Total Successful Bookings: {}", summary.total_successes)?;
        writeln!(f, "Total Profits: {}", summary.total_revenue)?;
        writeln!(f, "Total Tickets Sold: {}", summary.total_tickets_sold)?;
        if summary.rejected_requests > 0 {
            writeln!(f, "Rejected Requests: {}", summary.rejected_requests)?;
        }
        Ok(())
    }
}
