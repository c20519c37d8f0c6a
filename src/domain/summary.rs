/// Global counters folded by the aggregator over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total_requests: u32,
    pub total_successes: u32,
    pub total_tickets_sold: u64,
    pub total_revenue: u64,
    /// Requests rejected by validation, whether or not they named a real showing.
    pub rejected_requests: u32,
}

impl RunSummary {
    pub fn total_failures(&self) -> u32 {
        self.total_requests - self.total_successes
    }
}
