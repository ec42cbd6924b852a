//! Polling backoff schedule
//!
//! Delays are data, not control flow: the poller sleeps `delay(attempt)`
//! between two status checks and gives up once the table runs out.

use std::time::Duration;

/// Fibonacci-like progression held at 144s, then at 233s
const FIBONACCI_SECS: [u64; 20] = [
    1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 144, 144, 144, 233, 233, 233, 233, 233,
];

/// Ordered delays applied between job status checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackoffSchedule {
    delays: Vec<Duration>,
}

impl BackoffSchedule {
    pub fn new(delays: Vec<Duration>) -> Self {
        Self { delays }
    }

    /// Default import schedule, about 30 minutes in total
    pub fn fibonacci() -> Self {
        Self::from_secs(&FIBONACCI_SECS)
    }

    pub fn from_secs(secs: &[u64]) -> Self {
        Self::new(secs.iter().copied().map(Duration::from_secs).collect())
    }

    pub fn from_millis(millis: &[u64]) -> Self {
        Self::new(millis.iter().copied().map(Duration::from_millis).collect())
    }

    /// Maximum number of waits, i.e. status checks after the first one
    pub fn len(&self) -> usize {
        self.delays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }

    /// Delay before the check following `attempt`, `None` once exhausted
    pub fn delay(&self, attempt: usize) -> Option<Duration> {
        self.delays.get(attempt).copied()
    }

    /// Longest total wait a job can be given
    pub fn total(&self) -> Duration {
        self.delays.iter().sum()
    }
}

impl Default for BackoffSchedule {
    fn default() -> Self {
        Self::fibonacci()
    }
}
