use std::collections::BTreeMap;
use std::time::Duration;

/// Synthetic status code tallied for requests that never got an HTTP response.
pub const TRANSPORT_FAILURE_CODE: u16 = 0;
/// Status code the report highlights on its own line.
pub const OK_STATUS_CODE: u16 = 200;

/// Result of a single request attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An HTTP response arrived; any status, including 4xx/5xx.
    Status(u16),
    /// Connect, DNS, TLS or timeout failure before a response arrived.
    TransportFailure,
}

impl Outcome {
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Outcome::Status(code) => code,
            Outcome::TransportFailure => TRANSPORT_FAILURE_CODE,
        }
    }
}

impl<E> From<Result<u16, E>> for Outcome {
    fn from(result: Result<u16, E>) -> Self {
        result.map_or(Outcome::TransportFailure, Outcome::Status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub total_time: Duration,
    pub total_requests: u64,
    pub status_codes: BTreeMap<u16, u64>,
    /// Set when a shutdown signal stopped workers before their quotas ran out.
    pub interrupted: bool,
}

impl Report {
    #[must_use]
    pub fn count_for(&self, code: u16) -> u64 {
        self.status_codes.get(&code).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn ok_requests(&self) -> u64 {
        self.count_for(OK_STATUS_CODE)
    }

    #[must_use]
    pub fn transport_failures(&self) -> u64 {
        self.count_for(TRANSPORT_FAILURE_CODE)
    }

    /// Sum of every histogram bucket; equals `total_requests` for a report
    /// built by [`crate::metrics::aggregate`].
    #[must_use]
    pub fn tallied(&self) -> u64 {
        self.status_codes
            .values()
            .fold(0_u64, |acc, count| acc.saturating_add(*count))
    }

    pub(crate) fn record(&mut self, outcome: Outcome) {
        let count = self.status_codes.entry(outcome.status_code()).or_insert(0);
        *count = count.saturating_add(1);
        self.total_requests = self.total_requests.saturating_add(1);
    }
}
