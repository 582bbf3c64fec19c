//! Per-request outcomes and the aggregated run report.
mod aggregator;
mod types;


pub use aggregator::aggregate;
pub use types::{OK_STATUS_CODE, Outcome, Report, TRANSPORT_FAILURE_CODE};
