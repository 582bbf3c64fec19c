//! Work distribution and HTTP request execution.
mod client;
mod config;
mod dispatcher;
mod worker;

#[cfg(test)]
mod test_support;

pub use config::{MAX_CONCURRENCY, RunConfig};
pub use dispatcher::{run_load, split_quotas};
