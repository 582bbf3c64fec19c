//! Core library for the `volley` CLI.
//!
//! The binary parses flags and an optional config file into a
//! [`http::RunConfig`], hands it to [`http::run_load`], and renders the
//! resulting [`metrics::Report`]. The dispatcher splits the request count
//! across concurrent workers, every worker emits one outcome per request
//! attempt, and the aggregator tallies them per status code.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod metrics;
pub mod output;
pub mod shutdown;
pub mod shutdown_handlers;
