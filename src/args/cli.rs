use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT};
use super::parsers::parse_duration_arg;
use super::types::OutputFormat;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fire a fixed number of HTTP GET requests across concurrent workers and tally the status codes."
)]
pub struct TesterArgs {
    /// URL of the service to test
    #[arg(long, short)]
    pub url: Option<String>,

    /// Total number of requests
    #[arg(long, short, allow_negative_numbers = true)]
    pub requests: Option<i64>,

    /// Number of concurrent workers
    #[arg(long, short, allow_negative_numbers = true)]
    pub concurrency: Option<i64>,

    /// Request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = DEFAULT_REQUEST_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// Timeout for establishing a new connection (supports ms/s/m/h)
    #[arg(
        long = "connect-timeout",
        default_value = DEFAULT_CONNECT_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub connect_timeout: Duration,

    /// Read every response body to completion so connections can be reused
    #[arg(long = "drain-body")]
    pub drain_body: bool,

    /// Report format
    #[arg(long = "output-format", short = 'o', value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Path to config file (TOML/JSON). Defaults to ./volley.toml or ./volley.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by VOLLEY_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
