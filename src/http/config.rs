use std::time::Duration;

use url::Url;

use crate::args::{PositiveUsize, TesterArgs};
use crate::error::{AppError, AppResult, ValidationError};

/// Per-request timeout used when none is configured.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Connect timeout used when none is configured.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Upper bound on concurrent workers; each one is a spawned task with its own
/// quota slot.
pub const MAX_CONCURRENCY: usize = 100_000;

/// Everything a run needs, resolved and validated up front.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: Url,
    pub total_requests: u64,
    pub concurrency: PositiveUsize,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub drain_body: bool,
}

impl RunConfig {
    /// Validates the three core inputs.
    ///
    /// # Errors
    ///
    /// Returns an error when `concurrency` is not in `1..=MAX_CONCURRENCY`,
    /// `total_requests` is negative, or `url` is not an absolute http(s) URL
    /// with a host.
    pub fn new(url: &str, total_requests: i64, concurrency: i64) -> Result<Self, ValidationError> {
        let concurrency = PositiveUsize::try_from(concurrency)?;
        if concurrency.get() > MAX_CONCURRENCY {
            return Err(ValidationError::ConcurrencyTooLarge {
                value: concurrency.get(),
                max: MAX_CONCURRENCY,
            });
        }
        let total_requests = u64::try_from(total_requests)
            .map_err(|_err| ValidationError::NegativeRequests {
                value: total_requests,
            })?;
        let url = parse_target_url(url)?;

        Ok(Self {
            url,
            total_requests,
            concurrency,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            drain_body: false,
        })
    }

    /// Resolves a run from parsed (and config-layered) CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when any core input is missing or invalid.
    pub fn from_args(args: &TesterArgs) -> AppResult<Self> {
        let url = args
            .url
            .as_deref()
            .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
        let requests = args
            .requests
            .ok_or_else(|| AppError::validation(ValidationError::MissingRequests))?;
        let concurrency = args
            .concurrency
            .ok_or_else(|| AppError::validation(ValidationError::MissingConcurrency))?;

        let config = Self::new(url, requests, concurrency)?
            .with_timeouts(args.request_timeout, args.connect_timeout)
            .with_drain_body(args.drain_body);
        Ok(config)
    }

    #[must_use]
    pub const fn with_timeouts(mut self, request_timeout: Duration, connect_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self.connect_timeout = connect_timeout;
        self
    }

    #[must_use]
    pub const fn with_drain_body(mut self, drain_body: bool) -> Self {
        self.drain_body = drain_body;
        self
    }
}

fn parse_target_url(raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::UrlEmpty);
    }
    let url = Url::parse(trimmed).map_err(|err| ValidationError::InvalidUrl {
        url: trimmed.to_owned(),
        source: err,
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ValidationError::UnsupportedScheme {
                scheme: other.to_owned(),
            });
        }
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::UrlMissingHost);
    }
    Ok(url)
}
