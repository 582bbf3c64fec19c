use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing URL (set --url or provide in config).")]
    MissingUrl,
    #[error("Missing request count (set --requests or provide in config).")]
    MissingRequests,
    #[error("Missing concurrency (set --concurrency or provide in config).")]
    MissingConcurrency,
    #[error("URL must not be empty.")]
    UrlEmpty,
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported URL scheme '{scheme}'. Use http or https.")]
    UnsupportedScheme { scheme: String },
    #[error("URL is missing host.")]
    UrlMissingHost,
    #[error("Concurrency must be >= 1 (got {value}).")]
    ConcurrencyNotPositive { value: i64 },
    #[error("Concurrency must be <= {max} (got {value}).")]
    ConcurrencyTooLarge { value: usize, max: usize },
    #[error("Request count must be >= 0 (got {value}).")]
    NegativeRequests { value: i64 },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Value {value} is too large for this platform.")]
    ValueTooLarge { value: u64 },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
