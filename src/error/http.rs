use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Worker {index} failed: {source}")]
    WorkerFailed {
        index: usize,
        #[source]
        source: tokio::task::JoinError,
    },
}
