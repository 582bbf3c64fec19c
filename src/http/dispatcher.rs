use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::error::{AppError, AppResult, HttpError, ValidationError};
use crate::metrics::{Outcome, Report, aggregate};
use crate::shutdown::{ShutdownReceiver, is_shutdown};

use super::config::{MAX_CONCURRENCY, RunConfig};
use super::client::build_client;
use super::worker::{WorkerContext, run_worker};

/// Splits `total_requests` across `workers` as evenly as possible. The first
/// `total_requests % workers` workers get one extra request.
///
/// # Errors
///
/// Returns an error when `workers` is zero or above [`MAX_CONCURRENCY`].
pub fn split_quotas(total_requests: u64, workers: usize) -> Result<Vec<u64>, ValidationError> {
    let too_large = ValidationError::ConcurrencyTooLarge {
        value: workers,
        max: MAX_CONCURRENCY,
    };
    if workers > MAX_CONCURRENCY {
        return Err(too_large);
    }
    let workers_u64 = u64::try_from(workers).map_err(|_err| too_large)?;
    let base = total_requests
        .checked_div(workers_u64)
        .ok_or(ValidationError::ConcurrencyNotPositive { value: 0 })?;
    let extra = total_requests
        .checked_rem(workers_u64)
        .ok_or(ValidationError::ConcurrencyNotPositive { value: 0 })?;

    Ok((0..workers_u64)
        .map(|index| {
            if index < extra {
                base.saturating_add(1)
            } else {
                base
            }
        })
        .collect())
}

/// Runs one load test: spawns `config.concurrency` workers, waits for all of
/// them, then tallies every outcome into a [`Report`].
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built or a worker task
/// dies. Per-request failures never error; they are tallied under status 0.
pub async fn run_load(config: RunConfig, shutdown_rx: ShutdownReceiver) -> AppResult<Report> {
    let quotas = split_quotas(config.total_requests, config.concurrency.get())?;
    let client = build_client(&config)?;
    let url = Arc::new(config.url);

    info!(
        "Sending {} requests to {} with {} workers",
        config.total_requests,
        url,
        quotas.len()
    );

    let (results_tx, results_rx) = mpsc::unbounded_channel();
    let started = Instant::now();

    let mut handles = Vec::with_capacity(quotas.len());
    for (index, quota) in quotas.into_iter().enumerate() {
        let context = WorkerContext {
            index,
            client: client.clone(),
            url: Arc::clone(&url),
            drain_body: config.drain_body,
            results_tx: results_tx.clone(),
            shutdown_rx: shutdown_rx.clone(),
        };
        handles.push(tokio::spawn(run_worker(context, quota)));
    }
    drop(results_tx);

    let (mut report, dispatched) = join_workers(handles, results_rx, started).await?;

    report.interrupted = is_shutdown(&shutdown_rx) && dispatched < config.total_requests;
    if report.interrupted {
        warn!(
            "Run interrupted after {} of {} requests",
            report.total_requests, config.total_requests
        );
    } else if report.total_requests != config.total_requests {
        warn!(
            "Collected {} outcomes, expected {}",
            report.total_requests, config.total_requests
        );
    }
    debug!(
        "Run finished in {:?}: {} requests, {} transport failures",
        report.total_time,
        report.total_requests,
        report.transport_failures()
    );

    Ok(report)
}

/// Awaits every worker, then drains the results channel into a [`Report`].
/// Returns the report with the number of outcomes the workers claim to have
/// sent. A crashed worker fails the run, but only after all other workers are
/// joined and the channel is drained; its sender is dropped while unwinding.
///
/// # Errors
///
/// Returns [`HttpError::WorkerFailed`] for the lowest-index worker that
/// panicked or was cancelled.
pub(super) async fn join_workers(
    handles: Vec<JoinHandle<u64>>,
    results_rx: mpsc::UnboundedReceiver<Outcome>,
    started: Instant,
) -> AppResult<(Report, u64)> {
    let mut dispatched: u64 = 0;
    let mut failure = None;
    for (index, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(emitted) => dispatched = dispatched.saturating_add(emitted),
            Err(err) => {
                error!("Worker {} failed: {}", index, err);
                if failure.is_none() {
                    failure = Some(HttpError::WorkerFailed { index, source: err });
                }
            }
        }
    }

    let report = aggregate(results_rx, started).await;
    match failure {
        Some(failure) => Err(AppError::http(failure)),
        None => Ok((report, dispatched)),
    }
}
