use std::sync::Arc;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use url::Url;

use crate::metrics::Outcome;
use crate::shutdown::{ShutdownReceiver, is_shutdown};

pub(super) struct WorkerContext {
    pub(super) index: usize,
    pub(super) client: Client,
    pub(super) url: Arc<Url>,
    pub(super) drain_body: bool,
    pub(super) results_tx: mpsc::UnboundedSender<Outcome>,
    pub(super) shutdown_rx: ShutdownReceiver,
}

/// Sends `quota` GET requests one after another, emitting exactly one
/// outcome per attempt. Returns how many outcomes were emitted, which is
/// less than `quota` only after a shutdown.
pub(super) async fn run_worker(context: WorkerContext, quota: u64) -> u64 {
    let mut emitted: u64 = 0;
    for _ in 0..quota {
        if is_shutdown(&context.shutdown_rx) {
            debug!("Worker {} stopping early on shutdown", context.index);
            break;
        }

        let outcome = send_get(&context.client, &context.url, context.drain_body).await;
        if context.results_tx.send(outcome).is_err() {
            warn!("Worker {}: results channel closed", context.index);
            break;
        }
        emitted = emitted.saturating_add(1);
    }

    debug!(
        "Worker {} finished: {}/{} requests",
        context.index, emitted, quota
    );
    emitted
}

async fn send_get(client: &Client, url: &Url, drain_body: bool) -> Outcome {
    let sent = client
        .get(url.clone())
        .send()
        .await
        .inspect_err(|err| debug!("Request failed: {}", err));
    let status = match sent {
        Ok(response) => Ok(release_response(response, drain_body).await),
        Err(err) => Err(err),
    };
    Outcome::from(status)
}

/// Takes the status and lets go of the response before the next request.
async fn release_response(response: reqwest::Response, drain_body: bool) -> u16 {
    let status = response.status().as_u16();
    if drain_body {
        if let Err(err) = drain_response_body(response).await {
            debug!("Failed to read response body: {}", err);
        }
    } else {
        drop(response);
    }
    status
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
