use tokio::sync::mpsc;
use tokio::time::Instant;

use super::types::{Outcome, Report};

/// Drains every outcome left in `results` into a fresh [`Report`].
///
/// Returns once all senders are gone and the channel is empty, so callers
/// must drop their own sender first. `total_time` is measured from `started`
/// to the end of the drain.
pub async fn aggregate(mut results: mpsc::UnboundedReceiver<Outcome>, started: Instant) -> Report {
    let mut report = Report::default();
    while let Some(outcome) = results.recv().await {
        report.record(outcome);
    }
    report.total_time = started.elapsed();
    report
}
