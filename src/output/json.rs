use serde_json::{Map, Value};

use crate::metrics::Report;

#[must_use]
pub fn report_json(report: &Report) -> Value {
    let status_codes: Map<String, Value> = report
        .status_codes
        .iter()
        .map(|(code, count)| (code.to_string(), Value::from(*count)))
        .collect();

    serde_json::json!({
        "total_time_ms": u64::try_from(report.total_time.as_millis()).unwrap_or(u64::MAX),
        "total_requests": report.total_requests,
        "ok_requests": report.ok_requests(),
        "transport_failures": report.transport_failures(),
        "interrupted": report.interrupted,
        "status_codes": status_codes
    })
}
