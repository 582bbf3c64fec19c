use crate::metrics::{OK_STATUS_CODE, Report, TRANSPORT_FAILURE_CODE};

/// Label printed for the transport-failure sentinel.
const TRANSPORT_FAILURE_LABEL: &str = "<transport error>";
/// Label printed for codes without a canonical reason phrase.
const UNKNOWN_STATUS_LABEL: &str = "<unknown status>";

#[must_use]
pub fn summary_lines(report: &Report) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.status_codes.len().saturating_add(6));
    lines.push("Stress Test Report:".to_owned());
    lines.push(format!("Total time: {:.3?}", report.total_time));
    lines.push(format!("Total requests: {}", report.total_requests));
    if report.interrupted {
        lines.push("Interrupted: yes".to_owned());
    }
    lines.push(format!(
        "Requests with status code {}: {}",
        OK_STATUS_CODE,
        report.ok_requests()
    ));
    lines.push("Requests by status code:".to_owned());
    for (code, count) in &report.status_codes {
        lines.push(format!(" → {}: {}", status_label(*code), count));
    }
    lines
}

/// `<code> <reason phrase>`, e.g. `404 Not Found` or `0 <transport error>`.
#[must_use]
pub fn status_label(code: u16) -> String {
    if code == TRANSPORT_FAILURE_CODE {
        return format!("{} {}", code, TRANSPORT_FAILURE_LABEL);
    }
    let reason = http::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or(UNKNOWN_STATUS_LABEL);
    format!("{} {}", code, reason)
}
