//! Prometheus metrics recording and background collection.

use metrics::{counter, gauge, histogram};
use roster_core::storage::MemberStore;
use std::time::Duration;

/// Records HTTP request metrics.
pub fn record_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Records a member write or list operation.
pub fn record_operation(operation: &'static str) {
    counter!("roster_operations_total", "operation" => operation).increment(1);
}

/// Updates the `roster_members_total` gauge.
pub fn update_member_metrics(store: &MemberStore) {
    gauge!("roster_members_total").set(store.len() as f64);
}
