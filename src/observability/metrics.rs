//! Metrics collection and exposition.

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
///
/// Failure to install is logged and otherwise ignored: recording against
/// the facade without an exporter is a no-op, and metrics must never take
/// the relay down.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(error) => tracing::error!(%error, "Failed to install metrics exporter"),
    }
}

/// Count one finished submission request by response status.
pub fn record_submission(status: u16) {
    metrics::counter!(
        "relay_requests_total",
        "route" => "/connect",
        "status" => status.to_string()
    )
    .increment(1);
}

/// Count a request rejected by the abuse limiter.
pub fn record_rate_limited() {
    metrics::counter!("relay_rate_limited_total").increment(1);
}

/// Count a request rejected by the origin gate.
pub fn record_origin_rejected() {
    metrics::counter!("relay_origin_rejected_total").increment(1);
}

/// Count a dispatch that the transport failed.
pub fn record_dispatch_failure() {
    metrics::counter!("relay_dispatch_failures_total").increment(1);
}
