//! # Prometheus Metrics
//!
//! Exposes operational metrics for the tracker node. Scraped by Prometheus
//! at the `/metrics` HTTP endpoint on the configured metrics port.
//!
//! All metrics are registered in a dedicated [`prometheus::Registry`] so
//! they do not collide with any default global registry consumers.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder};
use std::sync::Arc;

/// Holds all Prometheus metric handles for the node.
///
/// Clone-friendly (wraps `Arc` internally via prometheus handles) so it can
/// be shared across request handlers.
#[derive(Clone)]
pub struct TrackerMetrics {
    /// Prometheus registry that owns all metrics below.
    registry: Registry,
    /// Total number of transfer records created.
    pub transfers_added_total: IntCounter,
    /// Total number of transfer record updates applied.
    pub transfers_updated_total: IntCounter,
    /// Total number of ownership transfers committed.
    pub ownership_transfers_total: IntCounter,
    /// Total number of rejected operations (unauthorized, duplicate, etc.).
    pub rejected_operations_total: IntCounter,
    /// Current number of stored transfer records.
    pub stored_records: IntGauge,
    /// Histogram of ledger operation latency in seconds.
    pub operation_latency_seconds: Histogram,
}

impl TrackerMetrics {
    /// Creates and registers all metrics. Call once at startup.
    pub fn new() -> Self {
        let registry = Registry::new_custom(Some("tracker".into()), None)
            .expect("failed to create prometheus registry");

        let transfers_added_total = IntCounter::new(
            "transfers_added_total",
            "Total number of transfer records created",
        )
        .expect("metric creation");
        registry
            .register(Box::new(transfers_added_total.clone()))
            .expect("metric registration");

        let transfers_updated_total = IntCounter::new(
            "transfers_updated_total",
            "Total number of transfer record updates applied",
        )
        .expect("metric creation");
        registry
            .register(Box::new(transfers_updated_total.clone()))
            .expect("metric registration");

        let ownership_transfers_total = IntCounter::new(
            "ownership_transfers_total",
            "Total number of ownership transfers committed",
        )
        .expect("metric creation");
        registry
            .register(Box::new(ownership_transfers_total.clone()))
            .expect("metric registration");

        let rejected_operations_total = IntCounter::new(
            "rejected_operations_total",
            "Total number of rejected ledger operations",
        )
        .expect("metric creation");
        registry
            .register(Box::new(rejected_operations_total.clone()))
            .expect("metric registration");

        let stored_records = IntGauge::new(
            "stored_records",
            "Current number of stored transfer records",
        )
        .expect("metric creation");
        registry
            .register(Box::new(stored_records.clone()))
            .expect("metric registration");

        let operation_latency_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "operation_latency_seconds",
                "End-to-end ledger operation latency in seconds",
            )
            .buckets(vec![
                0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
            ]),
        )
        .expect("metric creation");
        registry
            .register(Box::new(operation_latency_seconds.clone()))
            .expect("metric registration");

        Self {
            registry,
            transfers_added_total,
            transfers_updated_total,
            ownership_transfers_total,
            rejected_operations_total,
            stored_records,
            operation_latency_seconds,
        }
    }

    /// Encodes all registered metrics into the Prometheus text exposition format.
    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer).expect("prometheus output is valid utf-8"))
    }
}

impl Default for TrackerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared metrics state passed to axum handlers via state.
pub type SharedMetrics = Arc<TrackerMetrics>;

/// Axum handler that renders `/metrics` in Prometheus text format.
///
/// Returns HTTP 500 if encoding fails (should never happen in practice).
pub async fn metrics_handler(
    axum::extract::State(metrics): axum::extract::State<SharedMetrics>,
) -> impl IntoResponse {
    match metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to encode metrics: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "metrics encoding failed").into_response()
        }
    }
}
