// Prometheus metrics for the receipt gateway.
// Tracks: submissions, validation rejections, points lookups, latency.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_with_registry, register_histogram_with_registry, Counter, Encoder, Histogram,
    HistogramOpts, Opts, Registry, TextEncoder,
};

pub static METRICS: Lazy<Metrics> = Lazy::new(|| Metrics::new().expect("metrics registry"));

pub struct Metrics {
    pub registry: Registry,

    pub receipts_submitted_total: Counter,
    pub receipt_validation_failures_total: Counter,
    pub points_requests_total: Counter,
    pub points_not_found_total: Counter,
    pub request_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let receipts_submitted_total = register_counter_with_registry!(
            Opts::new(
                "receipts_submitted_total",
                "Total receipt submissions received"
            ),
            registry
        )?;

        let receipt_validation_failures_total = register_counter_with_registry!(
            Opts::new(
                "receipt_validation_failures_total",
                "Submissions rejected as invalid"
            ),
            registry
        )?;

        let points_requests_total = register_counter_with_registry!(
            Opts::new("points_requests_total", "Total points lookups"),
            registry
        )?;

        let points_not_found_total = register_counter_with_registry!(
            Opts::new(
                "points_not_found_total",
                "Points lookups for unknown receipt ids"
            ),
            registry
        )?;

        let request_duration_seconds = register_histogram_with_registry!(
            HistogramOpts::new(
                "request_duration_seconds",
                "Request handling duration in seconds"
            )
            .buckets(vec![0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1]),
            registry
        )?;

        Ok(Self {
            registry,
            receipts_submitted_total,
            receipt_validation_failures_total,
            points_requests_total,
            points_not_found_total,
            request_duration_seconds,
        })
    }

    pub fn export(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
