//! Prometheus metrics for the lookup endpoints.
//!
//! The recorder is built, not installed globally: [`ApiMetrics`] owns it and
//! is handed to whoever records or renders.

use std::sync::Arc;
use std::time::Duration;

use metrics::{Key, KeyName, Label, Level, Metadata, Recorder, SharedString};
use metrics_exporter_prometheus::{
    BuildError, Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder,
};

/// Metric names.
pub mod names {
    /// Requests served, per endpoint.
    pub const TOTAL_REQUESTS: &str = "api_total_requests";
    /// Requests answered from the cache, per endpoint.
    pub const CACHE_HITS: &str = "api_redis_hits";
    /// Unsuccessful responses, per endpoint.
    pub const ERRORS: &str = "api_errors";
    /// Request latency in seconds, per endpoint.
    pub const REQUEST_DURATION: &str = "api_request_duration";
    /// Failed cache writes after a successful fetch.
    pub const CACHE_WRITE_ERRORS: &str = "api_cache_write_errors_total";
}

/// Prometheus client default latency buckets, in seconds.
pub const DEFAULT_BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

const ENDPOINT_LABEL: &str = "endpoint";

/// Request metrics, labeled by endpoint path.
#[derive(Clone)]
pub struct ApiMetrics {
    recorder: Arc<PrometheusRecorder>,
    handle: PrometheusHandle,
}

impl ApiMetrics {
    /// Builds a fresh recorder with descriptions and latency buckets set.
    pub fn new() -> Result<Self, BuildError> {
        let recorder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(names::REQUEST_DURATION.to_string()),
                &DEFAULT_BUCKETS,
            )?
            .build_recorder();
        let handle = recorder.handle();

        let metrics = Self {
            recorder: Arc::new(recorder),
            handle,
        };
        metrics.describe();
        Ok(metrics)
    }

    fn describe(&self) {
        let describe_counter = |name: &'static str, help: &'static str| {
            self.recorder
                .describe_counter(KeyName::from(name), None, SharedString::from(help));
        };
        describe_counter(
            names::TOTAL_REQUESTS,
            "Total number of requests for each API endpoint",
        );
        describe_counter(names::CACHE_HITS, "Number of requests answered by the cache");
        describe_counter(names::ERRORS, "Number of unsuccessful responses");
        describe_counter(
            names::CACHE_WRITE_ERRORS,
            "Number of fetched definitions that could not be cached",
        );
        self.recorder.describe_histogram(
            KeyName::from(names::REQUEST_DURATION),
            None,
            SharedString::from("Histogram of request duration for each API endpoint in seconds"),
        );
    }

    /// Counts one request and records its latency.
    pub fn record_request(&self, endpoint: &'static str, elapsed: Duration) {
        self.recorder
            .register_counter(&endpoint_key(names::TOTAL_REQUESTS, endpoint), &metadata())
            .increment(1);
        self.recorder
            .register_histogram(&endpoint_key(names::REQUEST_DURATION, endpoint), &metadata())
            .record(elapsed.as_secs_f64());
    }

    pub fn record_cache_hit(&self, endpoint: &'static str) {
        self.recorder
            .register_counter(&endpoint_key(names::CACHE_HITS, endpoint), &metadata())
            .increment(1);
    }

    pub fn record_error(&self, endpoint: &'static str) {
        self.recorder
            .register_counter(&endpoint_key(names::ERRORS, endpoint), &metadata())
            .increment(1);
    }

    pub fn record_cache_write_error(&self) {
        self.recorder
            .register_counter(&Key::from_name(names::CACHE_WRITE_ERRORS), &metadata())
            .increment(1);
    }

    /// Prometheus text exposition of everything recorded so far.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

fn endpoint_key(name: &'static str, endpoint: &'static str) -> Key {
    Key::from_parts(name, vec![Label::new(ENDPOINT_LABEL, endpoint)])
}

fn metadata() -> Metadata<'static> {
    Metadata::new(module_path!(), Level::INFO, Some(module_path!()))
}
