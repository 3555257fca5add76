use prometheus::{
    CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Central metrics registry for the relief API
pub struct MetricsRegistry {
    registry: Registry,

    // HTTP Metrics
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,

    // Auth Metrics
    pub login_attempts_total: CounterVec,
    pub otp_issued_total: CounterVec,
}

impl MetricsRegistry {
    pub fn new() -> Result<Arc<Self>, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests").namespace("rescue_hub"),
            &["method", "endpoint", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request duration")
                .namespace("rescue_hub")
                .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
            &["method", "endpoint"],
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        let login_attempts_total = CounterVec::new(
            Opts::new("login_attempts_total", "Login attempts by outcome").namespace("rescue_hub"),
            &["outcome"],
        )?;
        registry.register(Box::new(login_attempts_total.clone()))?;

        let otp_issued_total = CounterVec::new(
            Opts::new("otp_issued_total", "One-time codes issued by role").namespace("rescue_hub"),
            &["role"],
        )?;
        registry.register(Box::new(otp_issued_total.clone()))?;

        Ok(Arc::new(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            login_attempts_total,
            otp_issued_total,
        }))
    }

    pub fn record_login(&self, outcome: &str) {
        self.login_attempts_total.with_label_values(&[outcome]).inc();
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_metrics_exported() {
        let metrics = MetricsRegistry::new().unwrap();
        metrics
            .http_requests_total
            .with_label_values(&["GET", "/api/shelters/:id", "404"])
            .inc();

        let output = metrics.export().unwrap();
        assert!(output.contains("rescue_hub_http_requests_total"));
        assert!(output.contains("endpoint=\"/api/shelters/:id\""));
        assert!(output.contains("status=\"404\""));
    }

    #[test]
    fn test_login_outcomes() {
        let metrics = MetricsRegistry::new().unwrap();
        metrics.record_login("otp_pending");
        metrics.record_login("otp_pending");

        let output = metrics.export().unwrap();
        assert!(output.contains("rescue_hub_login_attempts_total{outcome=\"otp_pending\"} 2"));
    }

    #[test]
    fn test_independent_registries() {
        assert!(MetricsRegistry::new().is_ok());
        assert!(MetricsRegistry::new().is_ok());
    }
}
