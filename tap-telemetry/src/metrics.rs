//! ## tap-telemetry::metrics
//! **In-process counters**
//!
//! A private registry with no export endpoint: counters feed the shutdown
//! summary event and the test suite.
//!
//! ### Future:
//! - Exporter surface once real capture lands

use prometheus::{IntCounter, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub heartbeats_total: IntCounter,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let heartbeats_total = IntCounter::new(
            "tap_heartbeats_total",
            "Heartbeat ticks emitted by the monitor loop",
        )
        .unwrap();

        registry
            .register(Box::new(heartbeats_total.clone()))
            .unwrap();

        Self {
            registry,
            heartbeats_total,
        }
    }

    pub fn inc_heartbeats(&self) {
        self.heartbeats_total.inc();
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heartbeat_counter_accumulates() {
        let metrics = MetricsRecorder::new();
        metrics.inc_heartbeats();
        metrics.inc_heartbeats();
        assert_eq!(metrics.heartbeats_total.get(), 2);
    }

    #[test]
    fn gathered_text_includes_the_counter() {
        let metrics = MetricsRecorder::new();
        metrics.inc_heartbeats();
        let text = metrics.gather_metrics().unwrap();
        assert!(text.contains("tap_heartbeats_total 1"));
    }
}
