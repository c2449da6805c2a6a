//! Prometheus metrics for indicator batch runs.

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    /// Securities processed, labelled by `outcome` (updated, skipped, failed).
    pub indicator_runs_total: IntCounterVec,
    pub indicator_computation_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let indicator_runs_total = IntCounterVec::new(
            Opts::new(
                "indicator_runs_total",
                "Securities processed by the indicator batch",
            ),
            &["outcome"],
        )?;
        let indicator_computation_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "indicator_computation_duration_seconds",
                "Time spent computing one security's snapshot",
            )
            .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]),
        )?;

        registry.register(Box::new(indicator_runs_total.clone()))?;
        registry.register(Box::new(indicator_computation_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            indicator_runs_total,
            indicator_computation_duration_seconds,
        })
    }

    pub fn record_outcome(&self, outcome: &str) {
        self.indicator_runs_total.with_label_values(&[outcome]).inc();
    }

    /// Render all metrics in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
