//! Sequential indicator batch over every known security

use crate::config::BatchConfig;
use crate::db::{IndicatorStore, StoreError};
use crate::jobs::types::{BatchReport, LabelPair, SecurityOutcome, SkipReason};
use crate::metrics::Metrics;
use crate::models::bar::Security;
use crate::signals::engine::IndicatorEngine;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Recomputes the indicator snapshot of each security, one after another.
///
/// A security without a price or without bars is skipped, and a failing
/// read or write only fails that security; the run moves on to the next.
pub struct IndicatorBatch<S: IndicatorStore> {
    store: Arc<S>,
    config: BatchConfig,
    metrics: Option<Arc<Metrics>>,
}

impl<S: IndicatorStore> IndicatorBatch<S> {
    pub fn new(store: Arc<S>, config: BatchConfig) -> Self {
        Self {
            store,
            config,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Run the batch. Only failing to list securities aborts the run.
    pub async fn run(&self) -> Result<BatchReport, StoreError> {
        let securities = self.store.list_securities().await?;
        let selected: Vec<Security> = securities
            .into_iter()
            .filter(|s| self.config.includes(&s.symbol))
            .collect();

        info!(
            securities = selected.len(),
            history_limit = self.config.history_limit,
            dry_run = self.config.dry_run,
            "IndicatorBatch: processing {} securities",
            selected.len()
        );

        let mut report = BatchReport {
            outcomes: Vec::with_capacity(selected.len()),
            dry_run: self.config.dry_run,
        };

        for security in &selected {
            let outcome = self.process_security(security).await;
            if let Some(ref metrics) = self.metrics {
                metrics.record_outcome(outcome.kind());
            }
            report.outcomes.push(outcome);
        }

        info!(
            updated = report.updated(),
            skipped = report.skipped(),
            failed = report.failed(),
            "IndicatorBatch: finished"
        );

        Ok(report)
    }

    /// Compute and store the snapshot for one security.
    pub async fn process_security(&self, security: &Security) -> SecurityOutcome {
        let symbol = security.symbol.clone();

        let Some(quote) = security.quote() else {
            warn!(symbol = %symbol, "IndicatorBatch: skipping {} - no current price", symbol);
            return SecurityOutcome::Skipped {
                symbol,
                reason: SkipReason::NoPrice,
            };
        };

        let bars = match self
            .store
            .price_history(security.id, self.config.history_limit)
            .await
        {
            Ok(bars) => bars,
            Err(e) => return self.failed(symbol, "failed to load price history", e),
        };

        let before = match self.store.snapshot(security.id).await {
            Ok(previous) => previous.as_ref().map(LabelPair::from),
            Err(e) => return self.failed(symbol, "failed to load previous snapshot", e),
        };

        let start = Instant::now();
        let Some(snapshot) = IndicatorEngine::compute(security.id, &bars, &quote) else {
            warn!(symbol = %symbol, "IndicatorBatch: skipping {} - no price history", symbol);
            return SecurityOutcome::Skipped {
                symbol,
                reason: SkipReason::NoHistory,
            };
        };
        if let Some(ref metrics) = self.metrics {
            metrics
                .indicator_computation_duration_seconds
                .observe(start.elapsed().as_secs_f64());
        }

        debug!(
            symbol = %symbol,
            bars = bars.len(),
            rsi = snapshot.rsi_14,
            trend_strength = snapshot.trend_strength,
            signal_strength = snapshot.signal_strength,
            "IndicatorBatch: computed snapshot for {}",
            symbol
        );

        if !self.config.dry_run {
            if let Err(e) = self.store.upsert_snapshot(&snapshot).await {
                return self.failed(symbol, "failed to store snapshot", e);
            }
        }

        info!(
            symbol = %symbol,
            trend = %snapshot.trend_direction,
            signal = %snapshot.overall_signal,
            "IndicatorBatch: updated {} - Trend: {}, Signal: {}",
            symbol,
            snapshot.trend_direction,
            snapshot.overall_signal
        );

        SecurityOutcome::Updated {
            symbol,
            before,
            snapshot,
        }
    }

    fn failed(&self, symbol: String, context: &str, e: StoreError) -> SecurityOutcome {
        error!(symbol = %symbol, error = %e, "IndicatorBatch: {} for {}", context, symbol);
        SecurityOutcome::Failed {
            symbol,
            error: format!("{}: {}", context, e),
        }
    }
}
