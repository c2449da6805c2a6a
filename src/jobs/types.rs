//! Outcomes and reporting for the indicator batch

use crate::models::snapshot::{IndicatorSnapshot, OverallSignal, TrendDirection};
use std::fmt;

/// Trend and signal labels of a snapshot, for before/after reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPair {
    pub trend: TrendDirection,
    pub signal: OverallSignal,
}

impl From<&IndicatorSnapshot> for LabelPair {
    fn from(snapshot: &IndicatorSnapshot) -> Self {
        Self {
            trend: snapshot.trend_direction,
            signal: snapshot.overall_signal,
        }
    }
}

impl fmt::Display for LabelPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trend={} signal={}", self.trend, self.signal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoPrice,
    NoHistory,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NoPrice => "no current price",
            SkipReason::NoHistory => "no price history",
        }
    }
}

/// What happened to one security during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum SecurityOutcome {
    Updated {
        symbol: String,
        before: Option<LabelPair>,
        snapshot: IndicatorSnapshot,
    },
    Skipped {
        symbol: String,
        reason: SkipReason,
    },
    Failed {
        symbol: String,
        error: String,
    },
}

impl SecurityOutcome {
    pub fn symbol(&self) -> &str {
        match self {
            SecurityOutcome::Updated { symbol, .. }
            | SecurityOutcome::Skipped { symbol, .. }
            | SecurityOutcome::Failed { symbol, .. } => symbol,
        }
    }

    /// Metric label for this outcome.
    pub fn kind(&self) -> &'static str {
        match self {
            SecurityOutcome::Updated { .. } => "updated",
            SecurityOutcome::Skipped { .. } => "skipped",
            SecurityOutcome::Failed { .. } => "failed",
        }
    }
}

impl fmt::Display for SecurityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityOutcome::Updated {
                symbol,
                before,
                snapshot,
            } => {
                let after = LabelPair::from(snapshot);
                match before {
                    Some(before) => write!(f, "{}: {} -> {}", symbol, before, after),
                    None => write!(f, "{}: (new) -> {}", symbol, after),
                }
            }
            SecurityOutcome::Skipped { symbol, reason } => {
                write!(f, "{}: skipped ({})", symbol, reason.as_str())
            }
            SecurityOutcome::Failed { symbol, error } => {
                write!(f, "{}: failed ({})", symbol, error)
            }
        }
    }
}

/// Per-security outcomes of one run, in processing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub outcomes: Vec<SecurityOutcome>,
    pub dry_run: bool,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn updated(&self) -> usize {
        self.count("updated")
    }

    pub fn skipped(&self) -> usize {
        self.count("skipped")
    }

    pub fn failed(&self) -> usize {
        self.count("failed")
    }

    pub fn outcome(&self, symbol: &str) -> Option<&SecurityOutcome> {
        self.outcomes.iter().find(|o| o.symbol() == symbol)
    }

    pub fn summary(&self) -> String {
        let mut line = format!(
            "Successfully calculated technical indicators for {} of {} securities",
            self.updated(),
            self.total()
        );
        if self.skipped() > 0 || self.failed() > 0 {
            line.push_str(&format!(
                " ({} skipped, {} failed)",
                self.skipped(),
                self.failed()
            ));
        }
        if self.dry_run {
            line.push_str(" [dry run, nothing written]");
        }
        line
    }

    fn count(&self, kind: &str) -> usize {
        self.outcomes.iter().filter(|o| o.kind() == kind).count()
    }
}
