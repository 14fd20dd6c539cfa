//! Engine run metrics.
//!
//! `Pipeline::run` is the normal path and collects nothing.
//! `Pipeline::run_with_metrics` records, per rule, whether it ran, how long it
//! took and how many matches it rewrote. This backs the verbose report and the
//! CLI `--trace` output.

use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// One entry per rule, in pipeline order.
    pub rules: Vec<RuleMetrics>,
}

/// Outcome of a single rule within a run.
#[derive(Debug, Clone)]
pub struct RuleMetrics {
    pub rule: &'static str,
    /// Time spent matching and rewriting.
    pub duration: Duration,
    /// Matches that were rewritten.
    pub replacements: usize,
    /// The trigger scan ruled this rule out; it never looked at the text.
    pub skipped: bool,
}

impl RunMetrics {
    /// Number of rules that rewrote at least one match.
    pub fn rules_fired(&self) -> usize {
        self.rules.iter().filter(|r| r.replacements > 0).count()
    }

    pub fn total_replacements(&self) -> usize {
        self.rules.iter().map(|r| r.replacements).sum()
    }
}

/// Pipeline output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub output: String,
    pub metrics: RunMetrics,
}
