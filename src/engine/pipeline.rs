//! Sequential rule application.
//!
//! This module is the operational core of the engine. A run is a fold over the
//! rule set:
//!
//! ```text
//! text ──▶ rule 1 ──▶ text' ──▶ rule 2 ──▶ text'' ──▶ ... ──▶ output
//!           │                    │
//!           └─ global, left-to-right, non-overlapping replace
//! ```
//!
//! Each rule replaces all of its matches in the string as it stands after the
//! previous rule, so ordering in the `RuleSet` is semantically load-bearing.
//! No rule can fail: a computed replacer that rejects a match (for example an
//! invalid date) simply leaves it alone.
//!
//! Triggers are scanned up front and again after every rule that rewrote
//! something. Built-in replacers never emit a trigger character, but a
//! caller-supplied rule may.

use super::metrics::{RuleMetrics, RunMetrics, RunResult};
use super::rule_set::RuleSet;
use super::trigger::TriggerInfo;
use std::time::Instant;

/// Applies a `RuleSet` to input strings.
///
/// Usage: `Pipeline::new(&rules).run(text)`. The pipeline holds no state of
/// its own besides the borrowed rules, so one instance can serve any number of
/// inputs, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    rules: &'a RuleSet,
}

impl<'a> Pipeline<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Pipeline { rules }
    }

    /// Run every rule over `input` and return the rewritten text.
    pub fn run(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        let mut triggers = TriggerInfo::scan(input);
        let mut text = input.to_string();

        for rule in self.rules.iter() {
            if !triggers.allows(rule.triggers) {
                tracing::trace!(rule = rule.name, "skipped by trigger scan");
                continue;
            }

            let (next, replacements) = rule.apply(&text);
            if replacements > 0 {
                tracing::debug!(rule = rule.name, replacements, "rule rewrote text");
                triggers = TriggerInfo::scan(&next);
                text = next;
            }
        }

        text
    }

    /// Same as [`Pipeline::run`], but records per-rule metrics.
    pub fn run_with_metrics(&self, input: &str) -> RunResult {
        let start = Instant::now();
        let mut triggers = TriggerInfo::scan(input);
        let mut text = input.to_string();
        let mut metrics = RunMetrics::default();

        for rule in self.rules.iter() {
            if input.is_empty() || !triggers.allows(rule.triggers) {
                tracing::trace!(rule = rule.name, "skipped by trigger scan");
                metrics.rules.push(RuleMetrics {
                    rule: rule.name,
                    duration: Default::default(),
                    replacements: 0,
                    skipped: true,
                });
                continue;
            }

            let rule_start = Instant::now();
            let (next, replacements) = rule.apply(&text);
            if replacements > 0 {
                tracing::debug!(rule = rule.name, replacements, "rule rewrote text");
                triggers = TriggerInfo::scan(&next);
                text = next;
            }

            metrics.rules.push(RuleMetrics {
                rule: rule.name,
                duration: rule_start.elapsed(),
                replacements,
                skipped: false,
            });
        }

        metrics.total = start.elapsed();
        RunResult { output: text, metrics }
    }
}

/// Apply `rules` to `text`, rule by rule.
pub fn apply_rules(text: &str, rules: &RuleSet) -> String {
    Pipeline::new(rules).run(text)
}
