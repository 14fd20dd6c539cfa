//! Rule pipeline engine.
//!
//! ## How the parts work together
//!
//! Guessing punctuation for one text field is a straight pipeline:
//!
//! ```text
//! base table (static) ──┐
//!                       │  RuleSet::for_locale      (rule_set.rs)
//! locale profile ───────┴─ patch override slots, append extra rules
//!                               │
//! input ── TriggerInfo::scan ───┼─ skip rules whose characters are absent
//!         (trigger.rs)          │
//!                               v
//!                     Pipeline::run (pipeline.rs)
//!                       - rule 1 over the whole text
//!                       - rule 2 over rule 1's output
//!                       - ...
//!                               │
//!                               v
//!                            String
//! ```
//!
//! Unlike a single combined pattern, every rule sees what the previous rules
//! left behind. The residual apostrophe and hyphen rules rely on that: they
//! only catch whatever the more specific rules did not already consume.
//!
//! ## Responsibilities by module
//!
//! - `rule_set.rs`: resolves an independent, ordered `RuleSet` for a locale.
//! - `trigger.rs`: scans the input once for the characters rules react to.
//! - `pipeline.rs`: applies a `RuleSet` rule by rule, optionally with metrics.
//! - `metrics.rs`: per-rule timing and replacement counts.
//!
//! ## Debugging
//!
//! The engine logs through `tracing`: `debug` for every rule that rewrote
//! something, `trace` for rules skipped by the trigger scan.

#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/pipeline.rs"]
mod pipeline;
#[path = "engine/rule_set.rs"]
mod rule_set;
#[path = "engine/trigger.rs"]
mod trigger;

pub use pipeline::{Pipeline, apply_rules};
pub use rule_set::RuleSet;
pub use trigger::Triggers;
