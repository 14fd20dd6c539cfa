//! Static rule tables.
//!
//! - `base`: the fixed, ordered punctuation rules every run starts from.
//! - `locale`: per-language overrides and extra rules.
//! - `predicates`: preceding-character guards shared by the tables.
//! - `helpers`: validation and rewriting used by computed replacers.

pub mod base;
pub mod helpers;
pub mod locale;
pub mod predicates;

use crate::RuleId;

/// Display name of a rule, used in logs and reports.
pub fn default_name(id: RuleId) -> &'static str {
    match id {
        RuleId::DoubleQuote => "double quotes",
        RuleId::NIdiom => "'n' idiom",
        RuleId::SingleQuote => "single quotes",
        RuleId::DoublePrime => "double primes",
        RuleId::SinglePrime => "single primes",
        RuleId::Apostrophe => "apostrophe",
        RuleId::Ellipsis => "ellipsis",
        RuleId::SeparatorDash => "separator dash",
        RuleId::DateHyphen => "date hyphens",
        RuleId::FigureDash => "figure dashes",
        RuleId::RangeDash => "range en dash",
        RuleId::Hyphen => "hyphen",
        RuleId::Extra(name) => name,
    }
}
