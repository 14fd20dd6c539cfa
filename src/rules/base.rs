//! The base punctuation rules, in pipeline order.
//!
//! ```text
//! quotes ─▶ 'n' ─▶ single quotes ─▶ primes ─▶ apostrophes ─▶ ellipsis
//!        ─▶ separator dash ─▶ date hyphens ─▶ figure dashes ─▶ ranges ─▶ hyphens
//! ```
//!
//! The order matters. Quoted spans have to be resolved before the residual
//! apostrophe rule turns every remaining `'` into `’`, and valid dates have to
//! claim their hyphens before the digit-group rules see them. Em dashes and
//! minus signs are never guessed.

use crate::engine::Triggers;
use crate::rules::helpers::{is_calendar_date, replace_hyphens};
use crate::rules::predicates::{non_space, not_letter_or_digit, not_period, not_word};
use crate::{RuleId, SubstitutionRule};

/// Hyphen used inside ISO 8601 dates and for residual hyphens (U+2010).
pub const HYPHEN: char = '\u{2010}';
/// Figure dash for grouped digits (U+2012).
pub const FIGURE_DASH: char = '\u{2012}';

/// A span in double quotes that is not glued to a letter or digit.
pub fn rule_double_quotes() -> SubstitutionRule {
    rule! {
        id: RuleId::DoubleQuote,
        pattern: r#""(.+?)"(?P<ahead>[^\p{Alphabetic}\p{N}]|$)"#,
        before: not_letter_or_digit,
        triggers: Triggers::DOUBLE_QUOTE,
        replace: "“${1}”",
    }
}

/// rock 'n' roll: an apostrophe pair, not a quotation.
pub fn rule_n_idiom() -> SubstitutionRule {
    rule! {
        id: RuleId::NIdiom,
        pattern: r"'([nN])'(?P<ahead>[^\p{Alphabetic}\p{N}_]|$)",
        before: not_word,
        triggers: Triggers::APOSTROPHE,
        replace: "’${1}’",
    }
}

pub fn rule_single_quotes() -> SubstitutionRule {
    rule! {
        id: RuleId::SingleQuote,
        pattern: r"'(.+?)'(?P<ahead>[^\p{Alphabetic}\p{N}]|$)",
        before: not_letter_or_digit,
        triggers: Triggers::APOSTROPHE,
        replace: "‘${1}’",
    }
}

/// 12" -> 12″
pub fn rule_double_primes() -> SubstitutionRule {
    rule! {
        id: RuleId::DoublePrime,
        pattern: r#"(\d+)""#,
        triggers: Triggers::DOUBLE_QUOTE | Triggers::DIGIT,
        replace: "${1}″",
    }
}

/// 3'42 -> 3′42, but 70's stays for the apostrophe rule.
pub fn rule_single_primes() -> SubstitutionRule {
    rule! {
        id: RuleId::SinglePrime,
        pattern: r"(\d+)'(\d+)",
        triggers: Triggers::APOSTROPHE | Triggers::DIGIT,
        replace: "${1}′${2}",
    }
}

/// Whatever `'` is left after the quote and prime rules.
pub fn rule_apostrophes() -> SubstitutionRule {
    rule! {
        id: RuleId::Apostrophe,
        pattern: r"'",
        triggers: Triggers::APOSTROPHE,
        replace: "’",
    }
}

/// Exactly three periods.
pub fn rule_ellipsis() -> SubstitutionRule {
    rule! {
        id: RuleId::Ellipsis,
        pattern: r"\.{3}(?P<ahead>[^.]|$)",
        before: not_period,
        triggers: Triggers::PERIOD,
        replace: "…",
    }
}

pub fn rule_separator_dash() -> SubstitutionRule {
    rule! {
        id: RuleId::SeparatorDash,
        pattern: r" - ",
        triggers: Triggers::HYPHEN,
        replace: " – ",
    }
}

/// 1987-07-30 and 2016-04, but only when they are real dates.
pub fn rule_date_hyphens() -> SubstitutionRule {
    rule! {
        id: RuleId::DateHyphen,
        pattern: r"\d{4}-\d{2}(?:-\d{2})?(?P<ahead>[^\p{Alphabetic}\p{N}_]|$)",
        before: not_word,
        triggers: Triggers::HYPHEN | Triggers::DIGIT,
        compute: |m| {
            let candidate = m.as_str();
            is_calendar_date(candidate).then(|| replace_hyphens(candidate, HYPHEN))
        },
    }
}

/// Three or more digit groups; two groups may well be a range.
pub fn rule_figure_dashes() -> SubstitutionRule {
    rule! {
        id: RuleId::FigureDash,
        pattern: r"\d+(?:-\d+){2,}",
        triggers: Triggers::HYPHEN | Triggers::DIGIT,
        compute: |m| {
            Some(replace_hyphens(m.as_str(), FIGURE_DASH))
        },
    }
}

/// 1965-1972 -> 1965–1972
pub fn rule_range_dash() -> SubstitutionRule {
    rule! {
        id: RuleId::RangeDash,
        pattern: r"(\d+)-(\d+)",
        triggers: Triggers::HYPHEN | Triggers::DIGIT,
        replace: "${1}–${2}",
    }
}

/// Whatever `-` is left, when it sits between two non-space characters.
pub fn rule_hyphens() -> SubstitutionRule {
    rule! {
        id: RuleId::Hyphen,
        pattern: r"-(?P<ahead>\S)",
        before: non_space,
        triggers: Triggers::HYPHEN,
        replace: "‐",
    }
}

pub fn get() -> Vec<SubstitutionRule> {
    vec![
        rule_double_quotes(),
        rule_n_idiom(),
        rule_single_quotes(),
        rule_double_primes(),
        rule_single_primes(),
        rule_apostrophes(),
        rule_ellipsis(),
        rule_separator_dash(),
        rule_date_hyphens(),
        rule_figure_dashes(),
        rule_range_dash(),
        rule_hyphens(),
    ]
}
