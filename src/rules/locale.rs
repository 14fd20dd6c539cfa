//! Per-language customization.
//!
//! A profile swaps the replacer of a few overridable base rules (quote styles,
//! the `'n'` idiom, apostrophes, hyphens) and may append rules of its own.
//! The table is static configuration: it is never modified at runtime.

use crate::engine::Triggers;
use crate::rules::predicates::hebrew_letter;
use crate::{RuleId, SubstitutionRule};

/// Customization for one language.
#[derive(Debug)]
pub struct LocaleProfile {
    /// ISO 639-1 code.
    pub code: &'static str,
    /// English name of the language.
    pub name: &'static str,
    /// Replacement templates keyed by overridable rule.
    pub overrides: &'static [(RuleId, &'static str)],
    /// Rules appended after the base sequence.
    pub extra_rules: fn() -> Vec<SubstitutionRule>,
}

fn no_extra_rules() -> Vec<SubstitutionRule> {
    Vec::new()
}

pub static PROFILES: &[LocaleProfile] = &[
    LocaleProfile {
        code: "de",
        name: "German",
        overrides: &[(RuleId::DoubleQuote, "„${1}“"), (RuleId::SingleQuote, "‚${1}‘")],
        extra_rules: no_extra_rules,
    },
    LocaleProfile {
        code: "en",
        name: "English",
        overrides: &[(RuleId::DoubleQuote, "“${1}”"), (RuleId::SingleQuote, "‘${1}’")],
        extra_rules: no_extra_rules,
    },
    LocaleProfile {
        code: "es",
        name: "Spanish",
        overrides: &[(RuleId::DoubleQuote, "«${1}»"), (RuleId::SingleQuote, "“${1}”")],
        extra_rules: no_extra_rules,
    },
    LocaleProfile {
        code: "fr",
        name: "French",
        overrides: &[(RuleId::DoubleQuote, "« ${1} »"), (RuleId::SingleQuote, "‹ ${1} ›")],
        extra_rules: no_extra_rules,
    },
    LocaleProfile {
        code: "he",
        name: "Hebrew",
        overrides: &[
            (RuleId::DoubleQuote, "”${1}”"),
            (RuleId::SingleQuote, "’${1}’"),
            (RuleId::Hyphen, "\u{05BE}"),
        ],
        extra_rules: hebrew_rules,
    },
    LocaleProfile {
        code: "it",
        name: "Italian",
        overrides: &[(RuleId::DoubleQuote, "«${1}»"), (RuleId::SingleQuote, "“${1}”")],
        extra_rules: no_extra_rules,
    },
    LocaleProfile {
        code: "ja",
        name: "Japanese",
        overrides: &[(RuleId::DoubleQuote, "「${1}」"), (RuleId::SingleQuote, "『${1}』")],
        extra_rules: no_extra_rules,
    },
    LocaleProfile {
        code: "pl",
        name: "Polish",
        overrides: &[(RuleId::DoubleQuote, "„${1}”"), (RuleId::SingleQuote, "«${1}»")],
        extra_rules: no_extra_rules,
    },
    LocaleProfile {
        code: "ru",
        name: "Russian",
        overrides: &[(RuleId::DoubleQuote, "«${1}»"), (RuleId::SingleQuote, "„${1}“")],
        extra_rules: no_extra_rules,
    },
    LocaleProfile {
        code: "sv",
        name: "Swedish",
        overrides: &[(RuleId::DoubleQuote, "”${1}”"), (RuleId::SingleQuote, "’${1}’")],
        extra_rules: no_extra_rules,
    },
];

/// Gershayim and geresh, the Hebrew marks for abbreviations and numerals.
fn hebrew_rules() -> Vec<SubstitutionRule> {
    vec![
        // צה"ל -> צה״ל
        rule! {
            id: RuleId::Extra("hebrew gershayim"),
            pattern: r#""(?P<ahead>[\x{05D0}-\x{05EA}])"#,
            before: hebrew_letter,
            triggers: Triggers::DOUBLE_QUOTE,
            replace: "\u{05F4}",
        },
        // The apostrophe rule has already curled it: ג’ירפה -> ג׳ירפה.
        // A closing quote is never followed by a Hebrew letter.
        rule! {
            id: RuleId::Extra("hebrew geresh"),
            pattern: r"’(?P<ahead>[\x{05D0}-\x{05EA}])",
            before: hebrew_letter,
            replace: "\u{05F3}",
        },
    ]
}

/// Find the profile for a language code.
///
/// Matching ignores case and surrounding whitespace and only looks at the
/// primary subtag (`pt-BR` -> `pt`).
pub fn lookup(code: &str) -> Option<&'static LocaleProfile> {
    let primary = code.trim().split(['-', '_']).next()?.to_ascii_lowercase();
    PROFILES.iter().find(|p| p.code == primary)
}

/// `(code, name)` of every supported locale.
pub fn supported() -> Vec<(&'static str, &'static str)> {
    PROFILES.iter().map(|p| (p.code, p.name)).collect()
}
