//! Rule-set resolution.
//!
//! The base rule table and the locale table are process-wide, immutable and
//! built once. Resolving a `RuleSet` for a locale always produces a fresh,
//! independently owned copy:
//!
//! 1. clone the base sequence,
//! 2. for each override the locale declares, swap the replacer of the rule
//!    with that `RuleId` (the pattern is never touched),
//! 3. append the locale's extra rules in declaration order.
//!
//! ## Invariants
//!
//! - Nothing here mutates the base table, so concurrent resolutions for
//!   different locales cannot interfere.
//! - Unknown or malformed locale codes resolve to the base rules; there is no
//!   error path.

use crate::rules::{base, locale};
use crate::{Replacer, RuleId, SubstitutionRule};
use once_cell::sync::Lazy;

static BASE_RULES: Lazy<Vec<SubstitutionRule>> = Lazy::new(base::get);

/// An ordered sequence of substitution rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<SubstitutionRule>,
    locale: Option<&'static str>,
}

impl RuleSet {
    /// The base rules, without any locale customization.
    pub fn base() -> Self {
        RuleSet { rules: BASE_RULES.clone(), locale: None }
    }

    /// Resolve the rules for an optional language code.
    ///
    /// Codes are matched case-insensitively on their primary subtag, so `de`,
    /// `DE`, `de-AT` and `de_CH` all select the German profile.
    pub fn for_locale(code: Option<&str>) -> Self {
        let Some(profile) = code.and_then(locale::lookup) else {
            if let Some(code) = code {
                tracing::debug!(code, "no locale profile, using base rules");
            }
            return Self::base();
        };

        let mut rules = BASE_RULES.clone();

        for &(slot, template) in profile.overrides {
            if !slot.is_overridable() {
                tracing::warn!(locale = profile.code, ?slot, "ignoring override of a fixed rule");
                continue;
            }
            match rules.iter_mut().find(|r| r.id == slot) {
                Some(rule) => rule.replacer = Replacer::Template(template),
                None => tracing::warn!(locale = profile.code, ?slot, "override names a rule that is not in the table"),
            }
        }

        rules.extend((profile.extra_rules)());

        RuleSet { rules, locale: Some(profile.code) }
    }

    /// The locale profile this set was resolved for, if any.
    pub fn locale(&self) -> Option<&'static str> {
        self.locale
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubstitutionRule> {
        self.rules.iter()
    }

    /// Rule ids in pipeline order.
    pub fn ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|r| r.id).collect()
    }

    /// The first rule with the given id.
    pub fn get(&self, id: RuleId) -> Option<&SubstitutionRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: RuleId) -> Option<&mut SubstitutionRule> {
        self.rules.iter_mut().find(|r| r.id == id)
    }

    /// Append a rule to the end of the pipeline.
    pub fn push(&mut self, rule: SubstitutionRule) {
        self.rules.push(rule);
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a SubstitutionRule;
    type IntoIter = std::slice::Iter<'a, SubstitutionRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(rules: &RuleSet, id: RuleId) -> Option<&'static str> {
        match rules.get(id)?.replacer {
            Replacer::Template(t) => Some(t),
            Replacer::Computed(_) => None,
        }
    }

    #[test]
    fn base_order_is_fixed() {
        assert_eq!(
            RuleSet::base().ids(),
            vec![
                RuleId::DoubleQuote,
                RuleId::NIdiom,
                RuleId::SingleQuote,
                RuleId::DoublePrime,
                RuleId::SinglePrime,
                RuleId::Apostrophe,
                RuleId::Ellipsis,
                RuleId::SeparatorDash,
                RuleId::DateHyphen,
                RuleId::FigureDash,
                RuleId::RangeDash,
                RuleId::Hyphen,
            ]
        );
    }

    #[test]
    fn unknown_locales_resolve_to_base() {
        for code in [None, Some("xx"), Some(""), Some("  "), Some("-"), Some("français")] {
            let rules = RuleSet::for_locale(code);
            assert_eq!(rules.locale(), None, "code: {code:?}");
            assert_eq!(rules.ids(), RuleSet::base().ids());
            assert_eq!(template(&rules, RuleId::DoubleQuote), Some("“${1}”"));
        }
    }

    #[test]
    fn overrides_patch_replacer_only() {
        let base = RuleSet::base();
        let german = RuleSet::for_locale(Some("de"));

        assert_eq!(german.locale(), Some("de"));
        assert_eq!(template(&german, RuleId::DoubleQuote), Some("„${1}“"));
        assert_eq!(template(&german, RuleId::SingleQuote), Some("‚${1}‘"));

        let (b, g) = (base.get(RuleId::DoubleQuote).unwrap(), german.get(RuleId::DoubleQuote).unwrap());
        assert!(std::ptr::eq(b.pattern.regex, g.pattern.regex));
        assert_eq!(b.name, g.name);
    }

    #[test]
    fn locale_codes_are_normalised() {
        for code in ["DE", " de ", "de-AT", "de_CH"] {
            assert_eq!(RuleSet::for_locale(Some(code)).locale(), Some("de"), "code: {code:?}");
        }
    }

    #[test]
    fn extra_rules_are_appended_after_base() {
        let hebrew = RuleSet::for_locale(Some("he"));
        let ids = hebrew.ids();
        let base_len = RuleSet::base().len();

        assert!(hebrew.len() > base_len);
        assert_eq!(ids[..base_len], RuleSet::base().ids()[..]);
        assert!(ids[base_len..].iter().all(|id| matches!(id, RuleId::Extra(_))));
    }

    #[test]
    fn resolution_returns_independent_copies() {
        let mut first = RuleSet::for_locale(Some("fr"));
        first.get_mut(RuleId::DoubleQuote).unwrap().replacer = Replacer::Template("<<${1}>>");
        first.push(RuleSet::base().get(RuleId::Hyphen).unwrap().clone());

        let second = RuleSet::for_locale(Some("fr"));
        assert_eq!(template(&second, RuleId::DoubleQuote), Some("« ${1} »"));
        assert_eq!(second.len(), RuleSet::base().len());
        assert_eq!(template(&RuleSet::base(), RuleId::DoubleQuote), Some("“${1}”"));
    }

    #[test]
    fn concurrent_resolution_does_not_interfere() {
        let handles: Vec<_> = ["de", "fr", "ja", "ru", "xx"]
            .into_iter()
            .cycle()
            .take(40)
            .map(|code| {
                std::thread::spawn(move || {
                    let mut rules = RuleSet::for_locale(Some(code));
                    let expected = template(&rules, RuleId::DoubleQuote);
                    rules.get_mut(RuleId::DoubleQuote).unwrap().replacer = Replacer::Template("${1}");
                    (code, expected)
                })
            })
            .collect();

        for handle in handles {
            let (code, seen) = handle.join().unwrap();
            assert_eq!(seen, template(&RuleSet::for_locale(Some(code)), RuleId::DoubleQuote));
        }
    }
}
