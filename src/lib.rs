extern crate self as typoguess;

use regex::{Captures, Regex};

#[macro_use]
mod macros;
mod api;
mod engine;
mod markup;
mod rules;

pub use api::{GuessReport, Guesser, Options, RuleStep, guess_punctuation, supported_locales};
pub use engine::{RuleSet, Triggers, apply_rules};
pub use markup::{Guarded, ProtectedSpan, SpanKind, protect, restore};

// --- Rule types -------------------------------------------------------------

/// Stable identifier of a rule in the pipeline.
///
/// Locale overrides address rules by id, never by position, so the base table
/// can be reordered or extended without breaking a locale profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    DoubleQuote,
    NIdiom,
    SingleQuote,
    DoublePrime,
    SinglePrime,
    Apostrophe,
    Ellipsis,
    SeparatorDash,
    DateHyphen,
    FigureDash,
    RangeDash,
    Hyphen,
    /// A rule appended by a locale profile.
    Extra(&'static str),
}

impl RuleId {
    /// Whether a locale profile may swap this rule's replacer.
    pub fn is_overridable(self) -> bool {
        matches!(self, RuleId::DoubleQuote | RuleId::NIdiom | RuleId::SingleQuote | RuleId::Apostrophe | RuleId::Hyphen)
    }
}

/// Guard evaluated against the character right before a candidate match
/// (`None` at the start of the text).
pub type CharGuard = fn(Option<char>) -> bool;

/// Name of the regex group that holds trailing context. The group is matched
/// but neither consumed nor replaced.
pub const AHEAD_GROUP: &str = "ahead";

/// What a rule looks for.
///
/// The `regex` crate has no lookaround, so a pattern carries it explicitly:
///
/// ```text
///   before guard      consumed part         (?P<ahead>...)
///  ─────────────┬─────────────────────────┬────────────────
///   x[-1] ok?   │  "(.+?)"                │  [^\p{L}\p{Nd}]|$
///               └─ replaced ──────────────┘  scanning resumes here
/// ```
///
/// Because the trailing context is part of the regex, lazy spans still
/// backtrack past a closing candidate that is followed by the wrong character.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub regex: &'static Regex,
    pub before: Option<CharGuard>,
}

impl Pattern {
    pub fn new(regex: &'static Regex) -> Self {
        Pattern { regex, before: None }
    }

    pub fn preceded_by(mut self, guard: CharGuard) -> Self {
        self.before = Some(guard);
        self
    }

    fn accepts_start(&self, text: &str, start: usize) -> bool {
        match self.before {
            Some(guard) => guard(text[..start].chars().next_back()),
            None => true,
        }
    }
}

/// A single accepted match handed to a replacer.
pub struct RuleMatch<'t> {
    caps: Captures<'t>,
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> RuleMatch<'t> {
    /// The consumed text (trailing context excluded).
    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }

    /// Capture group `index`, if it participated in the match.
    pub fn group(&self, index: usize) -> Option<&'t str> {
        self.caps.get(index).map(|m| m.as_str())
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }
}

/// How a match is rewritten.
#[derive(Clone, Copy)]
pub enum Replacer {
    /// Template expanded with `${n}` group references.
    Template(&'static str),
    /// Per-match logic. `None` leaves the match untouched so a later rule can
    /// still have a go at it.
    Computed(fn(&RuleMatch<'_>) -> Option<String>),
}

impl std::fmt::Debug for Replacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Replacer::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Replacer::Computed(_) => f.write_str("Computed(<function>)"),
        }
    }
}

/// A substitution rule: an id, a pattern and a replacer.
///
/// `triggers` lists the characters that must be present in the input for the
/// rule to have any chance of matching; the pipeline skips the rule otherwise.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    pub id: RuleId,
    pub name: &'static str,
    pub pattern: Pattern,
    pub replacer: Replacer,
    pub triggers: Triggers,
}

impl SubstitutionRule {
    /// Replace every non-overlapping match in `text`, left to right.
    ///
    /// Returns the rewritten text and how many matches were actually changed.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let regex = self.pattern.regex;
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut pos = 0;
        let mut changed = 0;

        while pos <= text.len() {
            let Some(caps) = regex.captures_at(text, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            let start = whole.start();

            if !self.pattern.accepts_start(text, start) {
                pos = next_boundary(text, start);
                continue;
            }

            let end = caps.name(AHEAD_GROUP).map_or(whole.end(), |ahead| ahead.start());
            let rule_match = RuleMatch { caps, text, start, end };

            let replacement = match self.replacer {
                Replacer::Template(template) => {
                    let mut expanded = String::new();
                    rule_match.caps.expand(template, &mut expanded);
                    Some(expanded)
                }
                Replacer::Computed(produce) => produce(&rule_match),
            };

            if let Some(replacement) = replacement {
                out.push_str(&text[copied..start]);
                out.push_str(&replacement);
                copied = end;
                changed += 1;
            }

            pos = if end > start { end } else { next_boundary(text, start) };
        }

        out.push_str(&text[copied..]);
        (out, changed)
    }
}

/// Byte index of the character after the one starting at `index`.
fn next_boundary(text: &str, index: usize) -> usize {
    text[index..].chars().next().map_or(text.len() + 1, |c| index + c.len_utf8())
}
