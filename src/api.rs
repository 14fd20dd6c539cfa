use crate::engine::{Pipeline, RuleSet};
use crate::markup;
use std::time::{Duration, Instant};

/// Options that affect guessing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// ISO 639-1 language code of the text. Unknown or absent codes use the
    /// base rules.
    pub locale: Option<String>,
    /// Keep `'''bold'''`, `''italic''`, `[link|label]` targets and URLs intact.
    /// Meant for long free-text fields; short fields such as titles leave it off.
    pub preserve_markup: bool,
}

impl Options {
    pub fn with_locale(mut self, code: impl Into<String>) -> Self {
        self.locale = Some(code.into());
        self
    }

    pub fn with_markup(mut self, preserve: bool) -> Self {
        self.preserve_markup = preserve;
        self
    }
}

/// What one rule did during a verbose run.
#[derive(Debug, Clone)]
pub struct RuleStep {
    pub rule: String,
    pub replacements: usize,
    pub skipped: bool,
    pub duration: Duration,
}

/// Result from [`Guesser::guess_verbose`].
#[derive(Debug, Clone)]
pub struct GuessReport {
    pub input: String,
    pub output: String,
    /// Locale profile that was applied, if any.
    pub locale: Option<String>,
    /// Number of markup spans kept out of the pipeline.
    pub protected_spans: usize,
    /// One entry per rule, in pipeline order.
    pub steps: Vec<RuleStep>,
    /// Total elapsed time, markup guard included.
    pub elapsed: Duration,
}

impl GuessReport {
    /// Whether guessing changed anything. Exact string comparison.
    pub fn changed(&self) -> bool {
        self.input != self.output
    }
}

/// A resolved rule set plus options, reusable across many inputs.
///
/// Resolving rules clones the base table; build one `Guesser` per locale and
/// keep it around when processing many fields.
///
/// # Example
/// ```
/// use typoguess::{Guesser, Options};
///
/// let guesser = Guesser::new(&Options::default().with_locale("de"));
/// assert_eq!(guesser.guess("\"Hallo\" - sagte sie"), "„Hallo“ – sagte sie");
/// ```
#[derive(Debug, Clone)]
pub struct Guesser {
    rules: RuleSet,
    preserve_markup: bool,
}

impl Guesser {
    pub fn new(options: &Options) -> Self {
        Guesser { rules: RuleSet::for_locale(options.locale.as_deref()), preserve_markup: options.preserve_markup }
    }

    /// Build from an already resolved (possibly customized) rule set.
    pub fn with_rules(rules: RuleSet, preserve_markup: bool) -> Self {
        Guesser { rules, preserve_markup }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn guess(&self, text: &str) -> String {
        let pipeline = Pipeline::new(&self.rules);

        if !self.preserve_markup {
            return pipeline.run(text);
        }

        let guarded = markup::protect(text);
        let output = pipeline.run(&guarded.text);
        markup::restore(&output, &guarded.spans)
    }

    /// Same as [`Guesser::guess`], plus a per-rule trace.
    pub fn guess_verbose(&self, text: &str) -> GuessReport {
        let start = Instant::now();
        let pipeline = Pipeline::new(&self.rules);

        let (run, protected_spans) = if self.preserve_markup {
            let guarded = markup::protect(text);
            let mut run = pipeline.run_with_metrics(&guarded.text);
            run.output = markup::restore(&run.output, &guarded.spans);
            (run, guarded.spans.len())
        } else {
            (pipeline.run_with_metrics(text), 0)
        };

        let steps = run
            .metrics
            .rules
            .iter()
            .map(|m| RuleStep {
                rule: m.rule.to_string(),
                replacements: m.replacements,
                skipped: m.skipped,
                duration: m.duration,
            })
            .collect();

        GuessReport {
            input: text.to_string(),
            output: run.output,
            locale: self.rules.locale().map(str::to_string),
            protected_spans,
            steps,
            elapsed: start.elapsed(),
        }
    }
}

/// Guess typographic punctuation for `text`.
///
/// # Example
/// ```
/// use typoguess::{Options, guess_punctuation};
///
/// let out = guess_punctuation("rock 'n' roll - 1989-90", &Options::default());
/// assert_eq!(out, "rock ’n’ roll – 1989–90");
/// ```
pub fn guess_punctuation(text: &str, options: &Options) -> String {
    Guesser::new(options).guess(text)
}

/// `(code, name)` of every language with a locale profile.
pub fn supported_locales() -> Vec<(&'static str, &'static str)> {
    crate::rules::locale::supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_punctuation_with_defaults() {
        let out = guess_punctuation("He said \"hello\" to me...", &Options::default());
        assert_eq!(out, "He said “hello” to me…");
    }

    #[test]
    fn locale_option_selects_profile() {
        let cases: Vec<(Option<&str>, &str)> =
            vec![(None, "“Bonjour”"), (Some("fr"), "« Bonjour »"), (Some("de"), "„Bonjour“"), (Some("zz"), "“Bonjour”")];

        for (locale, expected) in cases {
            let options = Options { locale: locale.map(str::to_string), preserve_markup: false };
            assert_eq!(guess_punctuation("\"Bonjour\"", &options), expected, "locale: {locale:?}");
        }
    }

    #[test]
    fn markup_is_preserved_only_when_asked() {
        let text = "''Live'' at [http://example.com/a-b|Rock 'n' Roll] - see https://x.org/it's-here";

        let kept = guess_punctuation(text, &Options::default().with_markup(true));
        assert_eq!(kept, "''Live'' at [http://example.com/a-b|Rock ’n’ Roll] – see https://x.org/it's-here");

        let plain = guess_punctuation("''Live''", &Options::default());
        assert_eq!(plain, "‘’Live’’");
    }

    #[test]
    fn verbose_report_matches_plain_guess() {
        let guesser = Guesser::new(&Options::default().with_locale("fr").with_markup(true));
        let text = "'''\"Oui\"''' - 2016-04";
        let report = guesser.guess_verbose(text);

        assert_eq!(report.output, guesser.guess(text));
        assert_eq!(report.output, "'''« Oui »''' – 2016‐04");
        assert_eq!(report.locale.as_deref(), Some("fr"));
        assert_eq!(report.protected_spans, 2);
        assert_eq!(report.steps.len(), guesser.rules().len());
        assert!(report.changed());
    }

    #[test]
    fn unchanged_text_is_reported_as_such() {
        let report = Guesser::new(&Options::default()).guess_verbose("Already “curly” – fine");
        assert!(!report.changed());
        assert!(report.steps.iter().all(|s| s.skipped));
    }

    #[test]
    fn guesser_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Guesser>();

        let guesser = std::sync::Arc::new(Guesser::new(&Options::default().with_locale("ja")));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let guesser = guesser.clone();
                std::thread::spawn(move || guesser.guess(&format!("\"{i}\" - 'x'")))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("「{i}」 – 『x』"));
        }
    }
}
