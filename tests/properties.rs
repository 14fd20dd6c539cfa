//! Property tests for the pipeline and the markup guard.

use proptest::prelude::*;
use typoguess::{Options, RuleSet, apply_rules, guess_punctuation, protect};

/// Text built only from characters the rules never match on their own, plus
/// the target punctuation forms.
fn typeset_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            'a', 'Z', 'é', 'ж', '7', ' ', ',', '!', '“', '”', '‘', '’', '′', '″', '…', '–', '‐', '‒', '«', '»', '\n',
        ]),
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Text with plenty of ASCII punctuation the rules react to.
fn ascii_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            'a', 'n', 'x', '1', '9', '0', ' ', '"', '\'', '-', '.', '[', ']', '|', '/', ':', '(', ')',
        ]),
        0..80,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    /// Text already in its typographic form is left exactly as is.
    #[test]
    fn typeset_text_is_a_fixpoint(text in typeset_text(), locale in prop::sample::select(vec!["", "de", "fr", "ja", "he"])) {
        let rules = RuleSet::for_locale(Some(locale));
        prop_assert_eq!(apply_rules(&text, &rules), text);
    }

    /// Guessing never panics, leaves no straight apostrophe behind and never
    /// brings back ASCII punctuation on a second pass.
    #[test]
    fn guessing_is_total(text in ascii_text()) {
        let once = guess_punctuation(&text, &Options::default());
        let twice = guess_punctuation(&once, &Options::default());
        prop_assert!(!once.contains('\''));
        prop_assert!(twice.matches('"').count() <= once.matches('"').count());
        prop_assert!(twice.matches('-').count() <= once.matches('-').count());
    }

    /// Protecting and restoring without touching the text is the identity.
    #[test]
    fn markup_round_trip(text in ascii_text()) {
        let guarded = protect(&text);
        prop_assert_eq!(guarded.restore(), text);
    }

    #[test]
    fn markup_round_trip_any_unicode(text in "\\PC{0,64}") {
        let guarded = protect(&text);
        prop_assert_eq!(guarded.restore(), text);
    }

    /// Placeholders never carry characters any rule could match.
    #[test]
    fn placeholders_are_inert(text in ascii_text()) {
        let guarded = protect(&text);
        for span in &guarded.spans {
            prop_assert!(!span.placeholder.contains(['\'', '"', '-', '.', '/']));
        }
    }
}
