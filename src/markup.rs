//! Markup guard.
//!
//! Free-text fields support a small markup convention: `'''bold'''`,
//! `''italic''` and links written as `[target|label]` or `[target]`. None of
//! it may be touched by the punctuation rules, so before the pipeline runs the
//! protected parts are swapped for placeholders the rules cannot match, and
//! afterwards swapped back.
//!
//! ```text
//! [http://a.b/c-d|it's]  ──protect──▶  [⟨aHR0cDovL2EuYi9jLWQ⟩|it's]
//!                        ──rules────▶  [⟨aHR0cDovL2EuYi9jLWQ⟩|it’s]
//!                        ──restore──▶  [http://a.b/c-d|it’s]
//! ```
//!
//! (`⟨` and `⟩` stand for the private-use sentinels U+E000 and U+E001.)
//!
//! Link targets and bare URLs are base64-encoded with an alphabet that has no
//! `'`, `"`, `-`, `.` or `/`, so no rule and no later protection pass can match
//! inside a placeholder. Bold and italic markers become single private-use
//! characters. Malformed markup is simply not recognised and stays literal.

use base64::Engine as _;
use base64::alphabet::Alphabet;
use base64::engine::{GeneralPurpose, general_purpose};

const PLACEHOLDER_OPEN: char = '\u{E000}';
const PLACEHOLDER_CLOSE: char = '\u{E001}';
const BOLD: char = '\u{E002}';
const ITALIC: char = '\u{E003}';

const SENTINELS: [char; 4] = [PLACEHOLDER_OPEN, PLACEHOLDER_CLOSE, BOLD, ITALIC];

const PLACEHOLDER_ALPHABET: Alphabet =
    match Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+_") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("invalid placeholder alphabet"),
    };

const PLACEHOLDER_ENGINE: GeneralPurpose = GeneralPurpose::new(&PLACEHOLDER_ALPHABET, general_purpose::NO_PAD);

/// What a protected span was in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// The target of a `[target|label]` or `[target]` link.
    LinkTarget,
    /// Host and path after `//`.
    Url,
    /// `'''`
    Bold,
    /// `''`
    Italic,
}

/// A substring excluded from rewriting, and what stands in for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedSpan {
    pub kind: SpanKind,
    pub original: String,
    pub placeholder: String,
}

/// Guarded text together with the spans needed to restore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guarded {
    pub text: String,
    pub spans: Vec<ProtectedSpan>,
}

impl Guarded {
    pub fn restore(&self) -> String {
        restore(&self.text, &self.spans)
    }
}

/// Replace link targets, URLs and bold/italic markers with placeholders.
///
/// Links go first so that a link target is never also treated as a bare URL,
/// and bold goes before italic so `'''` is not half-eaten by the `''` pass.
/// Text that already contains one of the sentinel characters is returned as is
/// with no spans: restoring it could not tell ours from the user's.
pub fn protect(text: &str) -> Guarded {
    if text.contains(SENTINELS) {
        tracing::debug!("text contains placeholder sentinels, markup left unprotected");
        return Guarded { text: text.to_string(), spans: Vec::new() };
    }

    let mut spans = Vec::new();

    let text = regex!(r"\[(.+?)(\|.+?)?\]").replace_all(text, |caps: &regex::Captures<'_>| {
        let target = &caps[1];
        let label = caps.get(2).map_or("", |m| m.as_str());
        let placeholder = encode(target);
        spans.push(ProtectedSpan { kind: SpanKind::LinkTarget, original: target.to_string(), placeholder: placeholder.clone() });
        format!("[{placeholder}{label}]")
    });

    let text = regex!(r"//(\S+)").replace_all(&text, |caps: &regex::Captures<'_>| {
        let url = &caps[1];
        let placeholder = encode(url);
        spans.push(ProtectedSpan { kind: SpanKind::Url, original: url.to_string(), placeholder: placeholder.clone() });
        format!("//{placeholder}")
    });

    let text = swap_marker(&text, "'''", BOLD, SpanKind::Bold, &mut spans);
    let text = swap_marker(&text, "''", ITALIC, SpanKind::Italic, &mut spans);

    if !spans.is_empty() {
        tracing::debug!(spans = spans.len(), "protected markup");
    }

    Guarded { text, spans }
}

/// Put the protected spans back, last protected first.
///
/// With no mutation in between, `restore(protect(t))` returns `t` exactly.
pub fn restore(text: &str, spans: &[ProtectedSpan]) -> String {
    let mut text = text.to_string();

    for span in spans.iter().rev() {
        match text.find(&span.placeholder) {
            Some(at) => text.replace_range(at..at + span.placeholder.len(), &span.original),
            None => tracing::warn!(kind = ?span.kind, "placeholder vanished, span not restored"),
        }
    }

    text
}

fn encode(original: &str) -> String {
    let mut placeholder = String::with_capacity(original.len() * 4 / 3 + 8);
    placeholder.push(PLACEHOLDER_OPEN);
    PLACEHOLDER_ENGINE.encode_string(original, &mut placeholder);
    placeholder.push(PLACEHOLDER_CLOSE);
    placeholder
}

fn swap_marker(text: &str, marker: &str, sentinel: char, kind: SpanKind, spans: &mut Vec<ProtectedSpan>) -> String {
    let count = text.matches(marker).count();
    if count == 0 {
        return text.to_string();
    }

    spans.extend((0..count).map(|_| ProtectedSpan {
        kind,
        original: marker.to_string(),
        placeholder: sentinel.to_string(),
    }));
    text.replace(marker, sentinel.encode_utf8(&mut [0; 4]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_target_is_protected_but_label_is_not() {
        let guarded = protect("[http://example.com/a-b|it's]");

        assert_eq!(guarded.spans.len(), 1);
        assert_eq!(guarded.spans[0].kind, SpanKind::LinkTarget);
        assert_eq!(guarded.spans[0].original, "http://example.com/a-b");
        assert!(guarded.text.ends_with("|it's]"));
        assert!(!guarded.text.contains("example"));
    }

    #[test]
    fn bare_link_and_url() {
        let guarded = protect("see [mbid:1-2] and https://example.org/x-y.html");
        let kinds: Vec<SpanKind> = guarded.spans.iter().map(|s| s.kind).collect();

        assert_eq!(kinds, vec![SpanKind::LinkTarget, SpanKind::Url]);
        assert_eq!(guarded.spans[1].original, "example.org/x-y.html");
        assert!(guarded.text.contains("https://"));
        assert!(!guarded.text.contains('-'));
        assert!(!guarded.text.contains('.'));
    }

    #[test]
    fn bold_before_italic() {
        let guarded = protect("'''bold''' and ''italic''");
        let kinds: Vec<SpanKind> = guarded.spans.iter().map(|s| s.kind).collect();

        assert_eq!(kinds, vec![SpanKind::Bold, SpanKind::Bold, SpanKind::Italic, SpanKind::Italic]);
        assert_eq!(guarded.text, "\u{E002}bold\u{E002} and \u{E003}italic\u{E003}");
    }

    #[test]
    fn placeholders_avoid_rule_characters() {
        let guarded = protect("[\"quoted\" 'single' a-b...|x] //'''\"---...");
        for span in &guarded.spans {
            assert!(!span.placeholder.contains(['\'', '"', '-', '.', '/']), "{span:?}");
        }
    }

    #[test]
    fn round_trip_is_identity() {
        let cases = [
            "",
            "no markup at all",
            "[http://example.com/a-b|label]",
            "[http://example.com/a-b]",
            "http://example.com/path?q=it's",
            "'''bold''' ''italic'' '''''both'''''",
            "[a|b] [a|b] //x //x",
            "unbalanced [bracket and ''' marker",
            "ünïcödé [https://例え.jp/パス|ラベル]",
        ];

        for text in cases {
            let guarded = protect(text);
            assert_eq!(guarded.restore(), text, "text: {text:?}");
        }
    }

    #[test]
    fn sentinels_in_input_disable_protection() {
        let text = "odd \u{E002} input '''bold'''";
        let guarded = protect(text);

        assert!(guarded.spans.is_empty());
        assert_eq!(guarded.text, text);
        assert_eq!(guarded.restore(), text);
    }

    #[test]
    fn malformed_markup_stays_literal() {
        let guarded = protect("[unclosed and ] stray");
        assert_eq!(guarded.spans.len(), 1);
        assert_eq!(guarded.restore(), "[unclosed and ] stray");

        let guarded = protect("[] empty");
        assert!(guarded.spans.is_empty());
        assert_eq!(guarded.text, "[] empty");
    }
}
