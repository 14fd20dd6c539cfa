//! Trigger scanning (input pre-classification).
//!
//! Every base rule needs at least one ASCII character to be present before it
//! can match: a straight quote, a period, a hyphen, a digit. Scanning for these
//! once up front lets the pipeline skip most rules on typical short fields
//! (a title without quotes or hyphens touches none of the twelve).
//!
//! ## Design notes
//!
//! - The scan runs on the text as it enters the first rule and again after any
//!   rule that rewrote it, so custom rules that emit `'` or `-` still wake
//!   the rules after them.
//! - Rules with an empty trigger set are always on.

bitflags::bitflags! {
    /// Characters a rule reacts to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Triggers: u8 {
        const DOUBLE_QUOTE = 1 << 0;
        const APOSTROPHE   = 1 << 1;
        const PERIOD       = 1 << 2;
        const HYPHEN       = 1 << 3;
        const DIGIT        = 1 << 4;
    }
}

/// Characters detected in the raw input.
#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub present: Triggers,
}

impl TriggerInfo {
    pub fn scan(input: &str) -> Self {
        let mut present = Triggers::empty();

        for c in input.chars() {
            present |= match c {
                '"' => Triggers::DOUBLE_QUOTE,
                '\'' => Triggers::APOSTROPHE,
                '.' => Triggers::PERIOD,
                '-' => Triggers::HYPHEN,
                c if c.is_numeric() => Triggers::DIGIT,
                _ => continue,
            };

            if present.is_all() {
                break;
            }
        }

        TriggerInfo { present }
    }

    /// Whether every trigger in `required` was seen.
    pub fn allows(&self, required: Triggers) -> bool {
        self.present.contains(required)
    }
}
