//! Guards on the character preceding a match. `None` means start of text.

/// Unicode letter or decimal digit.
pub fn is_letter_or_digit(c: char) -> bool {
    c.is_alphabetic() || c.is_numeric()
}

/// Word character: letter, digit or underscore.
pub fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Letter of the Hebrew alphabet (alef to tav, final forms included).
pub fn is_hebrew_letter(c: char) -> bool {
    ('\u{05D0}'..='\u{05EA}').contains(&c)
}

/// Start of text or anything but a letter or digit.
pub fn not_letter_or_digit(prev: Option<char>) -> bool {
    !prev.is_some_and(is_letter_or_digit)
}

/// Start of text or a non-word character.
pub fn not_word(prev: Option<char>) -> bool {
    !prev.is_some_and(is_word)
}

/// Start of text or anything but a period.
pub fn not_period(prev: Option<char>) -> bool {
    prev != Some('.')
}

/// Some character that is not whitespace. Start of text does not qualify.
pub fn non_space(prev: Option<char>) -> bool {
    prev.is_some_and(|c| !c.is_whitespace())
}

pub fn hebrew_letter(prev: Option<char>) -> bool {
    prev.is_some_and(is_hebrew_letter)
}
