//! Bidirectional control character stripping.

use std::borrow::Cow;

/// Check whether a character is an invisible bidirectional control.
///
/// Covers the Arabic letter mark, the LRM/RLM marks, the embedding and
/// override controls (U+202A..U+202E) and the isolates (U+2066..U+2069).
pub fn is_bidi_control(ch: char) -> bool {
    matches!(
        ch,
        '\u{061C}' | '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}'
    )
}

/// Remove all bidirectional control characters from a string.
///
/// Borrows the input when there is nothing to strip.
///
/// # Examples
///
/// ```
/// use siteurl::strip_bidi_controls;
///
/// assert_eq!(strip_bidi_controls("\u{202E}example.com"), "example.com");
/// assert_eq!(strip_bidi_controls("example.com"), "example.com");
/// ```
pub fn strip_bidi_controls(input: &str) -> Cow<'_, str> {
    if input.chars().any(is_bidi_control) {
        Cow::Owned(input.chars().filter(|&ch| !is_bidi_control(ch)).collect())
    } else {
        Cow::Borrowed(input)
    }
}
