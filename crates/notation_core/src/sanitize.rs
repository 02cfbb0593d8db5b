//! The notation sanitizer.
//!
//! Notation values are restricted to a small character set: ASCII digits,
//! the letters `u` and `o`, space, `+` and `-`. Raw keyboard and clipboard
//! input may contain anything; these functions map it onto that set.

use std::borrow::Cow;

use crate::Caret;
use crate::text::clamp_to_char_boundary;

/// Returns `true` if `c` may appear in a sanitized notation value.
///
/// The accepted set is lower-case; [`sanitize`] case-folds before checking.
///
/// # Examples
///
/// ```
/// use notation_core::is_notation_char;
///
/// assert!(is_notation_char('7'));
/// assert!(is_notation_char('u'));
/// assert!(is_notation_char(' '));
/// assert!(!is_notation_char('U'));
/// assert!(!is_notation_char('x'));
/// ```
#[inline]
pub fn is_notation_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, 'u' | 'o' | ' ' | '+' | '-')
}

/// Sanitize raw text into a valid notation value.
///
/// Lower-cases the input and strips every character outside the accepted
/// set. Idempotent: `sanitize(sanitize(s)) == sanitize(s)`.
///
/// Returns a `Cow::Borrowed` if the input is already valid notation (fast
/// path), or a `Cow::Owned` with the offending characters removed.
///
/// # Examples
///
/// ```
/// use notation_core::sanitize;
///
/// assert_eq!(sanitize("12AB34"), "1234");
/// assert_eq!(sanitize("1U2O"), "1u2o");
/// assert_eq!(sanitize("3 + 4u"), "3 + 4u");
/// ```
pub fn sanitize(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_notation_char) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .map(|c| c.to_ascii_lowercase())
            .filter(|c| is_notation_char(*c))
            .collect(),
    )
}

/// Sanitize a raw value around a caret, preserving the caret's semantic
/// position.
///
/// The raw value is split at `caret`, the two halves are sanitized
/// independently, and the new caret lands exactly after the cleaned prefix.
/// Splitting first means no index remapping across stripped characters is
/// ever needed.
///
/// `caret` is snapped to a character boundary of `raw` before the split.
///
/// # Examples
///
/// ```
/// use notation_core::sanitize_split;
///
/// // 'A' and 'B' before the caret are stripped; the caret follows "12".
/// assert_eq!(sanitize_split("12AB34", 4), ("1234".to_string(), 2));
/// // Already-valid input passes through untouched.
/// assert_eq!(sanitize_split("1 2", 1), ("1 2".to_string(), 1));
/// ```
pub fn sanitize_split(raw: &str, caret: Caret) -> (String, Caret) {
    let caret = clamp_to_char_boundary(raw, caret);
    let pre = sanitize(&raw[..caret]);
    let suf = sanitize(&raw[caret..]);
    let new_caret = pre.len();
    let mut value = pre.into_owned();
    value.push_str(&suf);
    (value, new_caret)
}
