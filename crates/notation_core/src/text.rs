//! UTF-8 text utilities for caret handling.
//!
//! Raw input may contain arbitrary multi-byte text before it is sanitized,
//! so every byte index taken from outside must be snapped to a character
//! boundary before it is used to slice a value.

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// If `index` is beyond the string length, it is clamped to `s.len()`.
/// If `index` falls in the middle of a multi-byte character, it is
/// adjusted backwards to the start of that character.
///
/// # Examples
///
/// ```
/// use notation_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 1), 1); // start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 2), 1); // mid '€' -> start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 100), 5); // beyond end -> len
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Find the previous valid caret position (character boundary) before `i`.
///
/// Returns 0 if already at the start.
///
/// # Examples
///
/// ```
/// use notation_core::prev_cursor_boundary;
///
/// let s = "a€b";
/// assert_eq!(prev_cursor_boundary(s, 4), 1); // 'b' -> '€'
/// assert_eq!(prev_cursor_boundary(s, 1), 0); // '€' -> 'a'
/// assert_eq!(prev_cursor_boundary(s, 0), 0); // already at start
/// ```
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i == 0 {
        return 0;
    }
    s[..i]
        .char_indices()
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}
