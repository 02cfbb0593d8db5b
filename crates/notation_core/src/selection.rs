//! Text selection representation.

use crate::Caret;
use crate::text::clamp_to_char_boundary;

/// A selection over the control value, as a byte range.
///
/// The range is always normalized so `start <= end`. A collapsed range
/// (`start == end`) is a plain caret with no active selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start byte offset of the selection (inclusive).
    pub start: Caret,
    /// End byte offset of the selection (exclusive).
    pub end: Caret,
}

impl SelectionRange {
    /// Create a new selection range, normalized so `start <= end`.
    #[inline]
    pub fn new(a: Caret, b: Caret) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed selection (plain caret) at `at`.
    #[inline]
    pub const fn collapsed(at: Caret) -> Self {
        Self { start: at, end: at }
    }

    /// Returns `true` if the selection is collapsed (zero-width).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the selection in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Snap both endpoints to character boundaries of `value`.
    ///
    /// Out-of-range endpoints are clamped to the value length, so the result
    /// is always safe to slice with.
    #[inline]
    pub fn clamp_to(self, value: &str) -> Self {
        Self::new(
            clamp_to_char_boundary(value, self.start),
            clamp_to_char_boundary(value, self.end),
        )
    }
}
