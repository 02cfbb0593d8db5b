//! The control contract and a headless implementation of it.
//!
//! The synchronizer never talks to a real widget directly; it drives
//! anything implementing [`TextControl`]. [`BufferControl`] is the headless
//! in-memory implementation used by the demo shell and the test suites.

use crate::selection::SelectionRange;
use crate::text::{clamp_to_char_boundary, prev_cursor_boundary};
use crate::Caret;

/// Read/write contract of the editable text control.
///
/// Implementations own the displayed value and the caret/selection. The
/// embedding layer hands the synchronizer a control instead of letting it
/// reach for a global reference, so a headless stub works everywhere a real
/// widget would.
pub trait TextControl {
    /// The currently displayed value.
    fn value(&self) -> &str;

    /// The current selection; collapsed when no range is active.
    fn selection(&self) -> SelectionRange;

    /// Replace value and caret together, collapsing any selection.
    ///
    /// The two must be applied in one step: the control never renders a
    /// value without its matching caret.
    fn replace(&mut self, value: String, caret: Caret);

    /// Overwrite the value outright (owner push). The caret moves to the end
    /// of the new value, as a native control does on programmatic
    /// assignment; no selection survives.
    fn set_value(&mut self, value: String);

    /// Apply a caret/selection, clamped to the current value.
    fn set_selection(&mut self, start: Caret, end: Caret);
}

/// Headless, in-memory text control.
///
/// Behaves like a plain single-line input: a value, a caret, and an optional
/// selection anchor. The editing helpers ([`insert_str`](Self::insert_str),
/// [`backspace`](Self::backspace)) simulate native edits and accept *raw*
/// text — sanitization is the synchronizer's job, not the control's.
#[derive(Clone, Debug, Default)]
pub struct BufferControl {
    value: String,
    caret: Caret,
    selection_anchor: Option<Caret>,
}

impl BufferControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Control pre-loaded with a value, caret at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let caret = value.len();
        Self {
            value,
            caret,
            selection_anchor: None,
        }
    }

    /// Current caret byte position.
    pub fn caret(&self) -> Caret {
        self.caret
    }

    /// Simulate a native edit: insert raw text at the caret, replacing any
    /// active selection. No filtering is applied.
    pub fn insert_str(&mut self, s: &str) {
        self.delete_selection_if_any();
        let caret = clamp_to_char_boundary(&self.value, self.caret);
        self.value.insert_str(caret, s);
        self.caret = caret + s.len();
    }

    /// Simulate a native backspace: delete the selection if one is active,
    /// otherwise the character before the caret.
    pub fn backspace(&mut self) {
        if self.delete_selection_if_any() {
            return;
        }
        let caret = clamp_to_char_boundary(&self.value, self.caret);
        if caret == 0 {
            return;
        }
        let prev = prev_cursor_boundary(&self.value, caret);
        self.value.drain(prev..caret);
        self.caret = prev;
    }

    fn delete_selection_if_any(&mut self) -> bool {
        let sel = self.selection();
        self.selection_anchor = None;
        if sel.is_empty() {
            self.caret = sel.start;
            return false;
        }
        self.value.drain(sel.start..sel.end);
        self.caret = sel.start;
        true
    }
}

impl TextControl for BufferControl {
    fn value(&self) -> &str {
        &self.value
    }

    fn selection(&self) -> SelectionRange {
        match self.selection_anchor {
            Some(anchor) => SelectionRange::new(anchor, self.caret).clamp_to(&self.value),
            None => SelectionRange::collapsed(clamp_to_char_boundary(&self.value, self.caret)),
        }
    }

    fn replace(&mut self, value: String, caret: Caret) {
        self.caret = clamp_to_char_boundary(&value, caret);
        self.value = value;
        self.selection_anchor = None;
    }

    fn set_value(&mut self, value: String) {
        self.caret = value.len();
        self.value = value;
        self.selection_anchor = None;
    }

    fn set_selection(&mut self, start: Caret, end: Caret) {
        let sel = SelectionRange::new(start, end).clamp_to(&self.value);
        self.selection_anchor = if sel.is_empty() { None } else { Some(sel.start) };
        self.caret = sel.end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_appends_at_caret() {
        let mut control = BufferControl::new();
        control.insert_str("12");
        control.insert_str("AB");
        assert_eq!(control.value(), "12AB");
        assert_eq!(control.caret(), 4);
    }

    #[test]
    fn insert_replaces_active_selection() {
        let mut control = BufferControl::with_value("1234");
        control.set_selection(1, 3);
        control.insert_str("u");
        assert_eq!(control.value(), "1u4");
        assert_eq!(control.caret(), 2);
    }

    #[test]
    fn backspace_removes_a_full_unicode_scalar_value() {
        let mut control = BufferControl::with_value("a€");
        control.backspace();
        assert_eq!(control.value(), "a");
        assert_eq!(control.caret(), 1);
    }

    #[test]
    fn backspace_deletes_selection_first() {
        let mut control = BufferControl::with_value("1234");
        control.set_selection(1, 3);
        control.backspace();
        assert_eq!(control.value(), "14");
        assert_eq!(control.caret(), 1);
    }

    #[test]
    fn replace_applies_value_and_caret_together() {
        let mut control = BufferControl::with_value("12AB34");
        control.set_selection(0, 2);
        control.replace("1234".to_string(), 2);
        assert_eq!(control.value(), "1234");
        assert_eq!(control.caret(), 2);
        assert!(control.selection().is_empty());
    }

    #[test]
    fn replace_clamps_caret_to_new_value() {
        let mut control = BufferControl::new();
        control.replace("12".to_string(), 99);
        assert_eq!(control.caret(), 2);
    }

    #[test]
    fn set_value_moves_caret_to_end() {
        let mut control = BufferControl::with_value("1234");
        control.set_selection(1, 3);
        control.set_value("1u2o".to_string());
        assert_eq!(control.value(), "1u2o");
        assert_eq!(control.caret(), 4);
        assert!(control.selection().is_empty());
    }

    #[test]
    fn set_selection_round_trips() {
        let mut control = BufferControl::with_value("12345678");
        control.set_selection(3, 5);
        assert_eq!(control.selection(), SelectionRange::new(3, 5));
    }

    #[test]
    fn set_selection_normalizes_and_clamps() {
        let mut control = BufferControl::with_value("1234");
        control.set_selection(100, 2);
        assert_eq!(control.selection(), SelectionRange::new(2, 4));
    }

    #[test]
    fn collapsed_set_selection_moves_the_caret() {
        let mut control = BufferControl::with_value("1234");
        control.set_selection(1, 1);
        assert_eq!(control.caret(), 1);
        assert!(control.selection().is_empty());
    }
}
