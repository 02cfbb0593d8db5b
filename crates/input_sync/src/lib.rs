//! Synchronizer between a text control and the external notation owner.
//!
//! The synchronizer owns the control (dependency-injected, anything
//! implementing [`TextControl`]) and reacts to two inbound streams merged
//! in arrival order: native control transitions ([`ControlEvent`]) and
//! owner pushes ([`SyncCommand`]). Every handler reads the control,
//! transforms, writes the control back, and emits at most one [`SyncEvent`]
//! before the next message is dequeued.

mod runtime;

pub use runtime::start_sync_runtime;

use std::sync::mpsc::Sender;

use bus::{ControlEvent, SyncCommand, SyncEvent};
use notation_core::{Caret, SelectionRange, TextControl, sanitize_split};

/// Whether the control currently holds input focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused,
}

/// Live binding between an editable control and the notation owner.
pub struct Synchronizer<C: TextControl> {
    control: C,
    focus: FocusState,
    evt_tx: Sender<SyncEvent>,
}

impl<C: TextControl> Synchronizer<C> {
    pub fn new(control: C, evt_tx: Sender<SyncEvent>) -> Self {
        Self {
            control,
            focus: FocusState::Unfocused,
            evt_tx,
        }
    }

    /// The wrapped control. Mutations go through messages, not this.
    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn focus_state(&self) -> FocusState {
        self.focus
    }

    /// Dispatch one native control transition.
    pub fn handle_event(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::FocusGained => {
                self.focus = FocusState::Focused;
                self.report_selection();
            }
            ControlEvent::FocusLost => {
                self.focus = FocusState::Unfocused;
            }
            ControlEvent::Edited { value, caret } => self.on_edited(&value, caret),
            ControlEvent::Navigated { start, end } => {
                self.control.set_selection(start, end);
                self.report_selection();
            }
        }
    }

    /// Dispatch one owner push.
    pub fn apply_command(&mut self, command: SyncCommand) {
        match command {
            SyncCommand::SetContent { content } => {
                log::debug!(target: "sync", "owner pushed content: {content:?}");
                self.control.set_value(content);
                let content = self.control.value().to_string();
                // The owner places the caret itself via SetSelection, so the
                // acknowledgment never claims one.
                let _ = self.evt_tx.send(SyncEvent::ContentChanged {
                    caret: None,
                    content,
                });
            }
            SyncCommand::SetSelection { start, end } => {
                log::trace!(target: "sync", "owner pushed selection: ({start}, {end})");
                self.control.set_selection(start, end);
            }
        }
    }

    /// Sanitize a completed raw edit while keeping the typed caret position.
    fn on_edited(&mut self, raw: &str, caret: Caret) {
        let (value, caret) = sanitize_split(raw, caret);
        log::trace!(target: "sync", "edit sanitized to {value:?}, caret {caret}");
        // Value and caret go in together; the control never renders the raw
        // text.
        self.control.replace(value.clone(), caret);
        let _ = self.evt_tx.send(SyncEvent::ContentChanged {
            caret: Some(caret),
            content: value,
        });
    }

    fn report_selection(&self) {
        let SelectionRange { start, end } = self.control.selection();
        let _ = self.evt_tx.send(SyncEvent::SelectionChanged { start, end });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notation_core::BufferControl;
    use std::sync::mpsc;

    fn fixture(control: BufferControl) -> (Synchronizer<BufferControl>, mpsc::Receiver<SyncEvent>) {
        let (evt_tx, evt_rx) = mpsc::channel();
        (Synchronizer::new(control, evt_tx), evt_rx)
    }

    #[test]
    fn focus_gain_reports_current_selection() {
        let mut control = BufferControl::with_value("1u2o");
        control.set_selection(1, 3);
        let (mut sync, evt_rx) = fixture(control);

        sync.handle_event(ControlEvent::FocusGained);

        assert_eq!(sync.focus_state(), FocusState::Focused);
        assert_eq!(
            evt_rx.try_recv().unwrap(),
            SyncEvent::SelectionChanged { start: 1, end: 3 }
        );
    }

    #[test]
    fn focus_machine_transitions_both_ways() {
        let (mut sync, _evt_rx) = fixture(BufferControl::new());
        assert_eq!(sync.focus_state(), FocusState::Unfocused);

        sync.handle_event(ControlEvent::FocusGained);
        assert_eq!(sync.focus_state(), FocusState::Focused);

        sync.handle_event(ControlEvent::FocusLost);
        assert_eq!(sync.focus_state(), FocusState::Unfocused);
    }

    #[test]
    fn focus_loss_emits_nothing() {
        let (mut sync, evt_rx) = fixture(BufferControl::new());
        sync.handle_event(ControlEvent::FocusLost);
        assert!(evt_rx.try_recv().is_err());
    }

    #[test]
    fn edit_strips_junk_and_preserves_caret() {
        let (mut sync, evt_rx) = fixture(BufferControl::new());

        sync.handle_event(ControlEvent::Edited {
            value: "12AB34".to_string(),
            caret: 4,
        });

        assert_eq!(sync.control().value(), "1234");
        assert_eq!(sync.control().caret(), 2);
        assert_eq!(
            evt_rx.try_recv().unwrap(),
            SyncEvent::ContentChanged {
                caret: Some(2),
                content: "1234".to_string(),
            }
        );
    }

    #[test]
    fn edit_of_valid_input_is_reported_unchanged() {
        let (mut sync, evt_rx) = fixture(BufferControl::new());

        sync.handle_event(ControlEvent::Edited {
            value: "1 2".to_string(),
            caret: 1,
        });

        assert_eq!(
            evt_rx.try_recv().unwrap(),
            SyncEvent::ContentChanged {
                caret: Some(1),
                content: "1 2".to_string(),
            }
        );
    }

    #[test]
    fn edit_collapses_a_prior_selection() {
        let mut control = BufferControl::with_value("1234");
        control.set_selection(0, 4);
        let (mut sync, _evt_rx) = fixture(control);

        sync.handle_event(ControlEvent::Edited {
            value: "u".to_string(),
            caret: 1,
        });

        assert!(sync.control().selection().is_empty());
        assert_eq!(sync.control().value(), "u");
    }

    #[test]
    fn navigation_reports_clamped_selection() {
        let (mut sync, evt_rx) = fixture(BufferControl::with_value("1u2o"));

        sync.handle_event(ControlEvent::Navigated { start: 3, end: 99 });

        assert_eq!(
            evt_rx.try_recv().unwrap(),
            SyncEvent::SelectionChanged { start: 3, end: 4 }
        );
    }

    #[test]
    fn content_push_is_trusted_and_acked_without_caret() {
        let (mut sync, evt_rx) = fixture(BufferControl::new());

        sync.apply_command(SyncCommand::SetContent {
            content: "1u2o".to_string(),
        });

        assert_eq!(sync.control().value(), "1u2o");
        assert_eq!(
            evt_rx.try_recv().unwrap(),
            SyncEvent::ContentChanged {
                caret: None,
                content: "1u2o".to_string(),
            }
        );
    }

    #[test]
    fn content_push_bypasses_sanitization() {
        let (mut sync, evt_rx) = fixture(BufferControl::new());

        sync.apply_command(SyncCommand::SetContent {
            content: "XYZ".to_string(),
        });

        assert_eq!(sync.control().value(), "XYZ");
        assert_eq!(
            evt_rx.try_recv().unwrap(),
            SyncEvent::ContentChanged {
                caret: None,
                content: "XYZ".to_string(),
            }
        );
    }

    #[test]
    fn content_push_ack_ignores_focus_state() {
        let (mut sync, evt_rx) = fixture(BufferControl::new());
        sync.handle_event(ControlEvent::FocusGained);
        let _ = evt_rx.try_recv(); // selection report from the focus gain

        sync.apply_command(SyncCommand::SetContent {
            content: "42".to_string(),
        });

        assert_eq!(
            evt_rx.try_recv().unwrap(),
            SyncEvent::ContentChanged {
                caret: None,
                content: "42".to_string(),
            }
        );
    }

    #[test]
    fn selection_push_round_trips_silently() {
        let (mut sync, evt_rx) = fixture(BufferControl::with_value("12345678"));

        sync.apply_command(SyncCommand::SetSelection { start: 3, end: 5 });

        assert_eq!(sync.control().selection(), SelectionRange::new(3, 5));
        assert!(evt_rx.try_recv().is_err());
    }
}
