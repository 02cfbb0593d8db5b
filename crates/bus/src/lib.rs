use notation_core::Caret;
use std::sync::mpsc::{Receiver, Sender};

/// Commands pushed by the state owner into the synchronizer.
#[derive(Debug)]
pub enum SyncCommand {
    /// Replace the control value with an authoritative notation string.
    /// The owner is trusted; no sanitization is applied.
    SetContent { content: String },
    /// Place the control caret/selection. One-way push, not acknowledged.
    SetSelection { start: Caret, end: Caret },
}

/// Native control events, abstracted as a small set of named transitions.
#[derive(Debug)]
pub enum ControlEvent {
    /// The control gained input focus.
    FocusGained,
    /// The control lost input focus.
    FocusLost,
    /// A content-changing edit completed. Carries the raw post-edit value
    /// and the collapsed caret, exactly as the native control reports them.
    Edited { value: String, caret: Caret },
    /// The caret/selection moved without a content change: click, key
    /// navigation, selection drag, touch.
    Navigated { start: Caret, end: Caret },
}

/// Everything the synchronizer runtime dequeues, in arrival order.
#[derive(Debug)]
pub enum SyncMessage {
    Control(ControlEvent),
    Owner(SyncCommand),
}

/// Notifications emitted back to the state owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncEvent {
    /// The caret/selection moved without a content change.
    SelectionChanged { start: Caret, end: Caret },
    /// The control value changed. `caret` is `Some` after a local
    /// sanitizing edit and `None` after an owner-initiated push.
    ContentChanged {
        caret: Option<Caret>,
        content: String,
    },
}

/// Channel endpoints held by the embedding shell.
pub struct Bus {
    pub msg_tx: Sender<SyncMessage>,
    pub evt_rx: Receiver<SyncEvent>,
    pub evt_tx: Sender<SyncEvent>, // shareable for runtimes
}
