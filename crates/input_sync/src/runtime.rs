//! Thread runtime for the synchronizer.

use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use bus::{SyncEvent, SyncMessage};
use notation_core::TextControl;

use crate::Synchronizer;

/// Spawn the synchronizer worker.
///
/// The thread takes ownership of the control and processes messages to
/// completion in arrival order, so a user edit and an owner push can never
/// interleave mid-handler. The loop ends once every message sender is gone.
pub fn start_sync_runtime<C>(
    control: C,
    msg_rx: Receiver<SyncMessage>,
    evt_tx: Sender<SyncEvent>,
) -> thread::JoinHandle<()>
where
    C: TextControl + Send + 'static,
{
    thread::spawn(move || {
        let mut sync = Synchronizer::new(control, evt_tx);
        while let Ok(msg) = msg_rx.recv() {
            match msg {
                SyncMessage::Control(event) => sync.handle_event(event),
                SyncMessage::Owner(command) => sync.apply_command(command),
            }
        }
    })
}
