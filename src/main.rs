//! Headless demo shell for the gauss notation input synchronizer.
//!
//! Wires a [`BufferControl`] to the synchronizer runtime over the bus and
//! runs a scripted session: the "user" focuses the control and pastes raw
//! text with junk in it, then the "owner" pushes an authoritative value and
//! a caret. The resulting event transcript is printed at the end.

use std::sync::mpsc;

use bus::{Bus, ControlEvent, SyncCommand, SyncMessage};
use input_sync::start_sync_runtime;
use notation_core::BufferControl;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() {
    let (msg_tx, msg_rx) = mpsc::channel();
    let (evt_tx, evt_rx) = mpsc::channel();
    let bus = Bus {
        msg_tx,
        evt_rx,
        evt_tx,
    };
    let handle = start_sync_runtime(BufferControl::new(), msg_rx, bus.evt_tx.clone());

    // User side: focus, paste something messy, then move the selection.
    bus.msg_tx
        .send(SyncMessage::Control(ControlEvent::FocusGained))
        .expect("runtime alive");
    bus.msg_tx
        .send(SyncMessage::Control(ControlEvent::Edited {
            value: "12AB34".to_string(),
            caret: 4,
        }))
        .expect("runtime alive");
    bus.msg_tx
        .send(SyncMessage::Control(ControlEvent::Navigated {
            start: 2,
            end: 4,
        }))
        .expect("runtime alive");

    // Owner side: push an authoritative value, then place the caret.
    bus.msg_tx
        .send(SyncMessage::Owner(SyncCommand::SetContent {
            content: "1u2o+3".to_string(),
        }))
        .expect("runtime alive");
    bus.msg_tx
        .send(SyncMessage::Owner(SyncCommand::SetSelection {
            start: 4,
            end: 4,
        }))
        .expect("runtime alive");
    bus.msg_tx
        .send(SyncMessage::Control(ControlEvent::FocusLost))
        .expect("runtime alive");

    drop(bus.msg_tx);
    handle.join().expect("sync runtime panicked");

    for evt in bus.evt_rx.try_iter() {
        println!("{evt:?}");
    }
}
