//! Value-changed events and the channel that feeds them to the handler.
//!
//! Each control emits a [`ControlEvent`] into an mpsc channel when its value
//! changes; a single handler (the dashboard app) drains the channel, updates
//! the control state, and recomputes the plot specification once per drained
//! batch. One state change → one derivation call → one render.

use std::sync::mpsc::{Receiver, Sender};

use crate::controls::{ControlId, ControlValue};

/// A single value-changed notification.
#[derive(Debug, Clone)]
pub struct ControlEvent {
    pub id: ControlId,
    pub value: ControlValue,
}

/// Convenience sender for posting control changes to the handler.
#[derive(Clone)]
pub struct ControlSink {
    tx: Sender<ControlEvent>,
}

impl ControlSink {
    pub fn send(&self, event: ControlEvent) {
        // The receiver only disappears when the app is shutting down; a change
        // event posted at that point has nowhere to go anyway.
        let _ = self.tx.send(event);
    }

    pub fn set_scalar<I: Into<ControlId>>(&self, id: I, v: f64) {
        self.send(ControlEvent {
            id: id.into(),
            value: ControlValue::Scalar(v),
        });
    }

    pub fn set_flag<I: Into<ControlId>>(&self, id: I, on: bool) {
        self.send(ControlEvent {
            id: id.into(),
            value: ControlValue::Flag(on),
        });
    }

    pub fn set_choice<I: Into<ControlId>, S: Into<String>>(&self, id: I, choice: S) {
        self.send(ControlEvent {
            id: id.into(),
            value: ControlValue::Choice(choice.into()),
        });
    }
}

/// Create a new channel pair: `(ControlSink, Receiver<ControlEvent>)`.
pub fn channel_controls() -> (ControlSink, Receiver<ControlEvent>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (ControlSink { tx }, rx)
}
