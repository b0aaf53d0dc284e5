//! Event bridge
//!
//! Entry point for the matrix, layer, HID and power code: every change the
//! status display cares about goes through [`publish`].

use defmt::*;

use keypanel_core::state::Event;

use crate::channels::{self, PANEL_EVENTS};

/// Publish a keyboard event to the status display
///
/// Updates the shared snapshot first, so the display task always reads
/// state at least as new as the event it handles. Never blocks; when the
/// queue is full the event is dropped and the next periodic redraw catches
/// up from the snapshot.
pub fn publish(event: Event) {
    channels::update_status(|status| status.apply(&event));

    // Releases count as keystrokes
    if let Event::Key { pressed: false } = event {
        channels::record_keystroke();
    }

    if PANEL_EVENTS.try_send(event).is_err() {
        warn!("Panel event queue full, dropped {}", event);
    }
}
