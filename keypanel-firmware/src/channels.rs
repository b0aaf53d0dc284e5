//! Inter-task communication channels
//!
//! Defines the static channels and shared state used between Embassy
//! tasks and the rest of the keyboard firmware.

use core::cell::{Cell, RefCell};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use keypanel_core::keyboard::{KeyboardSnapshot, RgbState};
use keypanel_core::state::Event;

/// Channel capacity for panel events
const PANEL_EVENT_CHANNEL_SIZE: usize = 16;

/// Events for the display task
pub static PANEL_EVENTS: Channel<CriticalSectionRawMutex, Event, PANEL_EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Request to turn every RGB LED off (shutdown)
pub static LEDS_BLANK: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Last known keyboard state
static STATUS: Mutex<CriticalSectionRawMutex, RefCell<KeyboardSnapshot>> =
    Mutex::new(RefCell::new(KeyboardSnapshot::new(RgbState::DEFAULT)));

/// Keystrokes since the WPM task last sampled
static KEYSTROKES: Mutex<CriticalSectionRawMutex, Cell<u32>> = Mutex::new(Cell::new(0));

/// Seed the RGB state shown before the lighting engine reports in
pub fn init_status(rgb: RgbState) {
    update_status(|status| status.rgb = rgb);
}

/// Copy of the current keyboard state
pub fn snapshot() -> KeyboardSnapshot {
    STATUS.lock(|status| *status.borrow())
}

/// Modify the keyboard state
pub fn update_status<R>(f: impl FnOnce(&mut KeyboardSnapshot) -> R) -> R {
    STATUS.lock(|status| f(&mut status.borrow_mut()))
}

/// Count a keystroke for the WPM estimate
pub fn record_keystroke() {
    KEYSTROKES.lock(|count| count.set(count.get().saturating_add(1)));
}

/// Take and reset the keystroke count
pub fn take_keystrokes() -> u32 {
    KEYSTROKES.lock(|count| count.replace(0))
}
