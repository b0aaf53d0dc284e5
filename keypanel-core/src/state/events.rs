//! Events forwarded from the keyboard firmware to the display

use crate::keyboard::{LayerState, LockState, RgbState};

/// Lifecycle and input notifications consumed by the display controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Input events
    /// A key record was processed (press or release)
    Key { pressed: bool },
    /// Active layer set changed
    LayerChange(LayerState),
    /// Default layer changed (also sent once at boot)
    DefaultLayerChange(LayerState),
    /// Host updated the lock key LEDs
    LockChange(LockState),
    /// RGB matrix mode or parameters changed
    RgbChange(RgbState),

    // Platform lifecycle events
    /// Host suspended the keyboard
    Suspend,
    /// Host resumed the keyboard
    Wake,
    /// Keyboard is about to lose power (bootloader jump, reset)
    Shutdown,
}

impl Event {
    /// Check if this event counts as user activity
    ///
    /// Activity keeps the display awake and re-powers it before drawing.
    pub fn is_activity(&self) -> bool {
        matches!(
            self,
            Event::Key { .. }
                | Event::LayerChange(_)
                | Event::DefaultLayerChange(_)
                | Event::LockChange(_)
                | Event::RgbChange(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::Layer;

    #[test]
    fn test_activity_events() {
        assert!(Event::Key { pressed: true }.is_activity());
        assert!(Event::Key { pressed: false }.is_activity());
        assert!(Event::LayerChange(LayerState::only(Layer::Symbols)).is_activity());
        assert!(Event::LockChange(LockState::default()).is_activity());
        assert!(!Event::Suspend.is_activity());
        assert!(!Event::Wake.is_activity());
        assert!(!Event::Shutdown.is_activity());
    }
}
