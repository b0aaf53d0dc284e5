//! Keyboard state queries

use crate::keyboard::{LayerState, LockState, RgbState};

/// Read-only view of the keyboard state drawn on the status display
pub trait KeyboardStatus {
    /// Currently active layers
    fn layer_state(&self) -> LayerState;

    /// Default layer bitmask
    fn default_layer_state(&self) -> LayerState;

    /// Host lock key state
    fn lock_state(&self) -> LockState;

    /// Current typing speed in words per minute
    fn wpm(&self) -> u16;

    /// RGB matrix mode and parameters
    fn rgb_state(&self) -> RgbState;
}
