//! Keyboard model
//!
//! Plain data describing the keyboard state the status display reflects.
//! The matrix scanner, RGB engine and HID stack own the real state; these
//! types are what they report through [`crate::traits::KeyboardStatus`].

pub mod layer;
pub mod locks;
pub mod rgb;
pub mod snapshot;
pub mod wpm;

pub use layer::{Layer, LayerState};
pub use locks::{LockKey, LockState, SeparatorGlyph};
pub use rgb::{RgbState, EFFECT_COUNT, EFFECT_INDEX_BITS};
pub use snapshot::KeyboardSnapshot;
pub use wpm::WpmEstimator;
