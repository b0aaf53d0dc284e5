//! Plain keyboard status record

use super::{Layer, LayerState, LockState, RgbState};
use crate::state::Event;
use crate::traits::KeyboardStatus;

/// Last known keyboard state, kept current from [`Event`]s
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardSnapshot {
    pub layers: LayerState,
    pub default_layers: LayerState,
    pub locks: LockState,
    pub wpm: u16,
    pub rgb: RgbState,
}

impl Default for KeyboardSnapshot {
    fn default() -> Self {
        Self::new(RgbState::default())
    }
}

impl KeyboardSnapshot {
    /// Boot state: Dvorak as default layer, locks off, no typing
    pub const fn new(rgb: RgbState) -> Self {
        Self {
            layers: LayerState::EMPTY,
            default_layers: LayerState::only(Layer::Dvorak),
            locks: LockState::new(false, false, false),
            wpm: 0,
            rgb,
        }
    }

    /// Fold an event into the snapshot
    ///
    /// Returns `true` if any field changed.
    pub fn apply(&mut self, event: &Event) -> bool {
        let before = *self;
        match *event {
            Event::LayerChange(layers) => self.layers = layers,
            Event::DefaultLayerChange(layers) => self.default_layers = layers,
            Event::LockChange(locks) => self.locks = locks,
            Event::RgbChange(rgb) => self.rgb = rgb,
            Event::Key { .. } | Event::Suspend | Event::Wake | Event::Shutdown => {}
        }
        *self != before
    }
}

impl KeyboardStatus for KeyboardSnapshot {
    fn layer_state(&self) -> LayerState {
        self.layers
    }

    fn default_layer_state(&self) -> LayerState {
        self.default_layers
    }

    fn lock_state(&self) -> LockState {
        self.locks
    }

    fn wpm(&self) -> u16 {
        self.wpm
    }

    fn rgb_state(&self) -> RgbState {
        self.rgb
    }
}
