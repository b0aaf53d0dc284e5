//! Keymap layers

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layers defined by the keymap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Layer {
    /// Dvorak base layer
    Dvorak = 0,
    /// QWERTY base layer
    Qwerty = 1,
    /// Symbols layer
    Symbols = 2,
    /// Control layer
    Control = 3,
}

impl Layer {
    /// Layers shown with a checkbox in the layer indicator region
    pub const INDICATED: [Layer; 2] = [Layer::Symbols, Layer::Control];

    /// Layer index in the keymap
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Bitmask of active layers, bit `n` set when layer `n` is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerState(pub u32);

impl LayerState {
    /// No layers active
    pub const EMPTY: Self = Self(0);

    /// State with only `layer` active
    pub const fn only(layer: Layer) -> Self {
        Self(1 << layer.index())
    }

    /// Copy of this state with `layer` switched on
    pub const fn with(self, layer: Layer) -> Self {
        Self(self.0 | (1 << layer.index()))
    }

    /// Check whether `layer` is active
    pub const fn is_on(self, layer: Layer) -> bool {
        self.0 & (1 << layer.index()) != 0
    }
}

impl From<Layer> for LayerState {
    fn from(layer: Layer) -> Self {
        Self::only(layer)
    }
}
