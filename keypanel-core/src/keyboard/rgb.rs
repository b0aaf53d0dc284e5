//! RGB matrix parameters reported by the lighting engine

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of enabled RGB matrix effects (effect 0 is "none")
pub const EFFECT_COUNT: u8 = 50;

/// Squares used by the binary effect-index indicator
pub const EFFECT_INDEX_BITS: u8 = 6;

/// Default effect: river flow, the last enabled effect
pub const DEFAULT_EFFECT: u8 = 50;

/// Snapshot of the RGB matrix mode and HSV/speed parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RgbState {
    /// Matrix lighting enabled
    pub enabled: bool,
    /// Active effect index (0..=EFFECT_COUNT)
    pub effect: u8,
    pub hue: u8,
    pub sat: u8,
    pub val: u8,
    pub speed: u8,
}

impl Default for RgbState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl RgbState {
    /// Power-on state of the RGB matrix
    pub const DEFAULT: Self = Self {
        enabled: true,
        effect: DEFAULT_EFFECT,
        hue: 132,
        sat: 213,
        val: 150,
        speed: 127,
    };

    /// Whether bit `bit` of the effect index is set
    pub const fn effect_bit(&self, bit: u8) -> bool {
        bit < EFFECT_INDEX_BITS && (self.effect >> bit) & 1 != 0
    }
}
