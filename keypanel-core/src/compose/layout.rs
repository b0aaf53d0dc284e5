//! Status screen geometry for the 128x64 panel
//!
//! ```text
//!  x: 0           48  52 60                       128
//!     +------------+   +-+----------------------+   y 0
//!     | default    |   |s| hue                  |
//!     | layer      |   |p| sat                  |
//!     +------------+   |d| val                  |   y 16
//!     [sym]  [ctl]     +-+----------------------+   y 24
//!                      (>) [] [] [] [] [] []        y 26  effect index
//!     CAPS|NUM |SCRL                                y 32
//!
//!     ==================== wpm ==================   y 54
//! ```

use super::bar::{HBar, VBar};
use super::region::{Region, RegionId};
use crate::traits::Rgb;

/// Drawing colour
pub const FOREGROUND: Rgb = Rgb::WHITE;
/// Erase colour
pub const BACKGROUND: Rgb = Rgb::BLACK;

/// Whole panel
pub const SCREEN: Region = Region::new(0, 0, 128, 64);

// Default layer glyph (48x16 images)
pub const DEFAULT_LAYER: Region = Region::new(0, 0, 48, 16);

// Layer checkboxes, one per indicated layer, left to right
pub const LAYERS: Region = Region::new(0, 18, 48, 10);
pub const CHECKBOX_X: [u16; 2] = [0, 24];

// Lock icons (12x10) with separators (3x10) between them
pub const LOCKS: Region = Region::new(0, 32, 48, 10);
pub const CAPS_X: u16 = 0;
pub const LEFT_SEPARATOR_X: u16 = 12;
pub const NUM_X: u16 = 15;
pub const RIGHT_SEPARATOR_X: u16 = 27;
pub const SCROLL_X: u16 = 30;

// RGB parameter bars
pub const RGB_BARS: Region = Region::new(52, 0, 76, 24);
pub const SPEED_BAR: VBar = VBar::new(52, 0, 6, 24);
pub const HUE_BAR: HBar = HBar::new(62, 0, 64, 6);
pub const SAT_BAR: HBar = HBar::new(62, 8, 64, 6);
pub const VAL_BAR: HBar = HBar::new(62, 16, 64, 6);

/// Background icon marking the speed bar
pub const SPEED_ICON: (u16, u16) = (52, 26);

// Effect index, most significant bit on the left
pub const EFFECT_INDEX: Region = Region::new(62, 26, 64, 8);
pub const EFFECT_SQUARE_SIZE: u16 = 8;
pub const EFFECT_SQUARE_PITCH: u16 = 11;

// Typing speed
pub const WPM: Region = Region::new(0, 52, 128, 12);
pub const WPM_BAR: HBar = HBar::new(0, 54, 128, 8);

/// Bounds of a region
pub const fn region(id: RegionId) -> Region {
    match id {
        RegionId::Background => SCREEN,
        RegionId::DefaultLayer => DEFAULT_LAYER,
        RegionId::Layers => LAYERS,
        RegionId::Locks => LOCKS,
        RegionId::RgbBars => RGB_BARS,
        RegionId::EffectIndex => EFFECT_INDEX,
        RegionId::Wpm => WPM,
    }
}

/// Top-left corner of effect-index square `bit` (bit 0 is rightmost)
pub const fn effect_square_x(bit: u8) -> u16 {
    let slot = crate::keyboard::EFFECT_INDEX_BITS - 1 - bit;
    EFFECT_INDEX.x + slot as u16 * EFFECT_SQUARE_PITCH
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::EFFECT_INDEX_BITS;

    #[test]
    fn test_regions_inside_screen() {
        for id in RegionId::ALL {
            assert!(SCREEN.contains_region(&region(id)), "{:?}", id);
        }
    }

    #[test]
    fn test_regions_disjoint() {
        for a in RegionId::ALL.iter().skip(1) {
            for b in RegionId::ALL.iter().skip(1) {
                if a != b {
                    assert!(!region(*a).overlaps(&region(*b)), "{:?} / {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_parts_inside_their_region() {
        for bar in [HUE_BAR, SAT_BAR, VAL_BAR] {
            assert!(RGB_BARS.contains_region(&bar.area));
        }
        assert!(RGB_BARS.contains_region(&SPEED_BAR.area));
        assert!(WPM.contains_region(&WPM_BAR.area));

        for bit in 0..EFFECT_INDEX_BITS {
            let square = Region::new(
                effect_square_x(bit),
                EFFECT_INDEX.y,
                EFFECT_SQUARE_SIZE,
                EFFECT_SQUARE_SIZE,
            );
            assert!(EFFECT_INDEX.contains_region(&square));
        }

        for x in CHECKBOX_X {
            assert!(LAYERS.contains_region(&Region::new(x, LAYERS.y, 10, 10)));
        }
        assert!(LOCKS.contains_region(&Region::new(SCROLL_X, LOCKS.y, 12, 10)));
    }

    #[test]
    fn test_speed_icon_outside_dynamic_regions() {
        let icon = Region::new(SPEED_ICON.0, SPEED_ICON.1, 8, 8);
        for id in RegionId::ALL.iter().skip(1) {
            assert!(!region(*id).overlaps(&icon));
        }
    }
}
