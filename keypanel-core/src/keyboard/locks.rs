//! Lock key state and separator glyph selection

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lock keys shown on the status display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockKey {
    CapsLock,
    NumLock,
    ScrollLock,
}

/// Host-reported lock key state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LockState {
    pub caps: bool,
    pub num: bool,
    pub scroll: bool,
}

impl LockState {
    /// Create a lock state from individual flags
    pub const fn new(caps: bool, num: bool, scroll: bool) -> Self {
        Self { caps, num, scroll }
    }

    /// Decode the HID keyboard LED output report
    ///
    /// Bit 0 is Num Lock, bit 1 Caps Lock, bit 2 Scroll Lock.
    pub const fn from_hid_report(report: u8) -> Self {
        Self {
            num: report & 0b001 != 0,
            caps: report & 0b010 != 0,
            scroll: report & 0b100 != 0,
        }
    }

    /// State of a single lock key
    pub const fn get(&self, key: LockKey) -> bool {
        match key {
            LockKey::CapsLock => self.caps,
            LockKey::NumLock => self.num,
            LockKey::ScrollLock => self.scroll,
        }
    }

    /// Separator between the caps and num icons
    pub const fn left_separator(&self) -> SeparatorGlyph {
        SeparatorGlyph::between(self.caps, self.num)
    }

    /// Separator between the num and scroll icons
    pub const fn right_separator(&self) -> SeparatorGlyph {
        SeparatorGlyph::between(self.num, self.scroll)
    }
}

/// Separator drawn between two adjacent lock icons
///
/// The glyph joins the outlines of its neighbours, so it depends on both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SeparatorGlyph {
    OffOff,
    OnOff,
    OffOn,
    OnOn,
}

impl SeparatorGlyph {
    /// Select the glyph for a `(left, right)` pair of lock states
    pub const fn between(left: bool, right: bool) -> Self {
        match (left, right) {
            (false, false) => SeparatorGlyph::OffOff,
            (true, false) => SeparatorGlyph::OnOff,
            (false, true) => SeparatorGlyph::OffOn,
            (true, true) => SeparatorGlyph::OnOn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hid_report_decoding() {
        let state = LockState::from_hid_report(0b010);
        assert!(state.caps);
        assert!(!state.num);
        assert!(!state.scroll);

        let state = LockState::from_hid_report(0b101);
        assert!(!state.caps);
        assert!(state.num);
        assert!(state.scroll);
    }

    #[test]
    fn test_separator_variants_distinct() {
        let variants = [
            SeparatorGlyph::between(false, false),
            SeparatorGlyph::between(true, false),
            SeparatorGlyph::between(false, true),
            SeparatorGlyph::between(true, true),
        ];

        for (i, a) in variants.iter().enumerate() {
            for b in &variants[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_separators_follow_neighbours() {
        let state = LockState::new(true, false, true);
        assert_eq!(state.left_separator(), SeparatorGlyph::OnOff);
        assert_eq!(state.right_separator(), SeparatorGlyph::OffOn);

        let state = LockState::new(false, true, true);
        assert_eq!(state.left_separator(), SeparatorGlyph::OffOn);
        assert_eq!(state.right_separator(), SeparatorGlyph::OnOn);
    }
}
