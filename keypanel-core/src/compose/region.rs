//! Screen regions

/// Independently redrawn part of the status screen
///
/// Declaration order is the order `redraw_all` draws them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegionId {
    /// Static decoration behind everything else
    Background,
    /// Default layer glyph
    DefaultLayer,
    /// Checkboxes for the momentary layers
    Layers,
    /// Lock key icons and separators
    Locks,
    /// Hue/saturation/value bars and the speed bar
    RgbBars,
    /// Binary effect index squares
    EffectIndex,
    /// Typing speed bar
    Wpm,
}

impl RegionId {
    /// All regions in draw order
    pub const ALL: [RegionId; 7] = [
        RegionId::Background,
        RegionId::DefaultLayer,
        RegionId::Layers,
        RegionId::Locks,
        RegionId::RgbBars,
        RegionId::EffectIndex,
        RegionId::Wpm,
    ];
}

/// Axis-aligned rectangle in panel pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rightmost pixel column (inclusive)
    pub const fn right(&self) -> u16 {
        self.x + self.width.saturating_sub(1)
    }

    /// Bottom pixel row (inclusive)
    pub const fn bottom(&self) -> u16 {
        self.y + self.height.saturating_sub(1)
    }

    /// Check whether pixel `(x, y)` lies inside
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Check whether `other` lies entirely inside this region
    pub const fn contains_region(&self, other: &Region) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }

    /// Check whether the two regions share any pixel
    pub const fn overlaps(&self, other: &Region) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Region::new(10, 20, 5, 3);
        assert_eq!(r.right(), 14);
        assert_eq!(r.bottom(), 22);
        assert!(r.contains(14, 22));
        assert!(!r.contains(15, 22));
    }

    #[test]
    fn test_overlap() {
        let a = Region::new(0, 0, 10, 10);
        assert!(a.overlaps(&Region::new(9, 9, 2, 2)));
        assert!(!a.overlaps(&Region::new(10, 0, 2, 2)));
        assert!(a.contains_region(&Region::new(2, 2, 8, 8)));
        assert!(!a.contains_region(&Region::new(2, 2, 9, 8)));
    }
}
