//! Image assets used by the status screen

/// Image assets loaded once at init
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetId {
    // Default layer glyphs
    ModeDvorak,
    ModeQwerty,
    ModeStenography,
    /// Icon next to the RGB speed bar
    SpeedIndicator,
    // Layer checkboxes
    CheckboxYes,
    CheckboxNo,
    // Lock icons
    CapsOn,
    CapsOff,
    NumOn,
    NumOff,
    ScrollOn,
    ScrollOff,
    // Lock separators, named (left, right)
    SeparatorOffOff,
    SeparatorOnOff,
    SeparatorOffOn,
    SeparatorOnOn,
}

impl AssetId {
    /// Number of assets
    pub const COUNT: usize = 16;

    /// All assets in load order
    pub const ALL: [AssetId; Self::COUNT] = [
        AssetId::ModeDvorak,
        AssetId::ModeQwerty,
        AssetId::ModeStenography,
        AssetId::SpeedIndicator,
        AssetId::CheckboxYes,
        AssetId::CheckboxNo,
        AssetId::CapsOn,
        AssetId::CapsOff,
        AssetId::NumOn,
        AssetId::NumOff,
        AssetId::ScrollOn,
        AssetId::ScrollOff,
        AssetId::SeparatorOffOff,
        AssetId::SeparatorOnOff,
        AssetId::SeparatorOffOn,
        AssetId::SeparatorOnOn,
    ];

    /// Position in [`AssetId::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Image loader
///
/// Decodes a built-in asset into an image the render surface can draw.
/// Returns `None` when the asset fails to decode; callers must never draw
/// a failed load.
pub trait ImageLoader<I> {
    fn load(&mut self, asset: AssetId) -> Option<I>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_position() {
        for (i, asset) in AssetId::ALL.iter().enumerate() {
            assert_eq!(asset.index(), i);
        }
    }
}
