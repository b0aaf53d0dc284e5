//! Loaded image handles and asset selection

use crate::keyboard::{Layer, LayerState, LockKey, SeparatorGlyph};
use crate::traits::{AssetId, ImageLoader};

/// Image handles for every [`AssetId`]
///
/// A slot is `None` when its asset failed to load; drawing code skips it
/// and leaves that part of the screen blank.
#[derive(Debug)]
pub struct ImageSet<I> {
    images: [Option<I>; AssetId::COUNT],
}

impl<I> Default for ImageSet<I> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<I> ImageSet<I> {
    /// Set with nothing loaded
    pub fn empty() -> Self {
        Self {
            images: core::array::from_fn(|_| None),
        }
    }

    /// Load every asset, logging the ones that fail
    pub fn load_all<L: ImageLoader<I>>(loader: &mut L) -> Self {
        let mut set = Self::empty();
        for asset in AssetId::ALL {
            set.images[asset.index()] = loader.load(asset);
            if set.images[asset.index()].is_none() {
                warn!("failed to load image {}", asset);
            }
        }
        set
    }

    /// Handle for `asset`, `None` if it failed to load
    pub fn get(&self, asset: AssetId) -> Option<&I> {
        self.images[asset.index()].as_ref()
    }

    /// Number of assets that loaded
    pub fn loaded(&self) -> usize {
        self.images.iter().filter(|i| i.is_some()).count()
    }
}

/// Glyph for the default layer
///
/// Dvorak wins over QWERTY; with neither bit set the board is in
/// stenography mode.
pub fn default_layer_glyph(default_layers: LayerState) -> AssetId {
    if default_layers.is_on(Layer::Dvorak) {
        AssetId::ModeDvorak
    } else if default_layers.is_on(Layer::Qwerty) {
        AssetId::ModeQwerty
    } else {
        AssetId::ModeStenography
    }
}

/// Checkbox reflecting whether a layer is active
pub fn checkbox(active: bool) -> AssetId {
    if active {
        AssetId::CheckboxYes
    } else {
        AssetId::CheckboxNo
    }
}

/// Icon for a lock key in the given state
pub fn lock_icon(key: LockKey, on: bool) -> AssetId {
    match (key, on) {
        (LockKey::CapsLock, true) => AssetId::CapsOn,
        (LockKey::CapsLock, false) => AssetId::CapsOff,
        (LockKey::NumLock, true) => AssetId::NumOn,
        (LockKey::NumLock, false) => AssetId::NumOff,
        (LockKey::ScrollLock, true) => AssetId::ScrollOn,
        (LockKey::ScrollLock, false) => AssetId::ScrollOff,
    }
}

/// Separator image for a glyph
pub fn separator(glyph: SeparatorGlyph) -> AssetId {
    match glyph {
        SeparatorGlyph::OffOff => AssetId::SeparatorOffOff,
        SeparatorGlyph::OnOff => AssetId::SeparatorOnOff,
        SeparatorGlyph::OffOn => AssetId::SeparatorOffOn,
        SeparatorGlyph::OnOn => AssetId::SeparatorOnOn,
    }
}
