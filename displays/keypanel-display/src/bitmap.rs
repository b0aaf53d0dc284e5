//! Raw 1-bpp bitmaps
//!
//! Asset format: `b"KP"`, width (u16 LE), height (u16 LE), then rows top
//! to bottom, each padded to a whole byte, MSB leftmost. This is the
//! layout `ImageRaw<BinaryColor>` expects after the header.

use keypanel_core::traits::{AssetId, ImageLoader};

/// Header size in bytes
pub const HEADER_LEN: usize = 6;

const MAGIC: &[u8; 2] = b"KP";

/// Decoded image handle borrowing static asset data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bitmap {
    width: u16,
    height: u16,
    data: &'static [u8],
}

impl Bitmap {
    /// Parse an asset blob; `None` if the header or length is wrong
    pub fn parse(bytes: &'static [u8]) -> Option<Self> {
        if bytes.len() < HEADER_LEN || &bytes[..2] != MAGIC {
            return None;
        }
        let width = u16::from_le_bytes([bytes[2], bytes[3]]);
        let height = u16::from_le_bytes([bytes[4], bytes[5]]);
        if width == 0 || height == 0 {
            return None;
        }

        let stride = usize::from(width).div_ceil(8);
        let data = &bytes[HEADER_LEN..];
        if data.len() != stride * usize::from(height) {
            return None;
        }

        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Pixel rows without the header
    pub fn data(&self) -> &'static [u8] {
        self.data
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        usize::from(self.width).div_ceil(8)
    }

    /// Read a pixel, off outside the image
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.data[usize::from(y) * self.stride() + usize::from(x) / 8];
        byte & (0x80 >> (x % 8)) != 0
    }
}

/// Loader over a static `(asset, blob)` table
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitmapLoader {
    table: &'static [(AssetId, &'static [u8])],
}

impl BitmapLoader {
    pub const fn new(table: &'static [(AssetId, &'static [u8])]) -> Self {
        Self { table }
    }

    /// Loader for the built-in assets
    pub fn builtin() -> Self {
        Self::new(&crate::assets::ASSETS)
    }
}

impl ImageLoader<Bitmap> for BitmapLoader {
    fn load(&mut self, asset: AssetId) -> Option<Bitmap> {
        self.table
            .iter()
            .find(|(id, _)| *id == asset)
            .and_then(|(_, bytes)| Bitmap::parse(bytes))
    }
}
