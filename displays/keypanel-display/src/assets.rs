//! Built-in status screen images
//!
//! Generated 1-bpp bitmaps in the [`Bitmap`](crate::Bitmap) format. Mode
//! glyphs are 48x16, lock icons 12x10, separators 3x10, checkboxes 10x10
//! and the speed indicator 8x8.

use keypanel_core::traits::AssetId;

pub static MODE_DVORAK: [u8; 102] = [
    0x4B, 0x50, 0x30, 0x00, 0x10, 0x00,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000011, 0b11001000, 0b10011100, 0b11110001, 0b11001000, 0b10000001,
    0b10000010, 0b00101000, 0b10100010, 0b10001010, 0b00101001, 0b00000001,
    0b10000010, 0b00101000, 0b10100010, 0b10001010, 0b00101010, 0b00000001,
    0b10000010, 0b00101000, 0b10100010, 0b11110011, 0b11101100, 0b00000001,
    0b10000010, 0b00101000, 0b10100010, 0b10100010, 0b00101010, 0b00000001,
    0b10000010, 0b00100101, 0b00100010, 0b10010010, 0b00101001, 0b00000001,
    0b10000011, 0b11000010, 0b00011100, 0b10001010, 0b00101000, 0b10000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
];

pub static MODE_QWERTY: [u8; 102] = [
    0x4B, 0x50, 0x30, 0x00, 0x10, 0x00,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000001, 0b11001000, 0b10111110, 0b11110011, 0b11101000, 0b10000001,
    0b10000010, 0b00101000, 0b10100000, 0b10001000, 0b10001000, 0b10000001,
    0b10000010, 0b00101000, 0b10100000, 0b10001000, 0b10000101, 0b00000001,
    0b10000010, 0b00101010, 0b10111100, 0b11110000, 0b10000010, 0b00000001,
    0b10000010, 0b10101010, 0b10100000, 0b10100000, 0b10000010, 0b00000001,
    0b10000010, 0b01001010, 0b10100000, 0b10010000, 0b10000010, 0b00000001,
    0b10000001, 0b10100101, 0b00111110, 0b10001000, 0b10000010, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
];

pub static MODE_STENOGRAPHY: [u8; 102] = [
    0x4B, 0x50, 0x30, 0x00, 0x10, 0x00,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00111101, 0b11110111, 0b11010001, 0b00111000, 0b00000001,
    0b10000000, 0b01000000, 0b01000100, 0b00011001, 0b01000100, 0b00000001,
    0b10000000, 0b01000000, 0b01000100, 0b00010101, 0b01000100, 0b00000001,
    0b10000000, 0b00111000, 0b01000111, 0b10010011, 0b01000100, 0b00000001,
    0b10000000, 0b00000100, 0b01000100, 0b00010001, 0b01000100, 0b00000001,
    0b10000000, 0b00000100, 0b01000100, 0b00010001, 0b01000100, 0b00000001,
    0b10000000, 0b01111000, 0b01000111, 0b11010001, 0b00111000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b10000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000001,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
];

pub static SPEED_INDICATOR: [u8; 14] = [
    0x4B, 0x50, 0x08, 0x00, 0x08, 0x00,
    0b00011000,
    0b00111100,
    0b01111110,
    0b00011000,
    0b00011000,
    0b01111110,
    0b00111100,
    0b00011000,
];

pub static CHECKBOX_YES: [u8; 26] = [
    0x4B, 0x50, 0x0A, 0x00, 0x0A, 0x00,
    0b11111111, 0b11000000,
    0b10000000, 0b01000000,
    0b10100001, 0b01000000,
    0b10010010, 0b01000000,
    0b10001100, 0b01000000,
    0b10001100, 0b01000000,
    0b10010010, 0b01000000,
    0b10100001, 0b01000000,
    0b10000000, 0b01000000,
    0b11111111, 0b11000000,
];

pub static CHECKBOX_NO: [u8; 26] = [
    0x4B, 0x50, 0x0A, 0x00, 0x0A, 0x00,
    0b11111111, 0b11000000,
    0b10000000, 0b01000000,
    0b10000000, 0b01000000,
    0b10000000, 0b01000000,
    0b10000000, 0b01000000,
    0b10000000, 0b01000000,
    0b10000000, 0b01000000,
    0b10000000, 0b01000000,
    0b10000000, 0b01000000,
    0b11111111, 0b11000000,
];

pub static CAPS_ON: [u8; 26] = [
    0x4B, 0x50, 0x0C, 0x00, 0x0A, 0x00,
    0b11111111, 0b11110000,
    0b11111111, 0b11110000,
    0b11001010, 0b01110000,
    0b10110100, 0b10110000,
    0b10110000, 0b01110000,
    0b10110100, 0b11110000,
    0b11000100, 0b11110000,
    0b11111111, 0b11110000,
    0b11111111, 0b11110000,
    0b11111111, 0b11110000,
];

pub static CAPS_OFF: [u8; 26] = [
    0x4B, 0x50, 0x0C, 0x00, 0x0A, 0x00,
    0b11111111, 0b11110000,
    0b10000000, 0b00010000,
    0b10110101, 0b10010000,
    0b11001011, 0b01010000,
    0b11001111, 0b10010000,
    0b11001011, 0b00010000,
    0b10111011, 0b00010000,
    0b10000000, 0b00010000,
    0b10000000, 0b00010000,
    0b11111111, 0b11110000,
];

pub static NUM_ON: [u8; 26] = [
    0x4B, 0x50, 0x0C, 0x00, 0x0A, 0x00,
    0b11111111, 0b11110000,
    0b11111111, 0b11110000,
    0b10010100, 0b10110000,
    0b10100100, 0b00110000,
    0b10100100, 0b00110000,
    0b10100100, 0b10110000,
    0b10100000, 0b10110000,
    0b11111111, 0b11110000,
    0b11111111, 0b11110000,
    0b11111111, 0b11110000,
];

pub static NUM_OFF: [u8; 26] = [
    0x4B, 0x50, 0x0C, 0x00, 0x0A, 0x00,
    0b11111111, 0b11110000,
    0b10000000, 0b00010000,
    0b11101011, 0b01010000,
    0b11011011, 0b11010000,
    0b11011011, 0b11010000,
    0b11011011, 0b01010000,
    0b11011111, 0b01010000,
    0b10000000, 0b00010000,
    0b10000000, 0b00010000,
    0b11111111, 0b11110000,
];

pub static SCROLL_ON: [u8; 26] = [
    0x4B, 0x50, 0x0C, 0x00, 0x0A, 0x00,
    0b11111111, 0b11110000,
    0b11111111, 0b11110000,
    0b11001000, 0b01110000,
    0b10110110, 0b10110000,
    0b11010110, 0b01110000,
    0b11100110, 0b10110000,
    0b10011000, 0b10110000,
    0b11111111, 0b11110000,
    0b11111111, 0b11110000,
    0b11111111, 0b11110000,
];

pub static SCROLL_OFF: [u8; 26] = [
    0x4B, 0x50, 0x0C, 0x00, 0x0A, 0x00,
    0b11111111, 0b11110000,
    0b10000000, 0b00010000,
    0b10110111, 0b10010000,
    0b11001001, 0b01010000,
    0b10101001, 0b10010000,
    0b10011001, 0b01010000,
    0b11100111, 0b01010000,
    0b10000000, 0b00010000,
    0b10000000, 0b00010000,
    0b11111111, 0b11110000,
];

pub static SEPARATOR_OFF_OFF: [u8; 16] = [
    0x4B, 0x50, 0x03, 0x00, 0x0A, 0x00,
    0b01000000,
    0b00000000,
    0b00000000,
    0b00000000,
    0b00000000,
    0b00000000,
    0b00000000,
    0b00000000,
    0b00000000,
    0b01000000,
];

pub static SEPARATOR_ON_OFF: [u8; 16] = [
    0x4B, 0x50, 0x03, 0x00, 0x0A, 0x00,
    0b11000000,
    0b10000000,
    0b10000000,
    0b10000000,
    0b10000000,
    0b10000000,
    0b10000000,
    0b10000000,
    0b10000000,
    0b11000000,
];

pub static SEPARATOR_OFF_ON: [u8; 16] = [
    0x4B, 0x50, 0x03, 0x00, 0x0A, 0x00,
    0b01100000,
    0b00100000,
    0b00100000,
    0b00100000,
    0b00100000,
    0b00100000,
    0b00100000,
    0b00100000,
    0b00100000,
    0b01100000,
];

pub static SEPARATOR_ON_ON: [u8; 16] = [
    0x4B, 0x50, 0x03, 0x00, 0x0A, 0x00,
    0b11100000,
    0b10100000,
    0b10100000,
    0b10100000,
    0b10100000,
    0b10100000,
    0b10100000,
    0b10100000,
    0b10100000,
    0b11100000,
];

/// Built-in asset table for [`BitmapLoader`](crate::BitmapLoader)
pub static ASSETS: [(AssetId, &[u8]); AssetId::COUNT] = [
    (AssetId::ModeDvorak, &MODE_DVORAK),
    (AssetId::ModeQwerty, &MODE_QWERTY),
    (AssetId::ModeStenography, &MODE_STENOGRAPHY),
    (AssetId::SpeedIndicator, &SPEED_INDICATOR),
    (AssetId::CheckboxYes, &CHECKBOX_YES),
    (AssetId::CheckboxNo, &CHECKBOX_NO),
    (AssetId::CapsOn, &CAPS_ON),
    (AssetId::CapsOff, &CAPS_OFF),
    (AssetId::NumOn, &NUM_ON),
    (AssetId::NumOff, &NUM_OFF),
    (AssetId::ScrollOn, &SCROLL_ON),
    (AssetId::ScrollOff, &SCROLL_OFF),
    (AssetId::SeparatorOffOff, &SEPARATOR_OFF_OFF),
    (AssetId::SeparatorOnOff, &SEPARATOR_ON_OFF),
    (AssetId::SeparatorOffOn, &SEPARATOR_OFF_ON),
    (AssetId::SeparatorOnOn, &SEPARATOR_ON_ON),
];
