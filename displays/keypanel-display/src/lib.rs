//! Status display platform for keypanel
//!
//! This crate provides:
//! - `Sh1106` - blocking I2C driver implementing `RenderSurface`
//! - `Framebuffer` - 1-bpp page buffer with dirty tracking, usable as an
//!   `embedded-graphics` draw target
//! - `Bitmap` / `BitmapLoader` - raw 1-bpp images and the built-in asset
//!   table
//!
//! # Architecture
//!
//! Drawing is rasterised into the framebuffer with `embedded-graphics`;
//! `flush` sends only the pages touched since the previous flush.

#![no_std]
#![deny(unsafe_code)]

pub mod assets;
pub mod bitmap;
pub mod framebuffer;
pub mod sh1106;

pub use bitmap::{Bitmap, BitmapLoader, HEADER_LEN};
pub use framebuffer::{Framebuffer, HEIGHT, PAGES, WIDTH};
pub use sh1106::{Sh1106, DEFAULT_ADDRESS};
