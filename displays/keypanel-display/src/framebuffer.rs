//! Page-organised monochrome framebuffer
//!
//! Matches the SH1106 memory layout: 8 pages of 8 rows, one byte per
//! column per page, LSB on top.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Panel dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
pub const PAGES: usize = HEIGHT / 8;

/// 128x64 1-bpp framebuffer
#[derive(Debug, Clone)]
pub struct Framebuffer {
    pages: [[u8; WIDTH]; PAGES],
    /// Bit `n` set when page `n` changed since the last flush
    dirty: u8,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a blank buffer with every page dirty
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
            dirty: 0xFF,
        }
    }

    /// Blank every pixel
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
        self.dirty = 0xFF;
    }

    /// Set a pixel; out-of-range coordinates are ignored
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let page = y / 8;
        let mask = 1 << (y % 8);
        let byte = &mut self.pages[page][x];
        let old = *byte;
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
        if *byte != old {
            self.dirty |= 1 << page;
        }
    }

    /// Read a pixel; out-of-range reads are off
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < WIDTH && y < HEIGHT && self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Raw column bytes of one page
    pub fn page(&self, page: usize) -> &[u8; WIDTH] {
        &self.pages[page]
    }

    /// Dirty page mask
    pub fn dirty(&self) -> u8 {
        self.dirty
    }

    /// Check whether page `page` needs sending
    pub fn is_dirty(&self, page: usize) -> bool {
        self.dirty & (1 << page) != 0
    }

    /// Mark a page as sent
    pub fn mark_clean(&mut self, page: usize) {
        self.dirty &= !(1 << page);
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set_pixel(point.x as usize, point.y as usize, color.is_on());
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}
