//! Horizontal and vertical value bars
//!
//! Bars are always erased over their full extent before the new length is
//! drawn, so a shorter value never leaves stale pixels behind.

use super::layout::{BACKGROUND, FOREGROUND};
use super::region::Region;
use crate::traits::{DisplayError, RenderSurface};

/// Scale `value` to a bar length in pixels
///
/// `round(min(value, scale_max) / scale_max * max_pixels)`, computed in
/// integers with round-half-up. A zero scale yields an empty bar.
pub fn bar_length(value: u32, scale_max: u32, max_pixels: u16) -> u16 {
    if scale_max == 0 {
        return 0;
    }
    let value = u64::from(value.min(scale_max));
    let scale = u64::from(scale_max);
    ((value * u64::from(max_pixels) + scale / 2) / scale) as u16
}

/// Bar growing left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HBar {
    pub area: Region,
}

impl HBar {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            area: Region::new(x, y, width, height),
        }
    }

    /// Longest drawable length
    pub const fn max_pixels(&self) -> u16 {
        self.area.width
    }

    /// Erase the bar and draw `value` out of `scale_max`
    pub fn draw<S: RenderSurface>(
        &self,
        surface: &mut S,
        value: u32,
        scale_max: u32,
    ) -> Result<u16, DisplayError> {
        let a = self.area;
        let length = bar_length(value, scale_max, self.max_pixels());

        surface.draw_rect(a.x, a.y, a.right(), a.bottom(), BACKGROUND, true)?;
        if length > 0 {
            surface.draw_rect(a.x, a.y, a.x + length - 1, a.bottom(), FOREGROUND, true)?;
        }
        Ok(length)
    }
}

/// Bar growing bottom to top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VBar {
    pub area: Region,
}

impl VBar {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            area: Region::new(x, y, width, height),
        }
    }

    /// Longest drawable length
    pub const fn max_pixels(&self) -> u16 {
        self.area.height
    }

    /// Erase the bar and draw `value` out of `scale_max`
    pub fn draw<S: RenderSurface>(
        &self,
        surface: &mut S,
        value: u32,
        scale_max: u32,
    ) -> Result<u16, DisplayError> {
        let a = self.area;
        let length = bar_length(value, scale_max, self.max_pixels());

        surface.draw_rect(a.x, a.y, a.right(), a.bottom(), BACKGROUND, true)?;
        if length > 0 {
            let top = a.bottom() + 1 - length;
            surface.draw_rect(a.x, top, a.right(), a.bottom(), FOREGROUND, true)?;
        }
        Ok(length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{DrawOp, RecordingSurface};
    use crate::traits::Rgb;

    #[test]
    fn test_bar_length_rounding() {
        assert_eq!(bar_length(0, 150, 128), 0);
        assert_eq!(bar_length(150, 150, 128), 128);
        assert_eq!(bar_length(75, 150, 128), 64);
        // 1/150 * 128 = 0.853 rounds up
        assert_eq!(bar_length(1, 150, 128), 1);
        // 127/255 * 64 = 31.87
        assert_eq!(bar_length(127, 255, 64), 32);
    }

    #[test]
    fn test_bar_length_clamps() {
        assert_eq!(bar_length(400, 150, 128), 128);
        assert_eq!(bar_length(10, 0, 128), 0);
    }

    #[test]
    fn test_hbar_erases_then_draws() {
        let mut surface = RecordingSurface::new();
        let bar = HBar::new(0, 54, 128, 8);

        assert_eq!(bar.draw(&mut surface, 75, 150), Ok(64));
        assert_eq!(
            surface.ops(),
            &[
                DrawOp::Rect {
                    left: 0,
                    top: 54,
                    right: 127,
                    bottom: 61,
                    color: Rgb::BLACK,
                    filled: true
                },
                DrawOp::Rect {
                    left: 0,
                    top: 54,
                    right: 63,
                    bottom: 61,
                    color: Rgb::WHITE,
                    filled: true
                },
            ]
        );
    }

    #[test]
    fn test_empty_bar_only_erases() {
        let mut surface = RecordingSurface::new();
        HBar::new(0, 0, 10, 2).draw(&mut surface, 0, 100).unwrap();
        assert_eq!(surface.ops().len(), 1);
    }

    #[test]
    fn test_vbar_fills_from_bottom() {
        let mut surface = RecordingSurface::new();
        let bar = VBar::new(52, 0, 6, 24);

        assert_eq!(bar.draw(&mut surface, 255, 255), Ok(24));
        assert_eq!(
            surface.ops()[1],
            DrawOp::Rect {
                left: 52,
                top: 0,
                right: 57,
                bottom: 23,
                color: Rgb::WHITE,
                filled: true
            }
        );

        surface.clear();
        bar.draw(&mut surface, 85, 255).unwrap();
        // 8 of 24 pixels, anchored at the bottom edge
        assert_eq!(
            surface.ops()[1],
            DrawOp::Rect {
                left: 52,
                top: 16,
                right: 57,
                bottom: 23,
                color: Rgb::WHITE,
                filled: true
            }
        );
    }
}
