//! Mock implementations for testing
//!
//! Host-side fakes of the platform traits, shared by unit tests and the
//! integration tests under `tests/`.

#![cfg(any(test, feature = "std"))]

use std::vec::Vec;

use crate::traits::{AssetId, DisplayError, ImageLoader, IndicatorLeds, RenderSurface, Rgb};

/// Operation recorded by [`RecordingSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Image {
        x: u16,
        y: u16,
        image: AssetId,
    },
    Rect {
        left: u16,
        top: u16,
        right: u16,
        bottom: u16,
        color: Rgb,
        filled: bool,
    },
    Power(bool),
    Flush,
}

/// Render surface that records every call
///
/// Images are identified by their [`AssetId`], which is what
/// [`FakeLoader`] hands out.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    powered: bool,
    fail_draws: bool,
}

impl RecordingSurface {
    /// Create a powered surface with no recorded operations
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            powered: true,
            fail_draws: false,
        }
    }

    /// Make every draw call return an error (flush and power still work)
    pub fn fail_draws(&mut self, fail: bool) {
        self.fail_draws = fail;
    }

    /// All recorded operations
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Forget recorded operations
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Current panel power as last commanded
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Drawn images as `(x, y, asset)`
    pub fn images(&self) -> Vec<(u16, u16, AssetId)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Image { x, y, image } => Some((x, y, image)),
                _ => None,
            })
            .collect()
    }

    /// Number of flushes
    pub fn flushes(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Flush).count()
    }

    /// Power commands in order
    pub fn power_commands(&self) -> Vec<bool> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Power(on) => Some(on),
                _ => None,
            })
            .collect()
    }

    /// Number of image and rectangle draws
    pub fn draws(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Image { .. } | DrawOp::Rect { .. }))
            .count()
    }

    /// Draw operations split at each flush
    ///
    /// Operations after the last flush are not included.
    pub fn flush_groups(&self) -> Vec<Vec<DrawOp>> {
        let mut groups = Vec::new();
        let mut current = Vec::new();
        for op in &self.ops {
            match op {
                DrawOp::Flush => groups.push(core::mem::take(&mut current)),
                DrawOp::Power(_) => {}
                _ => current.push(*op),
            }
        }
        groups
    }
}

impl RenderSurface for RecordingSurface {
    type Image = AssetId;

    fn draw_image(&mut self, x: u16, y: u16, image: &AssetId) -> Result<(), DisplayError> {
        if self.fail_draws {
            return Err(DisplayError::Communication);
        }
        self.ops.push(DrawOp::Image {
            x,
            y,
            image: *image,
        });
        Ok(())
    }

    fn draw_rect(
        &mut self,
        left: u16,
        top: u16,
        right: u16,
        bottom: u16,
        color: Rgb,
        filled: bool,
    ) -> Result<(), DisplayError> {
        if self.fail_draws {
            return Err(DisplayError::Communication);
        }
        self.ops.push(DrawOp::Rect {
            left,
            top,
            right,
            bottom,
            color,
            filled,
        });
        Ok(())
    }

    fn power(&mut self, on: bool) -> Result<(), DisplayError> {
        self.powered = on;
        self.ops.push(DrawOp::Power(on));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.ops.push(DrawOp::Flush);
        Ok(())
    }
}

/// Image loader handing out the asset id itself as the image
#[derive(Debug, Default)]
pub struct FakeLoader {
    failing: Vec<AssetId>,
    attempts: usize,
}

impl FakeLoader {
    /// Loader where every asset loads
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader where `assets` fail to load
    pub fn failing(assets: &[AssetId]) -> Self {
        Self {
            failing: assets.to_vec(),
            attempts: 0,
        }
    }

    /// Number of load calls
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl ImageLoader<AssetId> for FakeLoader {
    fn load(&mut self, asset: AssetId) -> Option<AssetId> {
        self.attempts += 1;
        if self.failing.contains(&asset) {
            None
        } else {
            Some(asset)
        }
    }
}

/// Indicator LEDs counting blank requests
#[derive(Debug, Default)]
pub struct FakeLeds {
    pub blanked: usize,
}

impl IndicatorLeds for FakeLeds {
    fn blank_all(&mut self) {
        self.blanked += 1;
    }
}
