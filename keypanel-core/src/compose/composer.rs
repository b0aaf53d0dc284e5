//! Status composer
//!
//! Maps keyboard state onto screen regions. Handlers assume the surface is
//! powered; the controller never calls them otherwise.

use super::assets::{self, ImageSet};
use super::layout::{self, BACKGROUND, FOREGROUND};
use super::region::RegionId;
use crate::config::WpmConfig;
use crate::keyboard::{Layer, LayerState, LockKey, LockState, RgbState, EFFECT_INDEX_BITS};
use crate::traits::{AssetId, DisplayError, KeyboardStatus, RenderSurface};

/// Full scale of the 8-bit RGB parameters
const RGB_SCALE_MAX: u32 = u8::MAX as u32;

/// Region-by-region status screen renderer
#[derive(Debug)]
pub struct StatusComposer<I> {
    images: ImageSet<I>,
    wpm_scale_max: u16,
    /// RGB state currently on screen, `None` until first drawn
    drawn_rgb: Option<RgbState>,
}

impl<I> StatusComposer<I> {
    /// Create a composer drawing with `images`
    pub fn new(images: ImageSet<I>, wpm: &WpmConfig) -> Self {
        Self {
            images,
            wpm_scale_max: wpm.scale_max,
            drawn_rgb: None,
        }
    }

    /// Active layers changed: redraw the layer checkboxes
    pub fn on_layer_change<S>(&mut self, surface: &mut S, layers: LayerState)
    where
        S: RenderSurface<Image = I>,
    {
        let drawn = self.draw_layers(surface, layers);
        finish(surface, RegionId::Layers, drawn);
    }

    /// Default layer changed: redraw the default layer glyph
    pub fn on_default_layer_change<S>(&mut self, surface: &mut S, default_layers: LayerState)
    where
        S: RenderSurface<Image = I>,
    {
        let drawn = self.draw_default_layer(surface, default_layers);
        finish(surface, RegionId::DefaultLayer, drawn);
    }

    /// Lock LEDs changed: redraw lock icons and separators
    pub fn on_lock_state_change<S>(&mut self, surface: &mut S, locks: LockState)
    where
        S: RenderSurface<Image = I>,
    {
        let drawn = self.draw_locks(surface, locks);
        finish(surface, RegionId::Locks, drawn);
    }

    /// RGB parameters changed: redraw the bars and the effect index
    pub fn on_rgb_change<S>(&mut self, surface: &mut S, rgb: RgbState)
    where
        S: RenderSurface<Image = I>,
    {
        self.redraw_rgb(surface, rgb);
    }

    /// Periodic bar refresh
    ///
    /// The typing speed bar is always redrawn; the RGB regions only when
    /// the engine state differs from what is on screen.
    pub fn on_periodic_bar_tick<S, K>(&mut self, surface: &mut S, status: &K)
    where
        S: RenderSurface<Image = I>,
        K: KeyboardStatus,
    {
        let drawn = self.draw_wpm(surface, status.wpm());
        finish(surface, RegionId::Wpm, drawn);

        let rgb = status.rgb_state();
        if self.drawn_rgb != Some(rgb) {
            self.redraw_rgb(surface, rgb);
        }
    }

    /// Redraw every region once, in [`RegionId::ALL`] order
    pub fn redraw_all<S, K>(&mut self, surface: &mut S, status: &K)
    where
        S: RenderSurface<Image = I>,
        K: KeyboardStatus,
    {
        for region in RegionId::ALL {
            let drawn = match region {
                RegionId::Background => self.draw_background(surface),
                RegionId::DefaultLayer => {
                    self.draw_default_layer(surface, status.default_layer_state())
                }
                RegionId::Layers => self.draw_layers(surface, status.layer_state()),
                RegionId::Locks => self.draw_locks(surface, status.lock_state()),
                RegionId::RgbBars => self.draw_rgb_bars(surface, status.rgb_state()),
                RegionId::EffectIndex => self.draw_effect_index(surface, status.rgb_state()),
                RegionId::Wpm => self.draw_wpm(surface, status.wpm()),
            };
            finish(surface, region, drawn);
        }
    }

    fn redraw_rgb<S>(&mut self, surface: &mut S, rgb: RgbState)
    where
        S: RenderSurface<Image = I>,
    {
        let drawn = self.draw_rgb_bars(surface, rgb);
        finish(surface, RegionId::RgbBars, drawn);
        let drawn = self.draw_effect_index(surface, rgb);
        finish(surface, RegionId::EffectIndex, drawn);
    }

    /// Draw an asset if it loaded; a failed asset draws nothing
    fn draw_asset<S>(&self, surface: &mut S, asset: AssetId, x: u16, y: u16) -> Result<(), DisplayError>
    where
        S: RenderSurface<Image = I>,
    {
        match self.images.get(asset) {
            Some(image) => surface.draw_image(x, y, image),
            None => Ok(()),
        }
    }

    fn draw_background<S>(&mut self, surface: &mut S) -> Result<(), DisplayError>
    where
        S: RenderSurface<Image = I>,
    {
        let s = layout::SCREEN;
        surface.draw_rect(s.x, s.y, s.right(), s.bottom(), BACKGROUND, true)?;
        // Everything was just erased
        self.drawn_rgb = None;

        let (x, y) = layout::SPEED_ICON;
        self.draw_asset(surface, AssetId::SpeedIndicator, x, y)
    }

    fn draw_default_layer<S>(&self, surface: &mut S, default_layers: LayerState) -> Result<(), DisplayError>
    where
        S: RenderSurface<Image = I>,
    {
        let glyph = assets::default_layer_glyph(default_layers);
        let r = layout::DEFAULT_LAYER;
        self.draw_asset(surface, glyph, r.x, r.y)
    }

    fn draw_layers<S>(&self, surface: &mut S, layers: LayerState) -> Result<(), DisplayError>
    where
        S: RenderSurface<Image = I>,
    {
        for (layer, x) in Layer::INDICATED.iter().zip(layout::CHECKBOX_X) {
            let asset = assets::checkbox(layers.is_on(*layer));
            self.draw_asset(surface, asset, x, layout::LAYERS.y)?;
        }
        Ok(())
    }

    fn draw_locks<S>(&self, surface: &mut S, locks: LockState) -> Result<(), DisplayError>
    where
        S: RenderSurface<Image = I>,
    {
        let y = layout::LOCKS.y;

        let icons = [
            (LockKey::CapsLock, layout::CAPS_X),
            (LockKey::NumLock, layout::NUM_X),
            (LockKey::ScrollLock, layout::SCROLL_X),
        ];
        for (key, x) in icons {
            self.draw_asset(surface, assets::lock_icon(key, locks.get(key)), x, y)?;
        }

        let left = assets::separator(locks.left_separator());
        self.draw_asset(surface, left, layout::LEFT_SEPARATOR_X, y)?;
        let right = assets::separator(locks.right_separator());
        self.draw_asset(surface, right, layout::RIGHT_SEPARATOR_X, y)
    }

    fn draw_rgb_bars<S>(&mut self, surface: &mut S, rgb: RgbState) -> Result<(), DisplayError>
    where
        S: RenderSurface<Image = I>,
    {
        layout::HUE_BAR.draw(surface, u32::from(rgb.hue), RGB_SCALE_MAX)?;
        layout::SAT_BAR.draw(surface, u32::from(rgb.sat), RGB_SCALE_MAX)?;
        layout::VAL_BAR.draw(surface, u32::from(rgb.val), RGB_SCALE_MAX)?;
        layout::SPEED_BAR.draw(surface, u32::from(rgb.speed), RGB_SCALE_MAX)?;
        self.drawn_rgb = Some(rgb);
        Ok(())
    }

    fn draw_effect_index<S>(&mut self, surface: &mut S, rgb: RgbState) -> Result<(), DisplayError>
    where
        S: RenderSurface<Image = I>,
    {
        let top = layout::EFFECT_INDEX.y;
        let bottom = top + layout::EFFECT_SQUARE_SIZE - 1;

        for bit in 0..EFFECT_INDEX_BITS {
            let left = layout::effect_square_x(bit);
            let right = left + layout::EFFECT_SQUARE_SIZE - 1;

            // Set bits are filled squares, clear bits are outlines
            surface.draw_rect(left, top, right, bottom, BACKGROUND, true)?;
            surface.draw_rect(left, top, right, bottom, FOREGROUND, rgb.effect_bit(bit))?;
        }
        Ok(())
    }

    fn draw_wpm<S>(&self, surface: &mut S, wpm: u16) -> Result<(), DisplayError>
    where
        S: RenderSurface<Image = I>,
    {
        layout::WPM_BAR
            .draw(surface, u32::from(wpm), u32::from(self.wpm_scale_max))
            .map(|_| ())
    }
}

/// Close a region redraw with its single flush
///
/// Surface errors are logged and dropped so every handler stays total.
fn finish<S: RenderSurface>(surface: &mut S, region: RegionId, drawn: Result<(), DisplayError>) {
    trace!("redraw {}", region);
    if let Err(e) = drawn {
        warn!("drawing {} failed: {}", region, e);
    }
    if let Err(e) = surface.flush() {
        warn!("flush after {} failed: {}", region, e);
    }
}
