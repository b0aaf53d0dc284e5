//! Render surface trait for the status display

/// Errors reported by a render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus error talking to the panel controller
    Communication,
    /// Coordinates outside the panel
    InvalidCoordinates,
    /// Panel not initialized
    NotInitialized,
}

/// 24-bit colour
///
/// Monochrome surfaces reduce it to on/off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a colour from its components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Approximate perceived brightness (0-255)
    pub const fn luma(&self) -> u8 {
        ((self.r as u16 * 77 + self.g as u16 * 150 + self.b as u16 * 29) >> 8) as u8
    }
}

/// Render surface
///
/// Hardware-agnostic drawing interface for the status display. Drawing
/// goes to a buffer; nothing reaches the panel until [`flush`].
///
/// [`flush`]: RenderSurface::flush
pub trait RenderSurface {
    /// Decoded image type accepted by [`RenderSurface::draw_image`]
    type Image;

    /// Draw an image with its top-left corner at `(x, y)`
    fn draw_image(&mut self, x: u16, y: u16, image: &Self::Image) -> Result<(), DisplayError>;

    /// Draw a rectangle between two inclusive corners
    ///
    /// - `filled`: fill the rectangle, otherwise draw a 1px outline
    fn draw_rect(
        &mut self,
        left: u16,
        top: u16,
        right: u16,
        bottom: u16,
        color: Rgb,
        filled: bool,
    ) -> Result<(), DisplayError>;

    /// Switch the panel on or off
    ///
    /// Powering an already-powered (or already-off) panel is a no-op.
    fn power(&mut self, on: bool) -> Result<(), DisplayError>;

    /// Commit buffered drawing to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}
