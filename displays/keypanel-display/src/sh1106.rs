//! SH1106 OLED Display Driver
//!
//! Driver for 128x64 SH1106-based OLED displays via blocking I2C.
//! Drawing goes to a local framebuffer; `flush` sends dirty pages only.

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_hal::i2c::I2c;
use keypanel_core::traits::{DisplayError, RenderSurface, Rgb};

use crate::bitmap::Bitmap;
use crate::framebuffer::{Framebuffer, HEIGHT, PAGES, WIDTH};

/// SH1106 I2C address (typically 0x3C or 0x3D)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// The 128 visible columns sit at 2..130 of the 132-column RAM
const COLUMN_OFFSET: u8 = 2;

/// Control byte prefixes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SH1106 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// SH1106 OLED driver
pub struct Sh1106<I2C> {
    i2c: I2C,
    address: u8,
    framebuffer: Framebuffer,
    powered: bool,
    initialized: bool,
}

impl<I2C: I2c> Sh1106<I2C> {
    /// Create a new SH1106 driver
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            framebuffer: Framebuffer::new(),
            powered: false,
            initialized: false,
        }
    }

    /// Initialize the controller, clear the panel and switch it on
    pub fn init(&mut self) -> Result<(), DisplayError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14,                  // Enable charge pump
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CONTRAST,
            0xCF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::SET_NORMAL,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        self.initialized = true;
        self.framebuffer.clear();
        self.flush()?;

        self.command(cmd::DISPLAY_ON)?;
        self.powered = true;
        Ok(())
    }

    /// Whether the panel is switched on
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Local framebuffer
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    fn command(&mut self, c: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, c])
            .map_err(|_| DisplayError::Communication)
    }

    fn ensure_initialized(&self) -> Result<(), DisplayError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }
}

/// Map a colour onto the monochrome panel
fn binary(color: Rgb) -> BinaryColor {
    if color.luma() >= 128 {
        BinaryColor::On
    } else {
        BinaryColor::Off
    }
}

impl<I2C: I2c> RenderSurface for Sh1106<I2C> {
    type Image = Bitmap;

    fn draw_image(&mut self, x: u16, y: u16, image: &Bitmap) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        if usize::from(x) + usize::from(image.width()) > WIDTH
            || usize::from(y) + usize::from(image.height()) > HEIGHT
        {
            return Err(DisplayError::InvalidCoordinates);
        }

        let raw = ImageRaw::<BinaryColor>::new(image.data(), u32::from(image.width()));
        Image::new(&raw, Point::new(i32::from(x), i32::from(y)))
            .draw(&mut self.framebuffer)
            .ok();
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
        self.ensure_initialized()?;
        if left > right
            || top > bottom
            || usize::from(right) >= WIDTH
            || usize::from(bottom) >= HEIGHT
        {
            return Err(DisplayError::InvalidCoordinates);
        }

        let style = if filled {
            PrimitiveStyle::with_fill(binary(color))
        } else {
            PrimitiveStyle::with_stroke(binary(color), 1)
        };
        Rectangle::with_corners(
            Point::new(i32::from(left), i32::from(top)),
            Point::new(i32::from(right), i32::from(bottom)),
        )
        .into_styled(style)
        .draw(&mut self.framebuffer)
        .ok();
        Ok(())
    }

    fn power(&mut self, on: bool) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        if on == self.powered {
            return Ok(());
        }
        self.command(if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF })?;
        self.powered = on;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.ensure_initialized()?;

        for page in 0..PAGES {
            if !self.framebuffer.is_dirty(page) {
                continue;
            }

            self.command(cmd::SET_PAGE_ADDR | page as u8)?;
            self.command(cmd::SET_LOW_COLUMN | (COLUMN_OFFSET & 0x0F))?;
            self.command(cmd::SET_HIGH_COLUMN | (COLUMN_OFFSET >> 4))?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(self.framebuffer.page(page));
            self.i2c
                .write(self.address, &data)
                .map_err(|_| DisplayError::Communication)?;

            self.framebuffer.mark_clean(page);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    use super::*;

    /// I2C bus recording every write
    #[derive(Default)]
    struct RecordingI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl RecordingI2c {
        fn commands(&self) -> Vec<u8> {
            self.writes
                .iter()
                .filter(|(_, w)| w.len() == 2 && w[0] == CONTROL_COMMAND)
                .map(|(_, w)| w[1])
                .collect()
        }

        fn data_writes(&self) -> usize {
            self.writes
                .iter()
                .filter(|(_, w)| w[0] == CONTROL_DATA)
                .count()
        }
    }

    impl ErrorType for RecordingI2c {
        type Error = ErrorKind;
    }

    impl I2c for RecordingI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    fn display() -> Sh1106<RecordingI2c> {
        let mut d = Sh1106::new(RecordingI2c::default(), DEFAULT_ADDRESS);
        d.init().unwrap();
        d.i2c.writes.clear();
        d
    }

    #[test]
    fn test_init_clears_and_powers_on() {
        let mut d = Sh1106::new(RecordingI2c::default(), DEFAULT_ADDRESS);
        d.init().unwrap();

        assert!(d.is_powered());
        assert_eq!(d.i2c.data_writes(), PAGES);
        assert_eq!(d.i2c.commands().last(), Some(&cmd::DISPLAY_ON));
        assert!(d.i2c.writes.iter().all(|(addr, _)| *addr == DEFAULT_ADDRESS));
    }

    #[test]
    fn test_requires_init() {
        let mut d = Sh1106::new(RecordingI2c::default(), DEFAULT_ADDRESS);
        assert_eq!(d.flush(), Err(DisplayError::NotInitialized));
        assert_eq!(
            d.draw_rect(0, 0, 1, 1, Rgb::WHITE, true),
            Err(DisplayError::NotInitialized)
        );
    }

    #[test]
    fn test_flush_sends_dirty_pages_only() {
        let mut d = display();

        d.flush().unwrap();
        assert!(d.i2c.writes.is_empty());

        // Rows 0..=9 span pages 0 and 1
        d.draw_rect(0, 0, 9, 9, Rgb::WHITE, true).unwrap();
        d.flush().unwrap();
        assert_eq!(d.i2c.data_writes(), 2);

        let cmds = d.i2c.commands();
        assert_eq!(cmds[0], cmd::SET_PAGE_ADDR);
        assert_eq!(cmds[1], cmd::SET_LOW_COLUMN | 2);
        assert_eq!(cmds[2], cmd::SET_HIGH_COLUMN);
        assert_eq!(cmds[3], cmd::SET_PAGE_ADDR | 1);
    }

    #[test]
    fn test_rect_outline_and_erase() {
        let mut d = display();

        d.draw_rect(10, 10, 14, 14, Rgb::WHITE, false).unwrap();
        assert!(d.framebuffer().pixel(10, 10));
        assert!(d.framebuffer().pixel(14, 12));
        assert!(!d.framebuffer().pixel(12, 12));

        d.draw_rect(10, 10, 14, 14, Rgb::BLACK, true).unwrap();
        assert!(!d.framebuffer().pixel(10, 10));
    }

    #[test]
    fn test_rect_bounds() {
        let mut d = display();
        assert_eq!(
            d.draw_rect(0, 0, 128, 10, Rgb::WHITE, true),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            d.draw_rect(5, 0, 4, 10, Rgb::WHITE, true),
            Err(DisplayError::InvalidCoordinates)
        );
    }

    #[test]
    fn test_draw_image() {
        static CHECK: [u8; 8] = [b'K', b'P', 2, 0, 2, 0, 0b1000_0000, 0b0100_0000];
        let bmp = Bitmap::parse(&CHECK).unwrap();
        let mut d = display();

        d.draw_image(126, 62, &bmp).unwrap();
        assert!(d.framebuffer().pixel(126, 62));
        assert!(!d.framebuffer().pixel(127, 62));
        assert!(d.framebuffer().pixel(127, 63));

        assert_eq!(
            d.draw_image(127, 0, &bmp),
            Err(DisplayError::InvalidCoordinates)
        );
    }

    #[test]
    fn test_power_is_idempotent() {
        let mut d = display();

        d.power(true).unwrap();
        assert!(d.i2c.writes.is_empty());

        d.power(false).unwrap();
        d.power(false).unwrap();
        assert_eq!(d.i2c.commands(), [cmd::DISPLAY_OFF]);
        assert!(!d.is_powered());

        d.power(true).unwrap();
        assert_eq!(d.i2c.commands(), [cmd::DISPLAY_OFF, cmd::DISPLAY_ON]);
    }

    #[test]
    fn test_bus_error_keeps_page_dirty() {
        let mut d = display();
        d.draw_rect(0, 0, 3, 3, Rgb::WHITE, true).unwrap();

        d.i2c.fail = true;
        assert_eq!(d.flush(), Err(DisplayError::Communication));
        assert!(d.framebuffer().is_dirty(0));

        d.i2c.fail = false;
        d.flush().unwrap();
        assert!(!d.framebuffer().is_dirty(0));
    }
}
