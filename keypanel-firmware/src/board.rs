//! Board wiring
//!
//! Pins are fixed by the PCB and bound at compile time; the configured
//! pins are only checked against them.

use defmt::*;

use keypanel_core::config::PanelConfig;

/// I2C0 data line to the OLED
pub const SDA_PIN: u8 = 16;
/// I2C0 clock line to the OLED
pub const SCL_PIN: u8 = 17;
/// WS2812 data line
pub const LED_PIN: u8 = 15;
/// One RGB LED per key on the 5x10 matrix
pub const LED_COUNT: usize = 50;

/// Warn about configuration this board cannot honour
pub fn check_config(config: &PanelConfig) {
    let display = &config.display;
    if display.sda_pin != SDA_PIN || display.scl_pin != SCL_PIN {
        warn!(
            "Configured I2C pins SDA {} / SCL {} ignored, board uses GP{} / GP{}",
            display.sda_pin, display.scl_pin, SDA_PIN, SCL_PIN
        );
    }
    if config.led_pin != LED_PIN {
        warn!(
            "Configured LED pin {} ignored, board uses GP{}",
            config.led_pin, LED_PIN
        );
    }
    if display.width != 128 || display.height != 64 {
        warn!(
            "Configured panel size {}x{} ignored, layout is fixed at 128x64",
            display.width, display.height
        );
    }
}
