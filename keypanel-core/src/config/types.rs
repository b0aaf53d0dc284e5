//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::keyboard::RgbState;

/// Display hardware configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayHwConfig {
    /// 7-bit I2C address of the OLED controller
    pub i2c_address: u8,
    /// I2C clock in Hz
    pub i2c_frequency: u32,
    /// SDA GPIO
    pub sda_pin: u8,
    /// SCL GPIO
    pub scl_pin: u8,
    /// Panel width in pixels
    pub width: u16,
    /// Panel height in pixels
    pub height: u16,
}

impl Default for DisplayHwConfig {
    fn default() -> Self {
        Self {
            i2c_address: 0x3C,
            i2c_frequency: 400_000,
            sda_pin: 16,
            scl_pin: 17,
            width: 128,
            height: 64,
        }
    }
}

/// Timing of the deferred display tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Idle time after which the display powers off
    pub sleep_timeout_ms: u32,
    /// Period of the idle check
    pub sleep_check_interval_ms: u32,
    /// Period of the WPM/RGB bar redraw
    pub bar_redraw_interval_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            sleep_timeout_ms: 3000,
            sleep_check_interval_ms: 1000,
            bar_redraw_interval_ms: 250,
        }
    }
}

/// Typing speed estimation and display scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WpmConfig {
    /// WPM value drawn as a full-width bar
    pub scale_max: u16,
    /// Length of the sampling window in seconds
    pub sample_seconds: u16,
    /// Number of periods the window is split into
    pub sample_periods: u8,
}

impl Default for WpmConfig {
    fn default() -> Self {
        Self {
            scale_max: 150,
            sample_seconds: 4,
            sample_periods: 32,
        }
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Display hardware
    pub display: DisplayHwConfig,
    /// Deferred task timing
    pub timing: TimingConfig,
    /// WPM estimation
    pub wpm: WpmConfig,
    /// RGB matrix defaults shown until the engine reports its state
    pub rgb: RgbState,
    /// WS2812 data GPIO
    pub led_pin: u8,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self {
            display: DisplayHwConfig::default(),
            timing: TimingConfig::default(),
            wpm: WpmConfig::default(),
            rgb: RgbState::default(),
            led_pin: 15,
        }
    }
}
