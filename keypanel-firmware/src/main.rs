//! keypanel - Keyboard Status Panel Firmware
//!
//! Firmware for the RP2040 5x10 ortholinear keyboard's status display:
//! an SH1106 OLED showing the default layer, momentary layers, lock keys,
//! RGB matrix parameters and typing speed, with sleep after inactivity.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use {defmt_rtt as _, panic_probe as _};

use keypanel_core::config::{parse_config, PanelConfig};
use keypanel_core::keyboard::{Layer, LayerState};
use keypanel_core::state::Event;
use keypanel_display::Sh1106;

mod board;
mod bridge;
mod channels;
mod leds;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit keyboard.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../keyboard.toml");

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("keypanel firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    board::check_config(&config);

    // SH1106 on I2C0 (board: SCL GP17, SDA GP16)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config.display.i2c_frequency;
    let bus = I2c::new_blocking(p.I2C0, p.PIN_17, p.PIN_16, i2c_config);

    let mut display = Sh1106::new(bus, config.display.i2c_address);
    match display.init() {
        Ok(()) => info!("Display initialized at {=u8:#x}", config.display.i2c_address),
        Err(e) => warn!("Display init failed: {}, continuing without panel", e),
    }

    // WS2812 chain on PIO0 (board: GP15)
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let ws2812 = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_15, &program);

    channels::init_status(config.rgb);

    spawner.spawn(tasks::display_task(display, config)).unwrap();
    spawner.spawn(tasks::wpm_task(config.wpm)).unwrap();
    spawner.spawn(tasks::indicator_task(ws2812)).unwrap();

    // Boot default layer, as the layer engine reports it
    bridge::publish(Event::DefaultLayerChange(LayerState::only(Layer::Dvorak)));

    info!("All tasks spawned, firmware running");
}

/// Parse the embedded configuration, falling back to defaults
fn load_config() -> PanelConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Configuration loaded");
            config
        }
        Err(e) => {
            warn!("Invalid keyboard.toml ({}), using defaults", e);
            PanelConfig::default()
        }
    }
}
