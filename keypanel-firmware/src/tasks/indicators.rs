//! Indicator LED task
//!
//! Owns the WS2812 chain and switches every LED off when the display
//! controller shuts down.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812};
use smart_leds::RGB8;

use crate::board::LED_COUNT;
use crate::channels::LEDS_BLANK;

/// Indicator task - blanks the RGB matrix on request
#[embassy_executor::task]
pub async fn indicator_task(mut ws2812: PioWs2812<'static, PIO0, 0, LED_COUNT, Grb>) {
    info!("Indicator task started");

    let dark = [RGB8::default(); LED_COUNT];
    loop {
        LEDS_BLANK.wait().await;
        ws2812.write(&dark).await;
        info!("RGB matrix blanked");
    }
}
