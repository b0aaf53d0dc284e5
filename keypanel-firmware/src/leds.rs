//! Indicator LED control for the display controller

use keypanel_core::traits::IndicatorLeds;

use crate::channels::LEDS_BLANK;

/// Forwards blank requests to the indicator task
pub struct SignalLeds;

impl IndicatorLeds for SignalLeds {
    fn blank_all(&mut self) {
        LEDS_BLANK.signal(());
    }
}
