//! Typing speed task
//!
//! Closes a WPM sample period on every tick and publishes the estimate
//! into the shared keyboard state.

use defmt::*;
use embassy_time::{Duration, Ticker};

use keypanel_core::config::WpmConfig;
use keypanel_core::keyboard::WpmEstimator;

use crate::channels;

/// WPM task - sliding window typing speed estimate
#[embassy_executor::task]
pub async fn wpm_task(config: WpmConfig) {
    let mut estimator = WpmEstimator::new(&config);
    info!("WPM task started, {} ms periods", estimator.period_ms());

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(estimator.period_ms())));

    loop {
        ticker.next().await;

        estimator.record_keystrokes(channels::take_keystrokes());
        let wpm = estimator.advance();
        channels::update_status(|status| status.wpm = wpm);
    }
}
