//! Display task
//!
//! Sole owner of the display controller and its deferred task queue.
//! Waits for whichever comes first: the next deferred deadline or the
//! next panel event. Handlers run to completion, so events and deferred
//! tasks never interleave.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Timer;

use keypanel_core::config::PanelConfig;
use keypanel_core::scheduler::{DeferredQueue, MAX_DEFERRED_TASKS};
use keypanel_core::DisplayController;
use keypanel_display::{BitmapLoader, Sh1106};

use super::now_ms;
use crate::channels::{self, PANEL_EVENTS};
use crate::leds::SignalLeds;

/// Panel driver on the board's I2C0
pub type Panel = Sh1106<I2c<'static, I2C0, Blocking>>;

/// Wait used when no deferred task is registered
const IDLE_WAIT_MS: u32 = 1000;

/// Display task - status screen and sleep management
#[embassy_executor::task]
pub async fn display_task(panel: Panel, config: PanelConfig) {
    info!("Display task started");

    let mut queue: DeferredQueue<MAX_DEFERRED_TASKS> = DeferredQueue::new();
    let mut loader = BitmapLoader::builtin();
    let mut leds = SignalLeds;

    let mut controller = DisplayController::new(panel, config, now_ms());
    controller.on_init(&mut loader, &mut queue, &channels::snapshot(), now_ms());

    loop {
        // Run everything that is due
        let now = now_ms();
        while let Some((token, task)) = queue.poll(now) {
            let next = controller.run_deferred(task, &channels::snapshot(), now);
            queue.complete(token, next, now);
        }

        let wait_ms = queue.next_deadline(now_ms()).unwrap_or(IDLE_WAIT_MS);

        match select(PANEL_EVENTS.receive(), Timer::after_millis(u64::from(wait_ms))).await {
            Either::First(event) => {
                trace!("Panel event {}", event);
                controller.handle_event(
                    event,
                    &channels::snapshot(),
                    &mut queue,
                    &mut leds,
                    now_ms(),
                );
            }
            Either::Second(()) => {}
        }
    }
}
