//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod display;
pub mod indicators;
pub mod wpm;

pub use display::display_task;
pub use indicators::indicator_task;
pub use wpm::wpm_task;

use embassy_time::Instant;

/// Milliseconds since boot, wrapping
pub fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}
