//! Display power state
//!
//! Tracks whether the panel is powered and when the user was last active.
//! Timestamps are milliseconds since boot and wrap; elapsed time is always
//! computed with wrapping subtraction.

use crate::config::TimingConfig;

/// Milliseconds since boot
pub type Timestamp = u32;

/// Power change the caller must apply to the render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerTransition {
    /// Surface power unchanged
    None,
    /// Turn the surface on
    PowerOn,
    /// Turn the surface off
    PowerOff,
}

/// Display power bookkeeping
#[derive(Debug, Clone)]
pub struct DisplayState {
    powered: bool,
    last_activity: Timestamp,
    timeout_ms: u32,
    check_interval_ms: u32,
}

impl DisplayState {
    /// Create the boot-time state
    ///
    /// The panel is powered by its init sequence, so the state starts
    /// powered with `now` as the last activity.
    pub fn new(now: Timestamp, timing: &TimingConfig) -> Self {
        Self {
            powered: true,
            last_activity: now,
            timeout_ms: timing.sleep_timeout_ms,
            check_interval_ms: timing.sleep_check_interval_ms.max(1),
        }
    }

    /// Whether the surface is considered powered
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Timestamp of the last user activity
    pub fn last_activity(&self) -> Timestamp {
        self.last_activity
    }

    /// Poll period of the idle check
    pub fn check_interval_ms(&self) -> u32 {
        self.check_interval_ms
    }

    /// Milliseconds since the last activity
    pub fn idle_for(&self, now: Timestamp) -> u32 {
        now.wrapping_sub(self.last_activity)
    }

    /// Record user activity, powering the surface if needed
    pub fn on_activity(&mut self, now: Timestamp) -> PowerTransition {
        self.last_activity = now;
        self.power_on()
    }

    /// Periodic idle check
    ///
    /// Powers off once the idle time exceeds the timeout. Does nothing when
    /// already unpowered, so repeated ticks never re-trigger.
    pub fn on_idle_check_tick(&mut self, now: Timestamp) -> PowerTransition {
        if self.powered && self.idle_for(now) > self.timeout_ms {
            self.powered = false;
            PowerTransition::PowerOff
        } else {
            PowerTransition::None
        }
    }

    /// Host suspend: unpower without touching the activity timestamp
    pub fn on_suspend(&mut self) -> PowerTransition {
        if self.powered {
            self.powered = false;
            PowerTransition::PowerOff
        } else {
            PowerTransition::None
        }
    }

    /// Host wake: re-power without touching the activity timestamp
    pub fn on_wake(&mut self) -> PowerTransition {
        self.power_on()
    }

    fn power_on(&mut self) -> PowerTransition {
        if self.powered {
            PowerTransition::None
        } else {
            self.powered = true;
            PowerTransition::PowerOn
        }
    }
}
