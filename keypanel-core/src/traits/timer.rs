//! Deferred timer service

/// Self-rescheduling tasks registered by the display controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeferredTask {
    /// Power the display off after inactivity
    IdleCheck,
    /// Redraw the WPM bar and stale RGB indicators
    BarRedraw,
}

/// Value returned by a deferred callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reschedule {
    /// Run again after this many milliseconds
    After(u32),
    /// Do not run again
    Cancel,
}

/// Handle to a registered deferred task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskToken(pub u8);

/// Cooperative deferred timer
///
/// Tasks run on the same thread as event handlers; the scheduler invokes
/// the task after the requested delay and re-arms it with the delay the
/// callback returns.
pub trait DeferredTimer {
    /// Register `task` to first run after `delay_ms`
    ///
    /// Returns `None` when the timer has no free slot.
    fn register_periodic(&mut self, task: DeferredTask, delay_ms: u32) -> Option<TaskToken>;

    /// Run the task at the next opportunity instead of waiting for its
    /// deadline
    fn reschedule_soon(&mut self, token: TaskToken);
}
