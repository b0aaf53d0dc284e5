//! Cooperative deferred task scheduling
//!
//! A fixed-capacity table of self-rescheduling tasks. The owner polls it
//! from a single task, runs whatever is due and reports back how the task
//! wants to be re-armed.

pub mod deferred;

pub use deferred::{DeferredQueue, MAX_DEFERRED_TASKS};
