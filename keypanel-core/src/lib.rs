//! Board-agnostic core logic for the keypanel status display
//!
//! This crate contains all display logic that does not depend on
//! specific hardware implementations:
//!
//! - Platform traits (render surface, image loader, deferred timer, status)
//! - Display power state (sleep/wake bookkeeping)
//! - Status composer (region-by-region redraws)
//! - Cooperative deferred task queue
//! - Keyboard model (layers, lock keys, RGB parameters, WPM estimate)
//! - Configuration types and parser

#![no_std]
#![deny(unsafe_code)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Must stay first so the logging macros are visible to every module
#[macro_use]
mod fmt;

pub mod compose;
pub mod config;
pub mod controller;
pub mod keyboard;
pub mod mocks;
pub mod scheduler;
pub mod state;
pub mod traits;

pub use controller::DisplayController;
