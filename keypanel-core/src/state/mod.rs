//! Display lifecycle state
//!
//! The power state is a pure value: handlers return the transition to
//! apply and the controller drives the surface.

pub mod events;
pub mod power;

pub use events::Event;
pub use power::{DisplayState, PowerTransition, Timestamp};
