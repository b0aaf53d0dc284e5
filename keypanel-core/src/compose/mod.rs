//! Status screen composition
//!
//! The screen is split into fixed regions. Each handler redraws only the
//! regions its input affects, and every region redraw ends with exactly
//! one flush.

pub mod assets;
pub mod bar;
pub mod composer;
pub mod layout;
pub mod region;

pub use assets::ImageSet;
pub use bar::{bar_length, HBar, VBar};
pub use composer::StatusComposer;
pub use region::{Region, RegionId};
