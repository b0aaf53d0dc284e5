//! Platform abstraction traits
//!
//! These traits define the interface between the display logic and the
//! firmware collaborators it consumes but does not implement.

pub mod images;
pub mod leds;
pub mod status;
pub mod surface;
pub mod timer;

pub use images::{AssetId, ImageLoader};
pub use leds::IndicatorLeds;
pub use status::KeyboardStatus;
pub use surface::{DisplayError, RenderSurface, Rgb};
pub use timer::{DeferredTask, DeferredTimer, Reschedule, TaskToken};
