//! Utility helpers including the generational arena, math conversions, and logging.

pub mod arena;
pub mod logging;
pub mod math;

pub use arena::{Arena, SlotId};
