//! Core contracts for kinetic panning.
//!
//! This crate holds the vocabulary shared by the gesture, animation and view
//! layers: pointer geometry, monotonic timestamps, the two scroll axes, and
//! the [`AxisRange`] / [`ScrollableSurface`] capabilities through which the
//! engine reads and writes a host's scrollable ranges.

mod axis;
mod geometry;
mod platform;
mod range;
mod time;

pub use axis::*;
pub use geometry::*;
pub use platform::*;
pub use range::*;
pub use time::*;

pub mod prelude {
    pub use crate::axis::{Axis, PerAxis};
    pub use crate::geometry::Point;
    pub use crate::platform::{Clock, SystemClock};
    pub use crate::range::{snap_to_step, AxisRange, RangeValues, ScrollableSurface};
    pub use crate::time::Timestamp;
}
