//! Testing utilities for kinetic panning.
//!
//! [`Adjustment`] and [`TestSurface`] are in-memory stand-ins for a host's
//! scrollable ranges; [`GestureRobot`] drives a
//! [`KineticScrollView`](kinetic_ui::KineticScrollView) on a [`ManualClock`].

pub mod adjustment;
pub mod clock;
pub mod robot;

pub use adjustment::{Adjustment, TestSurface};
pub use clock::ManualClock;
pub use robot::GestureRobot;

pub mod prelude {
    pub use crate::adjustment::{Adjustment, TestSurface};
    pub use crate::clock::ManualClock;
    pub use crate::robot::GestureRobot;
}
