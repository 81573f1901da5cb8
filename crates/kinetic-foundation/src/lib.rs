//! Gesture foundation for kinetic panning: motion sampling, drag detection,
//! direct panning and release-velocity estimation.

pub mod drag;
pub mod gesture_constants;
pub mod input;
pub mod motion_buffer;
pub mod pan;
pub mod velocity;

pub use drag::DragClassifier;
pub use input::PointerButton;
pub use motion_buffer::{MotionSample, MotionSampleBuffer};
pub use pan::PanAccumulator;
pub use velocity::{frame_fraction, velocity_from_displacement, ReleaseEstimate, VelocityEstimator};

pub mod prelude {
    pub use crate::drag::DragClassifier;
    pub use crate::gesture_constants::*;
    pub use crate::input::PointerButton;
    pub use crate::motion_buffer::{MotionSample, MotionSampleBuffer};
    pub use crate::pan::PanAccumulator;
    pub use crate::velocity::{ReleaseEstimate, VelocityEstimator};
}
