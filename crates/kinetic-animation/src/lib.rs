//! Deceleration physics for kinetic panning.
//!
//! [`TrajectorySolver`] turns a release velocity into a step-aligned
//! [`Trajectory`]; [`DecelerationController`] plays that trajectory back one
//! 15 ms step at a time as clock ticks arrive, stopping when both axes have
//! run into their bounds or the trajectory's duration elapses.

pub mod deceleration;
pub mod trajectory;

#[cfg(test)]
pub(crate) mod test_support;

pub use deceleration::{DecelerationController, DecelerationState, DECELERATION_STEP_MS};
pub use trajectory::{
    geometric_series_scale, Trajectory, TrajectoryKind, TrajectorySolver, DEFAULT_DECEL_RATE,
    FLING_TAIL_FRAMES, FLING_VELOCITY_THRESHOLD, SETTLE_DURATION_MS, SETTLE_FRAMES,
};
