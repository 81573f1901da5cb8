//! Shared gesture constants for pointer-driven panning.
//!
//! These values are in logical pixels and frame units. They are the tuned
//! values the engine ships with; hosts that need different behaviour adjust
//! the corresponding `KineticParameters` rather than these constants.

/// Drag threshold in logical pixels.
///
/// A press becomes a drag once the pointer moves at least this far from the
/// press origin along either axis. Until then motion is observed but does not
/// pan, so a press-and-release that stays inside the threshold is a click.
pub const DRAG_THRESHOLD: f32 = 4.0;

/// Number of velocity frame units per second.
///
/// Release velocity is expressed as displacement per 1/60 s regardless of how
/// often the host delivers pointer events or clock ticks.
pub const FRAME_UNIT_RATE: f64 = 60.0;

/// Default number of motion samples kept for velocity estimation.
pub const DEFAULT_BUFFER_CAPACITY: usize = 3;
