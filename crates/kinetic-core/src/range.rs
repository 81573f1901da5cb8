//! The scrollable-range contract consumed by the panning engine.
//!
//! The engine never owns scroll state. Hosts expose one [`AxisRange`] per
//! axis (either may be absent) through a [`ScrollableSurface`], and the engine
//! reads and writes values through that narrow interface only.

use crate::Axis;

/// Snapshot of an axis range's numeric state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeValues {
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
    pub step_increment: f64,
    pub page_size: f64,
}

impl RangeValues {
    /// Largest value that still shows a full page: `upper - page_size`.
    pub fn max_value(&self) -> f64 {
        self.upper - self.page_size
    }

    /// Whether `value` lies within `[lower, upper - page_size]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.max_value()
    }

    /// The current value snapped to the nearest step boundary.
    pub fn snapped_value(&self) -> f64 {
        snap_to_step(self.value, self.lower, self.step_increment)
    }
}

/// One scrollable axis of a surface.
///
/// `set_value` is authoritative: implementations may clamp or notify, and the
/// engine re-reads the value rather than assuming what it wrote.
pub trait AxisRange {
    /// Current value, bounds, step and page size.
    fn values(&self) -> RangeValues;

    fn value(&self) -> f64 {
        self.values().value
    }

    fn set_value(&mut self, value: f64);

    /// Whether the range may temporarily exceed its bounds and bounce back.
    fn is_elastic(&self) -> bool;

    /// Attempts to bring an out-of-bounds value back into range, animating
    /// over `frames` frames at `fps` when `animate` is set.
    ///
    /// Returns `true` if a correction was applied.
    fn clamp(&mut self, animate: bool, frames: u32, fps: u32) -> bool;
}

/// A surface that can be panned: exposes up to two independent axis ranges.
pub trait ScrollableSurface {
    fn axis_range(&self, axis: Axis) -> Option<&dyn AxisRange>;

    fn axis_range_mut(&mut self, axis: Axis) -> Option<&mut dyn AxisRange>;
}

/// Rounds `value` to the nearest multiple of `step` measured from `lower`.
///
/// Ties round to even, matching C's `rint`. A non-positive or non-finite
/// step leaves the value untouched.
pub fn snap_to_step(value: f64, lower: f64, step: f64) -> f64 {
    if !(step > 0.0) || !step.is_finite() {
        return value;
    }
    ((value - lower) / step).round_ties_even() * step + lower
}
