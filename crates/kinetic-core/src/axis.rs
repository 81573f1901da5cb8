use std::ops::{Index, IndexMut};

/// Orientation of a scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

/// A pair of values, one per axis.
///
/// The engine keeps the two axes fully independent; this is just a
/// convenient container for per-axis velocities and displacements.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerAxis<T> {
    pub horizontal: T,
    pub vertical: T,
}

impl<T> PerAxis<T> {
    pub const fn new(horizontal: T, vertical: T) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        Self {
            horizontal: f(Axis::Horizontal),
            vertical: f(Axis::Vertical),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(Axis, T) -> U) -> PerAxis<U> {
        PerAxis {
            horizontal: f(Axis::Horizontal, self.horizontal),
            vertical: f(Axis::Vertical, self.vertical),
        }
    }
}

impl<T: Copy> PerAxis<T> {
    pub fn splat(value: T) -> Self {
        Self::new(value, value)
    }
}

impl PerAxis<f64> {
    /// Largest absolute component.
    pub fn max_abs(&self) -> f64 {
        self.horizontal.abs().max(self.vertical.abs())
    }
}

impl<T> Index<Axis> for PerAxis<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }
}

impl<T> IndexMut<Axis> for PerAxis<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_by_axis() {
        let mut pair = PerAxis::new(1.0, -3.0);
        assert_eq!(pair[Axis::Horizontal], 1.0);
        pair[Axis::Vertical] = 2.0;
        assert_eq!(pair.vertical, 2.0);
        assert_eq!(pair.max_abs(), 2.0);
    }

    #[test]
    fn map_receives_axis() {
        let pair = PerAxis::splat(1.0).map(|axis, v| match axis {
            Axis::Horizontal => v * 2.0,
            Axis::Vertical => v * 3.0,
        });
        assert_eq!(pair, PerAxis::new(2.0, 3.0));
    }
}
