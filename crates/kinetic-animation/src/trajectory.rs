//! Step-aligned geometric-decay trajectories.
//!
//! A fling moves `v` pixels in its first frame and divides `v` by the decay
//! rate `y` every frame after that. To come to rest within one pixel of the
//! target the trajectory needs `n` frames, where `v / y^n < 1`, i.e.
//! `n = ln(v) / ln(y)`. Stopping at a one-pixel residual feels abrupt, so a
//! fixed tail of [`FLING_TAIL_FRAMES`] is added.
//!
//! The total distance covered over `n + 1` frames is a geometric series:
//!
//! ```text
//! d = v + v/y + v/y^2 + ... + v/y^n = a * v,   a = (1 - y^-(n+1)) / (1 - 1/y)
//! ```
//!
//! The solver projects `d`, snaps `value + d` to the nearest step boundary and
//! solves back for the initial velocity `v = d' / a`, so that the decayed
//! motion ends on the grid.

use kinetic_core::{snap_to_step, Axis, PerAxis, ScrollableSurface};

/// Decay rate used when none is configured.
pub const DEFAULT_DECEL_RATE: f64 = 1.1;

/// Frames added to the ideal frame count of a fling.
pub const FLING_TAIL_FRAMES: f64 = 15.0;

/// Nominal frame count of a settle trajectory.
pub const SETTLE_FRAMES: f64 = 4.0;

/// Duration of a settle trajectory.
pub const SETTLE_DURATION_MS: u64 = 250;

/// Release speeds (px/frame) at or below this settle instead of flinging.
pub const FLING_VELOCITY_THRESHOLD: f64 = 1.0;

const FRAMES_PER_SECOND: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrajectoryKind {
    /// Multi-frame decay after a real release velocity.
    Fling,
    /// Short snap to the nearest step after a negligible release.
    Settle,
}

/// Per-frame velocity for both axes plus the clock duration that drives it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trajectory {
    pub kind: TrajectoryKind,
    pub velocity: PerAxis<f64>,
    /// Frame count `n` the trajectory was solved for.
    pub frames: f64,
    /// Geometric-series scale `a` for `frames`.
    pub scale: f64,
    pub duration_ms: u64,
}

impl Trajectory {
    /// Total displacement the solved velocity covers over `frames + 1`
    /// decaying frames.
    pub fn projected_displacement(&self) -> PerAxis<f64> {
        let scale = self.scale;
        self.velocity.map(|_, v| v * scale)
    }
}

/// Sum of `1, 1/y, ..., 1/y^n` (for fractional `n`).
///
/// With `y == 1` the series degenerates to `n + 1` equal terms, which is also
/// the limit of the closed form, so that value is returned instead of
/// dividing by zero.
pub fn geometric_series_scale(decel_rate: f64, frames: f64) -> f64 {
    if (decel_rate - 1.0).abs() <= f64::EPSILON {
        return frames + 1.0;
    }
    (1.0 - 1.0 / decel_rate.powf(frames + 1.0)) / (1.0 - 1.0 / decel_rate)
}

/// Solves release velocities into step-aligned trajectories.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySolver {
    decel_rate: f64,
}

impl Default for TrajectorySolver {
    fn default() -> Self {
        Self::new(DEFAULT_DECEL_RATE)
    }
}

impl TrajectorySolver {
    /// `decel_rate` is expected to be validated (> 1) by the caller's
    /// configuration layer; degenerate rates are still handled without
    /// dividing by zero.
    pub fn new(decel_rate: f64) -> Self {
        Self { decel_rate }
    }

    pub fn decel_rate(&self) -> f64 {
        self.decel_rate
    }

    /// Picks the fling or settle branch from the release speed.
    pub fn solve<S>(&self, velocity: PerAxis<f64>, surface: Option<&S>) -> Trajectory
    where
        S: ScrollableSurface + ?Sized,
    {
        if velocity.max_abs() > FLING_VELOCITY_THRESHOLD {
            self.solve_fling(velocity, surface)
        } else {
            self.solve_settle(surface)
        }
    }

    /// Frame count needed for `speed` to decay below one pixel per frame,
    /// plus the fixed tail.
    pub fn fling_frames(&self, speed: f64) -> f64 {
        let log_rate = self.decel_rate.ln();
        if !(log_rate > 0.0) || !(speed > 0.0) {
            return FLING_TAIL_FRAMES;
        }
        speed.ln() / log_rate + FLING_TAIL_FRAMES
    }

    pub fn solve_fling<S>(&self, velocity: PerAxis<f64>, surface: Option<&S>) -> Trajectory
    where
        S: ScrollableSurface + ?Sized,
    {
        let frames = self.fling_frames(velocity.max_abs());
        let scale = geometric_series_scale(self.decel_rate, frames);

        let velocity = velocity.map(|axis, v| {
            let Some(values) = surface.and_then(|s| s.axis_range(axis)).map(|r| r.values()) else {
                return 0.0;
            };
            let target = snap_to_step(values.value + scale * v, values.lower, values.step_increment);
            (target - values.value) / scale
        });

        let duration_ms = ((frames / FRAMES_PER_SECOND) * 1000.0).max(0.0) as u64;
        log::debug!(
            "fling over {:.2} frames ({} ms), velocity ({:.3}, {:.3})",
            frames,
            duration_ms,
            velocity.horizontal,
            velocity.vertical
        );

        Trajectory {
            kind: TrajectoryKind::Fling,
            velocity,
            frames,
            scale,
            duration_ms,
        }
    }

    pub fn solve_settle<S>(&self, surface: Option<&S>) -> Trajectory
    where
        S: ScrollableSurface + ?Sized,
    {
        let scale = geometric_series_scale(self.decel_rate, SETTLE_FRAMES);
        let velocity = PerAxis::from_fn(|axis| {
            surface
                .and_then(|s| s.axis_range(axis))
                .map(|range| {
                    let values = range.values();
                    (values.snapped_value() - values.value) / scale
                })
                .unwrap_or(0.0)
        });

        log::debug!(
            "settle velocity ({:.3}, {:.3})",
            velocity.horizontal,
            velocity.vertical
        );

        Trajectory {
            kind: TrajectoryKind::Settle,
            velocity,
            frames: SETTLE_FRAMES,
            scale,
            duration_ms: SETTLE_DURATION_MS,
        }
    }

    /// Where an axis would come to rest if the trajectory played out its
    /// full series from the surface's current value.
    pub fn projected_rest<S>(&self, trajectory: &Trajectory, surface: &S, axis: Axis) -> Option<f64>
    where
        S: ScrollableSurface + ?Sized,
    {
        surface
            .axis_range(axis)
            .map(|range| range.value() + trajectory.projected_displacement()[axis])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockRange, MockSurface};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn grid_surface(h: f64, v: f64) -> MockSurface {
        MockSurface::new(
            Some(MockRange::new(h, 0.0, 10_000.0, 10.0, 500.0)),
            Some(MockRange::new(v, 0.0, 10_000.0, 10.0, 500.0)),
        )
    }

    #[test]
    fn series_scale_matches_explicit_sum() {
        let rate: f64 = 1.1;
        let explicit: f64 = (0..=20).map(|k| 1.0 / rate.powi(k)).sum();
        assert!(approx(geometric_series_scale(rate, 20.0), explicit));
    }

    #[test]
    fn series_scale_with_unit_rate_does_not_divide_by_zero() {
        assert_eq!(geometric_series_scale(1.0, 4.0), 5.0);
    }

    #[test]
    fn fling_frames_include_tail() {
        let solver = TrajectorySolver::new(1.1);
        let expected = 20.0f64.ln() / 1.1f64.ln() + FLING_TAIL_FRAMES;
        assert!(approx(solver.fling_frames(20.0), expected));
        assert_eq!(TrajectorySolver::new(1.0).fling_frames(20.0), FLING_TAIL_FRAMES);
    }

    #[test]
    fn fling_lands_on_step_boundary() {
        let solver = TrajectorySolver::new(1.1);
        let surface = grid_surface(3.0, 0.0);
        let trajectory = solver.solve(PerAxis::new(23.7, 0.0), Some(&surface));

        assert_eq!(trajectory.kind, TrajectoryKind::Fling);
        let rest = solver
            .projected_rest(&trajectory, &surface, Axis::Horizontal)
            .expect("horizontal axis present");
        assert!(approx(rest / 10.0, (rest / 10.0).round()), "rest {rest}");
        assert!(rest > 3.0);
        assert!(approx(trajectory.velocity.vertical, 0.0));
        let expected_ms = ((trajectory.frames / 60.0) * 1000.0) as u64;
        assert_eq!(trajectory.duration_ms, expected_ms);
    }

    #[test]
    fn step_snap_is_idempotent() {
        let solver = TrajectorySolver::new(1.1);
        let surface = grid_surface(0.0, 0.0);
        for dx in [2.5, 7.0, 20.0, -13.0, 48.0] {
            let first = solver.solve(PerAxis::new(dx, 0.0), Some(&surface));
            let second = solver.solve(first.velocity, Some(&surface));
            let rest_first = solver
                .projected_rest(&first, &surface, Axis::Horizontal)
                .unwrap();
            let rest_second = solver
                .projected_rest(&second, &surface, Axis::Horizontal)
                .unwrap();
            assert!(approx(rest_first, rest_second), "dx {dx}: {rest_first} vs {rest_second}");
        }
    }

    #[test]
    fn slow_release_settles_current_value() {
        let solver = TrajectorySolver::new(1.1);
        let surface = grid_surface(123.0, 118.0);
        let trajectory = solver.solve(PerAxis::new(0.4, -0.9), Some(&surface));

        assert_eq!(trajectory.kind, TrajectoryKind::Settle);
        assert_eq!(trajectory.duration_ms, SETTLE_DURATION_MS);
        let scale = geometric_series_scale(1.1, SETTLE_FRAMES);
        assert!(approx(trajectory.velocity.horizontal, -3.0 / scale));
        assert!(approx(trajectory.velocity.vertical, 2.0 / scale));
    }

    #[test]
    fn missing_axes_contribute_nothing() {
        let solver = TrajectorySolver::new(1.1);
        let surface = MockSurface::new(None, Some(MockRange::new(0.0, 0.0, 1000.0, 10.0, 100.0)));
        let trajectory = solver.solve(PerAxis::new(30.0, 30.0), Some(&surface));
        assert_eq!(trajectory.velocity.horizontal, 0.0);
        assert!(trajectory.velocity.vertical > 0.0);

        let detached = solver.solve::<MockSurface>(PerAxis::new(30.0, 30.0), None);
        assert_eq!(detached.velocity, PerAxis::splat(0.0));
    }

    #[test]
    fn threshold_is_exclusive() {
        let solver = TrajectorySolver::default();
        let surface = grid_surface(0.0, 0.0);
        assert_eq!(
            solver.solve(PerAxis::new(1.0, -1.0), Some(&surface)).kind,
            TrajectoryKind::Settle
        );
        assert_eq!(
            solver.solve(PerAxis::new(1.01, 0.0), Some(&surface)).kind,
            TrajectoryKind::Fling
        );
    }
}
