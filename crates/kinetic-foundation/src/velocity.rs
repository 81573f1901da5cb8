//! Release-velocity estimation.
//!
//! Velocity is derived from the displacement between the *average* of the
//! buffered samples (release sample included) and the release point, divided
//! by the time between the average timestamp and the release. Averaging over
//! the whole buffer rather than the last two samples smooths the jitter of
//! the final instants before the pointer lifts.
//!
//! The result is expressed in frame units: pixels per 1/60 s.

use crate::gesture_constants::FRAME_UNIT_RATE;
use crate::motion_buffer::{MotionSample, MotionSampleBuffer};
use kinetic_core::{PerAxis, Point, Timestamp};

/// Outcome of a release-velocity estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseEstimate {
    /// Average position of the buffered samples and the release sample.
    pub origin: PerAxis<f64>,
    /// Microseconds between the average timestamp and the release.
    pub time_diff_micros: u64,
    /// `time_diff` expressed in frame units.
    pub frames: f64,
    /// Signed displacement per frame unit.
    pub velocity: PerAxis<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityEstimator {
    frame_rate: f64,
}

impl Default for VelocityEstimator {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_UNIT_RATE,
        }
    }
}

impl VelocityEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimates the release velocity.
    ///
    /// Returns `None` when no time elapsed between the averaged samples and
    /// the release: velocity is undefined and the release must be treated as
    /// a zero-velocity one.
    pub fn estimate(
        &self,
        buffer: &MotionSampleBuffer,
        release: MotionSample,
    ) -> Option<ReleaseEstimate> {
        let count = (buffer.len() + 1) as f64;
        let (sum_x, sum_y) = buffer
            .iter()
            .chain(std::iter::once(&release))
            .fold((0.0f64, 0.0f64), |(x, y), sample| {
                (
                    x + f64::from(sample.position.x),
                    y + f64::from(sample.position.y),
                )
            });
        let origin = PerAxis::new(sum_x / count, sum_y / count);

        let average_time = Timestamp::mean(
            buffer
                .iter()
                .map(|sample| sample.timestamp)
                .chain(std::iter::once(release.timestamp)),
        )?;
        let time_diff_micros = release.timestamp.micros_since(average_time);
        if time_diff_micros == 0 {
            log::debug!("release with zero elapsed time, no velocity");
            return None;
        }

        let frames = frame_fraction(time_diff_micros, self.frame_rate);
        let velocity = velocity_from_displacement(origin, release.position, frames);
        log::debug!(
            "release velocity ({:.3}, {:.3}) px/frame over {:.3} frames",
            velocity.horizontal,
            velocity.vertical,
            frames
        );

        Some(ReleaseEstimate {
            origin,
            time_diff_micros,
            frames,
            velocity,
        })
    }
}

/// Converts a microsecond interval into frame units at `frame_rate`.
pub fn frame_fraction(time_diff_micros: u64, frame_rate: f64) -> f64 {
    (time_diff_micros as f64 / 1000.0) / (1000.0 / frame_rate)
}

/// Displacement per frame from `origin` towards `release`, continuing the
/// drag's direction: a pointer moving left yields a positive velocity, the
/// same sign the pan applied while dragging.
pub fn velocity_from_displacement(origin: PerAxis<f64>, release: Point, frames: f64) -> PerAxis<f64> {
    PerAxis::new(
        (origin.horizontal - f64::from(release.x)) / frames,
        (origin.vertical - f64::from(release.y)) / frames,
    )
}
