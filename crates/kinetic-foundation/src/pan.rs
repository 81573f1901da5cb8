//! Direct 1:1 panning while a drag is in progress.

use crate::motion_buffer::{MotionSample, MotionSampleBuffer};
use kinetic_core::{Axis, PerAxis, ScrollableSurface};

/// Applies pointer deltas to the surface's axis ranges.
///
/// Screen-space panning is the inverse of finger movement: dragging the
/// pointer left by 10 px increases the horizontal value by 10.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanAccumulator;

impl PanAccumulator {
    pub fn new() -> Self {
        Self
    }

    /// Pans by the delta between the last recorded sample and `sample`, then
    /// records `sample`.
    ///
    /// Absent axes (or an absent surface) are skipped; the sample is recorded
    /// regardless so velocity estimation still sees the motion. Returns the
    /// delta that was offered to each axis.
    pub fn pan<S>(
        &self,
        surface: Option<&mut S>,
        buffer: &mut MotionSampleBuffer,
        sample: MotionSample,
    ) -> PerAxis<f64>
    where
        S: ScrollableSurface + ?Sized,
    {
        let delta = match buffer.last() {
            Some(last) => PerAxis::new(
                f64::from(last.position.x) - f64::from(sample.position.x),
                f64::from(last.position.y) - f64::from(sample.position.y),
            ),
            None => PerAxis::default(),
        };

        if let Some(surface) = surface {
            for axis in Axis::ALL {
                if let Some(range) = surface.axis_range_mut(axis) {
                    let value = range.value();
                    range.set_value(value + delta[axis]);
                }
            }
        }

        buffer.record(sample);
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_core::{AxisRange, RangeValues, Timestamp};

    struct Range(f64);

    impl AxisRange for Range {
        fn values(&self) -> RangeValues {
            RangeValues {
                value: self.0,
                lower: 0.0,
                upper: 1000.0,
                step_increment: 1.0,
                page_size: 100.0,
            }
        }

        fn set_value(&mut self, value: f64) {
            self.0 = value;
        }

        fn is_elastic(&self) -> bool {
            false
        }

        fn clamp(&mut self, _animate: bool, _frames: u32, _fps: u32) -> bool {
            false
        }
    }

    struct Surface {
        horizontal: Option<Range>,
        vertical: Option<Range>,
    }

    impl ScrollableSurface for Surface {
        fn axis_range(&self, axis: Axis) -> Option<&dyn AxisRange> {
            match axis {
                Axis::Horizontal => self.horizontal.as_ref().map(|r| r as &dyn AxisRange),
                Axis::Vertical => self.vertical.as_ref().map(|r| r as &dyn AxisRange),
            }
        }

        fn axis_range_mut(&mut self, axis: Axis) -> Option<&mut dyn AxisRange> {
            match axis {
                Axis::Horizontal => self.horizontal.as_mut().map(|r| r as &mut dyn AxisRange),
                Axis::Vertical => self.vertical.as_mut().map(|r| r as &mut dyn AxisRange),
            }
        }
    }

    #[test]
    fn deltas_accumulate_inverse_to_pointer() {
        let mut surface = Surface {
            horizontal: Some(Range(100.0)),
            vertical: None,
        };
        let mut buffer = MotionSampleBuffer::new(3);
        buffer.reset(MotionSample::at(200.0, 50.0, Timestamp::ZERO));

        let pan = PanAccumulator::new();
        // Pointer moves left by 10, 10 and 5 px: -25 in screen terms.
        for (i, x) in [190.0, 180.0, 175.0].into_iter().enumerate() {
            let sample = MotionSample::at(x, 50.0, Timestamp::from_millis(16 * (i as u64 + 1)));
            pan.pan(Some(&mut surface), &mut buffer, sample);
        }

        assert_eq!(surface.horizontal.as_ref().map(|r| r.0), Some(125.0));
        assert!(surface.vertical.is_none());
        assert_eq!(buffer.last().map(|s| s.position.x), Some(175.0));
    }

    #[test]
    fn missing_surface_still_records() {
        let mut buffer = MotionSampleBuffer::new(3);
        buffer.reset(MotionSample::at(0.0, 0.0, Timestamp::ZERO));
        let delta = PanAccumulator::new().pan::<Surface>(
            None,
            &mut buffer,
            MotionSample::at(-8.0, 3.0, Timestamp::from_millis(10)),
        );
        assert_eq!(delta, PerAxis::new(8.0, -3.0));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn vertical_only_surface() {
        let mut surface = Surface {
            horizontal: None,
            vertical: Some(Range(40.0)),
        };
        let mut buffer = MotionSampleBuffer::new(3);
        buffer.reset(MotionSample::at(0.0, 0.0, Timestamp::ZERO));
        PanAccumulator::new().pan(
            Some(&mut surface),
            &mut buffer,
            MotionSample::at(30.0, 12.0, Timestamp::from_millis(10)),
        );
        assert_eq!(surface.vertical.as_ref().map(|r| r.0), Some(28.0));
    }
}
