//! Click-versus-drag classification.

use crate::gesture_constants::DRAG_THRESHOLD;
use crate::motion_buffer::MotionSampleBuffer;
use kinetic_core::Point;

/// Decides whether a press has turned into a drag.
///
/// The candidate position is compared against the press origin (the
/// buffer's first sample), not against the previous motion sample, so slow
/// creeping movement still crosses the threshold eventually.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragClassifier {
    threshold: f32,
}

impl Default for DragClassifier {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD)
    }
}

impl DragClassifier {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// True once `candidate` is at least `threshold` away from the origin
    /// along either axis. An empty buffer never drags.
    pub fn is_drag(&self, buffer: &MotionSampleBuffer, candidate: Point) -> bool {
        let Some(origin) = buffer.first() else {
            return false;
        };
        (origin.position.x - candidate.x).abs() >= self.threshold
            || (origin.position.y - candidate.y).abs() >= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion_buffer::MotionSample;
    use kinetic_core::Timestamp;

    fn pressed_at(x: f32, y: f32) -> MotionSampleBuffer {
        let mut buffer = MotionSampleBuffer::default();
        buffer.reset(MotionSample::at(x, y, Timestamp::ZERO));
        buffer
    }

    #[test]
    fn jitter_inside_threshold_is_not_a_drag() {
        let classifier = DragClassifier::default();
        let buffer = pressed_at(100.0, 100.0);
        for dx in -3..=3 {
            for dy in -3..=3 {
                let candidate = Point::new(100.0 + dx as f32, 100.0 + dy as f32);
                assert!(!classifier.is_drag(&buffer, candidate), "{dx},{dy}");
            }
        }
    }

    #[test]
    fn four_pixels_on_either_axis_is_a_drag() {
        let classifier = DragClassifier::default();
        let buffer = pressed_at(100.0, 100.0);
        assert!(classifier.is_drag(&buffer, Point::new(104.0, 100.0)));
        assert!(classifier.is_drag(&buffer, Point::new(96.0, 100.0)));
        assert!(classifier.is_drag(&buffer, Point::new(100.0, 104.0)));
        assert!(classifier.is_drag(&buffer, Point::new(101.0, 96.0)));
    }

    #[test]
    fn empty_buffer_never_drags() {
        let classifier = DragClassifier::default();
        let buffer = MotionSampleBuffer::default();
        assert!(!classifier.is_drag(&buffer, Point::new(500.0, 500.0)));
    }
}
