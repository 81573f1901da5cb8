//! Bounded history of recent pointer samples.
//!
//! The first slot holds the press origin until the buffer fills; after that
//! the buffer slides, always keeping the most recent `capacity` samples in
//! arrival order.

use crate::gesture_constants::DEFAULT_BUFFER_CAPACITY;
use kinetic_core::{Point, Timestamp};
use smallvec::SmallVec;

/// Inline storage for the common case; larger capacities spill to the heap.
const INLINE_SAMPLES: usize = 4;

/// A recorded pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    pub position: Point,
    pub timestamp: Timestamp,
}

impl MotionSample {
    pub const fn new(position: Point, timestamp: Timestamp) -> Self {
        Self {
            position,
            timestamp,
        }
    }

    pub const fn at(x: f32, y: f32, timestamp: Timestamp) -> Self {
        Self::new(Point::new(x, y), timestamp)
    }
}

/// FIFO-evicting sample buffer with a fixed logical capacity.
#[derive(Clone, Debug)]
pub struct MotionSampleBuffer {
    samples: SmallVec<[MotionSample; INLINE_SAMPLES]>,
    capacity: usize,
    /// Slot of the most recently written sample.
    last_index: usize,
}

impl Default for MotionSampleBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_CAPACITY)
    }
}

impl MotionSampleBuffer {
    /// Creates an empty buffer. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: SmallVec::with_capacity(capacity),
            capacity,
            last_index: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the logical capacity, discarding the oldest samples if the
    /// buffer currently holds more than `capacity`.
    pub fn set_capacity(&mut self, capacity: usize) {
        let capacity = capacity.max(1);
        if self.samples.len() > capacity {
            let excess = self.samples.len() - capacity;
            self.samples.drain(..excess);
        }
        self.capacity = capacity;
        self.last_index = self.samples.len().saturating_sub(1);
    }

    /// Clears the buffer down to a single slot holding the press origin.
    pub fn reset(&mut self, origin: MotionSample) {
        self.samples.clear();
        self.samples.push(origin);
        self.last_index = 0;
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.last_index = 0;
    }

    /// Appends a sample, evicting the oldest one once the buffer is full.
    pub fn record(&mut self, sample: MotionSample) {
        if self.samples.len() >= self.capacity {
            self.samples.remove(0);
        }
        self.samples.push(sample);
        self.last_index = self.samples.len() - 1;
    }

    /// Oldest retained sample; the press origin until the buffer slides.
    pub fn first(&self) -> Option<&MotionSample> {
        self.samples.first()
    }

    /// Most recently recorded sample.
    pub fn last(&self) -> Option<&MotionSample> {
        self.samples.get(self.last_index)
    }

    pub fn last_index(&self) -> usize {
        self.last_index
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MotionSample> + '_ {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[MotionSample] {
        &self.samples
    }
}
