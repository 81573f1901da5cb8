use kinetic_core::{Axis, AxisRange, RangeValues, ScrollableSurface};

/// Minimal range for unit tests: clamps on write and counts writes.
#[derive(Clone, Debug)]
pub(crate) struct MockRange {
    pub values: RangeValues,
    pub writes: usize,
}

impl MockRange {
    pub fn new(value: f64, lower: f64, upper: f64, step: f64, page: f64) -> Self {
        Self {
            values: RangeValues {
                value,
                lower,
                upper,
                step_increment: step,
                page_size: page,
            },
            writes: 0,
        }
    }
}

impl AxisRange for MockRange {
    fn values(&self) -> RangeValues {
        self.values
    }

    fn set_value(&mut self, value: f64) {
        self.writes += 1;
        self.values.value = value.clamp(self.values.lower, self.values.max_value());
    }

    fn is_elastic(&self) -> bool {
        false
    }

    fn clamp(&mut self, _animate: bool, _frames: u32, _fps: u32) -> bool {
        false
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct MockSurface {
    pub horizontal: Option<MockRange>,
    pub vertical: Option<MockRange>,
}

impl MockSurface {
    pub fn new(horizontal: Option<MockRange>, vertical: Option<MockRange>) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn value(&self, axis: Axis) -> Option<f64> {
        self.axis_range(axis).map(|range| range.value())
    }

    pub fn writes(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.horizontal.as_ref(),
            Axis::Vertical => self.vertical.as_ref(),
        }
        .map_or(0, |range| range.writes)
    }
}

impl ScrollableSurface for MockSurface {
    fn axis_range(&self, axis: Axis) -> Option<&dyn AxisRange> {
        let range = match axis {
            Axis::Horizontal => self.horizontal.as_ref(),
            Axis::Vertical => self.vertical.as_ref(),
        };
        range.map(|range| range as &dyn AxisRange)
    }

    fn axis_range_mut(&mut self, axis: Axis) -> Option<&mut dyn AxisRange> {
        let range = match axis {
            Axis::Horizontal => self.horizontal.as_mut(),
            Axis::Vertical => self.vertical.as_mut(),
        };
        range.map(|range| range as &mut dyn AxisRange)
    }
}
