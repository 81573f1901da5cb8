//! In-memory scrollable ranges.

use kinetic_core::{Axis, AxisRange, RangeValues, ScrollableSurface};

#[derive(Clone, Copy, Debug, PartialEq)]
struct ClampAnimation {
    from: f64,
    to: f64,
    frames: u32,
    frame: u32,
}

/// A scrollable range backed by plain fields.
///
/// Non-elastic adjustments clamp every write into `[lower, upper - page]`.
/// Elastic ones accept any value and pull it back only when asked to
/// [`clamp`](AxisRange::clamp); an animated clamp moves linearly towards the
/// bound, one step per [`advance_frame`](Adjustment::advance_frame).
#[derive(Clone, Debug, PartialEq)]
pub struct Adjustment {
    values: RangeValues,
    elastic: bool,
    writes: Vec<f64>,
    clamp_calls: Vec<(bool, u32, u32)>,
    animation: Option<ClampAnimation>,
}

impl Adjustment {
    /// A range starting at `lower`.
    pub fn new(lower: f64, upper: f64, step_increment: f64, page_size: f64) -> Self {
        Self {
            values: RangeValues {
                value: lower,
                lower,
                upper,
                step_increment,
                page_size,
            },
            elastic: false,
            writes: Vec::new(),
            clamp_calls: Vec::new(),
            animation: None,
        }
    }

    /// Sets the initial value as-is, without clamping or recording a write.
    pub fn with_value(mut self, value: f64) -> Self {
        self.values.value = value;
        self
    }

    pub fn elastic(mut self) -> Self {
        self.elastic = true;
        self
    }

    pub fn value(&self) -> f64 {
        self.values.value
    }

    /// Every value passed to `set_value`, in order.
    pub fn writes(&self) -> &[f64] {
        &self.writes
    }

    /// Arguments of every `clamp` call, in order.
    pub fn clamp_calls(&self) -> &[(bool, u32, u32)] {
        &self.clamp_calls
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Moves a running clamp animation forward by one frame. Returns whether
    /// it is still running afterwards.
    pub fn advance_frame(&mut self) -> bool {
        let Some(mut animation) = self.animation.take() else {
            return false;
        };
        animation.frame += 1;
        if animation.frame >= animation.frames {
            self.values.value = animation.to;
            return false;
        }
        let t = f64::from(animation.frame) / f64::from(animation.frames);
        self.values.value = animation.from + (animation.to - animation.from) * t;
        self.animation = Some(animation);
        true
    }

    /// Runs a clamp animation to its end.
    pub fn finish_animation(&mut self) {
        while self.advance_frame() {}
    }

    fn in_range(&self, value: f64) -> f64 {
        let max = self.values.max_value().max(self.values.lower);
        value.max(self.values.lower).min(max)
    }
}

impl AxisRange for Adjustment {
    fn values(&self) -> RangeValues {
        self.values
    }

    fn set_value(&mut self, value: f64) {
        self.writes.push(value);
        self.animation = None;
        self.values.value = if self.elastic {
            value
        } else {
            self.in_range(value)
        };
    }

    fn is_elastic(&self) -> bool {
        self.elastic
    }

    fn clamp(&mut self, animate: bool, frames: u32, fps: u32) -> bool {
        self.clamp_calls.push((animate, frames, fps));
        let value = self.values.value;
        let target = self.in_range(value);
        if target == value {
            return false;
        }
        if animate && frames > 0 {
            log::trace!("clamp animation {value} -> {target} over {frames} frames");
            self.animation = Some(ClampAnimation {
                from: value,
                to: target,
                frames,
                frame: 0,
            });
        } else {
            self.values.value = target;
        }
        true
    }
}

/// A surface with up to two [`Adjustment`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestSurface {
    horizontal: Option<Adjustment>,
    vertical: Option<Adjustment>,
}

impl TestSurface {
    pub fn new(horizontal: Option<Adjustment>, vertical: Option<Adjustment>) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn horizontal(&self) -> Option<&Adjustment> {
        self.horizontal.as_ref()
    }

    pub fn vertical(&self) -> Option<&Adjustment> {
        self.vertical.as_ref()
    }

    pub fn adjustment(&self, axis: Axis) -> Option<&Adjustment> {
        match axis {
            Axis::Horizontal => self.horizontal.as_ref(),
            Axis::Vertical => self.vertical.as_ref(),
        }
    }

    pub fn adjustment_mut(&mut self, axis: Axis) -> Option<&mut Adjustment> {
        match axis {
            Axis::Horizontal => self.horizontal.as_mut(),
            Axis::Vertical => self.vertical.as_mut(),
        }
    }

    pub fn value(&self, axis: Axis) -> Option<f64> {
        self.adjustment(axis).map(Adjustment::value)
    }

    pub fn is_animating(&self) -> bool {
        Axis::ALL
            .into_iter()
            .any(|axis| self.adjustment(axis).is_some_and(Adjustment::is_animating))
    }

    /// Advances every running clamp animation by one frame. Returns whether
    /// any is still running.
    pub fn advance_frame(&mut self) -> bool {
        let mut animating = false;
        for axis in Axis::ALL {
            if let Some(adjustment) = self.adjustment_mut(axis) {
                animating |= adjustment.advance_frame();
            }
        }
        animating
    }
}

impl ScrollableSurface for TestSurface {
    fn axis_range(&self, axis: Axis) -> Option<&dyn AxisRange> {
        self.adjustment(axis).map(|adjustment| adjustment as &dyn AxisRange)
    }

    fn axis_range_mut(&mut self, axis: Axis) -> Option<&mut dyn AxisRange> {
        self.adjustment_mut(axis)
            .map(|adjustment| adjustment as &mut dyn AxisRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rigid_adjustment_clamps_writes() {
        let mut adjustment = Adjustment::new(0.0, 1000.0, 10.0, 200.0);
        adjustment.set_value(950.0);
        assert_eq!(adjustment.value(), 800.0);
        adjustment.set_value(-4.0);
        assert_eq!(adjustment.value(), 0.0);
        assert_eq!(adjustment.writes(), &[950.0, -4.0]);
        assert!(!adjustment.clamp(true, 10, 60));
    }

    #[test]
    fn elastic_clamp_animates_back() {
        let mut adjustment = Adjustment::new(0.0, 1000.0, 10.0, 200.0)
            .elastic()
            .with_value(-40.0);
        assert!(adjustment.clamp(true, 4, 60));
        assert!(adjustment.advance_frame());
        assert_eq!(adjustment.value(), -30.0);
        adjustment.finish_animation();
        assert_eq!(adjustment.value(), 0.0);
        assert!(!adjustment.is_animating());
    }

    #[test]
    fn unanimated_clamp_is_immediate() {
        let mut adjustment = Adjustment::new(0.0, 1000.0, 10.0, 200.0)
            .elastic()
            .with_value(830.0);
        assert!(adjustment.clamp(false, 10, 60));
        assert_eq!(adjustment.value(), 800.0);
    }

    #[test]
    fn write_interrupts_clamp_animation() {
        let mut adjustment = Adjustment::new(0.0, 1000.0, 10.0, 200.0)
            .elastic()
            .with_value(-40.0);
        adjustment.clamp(true, 4, 60);
        adjustment.set_value(15.0);
        assert!(!adjustment.is_animating());
        assert_eq!(adjustment.value(), 15.0);
    }
}
