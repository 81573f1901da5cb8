use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kinetic_animation::{DecelerationController, DecelerationState, TrajectorySolver};
use kinetic_core::{Axis, AxisRange, PerAxis, RangeValues, ScrollableSurface};

const RELEASE_SPEEDS: &[f64] = &[2.0, 24.0, 180.0];
const FRAME_MS: u64 = 16;

#[derive(Clone, Copy)]
struct BenchRange(RangeValues);

impl AxisRange for BenchRange {
    fn values(&self) -> RangeValues {
        self.0
    }

    fn set_value(&mut self, value: f64) {
        self.0.value = value.clamp(self.0.lower, self.0.max_value());
    }

    fn is_elastic(&self) -> bool {
        false
    }

    fn clamp(&mut self, _animate: bool, _frames: u32, _fps: u32) -> bool {
        false
    }
}

#[derive(Clone, Copy)]
struct BenchSurface {
    horizontal: BenchRange,
    vertical: BenchRange,
}

impl BenchSurface {
    fn new() -> Self {
        let range = BenchRange(RangeValues {
            value: 5_000.0,
            lower: 0.0,
            upper: 20_000.0,
            step_increment: 48.0,
            page_size: 1_080.0,
        });
        Self {
            horizontal: range,
            vertical: range,
        }
    }
}

impl ScrollableSurface for BenchSurface {
    fn axis_range(&self, axis: Axis) -> Option<&dyn AxisRange> {
        match axis {
            Axis::Horizontal => Some(&self.horizontal),
            Axis::Vertical => Some(&self.vertical),
        }
    }

    fn axis_range_mut(&mut self, axis: Axis) -> Option<&mut dyn AxisRange> {
        match axis {
            Axis::Horizontal => Some(&mut self.horizontal),
            Axis::Vertical => Some(&mut self.vertical),
        }
    }
}

fn bench_solve(c: &mut Criterion) {
    let solver = TrajectorySolver::default();
    let surface = BenchSurface::new();
    let mut group = c.benchmark_group("trajectory_solve");
    for &speed in RELEASE_SPEEDS {
        group.bench_with_input(BenchmarkId::from_parameter(speed), &speed, |b, &speed| {
            b.iter(|| solver.solve(black_box(PerAxis::new(speed, -speed * 0.5)), Some(&surface)));
        });
    }
    group.finish();
}

fn bench_playback(c: &mut Criterion) {
    let solver = TrajectorySolver::default();
    let mut group = c.benchmark_group("deceleration_playback");
    for &speed in RELEASE_SPEEDS {
        group.bench_with_input(BenchmarkId::from_parameter(speed), &speed, |b, &speed| {
            b.iter(|| {
                let mut surface = BenchSurface::new();
                let trajectory = solver.solve(PerAxis::new(speed, speed), Some(&surface));
                let mut controller = DecelerationController::new(solver.decel_rate());
                controller.start(trajectory);
                while controller.tick(Some(&mut surface), FRAME_MS) == DecelerationState::Running {}
                black_box(surface.horizontal.0.value)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve, bench_playback);
criterion_main!(benches);
