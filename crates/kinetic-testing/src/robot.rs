//! Headless gesture robot.
//!
//! Drives a [`KineticScrollView`] over a [`TestSurface`] the way a user and a
//! frame clock would, with time fully under the test's control.
//!
//! # Example
//!
//! ```
//! use kinetic_testing::{Adjustment, GestureRobot, TestSurface};
//! use kinetic_ui::KineticParameters;
//!
//! let surface = TestSurface::new(Some(Adjustment::new(0.0, 1000.0, 10.0, 100.0)), None);
//! let mut robot = GestureRobot::new(surface, KineticParameters::default().with_kinetic(true));
//!
//! robot.press(300.0, 50.0);
//! robot.drag_to(200.0, 50.0, 5, 80);
//! robot.release();
//! robot.run_until_idle(5_000);
//!
//! assert_eq!(robot.completions(), 1);
//! ```

use crate::adjustment::TestSurface;
use crate::clock::ManualClock;
use kinetic_core::{Axis, Clock, Point, Timestamp};
use kinetic_ui::{EventOutcome, KineticEvent, KineticParameters, KineticScrollView};
use std::cell::Cell;
use std::rc::Rc;

/// Default virtual frame length.
pub const DEFAULT_FRAME_MS: u64 = 16;

pub struct GestureRobot {
    view: KineticScrollView<TestSurface>,
    clock: ManualClock,
    pointer: Point,
    frame_ms: u64,
    completions: Rc<Cell<u64>>,
}

impl GestureRobot {
    /// The virtual clock starts at one second.
    pub fn new(surface: TestSurface, parameters: KineticParameters) -> Self {
        let mut view = KineticScrollView::with_surface(surface, parameters);
        let completions = Rc::new(Cell::new(0));
        let counter = Rc::clone(&completions);
        view.add_panning_completed_listener(move || counter.set(counter.get() + 1));
        Self {
            view,
            clock: ManualClock::new(Timestamp::from_millis(1_000)),
            pointer: Point::ZERO,
            frame_ms: DEFAULT_FRAME_MS,
            completions,
        }
    }

    pub fn with_frame_ms(mut self, frame_ms: u64) -> Self {
        self.frame_ms = frame_ms.max(1);
        self
    }

    pub fn view(&self) -> &KineticScrollView<TestSurface> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut KineticScrollView<TestSurface> {
        &mut self.view
    }

    pub fn surface(&self) -> Option<&TestSurface> {
        self.view.surface()
    }

    pub fn value(&self, axis: Axis) -> Option<f64> {
        self.view.surface().and_then(|surface| surface.value(axis))
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Number of "panning completed" notifications seen.
    pub fn completions(&self) -> u64 {
        self.completions.get()
    }

    pub fn send(&mut self, event: KineticEvent) -> EventOutcome {
        self.view.handle_event(event)
    }

    /// Moves the clock forward without delivering ticks.
    pub fn pause(&mut self, ms: u64) {
        self.clock.advance_millis(ms);
    }

    pub fn press(&mut self, x: f32, y: f32) -> EventOutcome {
        self.pointer = Point::new(x, y);
        self.send(KineticEvent::down(x, y, self.clock.now()))
    }

    /// Moves the pointer to `(x, y)` after `after_ms`.
    pub fn move_to(&mut self, x: f32, y: f32, after_ms: u64) -> EventOutcome {
        self.pause(after_ms);
        self.pointer = Point::new(x, y);
        self.send(KineticEvent::motion(x, y, self.clock.now()))
    }

    /// Moves the pointer to `(x, y)` in `steps` evenly spaced motion events
    /// spread over `duration_ms`. Returns the outcome of the last one.
    pub fn drag_to(&mut self, x: f32, y: f32, steps: u32, duration_ms: u64) -> EventOutcome {
        let steps = steps.max(1);
        let from = self.pointer;
        let interval = duration_ms / u64::from(steps);
        let mut outcome = EventOutcome::Ignored;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            outcome = self.move_to(
                from.x + (x - from.x) * t,
                from.y + (y - from.y) * t,
                interval,
            );
        }
        outcome
    }

    /// Releases the primary button where the pointer currently is.
    pub fn release(&mut self) -> EventOutcome {
        let now = self.clock.now();
        self.send(KineticEvent::up(self.pointer.x, self.pointer.y, now))
    }

    /// Press, drag and release in one go.
    pub fn fling(&mut self, from: Point, to: Point, steps: u32, duration_ms: u64) -> EventOutcome {
        self.press(from.x, from.y);
        self.drag_to(to.x, to.y, steps, duration_ms);
        self.release()
    }

    /// Delivers one tick of `elapsed_ms` and advances clamp animations by a
    /// frame.
    pub fn tick(&mut self, elapsed_ms: u64) -> EventOutcome {
        self.pause(elapsed_ms);
        let outcome = self.send(KineticEvent::tick(elapsed_ms));
        if let Some(surface) = self.view.surface_mut() {
            surface.advance_frame();
        }
        outcome
    }

    /// Delivers frame ticks covering `ms`, the last one possibly shorter.
    pub fn advance(&mut self, ms: u64) {
        let mut remaining = ms;
        while remaining > 0 {
            let step = remaining.min(self.frame_ms);
            self.tick(step);
            remaining -= step;
        }
    }

    /// Ticks frame by frame until nothing is moving or `max_ms` has passed.
    /// Returns the number of ticks delivered.
    pub fn run_until_idle(&mut self, max_ms: u64) -> u32 {
        let mut ticks = 0;
        let mut elapsed = 0;
        while self.is_busy() && elapsed < max_ms {
            self.tick(self.frame_ms);
            elapsed += self.frame_ms;
            ticks += 1;
        }
        ticks
    }

    /// Whether a deceleration or a clamp animation is still running.
    pub fn is_busy(&self) -> bool {
        self.view.is_decelerating()
            || self
                .view
                .surface()
                .is_some_and(|surface| surface.is_animating())
    }
}
