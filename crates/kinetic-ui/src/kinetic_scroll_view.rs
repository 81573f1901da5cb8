//! Pointer-driven panning with optional kinetic deceleration.
//!
//! A [`KineticScrollView`] owns at most one scrollable surface and moves
//! through a small set of phases:
//!
//! ```text
//! Idle --down--> Pressed --move past threshold--> Dragging --up--> Decelerating
//!                   |                                 |               |
//!                   +-------------up------------------+----tick------>+--> settle, emit
//! ```
//!
//! Only one phase writes to the surface at a time: the pan accumulator while
//! dragging, the deceleration controller while decelerating, and the bounds
//! settler on the transition back to idle.

use crate::config::{ConfigError, KineticParameters};
use crate::event::{EventOutcome, KineticEvent};
use crate::settle::BoundsSettler;
use kinetic_animation::{DecelerationController, TrajectorySolver};
use kinetic_core::{PerAxis, Point, ScrollableSurface, Timestamp};
use kinetic_foundation::{
    DragClassifier, MotionSample, MotionSampleBuffer, PanAccumulator, PointerButton,
    VelocityEstimator,
};
use std::fmt;
use std::mem;

/// Returned by [`KineticScrollView::attach_surface`] when a surface is
/// already attached. Hands the rejected surface back.
pub struct AlreadyAttached<S>(pub S);

impl<S> AlreadyAttached<S> {
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S> fmt::Debug for AlreadyAttached<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AlreadyAttached(..)")
    }
}

impl<S> fmt::Display for AlreadyAttached<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("kinetic scroll view already has a surface attached")
    }
}

impl<S> std::error::Error for AlreadyAttached<S> {}

/// Handle for removing a "panning completed" listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// One press-to-release cycle.
#[derive(Debug)]
struct DragSession {
    buffer: MotionSampleBuffer,
    /// Motion samples panned so far.
    motions: usize,
}

impl DragSession {
    fn begin(origin: MotionSample, capacity: usize) -> Self {
        let mut buffer = MotionSampleBuffer::new(capacity);
        buffer.reset(origin);
        Self { buffer, motions: 0 }
    }
}

#[derive(Debug, Default)]
enum Phase {
    #[default]
    Idle,
    /// Pointer is down but has not moved past the drag threshold.
    Pressed(DragSession),
    Dragging(DragSession),
    Decelerating(DecelerationController),
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Pressed(_) => "pressed",
            Phase::Dragging(_) => "dragging",
            Phase::Decelerating(_) => "decelerating",
        }
    }
}

pub struct KineticScrollView<S> {
    surface: Option<S>,
    parameters: KineticParameters,
    phase: Phase,
    classifier: DragClassifier,
    pan: PanAccumulator,
    estimator: VelocityEstimator,
    settler: BoundsSettler,
    listeners: Vec<(ListenerId, Box<dyn FnMut()>)>,
    next_listener_id: u64,
    completed_sessions: u64,
}

impl<S> fmt::Debug for KineticScrollView<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KineticScrollView")
            .field("has_surface", &self.surface.is_some())
            .field("parameters", &self.parameters)
            .field("phase", &self.phase.name())
            .field("listeners", &self.listeners.len())
            .field("completed_sessions", &self.completed_sessions)
            .finish()
    }
}

impl<S> Default for KineticScrollView<S>
where
    S: ScrollableSurface,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> KineticScrollView<S>
where
    S: ScrollableSurface,
{
    pub fn new() -> Self {
        Self::with_parameters(KineticParameters::default())
    }

    pub fn with_parameters(parameters: KineticParameters) -> Self {
        Self {
            surface: None,
            parameters,
            phase: Phase::Idle,
            classifier: DragClassifier::default(),
            pan: PanAccumulator::new(),
            estimator: VelocityEstimator::new(),
            settler: BoundsSettler::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
            completed_sessions: 0,
        }
    }

    /// Convenience constructor with a surface already attached.
    pub fn with_surface(surface: S, parameters: KineticParameters) -> Self {
        let mut view = Self::with_parameters(parameters);
        view.surface = Some(surface);
        view
    }

    // ========== Surface ==========

    pub fn attach_surface(&mut self, surface: S) -> Result<(), AlreadyAttached<S>> {
        if self.surface.is_some() {
            log::warn!("kinetic scroll view can only contain one surface");
            return Err(AlreadyAttached(surface));
        }
        self.surface = Some(surface);
        Ok(())
    }

    /// Removes the surface, cancelling any running deceleration.
    pub fn detach_surface(&mut self) -> Option<S> {
        self.cancel_deceleration();
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    // ========== Parameters ==========

    pub fn parameters(&self) -> &KineticParameters {
        &self.parameters
    }

    /// Replaces all parameters. A changed buffer capacity applies from the
    /// next press; a changed rate from the next release.
    pub fn set_parameters(&mut self, parameters: KineticParameters) {
        self.parameters = parameters;
    }

    pub fn set_kinetic(&mut self, kinetic: bool) {
        self.parameters.set_kinetic(kinetic);
    }

    pub fn set_decel_rate(&mut self, decel_rate: f64) -> Result<(), ConfigError> {
        self.parameters.set_decel_rate(decel_rate)
    }

    pub fn set_buffer_capacity(&mut self, capacity: usize) -> Result<(), ConfigError> {
        self.parameters.set_buffer_capacity(capacity)
    }

    // ========== Listeners ==========

    /// Registers `listener` to run once per finished session, after the
    /// surface has been settled.
    pub fn add_panning_completed_listener(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether a listener was registered under `id`.
    pub fn remove_panning_completed_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of "panning completed" notifications emitted so far.
    pub fn completed_sessions(&self) -> u64 {
        self.completed_sessions
    }

    // ========== State ==========

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self.phase, Phase::Pressed(_) | Phase::Dragging(_))
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    pub fn is_decelerating(&self) -> bool {
        matches!(&self.phase, Phase::Decelerating(controller) if controller.is_running())
    }

    /// Per-frame velocity of the running deceleration.
    pub fn deceleration_velocity(&self) -> Option<PerAxis<f64>> {
        match &self.phase {
            Phase::Decelerating(controller) => controller.velocity(),
            _ => None,
        }
    }

    /// Stops a running deceleration where it is, without settling and
    /// without notifying listeners. Returns whether anything was stopped.
    pub fn stop(&mut self) -> bool {
        self.cancel_deceleration()
    }

    // ========== Events ==========

    pub fn handle_event(&mut self, event: KineticEvent) -> EventOutcome {
        match event {
            KineticEvent::PointerDown {
                position,
                timestamp,
                button,
            } => self.pointer_down(position, timestamp, button),
            KineticEvent::PointerMove {
                position,
                timestamp,
            } => self.pointer_move(position, timestamp),
            KineticEvent::PointerUp {
                position,
                timestamp,
                button,
            } => self.pointer_up(position, timestamp, button),
            KineticEvent::Tick { elapsed_ms } => self.tick(elapsed_ms),
        }
    }

    pub fn pointer_down(&mut self, position: Point, timestamp: Timestamp, button: PointerButton) -> EventOutcome {
        if !button.is_primary() {
            return EventOutcome::Ignored;
        }
        if !self.cancel_deceleration() && self.is_pressed() {
            log::debug!("press during an open session, restarting it");
        }
        log::debug!("press at ({}, {}) {}", position.x, position.y, timestamp);
        self.phase = Phase::Pressed(DragSession::begin(
            MotionSample::new(position, timestamp),
            self.parameters.buffer_capacity(),
        ));
        EventOutcome::Observed
    }

    pub fn pointer_move(&mut self, position: Point, timestamp: Timestamp) -> EventOutcome {
        let sample = MotionSample::new(position, timestamp);
        match mem::take(&mut self.phase) {
            Phase::Pressed(session) if !self.classifier.is_drag(&session.buffer, position) => {
                self.phase = Phase::Pressed(session);
                EventOutcome::Observed
            }
            Phase::Pressed(mut session) => {
                log::debug!("drag started at ({}, {})", position.x, position.y);
                self.pan_to(&mut session, sample);
                self.phase = Phase::Dragging(session);
                EventOutcome::DragStarted
            }
            Phase::Dragging(mut session) => {
                self.pan_to(&mut session, sample);
                self.phase = Phase::Dragging(session);
                EventOutcome::Consumed
            }
            other => {
                self.phase = other;
                EventOutcome::Ignored
            }
        }
    }

    pub fn pointer_up(&mut self, position: Point, timestamp: Timestamp, button: PointerButton) -> EventOutcome {
        if !button.is_primary() {
            return EventOutcome::Ignored;
        }
        match mem::take(&mut self.phase) {
            Phase::Pressed(_) => {
                log::debug!("released without dragging");
                self.finish_session();
                EventOutcome::Observed
            }
            Phase::Dragging(session) => {
                log::debug!(
                    "drag released at ({}, {}) after {} motions",
                    position.x,
                    position.y,
                    session.motions
                );
                match self.release_trajectory(&session, MotionSample::new(position, timestamp)) {
                    Some(controller) => self.phase = Phase::Decelerating(controller),
                    None => self.finish_session(),
                }
                EventOutcome::Consumed
            }
            other => {
                self.phase = other;
                EventOutcome::Ignored
            }
        }
    }

    pub fn tick(&mut self, elapsed_ms: u64) -> EventOutcome {
        let Phase::Decelerating(controller) = &mut self.phase else {
            return EventOutcome::Ignored;
        };
        let state = controller.tick(self.surface.as_mut(), elapsed_ms);
        if state.is_terminal() {
            log::debug!("deceleration finished: {state:?}");
            self.phase = Phase::Idle;
            self.finish_session();
        }
        EventOutcome::Consumed
    }

    fn pan_to(&mut self, session: &mut DragSession, sample: MotionSample) {
        let delta = self.pan.pan(self.surface.as_mut(), &mut session.buffer, sample);
        session.motions += 1;
        log::trace!(
            "pan by ({}, {}) at {}",
            delta.horizontal,
            delta.vertical,
            sample.timestamp
        );
    }

    /// Builds the deceleration for a released drag, or `None` when the
    /// release should settle immediately.
    fn release_trajectory(&self, session: &DragSession, release: MotionSample) -> Option<DecelerationController> {
        if !self.parameters.kinetic() {
            return None;
        }
        let surface = self.surface.as_ref()?;
        let estimate = self.estimator.estimate(&session.buffer, release)?;

        let solver = TrajectorySolver::new(self.parameters.decel_rate());
        let trajectory = solver.solve(estimate.velocity, Some(surface));
        let mut controller = DecelerationController::new(solver.decel_rate());
        controller.start(trajectory);
        Some(controller)
    }

    fn cancel_deceleration(&mut self) -> bool {
        let Phase::Decelerating(controller) = &mut self.phase else {
            return false;
        };
        controller.cancel();
        self.phase = Phase::Idle;
        true
    }

    /// Settles the surface, returns to idle and notifies listeners.
    fn finish_session(&mut self) {
        self.phase = Phase::Idle;
        self.settler.settle(self.surface.as_mut());
        self.completed_sessions += 1;
        log::debug!("panning completed (session {})", self.completed_sessions);
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
    }
}
