//! Frame-stepped deceleration driven by clock ticks.

use crate::trajectory::Trajectory;
use kinetic_core::{Axis, PerAxis, ScrollableSurface};

/// Length of one deceleration step.
///
/// Ticks are quantized to whole steps so the decay is the same discrete
/// recurrence whatever the host's frame timing. Time short of a whole step
/// carries over to the next tick.
pub const DECELERATION_STEP_MS: u64 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecelerationState {
    Idle,
    Running,
    /// Both axes ran into their bounds (or had nothing left to travel).
    StoppedByBoundary,
    /// The trajectory's duration elapsed.
    Completed,
}

impl DecelerationState {
    /// Whether this state ends a deceleration and calls for settlement.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            DecelerationState::StoppedByBoundary | DecelerationState::Completed
        )
    }
}

/// Plays a [`Trajectory`] back against a surface.
///
/// The controller is the only writer of the trajectory's velocity while
/// running; the trajectory is dropped as soon as the controller stops or is
/// cancelled.
#[derive(Debug)]
pub struct DecelerationController {
    state: DecelerationState,
    trajectory: Option<Trajectory>,
    decel_rate: f64,
    elapsed_ms: u64,
    /// Clock time not yet spent on a whole step.
    carry_ms: u64,
    steps: u64,
}

impl DecelerationController {
    pub fn new(decel_rate: f64) -> Self {
        Self {
            state: DecelerationState::Idle,
            trajectory: None,
            decel_rate,
            elapsed_ms: 0,
            carry_ms: 0,
            steps: 0,
        }
    }

    pub fn state(&self) -> DecelerationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DecelerationState::Running
    }

    /// Current per-frame velocity, while running.
    pub fn velocity(&self) -> Option<PerAxis<f64>> {
        self.trajectory.map(|trajectory| trajectory.velocity)
    }

    pub fn duration_ms(&self) -> Option<u64> {
        self.trajectory.map(|trajectory| trajectory.duration_ms)
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Number of decay steps applied since the last start.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Clock time waiting to complete the next step.
    pub fn carry_ms(&self) -> u64 {
        self.carry_ms
    }

    /// Starts (or restarts) playback of `trajectory`.
    pub fn start(&mut self, trajectory: Trajectory) {
        log::debug!(
            "deceleration started: {:?}, {} ms",
            trajectory.kind,
            trajectory.duration_ms
        );
        self.trajectory = Some(trajectory);
        self.elapsed_ms = 0;
        self.carry_ms = 0;
        self.steps = 0;
        self.state = DecelerationState::Running;
    }

    /// Stops playback and discards the trajectory without reporting a
    /// terminal state.
    pub fn cancel(&mut self) {
        if self.state == DecelerationState::Running {
            log::debug!("deceleration cancelled after {} ms", self.elapsed_ms);
        }
        self.trajectory = None;
        self.carry_ms = 0;
        self.state = DecelerationState::Idle;
    }

    /// Advances by `delta_ms` milliseconds of clock time.
    ///
    /// Applies one decay step to every present axis per whole 15 ms of clock
    /// time, counting the remainder left by earlier ticks, then checks
    /// whether either axis is still travelling towards its bound. Returns the
    /// resulting state; a terminal state is reported exactly once, on the
    /// tick that reaches it.
    pub fn tick<S>(&mut self, mut surface: Option<&mut S>, delta_ms: u64) -> DecelerationState
    where
        S: ScrollableSurface + ?Sized,
    {
        if self.state != DecelerationState::Running {
            return self.state;
        }
        let Some(mut trajectory) = self.trajectory else {
            self.state = DecelerationState::Idle;
            return self.state;
        };

        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        let pending_ms = self.carry_ms.saturating_add(delta_ms);
        let steps = pending_ms / DECELERATION_STEP_MS;
        self.carry_ms = pending_ms % DECELERATION_STEP_MS;
        for _ in 0..steps {
            if let Some(surface) = surface.as_deref_mut() {
                for axis in Axis::ALL {
                    if let Some(range) = surface.axis_range_mut(axis) {
                        let value = range.value();
                        range.set_value(value + trajectory.velocity[axis]);
                    }
                }
            }
            trajectory.velocity = trajectory.velocity.map(|_, v| v / self.decel_rate);
        }
        self.steps += steps;

        let advancing = surface.as_deref().is_some_and(|surface| {
            Axis::ALL
                .into_iter()
                .any(|axis| is_advancing(surface, axis, trajectory.velocity[axis]))
        });

        log::trace!(
            "deceleration tick: +{} ms, {} steps, velocity ({:.4}, {:.4})",
            delta_ms,
            steps,
            trajectory.velocity.horizontal,
            trajectory.velocity.vertical
        );

        if !advancing {
            log::debug!("deceleration stopped at bounds after {} ms", self.elapsed_ms);
            self.trajectory = None;
            self.state = DecelerationState::StoppedByBoundary;
        } else if self.elapsed_ms >= trajectory.duration_ms {
            log::debug!("deceleration completed after {} ms", self.elapsed_ms);
            self.trajectory = None;
            self.state = DecelerationState::Completed;
        } else {
            self.trajectory = Some(trajectory);
        }
        self.state
    }
}

/// An axis is still advancing while it moves towards a bound it has not
/// reached yet. Absent axes never advance.
fn is_advancing<S>(surface: &S, axis: Axis, velocity: f64) -> bool
where
    S: ScrollableSurface + ?Sized,
{
    let Some(range) = surface.axis_range(axis) else {
        return false;
    };
    let values = range.values();
    (velocity > 0.0 && values.value < values.max_value())
        || (velocity < 0.0 && values.value > values.lower)
}

#[cfg(test)]
#[path = "tests/deceleration_tests.rs"]
mod tests;
