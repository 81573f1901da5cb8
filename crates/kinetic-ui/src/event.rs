use kinetic_core::{Point, Timestamp};
use kinetic_foundation::PointerButton;

/// Input consumed by a [`KineticScrollView`](crate::KineticScrollView).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KineticEvent {
    PointerDown {
        position: Point,
        timestamp: Timestamp,
        button: PointerButton,
    },
    PointerMove {
        position: Point,
        timestamp: Timestamp,
    },
    PointerUp {
        position: Point,
        timestamp: Timestamp,
        button: PointerButton,
    },
    /// Clock tick carrying the milliseconds elapsed since the previous tick.
    Tick { elapsed_ms: u64 },
}

impl KineticEvent {
    /// Primary-button press.
    pub fn down(x: f32, y: f32, timestamp: Timestamp) -> Self {
        KineticEvent::PointerDown {
            position: Point::new(x, y),
            timestamp,
            button: PointerButton::Primary,
        }
    }

    pub fn motion(x: f32, y: f32, timestamp: Timestamp) -> Self {
        KineticEvent::PointerMove {
            position: Point::new(x, y),
            timestamp,
        }
    }

    /// Primary-button release.
    pub fn up(x: f32, y: f32, timestamp: Timestamp) -> Self {
        KineticEvent::PointerUp {
            position: Point::new(x, y),
            timestamp,
            button: PointerButton::Primary,
        }
    }

    pub fn tick(elapsed_ms: u64) -> Self {
        KineticEvent::Tick { elapsed_ms }
    }
}

/// What the view did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Not for this view: wrong button, or no session to feed.
    Ignored,
    /// Tracked, but other handlers may still see it.
    Observed,
    Consumed,
    /// The press just became a drag. The host should route further motion
    /// to this view exclusively until release.
    DragStarted,
}

impl EventOutcome {
    pub fn is_consumed(self) -> bool {
        matches!(self, EventOutcome::Consumed | EventOutcome::DragStarted)
    }
}
