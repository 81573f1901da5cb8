//! Kinetic scroll view.
//!
//! Ties the gesture foundation and the deceleration physics together into a
//! single event-driven state machine. Hosts feed it [`KineticEvent`]s and
//! expose their scrollable ranges through
//! [`ScrollableSurface`](kinetic_core::ScrollableSurface).

mod config;
mod event;
mod kinetic_scroll_view;
mod settle;

pub use config::{ConfigError, KineticParameters};
pub use event::{EventOutcome, KineticEvent};
pub use kinetic_scroll_view::{AlreadyAttached, KineticScrollView, ListenerId};
pub use settle::{BoundsSettler, CLAMP_FRAME_DIVISOR, DEFAULT_FRAME_RATE};

pub mod prelude {
    pub use crate::config::{ConfigError, KineticParameters};
    pub use crate::event::{EventOutcome, KineticEvent};
    pub use crate::kinetic_scroll_view::KineticScrollView;
    pub use kinetic_core::prelude::*;
    pub use kinetic_foundation::PointerButton;
}
