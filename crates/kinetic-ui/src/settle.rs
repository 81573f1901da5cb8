//! Final placement of a surface once panning is over.

use kinetic_core::{Axis, ScrollableSurface};

/// Frame rate handed to elastic clamps.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Elastic clamps animate over `DEFAULT_FRAME_RATE / CLAMP_FRAME_DIVISOR`
/// frames.
pub const CLAMP_FRAME_DIVISOR: u32 = 6;

/// Brings each axis to rest: elastic axes bounce back into range, every
/// other (or already in-range) axis snaps to the nearest step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsSettler {
    frame_rate: u32,
}

impl Default for BoundsSettler {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl BoundsSettler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clamp_frames(&self) -> u32 {
        self.frame_rate / CLAMP_FRAME_DIVISOR
    }

    pub fn settle<S>(&self, surface: Option<&mut S>)
    where
        S: ScrollableSurface + ?Sized,
    {
        let Some(surface) = surface else {
            return;
        };
        for axis in Axis::ALL {
            let Some(range) = surface.axis_range_mut(axis) else {
                continue;
            };
            if range.is_elastic() && range.clamp(true, self.clamp_frames(), self.frame_rate) {
                log::debug!("{axis:?} axis clamped elastically");
                continue;
            }
            let values = range.values();
            let snapped = values.snapped_value();
            if snapped != values.value {
                log::debug!("{axis:?} axis snapped {} -> {}", values.value, snapped);
            }
            range.set_value(snapped);
        }
    }
}
