//! Switch value and thumb progress.

use serde::{Deserialize, Serialize};

/// The switch value together with the thumb's position along the track.
///
/// `rate` is 0.0 at the off end and 1.0 at the on end. At rest the two agree:
/// `on` exactly when `rate == 1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwitchState {
    /// Authoritative value
    pub on: bool,
    /// Thumb progress in `[0, 1]`
    pub rate: f32,
}

impl SwitchState {
    /// A state at rest.
    #[must_use]
    pub const fn new(on: bool) -> Self {
        Self {
            on,
            rate: Self::rest_rate(on),
        }
    }

    /// Where the thumb rests for a given value.
    #[must_use]
    pub const fn rest_rate(on: bool) -> f32 {
        if on {
            1.0
        } else {
            0.0
        }
    }

    /// Set the progress, clamped to `[0, 1]`.
    pub fn set_rate(&mut self, rate: f32) {
        self.rate = if rate.is_nan() {
            Self::rest_rate(self.on)
        } else {
            rate.clamp(0.0, 1.0)
        };
    }

    /// Move the thumb to the rest position of the current value.
    pub fn settle(&mut self) {
        self.rate = Self::rest_rate(self.on);
    }

    /// Whether the thumb sits where the value says it should.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.rate == Self::rest_rate(self.on)
    }
}

impl Default for SwitchState {
    fn default() -> Self {
        Self::new(false)
    }
}
