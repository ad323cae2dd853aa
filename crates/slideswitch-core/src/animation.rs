//! Easing curves and a frame-driven tween.
//!
//! Animation is explicit: the host advances a [`Tween`] by the elapsed frame
//! time and reads back the value. Nothing here owns a clock or a thread.

use serde::{Deserialize, Serialize};

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease in and out
    CubicInOut,
    /// Cosine curve, slow at both ends
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => Self::ease_in_out_quad(t),
            Self::CubicInOut => Self::ease_in_out_cubic(t),
            Self::AccelerateDecelerate => {
                ((t + 1.0) * std::f64::consts::PI).cos().mul_add(0.5, 0.5)
            }
        }
    }

    fn ease_in_out_quad(t: f64) -> f64 {
        if t < 0.5 {
            2.0 * t * t
        } else {
            1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
        }
    }

    fn ease_in_out_cubic(t: f64) -> f64 {
        if t < 0.5 {
            4.0 * t * t * t
        } else {
            1.0 - (-2.0f64).mul_add(t, 2.0).powi(3) / 2.0
        }
    }
}

// =============================================================================
// Tween
// =============================================================================

/// One advance of a [`Tween`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenStep {
    /// Value after the advance
    pub value: f64,
    /// Whether the tween reached its end on this advance
    pub finished: bool,
}

/// An eased interpolation between two values over a fixed duration.
///
/// The final step always reports `to` exactly, regardless of float drift in
/// the easing curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time in seconds
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl Tween {
    /// Create a tween with the default easing.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing: Easing::default(),
        }
    }

    /// Set easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether the tween has reached its end.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Advance by `dt` seconds. Negative or NaN deltas count as zero.
    pub fn tick(&mut self, dt: f64) -> TweenStep {
        let dt = if dt.is_nan() { 0.0 } else { dt.max(0.0) };
        self.elapsed = (self.elapsed + dt).min(self.duration);
        TweenStep {
            value: self.value(),
            finished: self.is_complete(),
        }
    }
}
