//! Display density, injected instead of read from the host platform.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Pixel density of the surface a widget is laid out on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// Physical pixels per density-independent unit (dp).
    pub density: f32,
}

impl DisplayMetrics {
    /// Baseline density: 1 dp == 1 px.
    pub const BASELINE: Self = Self { density: 1.0 };

    /// Create metrics for the given density. Non-positive or non-finite
    /// values fall back to the baseline.
    #[must_use]
    pub fn new(density: f32) -> Self {
        if density.is_finite() && density > 0.0 {
            Self { density }
        } else {
            Self::BASELINE
        }
    }

    /// Convert dp to fractional pixels.
    #[must_use]
    pub fn dp(&self, dp: f32) -> f32 {
        dp * self.density
    }

    /// Convert dp to whole pixels, truncating.
    #[must_use]
    pub fn dp_px(&self, dp: f32) -> f32 {
        self.dp(dp).floor()
    }

    /// Convert a dp size to whole pixels.
    #[must_use]
    pub fn size_px(&self, size_dp: Size) -> Size {
        Size::new(self.dp_px(size_dp.width), self.dp_px(size_dp.height))
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::BASELINE
    }
}
