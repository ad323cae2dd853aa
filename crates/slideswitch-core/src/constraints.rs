//! Layout constraints for widgets.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// How one axis of [`Constraints`] restricts a widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SizeSpec {
    /// The parent demands exactly this size.
    Exact(f32),
    /// The widget may be at most this large.
    AtMost(f32),
    /// No restriction.
    Unspecified,
}

impl SizeSpec {
    fn from_bounds(min: f32, max: f32) -> Self {
        if min == max {
            Self::Exact(max)
        } else if max.is_finite() {
            Self::AtMost(max)
        } else {
            Self::Unspecified
        }
    }

    /// Resolve a size along this axis: the exact size if one is demanded,
    /// otherwise `preferred`. An upper bound does not shrink `preferred`.
    #[must_use]
    pub const fn resolve(self, preferred: f32) -> f32 {
        match self {
            Self::Exact(v) => v,
            Self::AtMost(_) | Self::Unspecified => preferred,
        }
    }
}

/// Layout constraints that specify minimum and maximum sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Create unbounded constraints.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Constrain a size to fit within these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Check if constraints specify an exact size.
    #[must_use]
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Horizontal axis as a [`SizeSpec`].
    #[must_use]
    pub fn width_spec(&self) -> SizeSpec {
        SizeSpec::from_bounds(self.min_width, self.max_width)
    }

    /// Vertical axis as a [`SizeSpec`].
    #[must_use]
    pub fn height_spec(&self) -> SizeSpec {
        SizeSpec::from_bounds(self.min_height, self.max_height)
    }

    /// Create constraints with an exact width, keeping the height bounds.
    #[must_use]
    pub fn with_exact_width(&self, width: f32) -> Self {
        Self::new(width, width, self.min_height, self.max_height)
    }

    /// Create constraints with an exact height, keeping the width bounds.
    #[must_use]
    pub fn with_exact_height(&self, height: f32) -> Self {
        Self::new(self.min_width, self.max_width, height, height)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}
