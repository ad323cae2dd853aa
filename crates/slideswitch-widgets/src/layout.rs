//! Pill geometry: how big the switch is and where its track sits.
//!
//! The track is always a 2:1 pill. Whichever content axis is the tighter fit
//! decides the radius, and the other axis shrinks to match.

use serde::{Deserialize, Serialize};
use slideswitch_core::{Constraints, DisplayMetrics, Insets, Point, Rect, Size};

/// Size used for any axis the parent does not fix, in dp.
pub const DEFAULT_SIZE_DP: Size = Size::new(58.0, 36.0);

/// Default size in whole pixels for the given density.
#[must_use]
pub fn default_size_px(metrics: &DisplayMetrics) -> Size {
    metrics.size_px(DEFAULT_SIZE_DP)
}

/// Computed geometry of a laid-out switch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SwitchGeometry {
    /// Final widget size, padding included
    pub size: Size,
    /// Track rectangle inside the padding
    pub track: Rect,
    /// Track corner radius, also the thumb's travel radius
    pub radius: f32,
}

impl SwitchGeometry {
    /// Center of the thumb at the given progress.
    #[must_use]
    pub fn thumb_center(&self, rate: f32) -> Point {
        let r = self.radius;
        Point::new(
            (2.0 * r).mul_add(rate, self.track.x + r),
            self.track.y + r,
        )
    }

    /// Thumb radius once the inset is taken off, never negative.
    #[must_use]
    pub fn thumb_radius(&self, inner_thick: f32) -> f32 {
        (self.radius - inner_thick).max(0.0)
    }

    /// Same geometry moved by `offset`.
    #[must_use]
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            track: self.track.translate(offset),
            ..*self
        }
    }
}

/// Resolve the switch size and track for the given constraints.
///
/// Axes the parent fixes are used as-is; the others take `default_size`
/// unchanged, even under an upper bound. The result always satisfies
/// `track.width == 2 * track.height == 4 * radius`.
#[must_use]
pub fn compute_layout(constraints: Constraints, padding: Insets, default_size: Size) -> SwitchGeometry {
    let width = constraints.width_spec().resolve(default_size.width);
    let height = constraints.height_spec().resolve(default_size.height);

    let pad_x = padding.horizontal();
    let pad_y = padding.vertical();
    let content_w = (width - pad_x).max(0.0);
    let content_h = (height - pad_y).max(0.0);

    let (size, radius) = if content_h <= content_w / 2.0 {
        (Size::new(2.0f32.mul_add(content_h, pad_x), height), content_h / 2.0)
    } else {
        (Size::new(width, content_w / 2.0 + pad_y), content_w / 4.0)
    };

    let track = Rect::new(padding.left, padding.top, radius * 4.0, radius * 2.0);
    log::debug!(
        "switch layout: {}x{} -> {}x{} radius {}",
        width,
        height,
        size.width,
        size.height,
        radius
    );

    SwitchGeometry {
        size,
        track,
        radius,
    }
}
