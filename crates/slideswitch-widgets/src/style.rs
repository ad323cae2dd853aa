//! Visual style and gesture timing for the switch.

use crate::error::{Result, SwitchError};
use serde::{Deserialize, Serialize};
use slideswitch_core::{Color, Easing, ImageHandle, Insets};

/// Default track color when on (`#FF32C781`).
pub const DEFAULT_ON_COLOR: u32 = 0xFF32_C781;
/// Default track color when off (`#FFC9C9C9`).
pub const DEFAULT_OFF_COLOR: u32 = 0xFFC9_C9C9;
/// Default overlay painted over a disabled switch (`#7FFFFFFF`).
pub const DEFAULT_DISABLED_OVERLAY: u32 = 0x7FFF_FFFF;
/// Default gap between the track edge and the thumb, in pixels.
pub const DEFAULT_INNER_THICK: f32 = 8.0;

/// Rendering variant of the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchVariant {
    /// Flat-colored thumb
    #[default]
    Plain,
    /// Thumb filled with a diagonal gradient
    Gradient,
    /// Thumb drawn from an on/off image pair
    Bitmap,
    /// Image thumb over a stroked track border
    BorderedBitmap,
}

impl SwitchVariant {
    /// Whether this variant draws its thumb from images.
    #[must_use]
    pub const fn uses_thumb_images(self) -> bool {
        matches!(self, Self::Bitmap | Self::BorderedBitmap)
    }
}

/// How the thumb is painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThumbStyle {
    /// Flat color circle
    Solid(Color),
    /// Circle with a linear gradient across its bounding square
    Gradient {
        /// Color at the top-left corner
        start: Color,
        /// Color at the bottom-right corner
        end: Color,
    },
    /// Image chosen by progress, on at `rate >= 0.5`
    Bitmap {
        /// Image shown in the on half
        on: ImageHandle,
        /// Image shown in the off half
        off: ImageHandle,
    },
}

/// Stroke around the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

/// Immutable per-instance appearance of a switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStyle {
    /// Track color at `rate == 1`
    pub on_color: Color,
    /// Track color at `rate == 0`
    pub off_color: Color,
    /// Thumb appearance
    pub thumb: ThumbStyle,
    /// Optional track border
    pub border: Option<Border>,
    /// Image stretched over the track instead of the interpolated fill
    pub track_image: Option<ImageHandle>,
    /// Gap between the track edge and the thumb
    pub inner_thick: f32,
    /// Overlay painted when the switch does not accept input
    pub disabled_overlay: Color,
    /// Space between the widget bounds and the track
    pub padding: Insets,
}

impl Default for SwitchStyle {
    fn default() -> Self {
        Self {
            on_color: Color::from_argb(DEFAULT_ON_COLOR),
            off_color: Color::from_argb(DEFAULT_OFF_COLOR),
            thumb: ThumbStyle::Solid(Color::WHITE),
            border: None,
            track_image: None,
            inner_thick: DEFAULT_INNER_THICK,
            disabled_overlay: Color::from_argb(DEFAULT_DISABLED_OVERLAY),
            padding: Insets::ZERO,
        }
    }
}

impl SwitchStyle {
    /// Plain style with a flat thumb.
    #[must_use]
    pub fn plain(thumb: Color) -> Self {
        Self {
            thumb: ThumbStyle::Solid(thumb),
            ..Self::default()
        }
    }

    /// Style with a gradient thumb.
    #[must_use]
    pub fn gradient(start: Color, end: Color) -> Self {
        Self {
            thumb: ThumbStyle::Gradient { start, end },
            ..Self::default()
        }
    }

    /// Style with an image thumb.
    #[must_use]
    pub fn bitmap(on: ImageHandle, off: ImageHandle) -> Self {
        Self {
            thumb: ThumbStyle::Bitmap { on, off },
            ..Self::default()
        }
    }

    /// Style with an image thumb and a bordered track.
    #[must_use]
    pub fn bordered_bitmap(on: ImageHandle, off: ImageHandle, border: Border) -> Self {
        Self {
            border: Some(border),
            ..Self::bitmap(on, off)
        }
    }

    /// Set the track colors.
    #[must_use]
    pub const fn colors(mut self, on: Color, off: Color) -> Self {
        self.on_color = on;
        self.off_color = off;
        self
    }

    /// Set the track image.
    #[must_use]
    pub const fn track_image(mut self, image: ImageHandle) -> Self {
        self.track_image = Some(image);
        self
    }

    /// Set the thumb inset.
    #[must_use]
    pub const fn inner_thick(mut self, inner_thick: f32) -> Self {
        self.inner_thick = inner_thick;
        self
    }

    /// Set the disabled overlay color.
    #[must_use]
    pub const fn disabled_overlay(mut self, color: Color) -> Self {
        self.disabled_overlay = color;
        self
    }

    /// Set the padding.
    #[must_use]
    pub const fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// The variant this style renders as.
    #[must_use]
    pub const fn variant(&self) -> SwitchVariant {
        match (&self.thumb, &self.border) {
            (ThumbStyle::Solid(_), _) => SwitchVariant::Plain,
            (ThumbStyle::Gradient { .. }, _) => SwitchVariant::Gradient,
            (ThumbStyle::Bitmap { .. }, None) => SwitchVariant::Bitmap,
            (ThumbStyle::Bitmap { .. }, Some(_)) => SwitchVariant::BorderedBitmap,
        }
    }

    /// Check dimensions are finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        check_dimension("inner_thick", self.inner_thick)?;
        if let Some(border) = self.border {
            check_dimension("border_size", border.width)?;
        }
        let p = self.padding;
        for value in [p.left, p.top, p.right, p.bottom] {
            check_dimension("padding", value)?;
        }
        Ok(())
    }
}

pub(crate) fn check_dimension(attribute: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SwitchError::InvalidDimension { attribute, value })
    }
}

/// Gesture thresholds and animation timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwitchTiming {
    /// Distance a touch must travel on either axis before it becomes a drag
    pub drag_slop: f32,
    /// A press released within this many milliseconds without dragging is a tap
    pub tap_timeout_ms: u64,
    /// Duration of the animated transition in seconds
    pub animation_secs: f64,
    /// Easing curve of the animated transition
    pub easing: Easing,
}

impl Default for SwitchTiming {
    fn default() -> Self {
        Self {
            drag_slop: 10.0,
            tap_timeout_ms: 200,
            animation_secs: 0.3,
            easing: Easing::AccelerateDecelerate,
        }
    }
}
