//! Draw commands for backend-agnostic rendering.
//!
//! All rendering reduces to these primitives. A backend replays them with
//! whatever rasterizer it has; tests compare them directly.

use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Opaque reference to an image owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(pub u32);

/// A decoded image known to the host, with its natural size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHandle {
    /// Host-side reference
    pub id: ImageRef,
    /// Natural width in pixels
    pub width: u32,
    /// Natural height in pixels
    pub height: u32,
}

impl ImageHandle {
    /// Create a handle.
    #[must_use]
    pub const fn new(id: u32, width: u32, height: u32) -> Self {
        Self {
            id: ImageRef(id),
            width,
            height,
        }
    }
}

/// Stroke style for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Two-stop linear gradient, clamped outside its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    /// Gradient start point
    pub start: Point,
    /// Gradient end point
    pub end: Point,
    /// Color at `start`
    pub start_color: Color,
    /// Color at `end`
    pub end_color: Color,
}

impl LinearGradient {
    /// Sample the gradient at parameter `t` along start→end.
    #[must_use]
    pub fn sample(&self, t: f32) -> Color {
        self.start_color.lerp(&self.end_color, t)
    }
}

/// How a shape's interior is painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    /// Flat color
    Solid(Color),
    /// Linear gradient shader
    LinearGradient(LinearGradient),
}

/// Box style for rectangles and circles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill (None = no fill)
    pub fill: Option<Paint>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: Some(Paint::Solid(Color::WHITE)),
            stroke: None,
        }
    }
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(Paint::Solid(color)),
            stroke: None,
        }
    }

    /// Create a box filled with a gradient.
    #[must_use]
    pub const fn gradient(gradient: LinearGradient) -> Self {
        Self {
            fill: Some(Paint::LinearGradient(gradient)),
            stroke: None,
        }
    }

    /// Create a box with only stroke.
    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }

    /// Solid fill color, if the fill is a flat color.
    #[must_use]
    pub const fn solid_fill(&self) -> Option<Color> {
        match self.fill {
            Some(Paint::Solid(color)) => Some(color),
            _ => None,
        }
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Box style
        style: BoxStyle,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Box style
        style: BoxStyle,
    },

    /// Blit an image scaled into `bounds`
    Image {
        /// Host image
        image: ImageRef,
        /// Destination bounds
        bounds: Rect,
    },
}

impl DrawCommand {
    /// Create a filled rounded rectangle.
    #[must_use]
    pub fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle::fill(color),
        }
    }

    /// Create a stroked rounded rectangle.
    #[must_use]
    pub fn stroked_rounded_rect(bounds: Rect, radius: f32, stroke: StrokeStyle) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle::stroke(stroke),
        }
    }

    /// Create a filled circle.
    #[must_use]
    pub fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a gradient-filled circle.
    #[must_use]
    pub fn gradient_circle(center: Point, radius: f32, gradient: LinearGradient) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::gradient(gradient),
        }
    }

    /// Create an image blit.
    #[must_use]
    pub const fn image(image: ImageRef, bounds: Rect) -> Self {
        Self::Image { image, bounds }
    }

    /// Bounding box of the primitive.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect { bounds, .. } | Self::Image { bounds, .. } => *bounds,
            Self::Circle { center, radius, .. } => Rect::around(*center, *radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_style_default() {
        let s = StrokeStyle::default();
        assert_eq!(s.color, Color::BLACK);
        assert_eq!(s.width, 1.0);
    }

    #[test]
    fn test_box_style_default() {
        assert_eq!(BoxStyle::default().solid_fill(), Some(Color::WHITE));
    }

    #[test]
    fn test_box_style_stroke_has_no_fill() {
        let style = BoxStyle::stroke(StrokeStyle {
            color: Color::WHITE,
            width: 2.0,
        });
        assert!(style.fill.is_none());
        assert_eq!(style.stroke.map(|s| s.width), Some(2.0));
    }

    #[test]
    fn test_gradient_sample_endpoints() {
        let g = LinearGradient {
            start: Point::ORIGIN,
            end: Point::new(10.0, 10.0),
            start_color: Color::BLACK,
            end_color: Color::WHITE,
        };
        assert_eq!(g.sample(0.0), Color::BLACK);
        assert_eq!(g.sample(1.0), Color::WHITE);
        assert_eq!(g.sample(2.0), Color::WHITE);
    }

    #[test]
    fn test_draw_command_rounded_rect() {
        let cmd = DrawCommand::rounded_rect(Rect::new(0.0, 0.0, 80.0, 40.0), 20.0, Color::WHITE);
        match cmd {
            DrawCommand::Rect { radius, style, .. } => {
                assert_eq!(radius, CornerRadius::uniform(20.0));
                assert_eq!(style.solid_fill(), Some(Color::WHITE));
            }
            _ => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_draw_command_gradient_circle_is_not_solid() {
        let g = LinearGradient {
            start: Point::ORIGIN,
            end: Point::new(4.0, 4.0),
            start_color: Color::WHITE,
            end_color: Color::BLACK,
        };
        let cmd = DrawCommand::gradient_circle(Point::new(2.0, 2.0), 2.0, g);
        match cmd {
            DrawCommand::Circle { style, .. } => {
                assert!(style.solid_fill().is_none());
                assert_eq!(style.fill, Some(Paint::LinearGradient(g)));
            }
            _ => panic!("Expected Circle command"),
        }
    }

    #[test]
    fn test_draw_command_bounds() {
        let circle = DrawCommand::filled_circle(Point::new(20.0, 20.0), 12.0, Color::WHITE);
        assert_eq!(circle.bounds(), Rect::new(8.0, 8.0, 24.0, 24.0));

        let image = DrawCommand::image(ImageRef(7), Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(image.bounds(), Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_image_handle_new() {
        let h = ImageHandle::new(3, 24, 24);
        assert_eq!(h.id, ImageRef(3));
        assert_eq!((h.width, h.height), (24, 24));
    }

    #[test]
    fn test_draw_command_serializes() {
        let cmd = DrawCommand::image(ImageRef(1), Rect::new(0.0, 0.0, 8.0, 8.0));
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("Image"));
        let back: DrawCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
