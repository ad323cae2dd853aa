//! Widget trait and related types.
//!
//! This module defines the core `Widget` trait and the `Canvas` abstraction
//! widgets paint into.
//!
//! # Widget Lifecycle
//!
//! Widgets follow a measure-layout-paint cycle, driven by input events and a
//! frame clock:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Position self within allocated bounds
//! 3. **Paint**: Generate draw commands for rendering
//! 4. **Event / Animate**: Mutate state in response to input or elapsed time,
//!    then request another paint
//!
//! # Examples
//!
//! ```
//! use slideswitch_core::TypeId;
//!
//! let string_type = TypeId::of::<String>();
//! let i32_type = TypeId::of::<i32>();
//! assert_ne!(string_type, i32_type);
//! ```

use crate::constraints::Constraints;
use crate::draw::{DrawCommand, ImageRef, Paint, StrokeStyle};
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events.
    ///
    /// Returns a message when the event changed something the host should
    /// know about.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Advance time-based state by `dt` seconds.
    ///
    /// Returns `true` while the widget still wants frames.
    fn animate(&mut self, _dt: f64) -> bool {
        false
    }

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Fill a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, paint: &Paint);

    /// Outline a rounded rectangle.
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, stroke: StrokeStyle);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, paint: &Paint);

    /// Outline a circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: StrokeStyle);

    /// Draw an image scaled into `bounds`.
    fn draw_image(&mut self, image: ImageRef, bounds: Rect);

    /// Replay a draw command onto this canvas.
    fn draw(&mut self, command: &DrawCommand) {
        crate::canvas::replay_command(self, command);
    }
}
