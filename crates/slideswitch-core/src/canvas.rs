//! Canvas implementations for rendering.

use crate::draw::{BoxStyle, DrawCommand, ImageRef, Paint, StrokeStyle};
use crate::widget::Canvas;
use crate::{CornerRadius, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (hand commands to a rasterizer in another process)
/// - Diffing (compare render outputs between frames)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Add a raw draw command.
    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Serialize the recorded commands as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle {
                fill: Some(*paint),
                stroke: None,
            },
        });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, stroke: StrokeStyle) {
        self.commands.push(DrawCommand::stroked_rounded_rect(rect, radius, stroke));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            style: BoxStyle {
                fill: Some(*paint),
                stroke: None,
            },
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: StrokeStyle) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            style: BoxStyle::stroke(stroke),
        });
    }

    fn draw_image(&mut self, image: ImageRef, bounds: Rect) {
        self.commands.push(DrawCommand::image(image, bounds));
    }

    fn draw(&mut self, command: &DrawCommand) {
        self.commands.push(command.clone());
    }
}

/// Replay one command through the primitive `Canvas` methods.
///
/// Rounded rectangles use the top-left radius; fill is painted before stroke.
pub fn replay_command<C: Canvas + ?Sized>(canvas: &mut C, command: &DrawCommand) {
    match command {
        DrawCommand::Rect {
            bounds,
            radius,
            style,
        } => {
            if let Some(paint) = &style.fill {
                canvas.fill_rounded_rect(*bounds, radius.top_left, paint);
            }
            if let Some(stroke) = style.stroke {
                canvas.stroke_rounded_rect(*bounds, radius.top_left, stroke);
            }
        }
        DrawCommand::Circle {
            center,
            radius,
            style,
        } => {
            if let Some(paint) = &style.fill {
                canvas.fill_circle(*center, *radius, paint);
            }
            if let Some(stroke) = style.stroke {
                canvas.stroke_circle(*center, *radius, stroke);
            }
        }
        DrawCommand::Image { image, bounds } => canvas.draw_image(*image, *bounds),
    }
}

/// Replay a command list onto any canvas.
pub fn replay<C: Canvas + ?Sized>(canvas: &mut C, commands: &[DrawCommand]) {
    for command in commands {
        canvas.draw(command);
    }
}
