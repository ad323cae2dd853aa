//! Switch rendering as a flat list of draw commands.

use crate::layout::SwitchGeometry;
use crate::state::SwitchState;
use crate::style::{SwitchStyle, ThumbStyle};
use slideswitch_core::{DrawCommand, LinearGradient, Point, Rect, StrokeStyle};

/// Progress at which an image thumb switches from the off image to the on image.
pub const BITMAP_SWITCH_RATE: f32 = 0.5;

/// Produce the draw commands for one frame.
///
/// Commands come in paint order: border, track, thumb, then the disabled
/// overlay when `enabled` is false.
#[must_use]
pub fn render(
    state: &SwitchState,
    geometry: &SwitchGeometry,
    style: &SwitchStyle,
    enabled: bool,
) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(4);
    let track = geometry.track;
    let r = geometry.radius;

    if let Some(border) = style.border {
        commands.push(DrawCommand::stroked_rounded_rect(
            track,
            r,
            StrokeStyle {
                color: border.color,
                width: border.width,
            },
        ));
    }

    match style.track_image {
        Some(image) => commands.push(DrawCommand::image(image.id, track)),
        None => commands.push(DrawCommand::rounded_rect(
            track,
            r,
            style.off_color.lerp_rgb8(&style.on_color, state.rate),
        )),
    }

    let center = geometry.thumb_center(state.rate);
    let thumb = geometry.thumb_radius(style.inner_thick);
    commands.push(thumb_command(style.thumb, center, thumb, state.rate));

    if !enabled {
        commands.push(DrawCommand::rounded_rect(track, r, style.disabled_overlay));
    }

    commands
}

fn thumb_command(thumb: ThumbStyle, center: Point, radius: f32, rate: f32) -> DrawCommand {
    match thumb {
        ThumbStyle::Solid(color) => DrawCommand::filled_circle(center, radius, color),
        ThumbStyle::Gradient { start, end } => DrawCommand::gradient_circle(
            center,
            radius,
            LinearGradient {
                start: Point::new(center.x - radius, center.y - radius),
                end: Point::new(center.x + radius, center.y + radius),
                start_color: start,
                end_color: end,
            },
        ),
        ThumbStyle::Bitmap { on, off } => {
            let image = if rate >= BITMAP_SWITCH_RATE { on } else { off };
            DrawCommand::image(image.id, Rect::around(center, radius))
        }
    }
}
