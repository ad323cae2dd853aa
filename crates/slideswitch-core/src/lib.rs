//! Core types and traits for the slideswitch toggle widget.
//!
//! This crate provides the backend-independent foundation the switch is
//! built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Insets`]
//! - Color representation: [`Color`] with ARGB hex parsing and 8-bit interpolation
//! - Layout constraints: [`Constraints`] and the per-axis [`SizeSpec`]
//! - Touch input: [`Event`]
//! - Rendering: [`DrawCommand`], the [`Canvas`] trait and [`RecordingCanvas`]
//! - Animation: [`Easing`] and [`Tween`]

pub mod animation;
pub mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
mod metrics;
pub mod widget;

pub use animation::{Easing, Tween, TweenStep};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::{Constraints, SizeSpec};
pub use draw::{
    BoxStyle, DrawCommand, ImageHandle, ImageRef, LinearGradient, Paint, StrokeStyle,
};
pub use event::{Event, TouchId};
pub use geometry::{CornerRadius, Insets, Point, Rect, Size};
pub use metrics::DisplayMetrics;
pub use widget::{Canvas, LayoutResult, TypeId, Widget};
