//! Slide switch widget: a pill-shaped on/off toggle with a draggable thumb.
//!
//! The widget is built from pure pieces that can be used on their own:
//! - [`compute_layout`] resolves size, track and radius from constraints
//! - [`render`] turns state, geometry and style into draw commands
//! - [`handle_touch`] advances the press/drag/tap gesture
//!
//! [`SlideSwitch`] ties them together behind the [`Widget`](slideswitch_core::Widget)
//! trait and owns the animation tween and change listener.

pub mod attrs;
pub mod error;
pub mod layout;
pub mod render;
pub mod state;
pub mod style;
pub mod switch;
pub mod touch;

pub use attrs::{ImageSource, NoImages, SwitchAttributes};
pub use error::SwitchError;
pub use layout::{compute_layout, default_size_px, SwitchGeometry, DEFAULT_SIZE_DP};
pub use render::render;
pub use state::SwitchState;
pub use style::{Border, SwitchStyle, SwitchTiming, SwitchVariant, ThumbStyle};
pub use switch::{ChangeListener, SlideSwitch, SwitchChanged};
pub use touch::{abort_touch, handle_touch, DragSession, TouchEffect, TouchPhase, TouchTransition};
