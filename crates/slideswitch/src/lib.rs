//! slideswitch: a configurable pill-shaped toggle switch.
//!
//! One widget covers four looks, selected by [`SwitchVariant`]: a flat thumb,
//! a gradient thumb, an image thumb, and an image thumb over a bordered track.
//! Layout, rendering and touch handling are pure functions; the widget only
//! owns state, the animation tween and the change listener.
//!
//! ```
//! use slideswitch::{Rect, RecordingCanvas, SlideSwitch, Widget};
//!
//! let mut switch = SlideSwitch::new();
//! switch.on_change(|on| println!("switched {}", if on { "on" } else { "off" }));
//! switch.layout(Rect::new(0.0, 0.0, 100.0, 40.0));
//! switch.set_on_animated(true, true);
//! while switch.animate(1.0 / 60.0) {}
//!
//! let mut canvas = RecordingCanvas::new();
//! switch.paint(&mut canvas);
//! assert_eq!(switch.rate(), 1.0);
//! assert_eq!(canvas.command_count(), 2);
//! ```

pub use slideswitch_core::*;
pub use slideswitch_widgets as widgets;
pub use slideswitch_widgets::{
    abort_touch, compute_layout, handle_touch, render, Border, ImageSource, NoImages, SlideSwitch,
    SwitchAttributes, SwitchChanged, SwitchError, SwitchGeometry, SwitchState, SwitchStyle,
    SwitchTiming, SwitchVariant, ThumbStyle, TouchEffect, TouchPhase, TouchTransition,
};
