//! Slide switch widget.

use crate::attrs::{ImageSource, SwitchAttributes};
use crate::error::Result;
use crate::layout::{compute_layout, default_size_px, SwitchGeometry};
use crate::render::render;
use crate::state::SwitchState;
use crate::style::{SwitchStyle, SwitchTiming};
use crate::touch::{abort_touch, handle_touch, TouchEffect, TouchPhase};
use slideswitch_core::{
    widget::LayoutResult, Canvas, Constraints, DisplayMetrics, Event, Rect, Size, Tween, TypeId,
    Point, Widget,
};
use std::any::Any;
use std::fmt;

/// Message emitted when the user changes the switch value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchChanged {
    /// The new value
    pub on: bool,
}

/// Callback invoked when the user changes the switch value.
pub type ChangeListener = Box<dyn FnMut(bool) + Send + Sync>;

/// Pill-shaped on/off switch with a draggable thumb.
///
/// The value changes by tapping, by dragging the thumb past the midpoint, or
/// programmatically. Only user interaction notifies the listener.
pub struct SlideSwitch {
    style: SwitchStyle,
    timing: SwitchTiming,
    metrics: DisplayMetrics,
    state: SwitchState,
    phase: TouchPhase,
    tween: Option<Tween>,
    geometry: SwitchGeometry,
    bounds: Rect,
    enabled: bool,
    redraw: bool,
    listener: Option<ChangeListener>,
    test_id_value: Option<String>,
}

impl Default for SlideSwitch {
    fn default() -> Self {
        Self {
            style: SwitchStyle::default(),
            timing: SwitchTiming::default(),
            metrics: DisplayMetrics::default(),
            state: SwitchState::default(),
            phase: TouchPhase::Idle,
            tween: None,
            geometry: SwitchGeometry::default(),
            bounds: Rect::default(),
            enabled: true,
            redraw: true,
            listener: None,
            test_id_value: None,
        }
    }
}

impl fmt::Debug for SlideSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideSwitch")
            .field("variant", &self.style.variant())
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("animating", &self.tween.is_some())
            .field("geometry", &self.geometry)
            .field("enabled", &self.enabled)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl SlideSwitch {
    /// Create a plain switch in the off position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch with the given style.
    pub fn with_style(style: SwitchStyle) -> Result<Self> {
        style.validate()?;
        Ok(Self {
            style,
            ..Self::default()
        })
    }

    /// Create a switch from an attribute sheet.
    pub fn from_attributes(attrs: &SwitchAttributes, images: &impl ImageSource) -> Result<Self> {
        let style = attrs.resolve(images)?;
        Ok(Self::with_style(style)?
            .on(attrs.switch_status)
            .enabled(attrs.enabled))
    }

    /// Set the initial value.
    #[must_use]
    pub const fn on(mut self, on: bool) -> Self {
        self.state = SwitchState::new(on);
        self
    }

    /// Set whether the switch accepts input.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set gesture and animation timing.
    #[must_use]
    pub const fn timing(mut self, timing: SwitchTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Set the display density used for the default size.
    #[must_use]
    pub const fn metrics(mut self, metrics: DisplayMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Current value.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.state.on
    }

    /// Thumb progress, 0.0 at off and 1.0 at on.
    #[must_use]
    pub const fn rate(&self) -> f32 {
        self.state.rate
    }

    /// Value and progress together.
    #[must_use]
    pub const fn state(&self) -> SwitchState {
        self.state
    }

    /// Whether the switch accepts input.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Style the switch renders with.
    #[must_use]
    pub const fn style(&self) -> &SwitchStyle {
        &self.style
    }

    /// Geometry from the last layout pass.
    #[must_use]
    pub const fn geometry(&self) -> SwitchGeometry {
        self.geometry
    }

    /// Current gesture phase.
    #[must_use]
    pub const fn touch_phase(&self) -> TouchPhase {
        self.phase
    }

    /// Whether an animated transition is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Whether something changed since the last [`take_redraw`](Self::take_redraw).
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Read and clear the redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Enable or disable input.
    ///
    /// Disabling ends any gesture in progress as if the pointer had been
    /// lifted: a drag snaps to the nearer end and notifies if the value
    /// changed.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        if !enabled {
            let transition = abort_touch(self.phase, self.state);
            self.phase = transition.phase;
            self.state = transition.state;
            self.apply(transition.effects);
        }
        self.enabled = enabled;
        self.redraw = true;
    }

    /// Whether a touch landing at `position` belongs to this switch.
    ///
    /// True anywhere inside the laid-out bounds, padding included, and also
    /// while disabled: a disabled switch swallows touches so they never reach
    /// whatever lies underneath.
    #[must_use]
    pub fn claims(&self, position: &Point) -> bool {
        self.bounds.contains_point(position)
    }

    /// Set the value immediately without notifying the listener.
    pub fn set_on(&mut self, on: bool) {
        if self.state.on == on {
            return;
        }
        log::debug!("switch set to {on}");
        self.state.on = on;
        self.state.settle();
        self.tween = None;
        self.redraw = true;
    }

    /// Set the value, optionally animating the thumb, without notifying the
    /// listener.
    pub fn set_on_animated(&mut self, on: bool, animated: bool) {
        if !animated {
            self.set_on(on);
            return;
        }
        if self.state.on == on {
            return;
        }
        log::debug!("switch animating to {on}");
        self.state.on = on;
        self.start_tween(SwitchState::rest_rate(on));
    }

    /// Flip the value with animation, without notifying the listener.
    pub fn toggle_animated(&mut self) {
        self.set_on_animated(!self.state.on, true);
    }

    /// Register the callback for user-driven changes, replacing any previous one.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(bool) + Send + Sync + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the change callback.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    fn start_tween(&mut self, to: f32) {
        if self.timing.animation_secs <= 0.0 {
            self.tween = None;
            self.state.set_rate(to);
        } else {
            self.tween = Some(
                Tween::new(
                    f64::from(self.state.rate),
                    f64::from(to),
                    self.timing.animation_secs,
                )
                .with_easing(self.timing.easing),
            );
        }
        self.redraw = true;
    }

    fn apply(&mut self, effects: Vec<TouchEffect>) -> Option<Box<dyn Any + Send>> {
        let mut message: Option<Box<dyn Any + Send>> = None;
        for effect in effects {
            match effect {
                TouchEffect::Redraw => self.redraw = true,
                TouchEffect::StartTween { to } => self.start_tween(to),
                TouchEffect::Changed(on) => {
                    self.notify(on);
                    message = Some(Box::new(SwitchChanged { on }));
                }
            }
        }
        message
    }

    fn notify(&mut self, on: bool) {
        if let Some(listener) = self.listener.as_mut() {
            listener(on);
        }
    }

    fn default_size(&self) -> Size {
        default_size_px(&self.metrics)
    }
}

impl Widget for SlideSwitch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        compute_layout(constraints, self.style.padding, self.default_size()).size
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.geometry = compute_layout(
            Constraints::tight(bounds.size()),
            self.style.padding,
            self.default_size(),
        )
        .translate(bounds.origin());
        self.bounds = Rect::new(
            bounds.x,
            bounds.y,
            self.geometry.size.width,
            self.geometry.size.height,
        );
        self.redraw = true;
        LayoutResult {
            size: self.geometry.size,
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        for command in render(&self.state, &self.geometry, &self.style, self.enabled) {
            canvas.draw(&command);
        }
    }

    /// Presses outside [`claims`](SlideSwitch::claims) are ignored. While
    /// disabled every touch inside the bounds is swallowed: nothing changes and
    /// `None` comes back, so hosts should not forward it to widgets beneath.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if let Event::TouchStart { position, .. } = event {
            if self.phase.is_tracking() || !self.claims(position) {
                return None;
            }
            if self.enabled {
                self.tween = None;
            }
        }

        let transition = handle_touch(
            self.phase,
            event,
            self.state,
            self.geometry.radius,
            &self.timing,
            self.enabled,
        );
        self.phase = transition.phase;
        self.state = transition.state;
        self.apply(transition.effects)
    }

    fn animate(&mut self, dt: f64) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        let step = tween.tick(dt);
        let target = tween.to as f32;
        self.redraw = true;
        log::trace!("switch tween step {:.3}", step.value);
        if step.finished {
            self.state.set_rate(target);
            self.tween = None;
            false
        } else {
            self.state.set_rate(step.value as f32);
            true
        }
    }

    /// False while disabled. The switch still claims touches in its bounds.
    fn is_interactive(&self) -> bool {
        self.enabled
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ThumbStyle;
    use slideswitch_core::{DrawCommand, ImageHandle, Point, RecordingCanvas, TouchId};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    fn laid_out() -> SlideSwitch {
        let mut s = SlideSwitch::new();
        s.layout(Rect::new(0.0, 0.0, 100.0, 40.0));
        s
    }

    fn capture(s: &mut SlideSwitch) -> Arc<Mutex<Vec<bool>>> {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        s.on_change(move |on| sink.lock().unwrap().push(on));
        calls
    }

    fn touch_start(x: f32, t: u64) -> Event {
        Event::TouchStart {
            id: TouchId(0),
            position: Point::new(x, 20.0),
            time_ms: t,
        }
    }

    fn touch_end(x: f32, t: u64) -> Event {
        Event::TouchEnd {
            id: TouchId(0),
            position: Point::new(x, 20.0),
            time_ms: t,
        }
    }

    fn run(s: &mut SlideSwitch) {
        while s.animate(1.0 / 60.0) {}
    }

    #[test]
    fn test_switch_changed_message() {
        let msg = SwitchChanged { on: true };
        assert!(msg.on);
    }

    #[test]
    fn test_new_defaults() {
        let s = SlideSwitch::new();
        assert!(!s.is_on());
        assert_eq!(s.rate(), 0.0);
        assert!(s.is_enabled());
        assert!(s.is_interactive());
        assert!(!s.is_animating());
    }

    #[test]
    fn test_builder() {
        let s = SlideSwitch::new()
            .on(true)
            .enabled(false)
            .test_id("wifi");
        assert!(s.is_on());
        assert_eq!(s.rate(), 1.0);
        assert!(!s.is_interactive());
        assert_eq!(Widget::test_id(&s), Some("wifi"));
    }

    #[test]
    fn test_measure_uses_default_size() {
        let s = SlideSwitch::new().metrics(DisplayMetrics::new(2.0));
        let size = s.measure(Constraints::unbounded());
        // 116 x 72 -> width decides, radius 29
        assert_eq!(size, Size::new(116.0, 58.0));
    }

    #[test]
    fn test_layout_offsets_track() {
        let mut s = SlideSwitch::new();
        let result = s.layout(Rect::new(10.0, 5.0, 100.0, 40.0));
        assert_eq!(result.size, Size::new(80.0, 40.0));
        assert_eq!(s.geometry().track, Rect::new(10.0, 5.0, 80.0, 40.0));
        assert_eq!(Widget::bounds(&s), Rect::new(10.0, 5.0, 80.0, 40.0));
    }

    #[test]
    fn test_paint_records_commands() {
        let s = laid_out();
        let mut canvas = RecordingCanvas::new();
        s.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 2);
        assert!(matches!(canvas.commands()[1], DrawCommand::Circle { .. }));
    }

    #[test]
    fn test_tap_toggles_notifies_and_animates() {
        let mut s = laid_out();
        let calls = capture(&mut s);
        assert!(s.event(&touch_start(20.0, 0)).is_none());
        let msg = s.event(&touch_end(20.0, 100)).expect("message");
        assert_eq!(msg.downcast_ref::<SwitchChanged>(), Some(&SwitchChanged { on: true }));
        assert!(s.is_on());
        assert!(s.is_animating());
        run(&mut s);
        assert_eq!(s.rate(), 1.0);
        assert_eq!(*calls.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_press_outside_track_is_ignored() {
        let mut s = laid_out();
        s.event(&touch_start(95.0, 0));
        assert!(!s.touch_phase().is_tracking());
        assert!(s.event(&touch_end(95.0, 50)).is_none());
        assert!(!s.is_on());
    }

    #[test]
    fn test_set_on_is_silent() {
        let mut s = laid_out();
        let calls = capture(&mut s);
        s.set_on(true);
        assert!(s.is_on());
        assert_eq!(s.rate(), 1.0);
        s.set_on_animated(false, true);
        run(&mut s);
        assert_eq!(s.rate(), 0.0);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_set_same_value_does_nothing() {
        let mut s = laid_out();
        s.take_redraw();
        s.set_on(false);
        s.set_on_animated(false, true);
        assert!(!s.needs_redraw());
        assert!(!s.is_animating());
    }

    #[test]
    fn test_overlapping_animations_restart_from_current_rate() {
        let mut s = laid_out();
        s.set_on_animated(true, true);
        for _ in 0..9 {
            s.animate(1.0 / 60.0);
        }
        let mid = s.rate();
        assert!(mid > 0.0 && mid < 1.0);
        s.set_on_animated(false, true);
        assert!(!s.is_on());
        s.animate(1.0 / 60.0);
        assert!(s.rate() <= mid);
        run(&mut s);
        assert_eq!(s.rate(), 0.0);
    }

    #[test]
    fn test_set_on_cancels_animation() {
        let mut s = laid_out();
        s.set_on_animated(true, true);
        s.animate(0.05);
        s.set_on(false);
        assert!(!s.is_animating());
        assert_eq!(s.rate(), 0.0);
    }

    #[test]
    fn test_toggle_animated() {
        let mut s = laid_out();
        s.toggle_animated();
        assert!(s.is_on());
        run(&mut s);
        assert_eq!(s.rate(), 1.0);
    }

    #[test]
    fn test_disabled_consumes_touch() {
        let mut s = laid_out();
        let calls = capture(&mut s);
        s.set_enabled(false);
        assert!(s.event(&touch_start(20.0, 0)).is_none());
        assert!(s.event(&touch_end(20.0, 50)).is_none());
        assert!(!s.is_on());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_disabling_ends_press_without_tap() {
        let mut s = laid_out();
        let calls = capture(&mut s);
        s.event(&touch_start(20.0, 0));
        s.set_enabled(false);
        assert_eq!(s.touch_phase(), TouchPhase::Idle);
        assert!(!s.is_on());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_disabling_mid_drag_snaps_and_notifies() {
        let mut s = laid_out();
        let calls = capture(&mut s);
        s.event(&touch_start(20.0, 0));
        s.event(&Event::TouchMove {
            id: TouchId(0),
            position: Point::new(80.0, 20.0),
            time_ms: 16,
        });
        assert!(s.is_on());
        s.set_enabled(false);
        assert_eq!(s.touch_phase(), TouchPhase::Idle);
        assert!(s.state().is_at_rest());
        assert_eq!(*calls.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_press_on_padding_is_claimed() {
        let style = SwitchStyle::default().padding(slideswitch_core::Insets::uniform(4.0));
        let mut s = SlideSwitch::with_style(style).unwrap();
        s.layout(Rect::new(0.0, 0.0, 100.0, 48.0));
        // track starts at x = 4; x = 2 is padding
        let corner = Point::new(2.0, 2.0);
        assert!(!s.geometry().track.contains_point(&corner));
        assert!(s.claims(&corner));
        s.event(&Event::TouchStart {
            id: TouchId(0),
            position: corner,
            time_ms: 0,
        });
        assert!(s.touch_phase().is_tracking());
        let msg = s.event(&Event::TouchEnd {
            id: TouchId(0),
            position: corner,
            time_ms: 60,
        });
        assert!(msg.is_some());
        assert!(s.is_on());
    }

    #[test]
    fn test_disabled_switch_still_claims_touches() {
        let mut s = laid_out();
        s.set_enabled(false);
        assert!(!s.is_interactive());
        assert!(s.claims(&Point::new(20.0, 20.0)));
        assert!(!s.claims(&Point::new(95.0, 20.0)));
    }

    #[test]
    fn test_clear_listener() {
        let mut s = laid_out();
        let calls = capture(&mut s);
        s.clear_listener();
        s.event(&touch_start(20.0, 0));
        assert!(s.event(&touch_end(20.0, 50)).is_some());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_zero_duration_timing_snaps() {
        let mut s = SlideSwitch::new().timing(SwitchTiming {
            animation_secs: 0.0,
            ..SwitchTiming::default()
        });
        s.set_on_animated(true, true);
        assert!(!s.is_animating());
        assert_eq!(s.rate(), 1.0);
    }

    #[test]
    fn test_from_attributes() {
        let attrs = SwitchAttributes::from_toml_str(
            r#"
            variant = "bitmap"
            switch_on_background = "on"
            switch_off_background = "off"
            switch_status = false
            enabled = false
            "#,
        )
        .unwrap();
        let mut images = HashMap::new();
        images.insert("on".to_string(), ImageHandle::new(1, 24, 24));
        images.insert("off".to_string(), ImageHandle::new(2, 24, 24));
        let s = SlideSwitch::from_attributes(&attrs, &images).unwrap();
        assert!(!s.is_on());
        assert!(!s.is_enabled());
        assert!(matches!(s.style().thumb, ThumbStyle::Bitmap { .. }));
    }

    #[test]
    fn test_with_style_validates() {
        assert!(SlideSwitch::with_style(SwitchStyle::default().inner_thick(f32::INFINITY)).is_err());
    }

    #[test]
    fn test_debug_omits_listener_body() {
        let mut s = SlideSwitch::new();
        s.on_change(|_| {});
        let text = format!("{s:?}");
        assert!(text.contains("SlideSwitch"));
        assert!(text.contains("has_listener: true"));
    }
}
