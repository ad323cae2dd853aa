//! Gesture and frame-clock harness for slide switches.

use slideswitch_core::{
    Constraints, DrawCommand, Event, Point, RecordingCanvas, Rect, TouchId, Widget,
};
use slideswitch_widgets::{SlideSwitch, SwitchChanged};
use std::sync::{Arc, Mutex};

/// Frame interval used when pumping animations, in milliseconds.
pub const FRAME_MS: u64 = 16;

/// Milliseconds a [`SwitchHarness::tap`] holds the pointer down.
pub const TAP_HOLD_MS: u64 = 50;

/// Test harness driving a [`SlideSwitch`] with a simulated clock.
///
/// The harness installs its own change listener so it can record every
/// notification; any listener set on the switch beforehand is replaced.
pub struct SwitchHarness {
    switch: SlideSwitch,
    now_ms: u64,
    touch: TouchId,
    pointer: Point,
    notifications: Arc<Mutex<Vec<bool>>>,
    messages: Vec<SwitchChanged>,
}

impl SwitchHarness {
    /// Lay the switch out at its preferred size at the origin.
    pub fn new(switch: SlideSwitch) -> Self {
        let size = switch.measure(Constraints::unbounded());
        Self::with_bounds(switch, Rect::from_size(size))
    }

    /// Lay the switch out in the given bounds.
    pub fn with_bounds(mut switch: SlideSwitch, bounds: Rect) -> Self {
        switch.layout(bounds);
        let notifications = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&notifications);
        switch.on_change(move |on| {
            if let Ok(mut calls) = sink.lock() {
                calls.push(on);
            }
        });
        Self {
            switch,
            now_ms: 0,
            touch: TouchId(0),
            pointer: Point::ORIGIN,
            notifications,
            messages: Vec::new(),
        }
    }

    /// The switch under test.
    pub fn switch(&self) -> &SlideSwitch {
        &self.switch
    }

    /// Mutable access for programmatic calls.
    pub fn switch_mut(&mut self) -> &mut SlideSwitch {
        &mut self.switch
    }

    /// Current simulated time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Track rectangle from the last layout.
    pub fn track(&self) -> Rect {
        self.switch.geometry().track
    }

    /// Where the thumb center sits at the given progress.
    pub fn point_at_rate(&self, rate: f32) -> Point {
        self.switch.geometry().thumb_center(rate)
    }

    /// Where the thumb center sits right now.
    pub fn thumb(&self) -> Point {
        self.point_at_rate(self.switch.rate())
    }

    // === Gestures ===

    /// Put the pointer down.
    pub fn press(&mut self, position: Point) -> &mut Self {
        self.pointer = position;
        self.send(Event::TouchStart {
            id: self.touch,
            position,
            time_ms: self.now_ms,
        })
    }

    /// Move the pointer.
    pub fn move_to(&mut self, position: Point) -> &mut Self {
        self.pointer = position;
        self.send(Event::TouchMove {
            id: self.touch,
            position,
            time_ms: self.now_ms,
        })
    }

    /// Lift the pointer where it is.
    pub fn release(&mut self) -> &mut Self {
        self.send(Event::TouchEnd {
            id: self.touch,
            position: self.pointer,
            time_ms: self.now_ms,
        })
    }

    /// Cancel the gesture.
    pub fn cancel(&mut self) -> &mut Self {
        self.send(Event::TouchCancel {
            id: self.touch,
            time_ms: self.now_ms,
        })
    }

    /// Let time pass without pumping frames.
    pub fn wait(&mut self, ms: u64) -> &mut Self {
        self.now_ms += ms;
        self
    }

    /// Quick press and release on the thumb.
    pub fn tap(&mut self) -> &mut Self {
        let at = self.thumb();
        self.press(at).wait(TAP_HOLD_MS).release()
    }

    /// Press at `from`, move to `to` in `steps` frames, release.
    pub fn drag(&mut self, from: Point, to: Point, steps: u32) -> &mut Self {
        let steps = steps.max(1);
        self.press(from);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let position = Point::new(
                (to.x - from.x).mul_add(t, from.x),
                (to.y - from.y).mul_add(t, from.y),
            );
            self.wait(FRAME_MS).move_to(position);
        }
        self.release()
    }

    // === Frames ===

    /// Pump frames covering `ms` milliseconds; returns the rate after each frame.
    pub fn advance(&mut self, ms: u64) -> Vec<f32> {
        let mut rates = Vec::new();
        let mut remaining = ms;
        while remaining > 0 {
            let dt = remaining.min(FRAME_MS);
            remaining -= dt;
            self.now_ms += dt;
            self.switch.animate(dt as f64 / 1000.0);
            rates.push(self.switch.rate());
        }
        rates
    }

    /// Pump frames until the animation finishes; returns the rate after each frame.
    pub fn run_animation(&mut self) -> Vec<f32> {
        let mut rates = Vec::new();
        while self.switch.is_animating() {
            self.now_ms += FRAME_MS;
            self.switch.animate(FRAME_MS as f64 / 1000.0);
            rates.push(self.switch.rate());
        }
        rates
    }

    /// Paint the switch and return the draw commands.
    pub fn render(&self) -> Vec<DrawCommand> {
        let mut canvas = RecordingCanvas::new();
        self.switch.paint(&mut canvas);
        canvas.take_commands()
    }

    // === Captures ===

    /// Values passed to the change listener, in order.
    pub fn notifications(&self) -> Vec<bool> {
        self.notifications
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// `SwitchChanged` messages returned from event handling, in order.
    pub fn messages(&self) -> &[SwitchChanged] {
        &self.messages
    }

    // === Assertions ===

    /// Assert the switch value.
    ///
    /// # Panics
    ///
    /// Panics if the value differs.
    pub fn assert_on(&self, expected: bool) -> &Self {
        assert_eq!(
            self.switch.is_on(),
            expected,
            "Expected switch to be {} at {}ms",
            if expected { "on" } else { "off" },
            self.now_ms
        );
        self
    }

    /// Assert the thumb progress within a small tolerance.
    ///
    /// # Panics
    ///
    /// Panics if the rate differs by more than 1e-4.
    pub fn assert_rate(&self, expected: f32) -> &Self {
        let actual = self.switch.rate();
        assert!(
            (actual - expected).abs() < 1e-4,
            "Expected rate {expected} but got {actual}"
        );
        self
    }

    /// Assert the thumb rests where the value says.
    ///
    /// # Panics
    ///
    /// Panics if the switch is animating or the rate disagrees with the value.
    pub fn assert_at_rest(&self) -> &Self {
        let state = self.switch.state();
        assert!(
            !self.switch.is_animating() && state.is_at_rest(),
            "Expected switch at rest but got {state:?}"
        );
        self
    }

    /// Assert the exact listener notifications so far.
    ///
    /// # Panics
    ///
    /// Panics if the notifications differ.
    pub fn assert_notified(&self, expected: &[bool]) -> &Self {
        let actual = self.notifications();
        assert_eq!(
            actual, expected,
            "Expected listener calls {expected:?} but got {actual:?}"
        );
        self
    }

    /// Assert the listener was never called.
    ///
    /// # Panics
    ///
    /// Panics if any notification was recorded.
    pub fn assert_no_notifications(&self) -> &Self {
        self.assert_notified(&[])
    }

    // === Internal ===

    fn send(&mut self, event: Event) -> &mut Self {
        log::trace!("harness {}ms: {event:?}", self.now_ms);
        if let Some(message) = self.switch.event(&event) {
            if let Some(changed) = message.downcast_ref::<SwitchChanged>() {
                self.messages.push(*changed);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harness() -> SwitchHarness {
        SwitchHarness::with_bounds(SlideSwitch::new(), Rect::new(0.0, 0.0, 100.0, 40.0))
    }

    #[test]
    fn test_new_lays_out_at_preferred_size() {
        let h = SwitchHarness::new(SlideSwitch::new());
        assert_eq!(h.track(), Rect::new(0.0, 0.0, 58.0, 29.0));
    }

    #[test]
    fn test_tap_records_notification_and_message() {
        let mut h = harness();
        h.tap();
        h.assert_on(true).assert_notified(&[true]);
        assert_eq!(h.messages(), &[SwitchChanged { on: true }]);
        assert_eq!(h.now_ms(), TAP_HOLD_MS);
    }

    #[test]
    fn test_run_animation_ends_at_rest() {
        let mut h = harness();
        h.tap();
        let rates = h.run_animation();
        assert!(!rates.is_empty());
        assert_eq!(rates.last().copied(), Some(1.0));
        h.assert_at_rest();
    }

    #[test]
    fn test_advance_samples_each_frame() {
        let mut h = harness();
        h.switch_mut().set_on_animated(true, true);
        let rates = h.advance(40);
        assert_eq!(rates.len(), 3);
        assert_eq!(h.now_ms(), 40);
    }

    #[test]
    fn test_drag_interpolates_moves() {
        let mut h = harness();
        let from = h.point_at_rate(0.0);
        let to = h.point_at_rate(1.0);
        h.drag(from, to, 4);
        h.assert_on(true).assert_rate(1.0).assert_notified(&[true]);
        assert_eq!(h.now_ms(), 4 * FRAME_MS);
    }

    #[test]
    fn test_cancel_without_press_is_quiet() {
        let mut h = harness();
        h.cancel();
        h.assert_on(false).assert_no_notifications();
    }

    #[test]
    fn test_render_returns_commands() {
        let h = harness();
        assert_eq!(h.render().len(), 2);
    }

    #[test]
    #[should_panic(expected = "Expected switch to be on")]
    fn test_assert_on_panics() {
        harness().assert_on(true);
    }
}
