//! Touch gesture state machine.
//!
//! [`handle_touch`] is a pure transition: it takes the current gesture phase
//! and switch state, and returns the next ones together with the side effects
//! the owner must carry out. It never reads a clock; every event carries its
//! own timestamp.
//!
//! ```text
//! Idle --press--> Tracking(moved = false) --move past slop--> Tracking(moved = true)
//!   ^                     |                                          |
//!   +---- release/cancel: tap or no-op ----+---- release/cancel: snap+
//! ```

use crate::state::SwitchState;
use crate::style::SwitchTiming;
use serde::{Deserialize, Serialize};
use slideswitch_core::{Event, Point, TouchId};

/// Bookkeeping for one press-move-release gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    /// Pointer that owns the gesture
    pub id: TouchId,
    /// Where the press landed
    pub start: Point,
    /// Most recent x position seen
    pub last_x: f32,
    /// Progress when the press landed
    pub start_rate: f32,
    /// Value when the press landed
    pub start_on: bool,
    /// Press timestamp in milliseconds
    pub down_at_ms: u64,
    /// Whether the pointer has left the slop area
    pub moved: bool,
}

/// Where a gesture currently is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum TouchPhase {
    /// No pointer down
    #[default]
    Idle,
    /// A pointer is down
    Tracking(DragSession),
}

impl TouchPhase {
    /// Whether the gesture has turned into a drag.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Tracking(DragSession { moved: true, .. }))
    }

    /// Whether a pointer is down.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        matches!(self, Self::Tracking(_))
    }
}

/// Side effect requested by a touch transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TouchEffect {
    /// The thumb or track changed and must be repainted
    Redraw,
    /// The value changed through user interaction; notify listeners
    Changed(bool),
    /// Animate progress from its current value to `to`
    StartTween {
        /// Target progress
        to: f32,
    },
}

/// Outcome of feeding one event to [`handle_touch`].
#[derive(Debug, Clone, PartialEq)]
pub struct TouchTransition {
    /// Next gesture phase
    pub phase: TouchPhase,
    /// Next switch state
    pub state: SwitchState,
    /// Effects in the order they should be applied
    pub effects: Vec<TouchEffect>,
}

impl TouchTransition {
    fn unchanged(phase: TouchPhase, state: SwitchState) -> Self {
        Self {
            phase,
            state,
            effects: Vec::new(),
        }
    }

    /// Whether the event produced a `Changed` effect.
    #[must_use]
    pub fn changed(&self) -> Option<bool> {
        self.effects.iter().find_map(|e| match e {
            TouchEffect::Changed(on) => Some(*on),
            _ => None,
        })
    }
}

/// Advance the gesture by one event.
///
/// `radius` is the track radius from layout. Disabled switches consume the
/// event without any change. Events from a pointer other than the one that
/// started the gesture are ignored.
#[must_use]
pub fn handle_touch(
    phase: TouchPhase,
    event: &Event,
    state: SwitchState,
    radius: f32,
    timing: &SwitchTiming,
    enabled: bool,
) -> TouchTransition {
    if !enabled {
        log::trace!("switch disabled, ignoring {event:?}");
        return TouchTransition::unchanged(phase, state);
    }

    match (phase, event) {
        (
            TouchPhase::Idle,
            Event::TouchStart {
                id,
                position,
                time_ms,
            },
        ) => {
            log::trace!("switch press at {position:?}");
            let session = DragSession {
                id: *id,
                start: *position,
                last_x: position.x,
                start_rate: state.rate,
                start_on: state.on,
                down_at_ms: *time_ms,
                moved: false,
            };
            TouchTransition::unchanged(TouchPhase::Tracking(session), state)
        }
        (TouchPhase::Tracking(session), Event::TouchMove { id, position, .. })
            if *id == session.id =>
        {
            drag(session, *position, state, radius, timing)
        }
        (TouchPhase::Tracking(session), Event::TouchEnd { id, time_ms, .. })
        | (TouchPhase::Tracking(session), Event::TouchCancel { id, time_ms })
            if *id == session.id =>
        {
            let tap = time_ms.saturating_sub(session.down_at_ms) < timing.tap_timeout_ms;
            finish(&session, tap, state)
        }
        _ => TouchTransition::unchanged(phase, state),
    }
}

/// End the gesture in progress without a release event.
///
/// Used when input is switched off mid-gesture. A drag snaps and reports a
/// change exactly as a release would; an undragged press is never a tap.
#[must_use]
pub fn abort_touch(phase: TouchPhase, state: SwitchState) -> TouchTransition {
    match phase {
        TouchPhase::Tracking(session) => {
            log::trace!("switch gesture aborted");
            finish(&session, false, state)
        }
        TouchPhase::Idle => TouchTransition::unchanged(phase, state),
    }
}

fn drag(
    mut session: DragSession,
    position: Point,
    mut state: SwitchState,
    radius: f32,
    timing: &SwitchTiming,
) -> TouchTransition {
    let (dx, dy) = position.offset_from(&session.start);
    if !session.moved {
        if dx.abs() < timing.drag_slop && dy.abs() < timing.drag_slop {
            return TouchTransition::unchanged(TouchPhase::Tracking(session), state);
        }
        log::trace!("switch drag started");
        session.moved = true;
    }
    session.last_x = position.x;

    if radius <= 0.0 {
        log::warn!("switch drag ignored: track radius is {radius}");
        return TouchTransition::unchanged(TouchPhase::Tracking(session), state);
    }

    let rate = session.start_rate + dx / (2.0 * radius);
    if rate >= 1.0 {
        state.rate = 1.0;
        state.on = true;
    } else if rate <= 0.0 {
        state.rate = 0.0;
        state.on = false;
    } else {
        state.rate = rate;
    }

    TouchTransition {
        phase: TouchPhase::Tracking(session),
        state,
        effects: vec![TouchEffect::Redraw],
    }
}

fn finish(session: &DragSession, tap: bool, mut state: SwitchState) -> TouchTransition {
    let mut effects = Vec::new();

    if session.moved {
        let target = if state.rate >= 0.5 { 1.0 } else { 0.0 };
        if state.rate != target {
            state.rate = target;
            effects.push(TouchEffect::Redraw);
        }
        state.on = target == 1.0;
        if state.on != session.start_on {
            log::debug!("switch dragged to {}", state.on);
            effects.push(TouchEffect::Changed(state.on));
        }
    } else if tap {
        state.on = !state.on;
        log::debug!("switch tapped to {}", state.on);
        effects.push(TouchEffect::StartTween {
            to: SwitchState::rest_rate(state.on),
        });
        effects.push(TouchEffect::Changed(state.on));
    } else if !state.is_at_rest() {
        // Long press that interrupted an animation: finish the settle.
        effects.push(TouchEffect::StartTween {
            to: SwitchState::rest_rate(state.on),
        });
    }

    TouchTransition {
        phase: TouchPhase::Idle,
        state,
        effects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const R: f32 = 20.0;

    fn press(x: f32, t: u64) -> Event {
        Event::TouchStart {
            id: TouchId(0),
            position: Point::new(x, 20.0),
            time_ms: t,
        }
    }

    fn move_to(x: f32, y: f32, t: u64) -> Event {
        Event::TouchMove {
            id: TouchId(0),
            position: Point::new(x, y),
            time_ms: t,
        }
    }

    fn end(x: f32, t: u64) -> Event {
        Event::TouchEnd {
            id: TouchId(0),
            position: Point::new(x, 20.0),
            time_ms: t,
        }
    }

    fn step(phase: TouchPhase, event: &Event, state: SwitchState) -> TouchTransition {
        handle_touch(phase, event, state, R, &SwitchTiming::default(), true)
    }

    #[test]
    fn test_press_records_session_without_effects() {
        let t = step(TouchPhase::Idle, &press(10.0, 100), SwitchState::new(false));
        assert!(t.effects.is_empty());
        match t.phase {
            TouchPhase::Tracking(s) => {
                assert_eq!(s.start, Point::new(10.0, 20.0));
                assert_eq!(s.down_at_ms, 100);
                assert!(!s.moved);
                assert!(!s.start_on);
            }
            TouchPhase::Idle => panic!("Expected tracking"),
        }
    }

    #[test]
    fn test_move_within_slop_is_ignored() {
        let s0 = SwitchState::new(false);
        let t = step(TouchPhase::Idle, &press(10.0, 0), s0);
        let t = step(t.phase, &move_to(19.0, 29.0, 10), t.state);
        assert!(t.effects.is_empty());
        assert!(!t.phase.is_dragging());
        assert_eq!(t.state, s0);
    }

    #[test]
    fn test_move_past_slop_drags() {
        let t = step(TouchPhase::Idle, &press(10.0, 0), SwitchState::new(false));
        let t = step(t.phase, &move_to(30.0, 20.0, 10), t.state);
        assert!(t.phase.is_dragging());
        assert_eq!(t.effects, vec![TouchEffect::Redraw]);
        assert!((t.state.rate - 0.5).abs() < 1e-6);
        assert!(!t.state.on);
    }

    #[test]
    fn test_vertical_slop_starts_drag_without_progress() {
        let t = step(TouchPhase::Idle, &press(10.0, 0), SwitchState::new(false));
        let t = step(t.phase, &move_to(10.0, 40.0, 10), t.state);
        assert!(t.phase.is_dragging());
        assert_eq!(t.state.rate, 0.0);
    }

    #[test]
    fn test_drag_is_sticky_inside_slop() {
        let t = step(TouchPhase::Idle, &press(10.0, 0), SwitchState::new(false));
        let t = step(t.phase, &move_to(30.0, 20.0, 10), t.state);
        let t = step(t.phase, &move_to(12.0, 20.0, 20), t.state);
        assert!(t.phase.is_dragging());
        assert!((t.state.rate - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_drag_clamps_and_sets_on_eagerly() {
        let t = step(TouchPhase::Idle, &press(10.0, 0), SwitchState::new(false));
        let t = step(t.phase, &move_to(60.0, 20.0, 10), t.state);
        assert_eq!(t.state.rate, 1.0);
        assert!(t.state.on);

        let t = step(t.phase, &move_to(-40.0, 20.0, 20), t.state);
        assert_eq!(t.state.rate, 0.0);
        assert!(!t.state.on);
    }

    #[test]
    fn test_drag_release_snaps_and_notifies_once() {
        let t = step(TouchPhase::Idle, &press(10.0, 0), SwitchState::new(false));
        let t = step(t.phase, &move_to(35.0, 20.0, 10), t.state);
        let t = step(t.phase, &end(35.0, 500), t.state);
        assert_eq!(t.phase, TouchPhase::Idle);
        assert_eq!(t.state, SwitchState::new(true));
        assert_eq!(
            t.effects,
            vec![TouchEffect::Redraw, TouchEffect::Changed(true)]
        );
    }

    #[test]
    fn test_drag_release_below_half_snaps_back_silently() {
        let t = step(TouchPhase::Idle, &press(10.0, 0), SwitchState::new(false));
        let t = step(t.phase, &move_to(25.0, 20.0, 10), t.state);
        let t = step(t.phase, &end(25.0, 50), t.state);
        assert_eq!(t.state, SwitchState::new(false));
        assert_eq!(t.effects, vec![TouchEffect::Redraw]);
        assert_eq!(t.changed(), None);
    }

    #[test]
    fn test_drag_clamped_then_released_does_not_redraw_twice() {
        let t = step(TouchPhase::Idle, &press(10.0, 0), SwitchState::new(false));
        let t = step(t.phase, &move_to(80.0, 20.0, 10), t.state);
        let t = step(t.phase, &end(80.0, 50), t.state);
        assert_eq!(t.effects, vec![TouchEffect::Changed(true)]);
    }

    #[test]
    fn test_quick_tap_toggles_with_tween() {
        let t = step(TouchPhase::Idle, &press(10.0, 0), SwitchState::new(false));
        let t = step(t.phase, &end(10.0, 150), t.state);
        assert!(t.state.on);
        assert_eq!(t.state.rate, 0.0);
        assert_eq!(
            t.effects,
            vec![
                TouchEffect::StartTween { to: 1.0 },
                TouchEffect::Changed(true)
            ]
        );
    }

    #[test]
    fn test_tap_timeout_is_exclusive() {
        let t = step(TouchPhase::Idle, &press(10.0, 0), SwitchState::new(false));
        let t = step(t.phase, &end(10.0, 200), t.state);
        assert!(!t.state.on);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_cancel_behaves_like_release() {
        let t = step(TouchPhase::Idle, &press(10.0, 0), SwitchState::new(true));
        let cancel = Event::TouchCancel {
            id: TouchId(0),
            time_ms: 50,
        };
        let t = step(t.phase, &cancel, t.state);
        assert!(!t.state.on);
        assert_eq!(t.changed(), Some(false));
    }

    #[test]
    fn test_abort_mid_drag_snaps_and_notifies() {
        let t = step(TouchPhase::Idle, &press(20.0, 0), SwitchState::new(false));
        let t = step(t.phase, &move_to(80.0, 20.0, 16), t.state);
        assert!(t.state.on);
        let t = abort_touch(t.phase, t.state);
        assert_eq!(t.phase, TouchPhase::Idle);
        assert_eq!(t.state, SwitchState::new(true));
        assert_eq!(t.changed(), Some(true));
    }

    #[test]
    fn test_abort_below_half_snaps_back() {
        let t = step(TouchPhase::Idle, &press(20.0, 0), SwitchState::new(false));
        let t = step(t.phase, &move_to(36.0, 20.0, 16), t.state);
        assert!((t.state.rate - 0.4).abs() < 1e-6);
        let t = abort_touch(t.phase, t.state);
        assert_eq!(t.state, SwitchState::new(false));
        assert_eq!(t.effects, vec![TouchEffect::Redraw]);
    }

    #[test]
    fn test_abort_quick_press_is_not_a_tap() {
        let t = step(TouchPhase::Idle, &press(20.0, 0), SwitchState::new(false));
        let t = abort_touch(t.phase, t.state);
        assert_eq!(t.phase, TouchPhase::Idle);
        assert!(!t.state.on);
        assert!(t.effects.is_empty());
        let idle = abort_touch(TouchPhase::Idle, SwitchState::new(true));
        assert!(idle.effects.is_empty());
    }

    #[test]
    fn test_release_while_idle_is_noop() {
        let s = SwitchState::new(true);
        let t = step(TouchPhase::Idle, &end(10.0, 0), s);
        assert_eq!(t.phase, TouchPhase::Idle);
        assert_eq!(t.state, s);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_disabled_consumes_everything() {
        let s = SwitchState::new(false);
        let t = handle_touch(
            TouchPhase::Idle,
            &press(10.0, 0),
            s,
            R,
            &SwitchTiming::default(),
            false,
        );
        assert_eq!(t.phase, TouchPhase::Idle);
        assert_eq!(t.state, s);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_zero_radius_drag_is_ignored() {
        let s = SwitchState::new(false);
        let timing = SwitchTiming::default();
        let t = handle_touch(TouchPhase::Idle, &press(0.0, 0), s, 0.0, &timing, true);
        let t = handle_touch(t.phase, &move_to(50.0, 20.0, 5), t.state, 0.0, &timing, true);
        assert!(t.phase.is_dragging());
        assert!(t.effects.is_empty());
        assert_eq!(t.state, s);
    }

    #[test]
    fn test_other_pointer_is_ignored() {
        let t = step(TouchPhase::Idle, &press(10.0, 0), SwitchState::new(false));
        let stray = Event::TouchEnd {
            id: TouchId(7),
            position: Point::new(10.0, 20.0),
            time_ms: 10,
        };
        let after = step(t.phase, &stray, t.state);
        assert!(after.phase.is_tracking());
        assert!(after.effects.is_empty());
    }

    #[test]
    fn test_slow_release_settles_interrupted_animation() {
        let mid = SwitchState { on: true, rate: 0.4 };
        let t = step(TouchPhase::Idle, &press(10.0, 0), mid);
        let t = step(t.phase, &end(10.0, 900), t.state);
        assert!(t.state.on);
        assert_eq!(t.effects, vec![TouchEffect::StartTween { to: 1.0 }]);
        assert_eq!(t.changed(), None);
    }

    proptest! {
        #[test]
        fn prop_drag_rate_stays_in_range(
            start_on in any::<bool>(),
            xs in proptest::collection::vec(-200.0f32..200.0, 1..20),
        ) {
            let mut t = step(TouchPhase::Idle, &press(40.0, 0), SwitchState::new(start_on));
            for (i, x) in xs.iter().enumerate() {
                t = step(t.phase, &move_to(*x, 20.0, i as u64 + 1), t.state);
                prop_assert!((0.0..=1.0).contains(&t.state.rate));
                if t.state.rate == 1.0 { prop_assert!(t.state.on); }
                if t.state.rate == 0.0 && t.phase.is_dragging() { prop_assert!(!t.state.on); }
            }
        }

        #[test]
        fn prop_drag_release_rests_and_notifies_on_change_only(
            start_on in any::<bool>(),
            x in -200.0f32..200.0,
        ) {
            let t = step(TouchPhase::Idle, &press(40.0, 0), SwitchState::new(start_on));
            let t = step(t.phase, &move_to(x, 40.0, 10), t.state);
            let t = step(t.phase, &end(x, 20), t.state);
            prop_assert!(t.state.is_at_rest());
            let changed = t.changed();
            if t.state.on == start_on {
                prop_assert_eq!(changed, None);
            } else {
                prop_assert_eq!(changed, Some(t.state.on));
            }
            let notifications = t
                .effects
                .iter()
                .filter(|e| matches!(e, TouchEffect::Changed(_)))
                .count();
            prop_assert!(notifications <= 1);
        }

        #[test]
        fn prop_release_twice_is_idempotent(start_on in any::<bool>(), x in -200.0f32..200.0) {
            let t = step(TouchPhase::Idle, &press(40.0, 0), SwitchState::new(start_on));
            let t = step(t.phase, &move_to(x, 40.0, 10), t.state);
            let first = step(t.phase, &end(x, 20), t.state);
            let second = step(first.phase, &end(x, 30), first.state);
            prop_assert_eq!(second.state, first.state);
            prop_assert!(second.effects.is_empty());
        }
    }
}
