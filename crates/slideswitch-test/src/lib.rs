//! Testing harness for slide switches.
//!
//! [`SwitchHarness`] drives a [`SlideSwitch`](slideswitch_widgets::SlideSwitch)
//! through touch gestures on a simulated millisecond clock, pumps animation
//! frames, and records every change notification:
//!
//! ```
//! use slideswitch_test::SwitchHarness;
//! use slideswitch_widgets::SlideSwitch;
//!
//! let mut harness = SwitchHarness::new(SlideSwitch::new());
//! harness.tap();
//! harness.run_animation();
//! harness.assert_on(true).assert_rate(1.0).assert_notified(&[true]);
//! ```

mod harness;

pub use harness::{SwitchHarness, FRAME_MS, TAP_HOLD_MS};

/// Route `log` output through `env_logger` for the current test binary.
///
/// Safe to call from every test; only the first call installs the logger.
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=slideswitch_widgets=trace`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
