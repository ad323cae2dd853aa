//! Input events for widgets.
//!
//! Events carry the timestamp the host observed them at, in milliseconds on a
//! monotonic clock, so gesture timing never reads a wall clock.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
        /// Event time in milliseconds
        time_ms: u64,
    },
    /// Touch moved
    TouchMove {
        /// Touch identifier
        id: TouchId,
        /// New position
        position: Point,
        /// Event time in milliseconds
        time_ms: u64,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
        /// Event time in milliseconds
        time_ms: u64,
    },
    /// Touch cancelled (e.g., parent intercepted the gesture)
    TouchCancel {
        /// Touch identifier
        id: TouchId,
        /// Event time in milliseconds
        time_ms: u64,
    },
}

impl Event {
    /// Timestamp of the event.
    #[must_use]
    pub const fn time_ms(&self) -> u64 {
        match self {
            Self::TouchStart { time_ms, .. }
            | Self::TouchMove { time_ms, .. }
            | Self::TouchEnd { time_ms, .. }
            | Self::TouchCancel { time_ms, .. } => *time_ms,
        }
    }

    /// Position of the event, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::TouchStart { position, .. }
            | Self::TouchMove { position, .. }
            | Self::TouchEnd { position, .. } => Some(*position),
            Self::TouchCancel { .. } => None,
        }
    }

    /// Touch identifier of the event.
    #[must_use]
    pub const fn touch_id(&self) -> TouchId {
        match self {
            Self::TouchStart { id, .. }
            | Self::TouchMove { id, .. }
            | Self::TouchEnd { id, .. }
            | Self::TouchCancel { id, .. } => *id,
        }
    }
}
