//! Per-channel rate limiting of high-frequency input samples.
//!
//! Touch recognizers deliver samples at display refresh rate (60–120 Hz).
//! The remote host only needs a fraction of that, so the [`ThrottleGate`]
//! admits at most one sample per interval on each channel and silently drops
//! the rest.  Dropped samples are neither queued nor coalesced: the next
//! admitted sample carries the latest position anyway.
//!
//! Time is passed in explicitly (`now: Instant`) so the gate is deterministic
//! under test.

use std::time::{Duration, Instant};

use tracing::trace;

/// Default minimum spacing between admitted move samples.
pub const DEFAULT_MOVE_INTERVAL: Duration = Duration::from_millis(30);

/// Default minimum spacing between admitted scroll samples.
pub const DEFAULT_SCROLL_INTERVAL: Duration = Duration::from_millis(50);

/// An independently throttled input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Move,
    Scroll,
}

/// Admission gate for move and scroll samples.
#[derive(Debug, Clone)]
pub struct ThrottleGate {
    move_interval: Duration,
    scroll_interval: Duration,
    last_move: Option<Instant>,
    last_scroll: Option<Instant>,
    /// Scroll translation at the last admitted scroll sample.
    scroll_baseline: f64,
}

impl Default for ThrottleGate {
    fn default() -> Self {
        Self::new(DEFAULT_MOVE_INTERVAL, DEFAULT_SCROLL_INTERVAL)
    }
}

impl ThrottleGate {
    /// Creates a gate with custom per-channel intervals.
    pub fn new(move_interval: Duration, scroll_interval: Duration) -> Self {
        Self {
            move_interval,
            scroll_interval,
            last_move: None,
            last_scroll: None,
            scroll_baseline: 0.0,
        }
    }

    /// The configured interval for `channel`.
    pub fn interval(&self, channel: Channel) -> Duration {
        match channel {
            Channel::Move => self.move_interval,
            Channel::Scroll => self.scroll_interval,
        }
    }

    /// Decides whether a sample taken at `now` may proceed.
    ///
    /// The first sample on a channel is always admitted.  Afterwards a sample
    /// is admitted when at least one interval has elapsed since the previous
    /// *admitted* sample; on admission that timestamp is updated.
    pub fn admit(&mut self, channel: Channel, now: Instant) -> bool {
        let interval = self.interval(channel);
        let last = match channel {
            Channel::Move => &mut self.last_move,
            Channel::Scroll => &mut self.last_scroll,
        };
        let admitted = match *last {
            None => true,
            Some(prev) => now.saturating_duration_since(prev) >= interval,
        };
        if admitted {
            *last = Some(now);
        } else {
            trace!(?channel, "sample dropped by throttle");
        }
        admitted
    }

    /// Throttles a cumulative scroll translation and converts it to a delta.
    ///
    /// Returns `Some(translation - baseline)` when the sample is admitted and
    /// moves the baseline to `translation`; returns `None` (baseline
    /// untouched) when the sample is dropped.
    pub fn admit_scroll(&mut self, translation: f64, now: Instant) -> Option<f64> {
        if !self.admit(Channel::Scroll, now) {
            return None;
        }
        let delta = translation - self.scroll_baseline;
        self.scroll_baseline = translation;
        Some(delta)
    }

    /// Resets the scroll baseline at the end of a scroll drag so the next
    /// drag starts from zero.
    pub fn reset_scroll_baseline(&mut self) {
        self.scroll_baseline = 0.0;
    }

    /// Forgets all admission history.
    pub fn reset(&mut self) {
        self.last_move = None;
        self.last_scroll = None;
        self.scroll_baseline = 0.0;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
