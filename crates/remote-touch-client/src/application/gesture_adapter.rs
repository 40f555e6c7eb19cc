//! GestureAdapter: routes classified gesture events to the viewport state,
//! the coordinate mapper, and the throttle.
//!
//! The platform UI toolkit recognizes gestures; this adapter only consumes
//! its output as [`GestureEvent`] values.  Every event is handled
//! synchronously on the caller's thread, and any resulting command is handed
//! to a [`CommandSink`] (normally the `RemoteControlClient`), which never
//! blocks.
//!
//! # State machine
//!
//! | State                  | Entered by                 | Left by                        |
//! |------------------------|----------------------------|--------------------------------|
//! | `Idle`                 | all gestures ended         | any gesture beginning          |
//! | `OneFingerTracking`    | one-finger drag sample     | drag ended, two-finger gesture |
//! | `TwoFingerPanning`     | two-finger pan sample      | pan ended                      |
//! | `Pinching`             | pinch sample               | pinch ended                    |
//! | `PanningWhilePinching` | pan and pinch both live    | either one ended               |
//!
//! Pan and pinch are tracked with independent flags so both can be live in the
//! same two-finger session.  One-finger samples are ignored while either is
//! active.

use std::sync::Arc;
use std::time::{Duration, Instant};

use remote_touch_core::domain::view_transform::ViewTransform;
use remote_touch_core::{
    center_point_from_transform, point_to_normalized, Channel, Command, CursorOffsets,
    NormalizedPoint, Point, Size, ThrottleGate, Vector,
};
use tracing::{debug, trace};

/// Receives the commands produced by gesture handling.
#[cfg_attr(test, mockall::automock)]
pub trait CommandSink: Send + Sync {
    /// Delivers `command`; must return without waiting on the network.
    fn dispatch(&self, command: Command);
}

/// Lifecycle phase of a continuous gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

impl GesturePhase {
    /// Returns `true` for `Ended` and `Cancelled`.
    pub fn is_terminal(self) -> bool {
        matches!(self, GesturePhase::Ended | GesturePhase::Cancelled)
    }
}

/// A classified gesture sample from the platform recognizer.
///
/// Locations are in the local space of the (aspect-fit) video frame.
/// Translations and scales are cumulative since the gesture began.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A short tap: move the cursor there and click.
    Tap { location: Point },
    /// A one-finger drag that moves the cursor.
    OneFingerDrag { phase: GesturePhase, location: Point },
    /// A two-finger drag that pans the magnified view.
    TwoFingerPan {
        phase: GesturePhase,
        translation: Vector,
    },
    /// A pinch that zooms the view.
    Pinch { phase: GesturePhase, scale: f64 },
    /// A vertical drag on the scroll strip.
    ScrollDrag { phase: GesturePhase, translation: f64 },
}

/// Observable gesture-session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    OneFingerTracking,
    TwoFingerPanning,
    Pinching,
    PanningWhilePinching,
}

/// Per-session gesture router.
pub struct GestureAdapter {
    sink: Arc<dyn CommandSink>,
    transform: ViewTransform,
    gate: ThrottleGate,
    offsets: CursorOffsets,
    viewport: Size,
    overlay: NormalizedPoint,
    tracking: bool,
    panning: bool,
    pinching: bool,
}

impl GestureAdapter {
    /// Creates an adapter with the default throttle intervals and offsets.
    pub fn new(sink: Arc<dyn CommandSink>, viewport: Size) -> Self {
        Self::with_settings(sink, viewport, ThrottleGate::default(), CursorOffsets::default())
    }

    /// Creates an adapter with explicit throttle and offset settings.
    pub fn with_settings(
        sink: Arc<dyn CommandSink>,
        viewport: Size,
        gate: ThrottleGate,
        offsets: CursorOffsets,
    ) -> Self {
        Self {
            sink,
            transform: ViewTransform::new(),
            gate,
            offsets,
            viewport,
            overlay: NormalizedPoint::CENTER,
            tracking: false,
            panning: false,
            pinching: false,
        }
    }

    /// Convenience constructor from the millisecond intervals in the config.
    pub fn with_intervals(
        sink: Arc<dyn CommandSink>,
        viewport: Size,
        move_interval: Duration,
        scroll_interval: Duration,
        offsets: CursorOffsets,
    ) -> Self {
        Self::with_settings(
            sink,
            viewport,
            ThrottleGate::new(move_interval, scroll_interval),
            offsets,
        )
    }

    /// Updates the size of the video frame touches are normalized against.
    pub fn set_viewport_size(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Current pan/zoom state, for the display layer.
    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    /// Where the display layer should draw the local cursor indicator.
    ///
    /// Updated optimistically before the corresponding move is sent.  Not
    /// clamped; the renderer clips it.
    pub fn current_overlay_position(&self) -> NormalizedPoint {
        self.overlay
    }

    pub fn state(&self) -> GestureState {
        match (self.tracking, self.panning, self.pinching) {
            (_, true, true) => GestureState::PanningWhilePinching,
            (_, true, false) => GestureState::TwoFingerPanning,
            (_, false, true) => GestureState::Pinching,
            (true, false, false) => GestureState::OneFingerTracking,
            (false, false, false) => GestureState::Idle,
        }
    }

    /// Handles one gesture event.
    ///
    /// Returns the command that was dispatched to the sink, if any.
    pub fn handle(&mut self, event: GestureEvent, now: Instant) -> Option<Command> {
        let command = match event {
            GestureEvent::Tap { location } => self.on_tap(location),
            GestureEvent::OneFingerDrag { phase, location } => {
                self.on_one_finger(phase, location, now)
            }
            GestureEvent::TwoFingerPan { phase, translation } => {
                self.on_pan(phase, translation);
                None
            }
            GestureEvent::Pinch { phase, scale } => {
                self.on_pinch(phase, scale);
                None
            }
            GestureEvent::ScrollDrag { phase, translation } => {
                self.on_scroll(phase, translation, now)
            }
        }?;
        self.sink.dispatch(command.clone());
        Some(command)
    }

    /// Moves the remote cursor to whatever is at the centre of the viewport.
    ///
    /// `viewport` is the size of the visible frame at the time of the action.
    pub fn center_cursor(&mut self, viewport: Size) -> Option<Command> {
        let center = match center_point_from_transform(viewport, &self.transform) {
            Ok(c) => c,
            Err(e) => {
                debug!("cannot centre cursor: {e}");
                return None;
            }
        };
        self.overlay = center;
        let command = Command::Move {
            point: center.clamped(),
            click: false,
        };
        self.sink.dispatch(command.clone());
        Some(command)
    }

    // ── Event handlers ────────────────────────────────────────────────────────

    fn on_tap(&mut self, location: Point) -> Option<Command> {
        if self.panning || self.pinching {
            return None;
        }
        self.map_to_move(location, true)
    }

    fn on_one_finger(
        &mut self,
        phase: GesturePhase,
        location: Point,
        now: Instant,
    ) -> Option<Command> {
        if self.panning || self.pinching {
            trace!("one-finger sample ignored during two-finger gesture");
            return None;
        }
        if phase.is_terminal() {
            self.tracking = false;
            return None;
        }
        self.tracking = true;
        if !self.gate.admit(Channel::Move, now) {
            return None;
        }
        self.map_to_move(location, false)
    }

    fn on_pan(&mut self, phase: GesturePhase, translation: Vector) {
        if phase.is_terminal() {
            self.transform.commit_pan();
            self.panning = false;
        } else {
            self.tracking = false;
            self.panning = true;
            self.transform.apply_pan(translation);
        }
    }

    fn on_pinch(&mut self, phase: GesturePhase, scale: f64) {
        if phase.is_terminal() {
            self.transform.commit_zoom();
            self.pinching = false;
        } else {
            self.tracking = false;
            self.pinching = true;
            self.transform.apply_zoom(scale);
        }
    }

    fn on_scroll(
        &mut self,
        phase: GesturePhase,
        translation: f64,
        now: Instant,
    ) -> Option<Command> {
        if phase.is_terminal() {
            self.gate.reset_scroll_baseline();
            return None;
        }
        let delta = self.gate.admit_scroll(translation, now)?;
        Some(Command::Scroll { delta })
    }

    fn map_to_move(&mut self, location: Point, click: bool) -> Option<Command> {
        let mapped = match point_to_normalized(
            location,
            self.viewport,
            &self.offsets,
            self.transform.scale(),
        ) {
            Ok(m) => m,
            Err(e) => {
                debug!("touch not mapped: {e}");
                return None;
            }
        };
        self.overlay = mapped.overlay;
        Some(Command::Move {
            point: mapped.transmitted.clamped(),
            click,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
