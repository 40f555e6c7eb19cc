//! RemoteScreen: the remote display's aspect ratio.
//!
//! The video feed is shown aspect-fit, so the frame touches are normalized
//! against depends on the remote screen's width/height ratio.  It defaults to
//! 16:9 and is refetched from `GET screen_size` whenever the host changes.
//! Responses with a zero or negative dimension are ignored and the previous
//! ratio is kept.

use std::future::Future;
use std::sync::Arc;

use remote_touch_core::protocol::EncodedRequest;
use remote_touch_core::{decode_screen_size, fit_viewport, MappingError, Rect, Size};
use tokio::sync::{watch, Mutex};
use tracing::{debug, info};

use crate::application::host_target::HostTarget;
use crate::application::remote_control::fetch_from;
use crate::application::transport::{ControlError, ControlTransport};

/// Ratio used until the host reports its real screen size.
pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;

/// Outcome of one `GET screen_size` exchange, tagged with its host.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSizeResult {
    host: Option<String>,
    result: Result<f64, ControlError>,
}

/// Tracks the aspect ratio of the current host's screen.
pub struct RemoteScreen {
    transport: Arc<dyn ControlTransport>,
    host: HostTarget,
    aspect_ratio: f64,
}

impl RemoteScreen {
    pub fn new(transport: Arc<dyn ControlTransport>, host: HostTarget) -> Self {
        Self::with_default_ratio(transport, host, DEFAULT_ASPECT_RATIO)
    }

    /// Like [`new`](Self::new) with a different initial ratio.  A non-positive
    /// ratio falls back to 16:9.
    pub fn with_default_ratio(
        transport: Arc<dyn ControlTransport>,
        host: HostTarget,
        ratio: f64,
    ) -> Self {
        let aspect_ratio = if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            DEFAULT_ASPECT_RATIO
        };
        Self {
            transport,
            host,
            aspect_ratio,
        }
    }

    /// Width / height of the remote screen.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// The aspect-fit video frame inside `container`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError`] for an unusable container.
    pub fn viewport_in(&self, container: Size) -> Result<Rect, MappingError> {
        fit_viewport(container, self.aspect_ratio)
    }

    /// Starts a screen-size fetch for the current host.
    pub fn request(&self) -> impl Future<Output = ScreenSizeResult> + Send + 'static {
        let host = self.host.current();
        let transport = Arc::clone(&self.transport);
        async move {
            let (host, body) =
                fetch_from(transport.as_ref(), host, EncodedRequest::screen_size()).await;
            let result = body.and_then(|b| {
                let size = decode_screen_size(&b)?;
                size.aspect_ratio()
                    .ok_or_else(|| ControlError::DecodeFailure("invalid screen size".into()))
            });
            ScreenSizeResult { host, result }
        }
    }

    /// Applies a fetch result.  Returns `true` if the ratio changed.
    pub fn apply(&mut self, outcome: ScreenSizeResult) -> bool {
        if outcome.host != self.host.current() {
            debug!(fetched_for = ?outcome.host, "dropping screen size for a previous host");
            return false;
        }
        match outcome.result {
            Ok(ratio) if ratio != self.aspect_ratio => {
                info!(ratio, "remote aspect ratio updated");
                self.aspect_ratio = ratio;
                true
            }
            Ok(_) => false,
            Err(e) => {
                debug!("screen size unavailable, keeping {}: {e}", self.aspect_ratio);
                false
            }
        }
    }

    /// Fetches and applies the current host's screen size.
    pub async fn refresh(&mut self) -> f64 {
        let pending = self.request();
        let outcome = pending.await;
        self.apply(outcome);
        self.aspect_ratio
    }

    /// Switches to `new_host` and refetches the screen size.
    pub async fn on_host_changed(&mut self, new_host: &str) -> f64 {
        self.host.set(new_host);
        self.refresh().await
    }
}

/// Refreshes `screen` every time the host behind `changes` changes.
///
/// The lock is only held to start the request and to apply its result, never
/// across the network exchange.  Returns when the host target is dropped.
pub async fn follow_host_changes(
    screen: Arc<Mutex<RemoteScreen>>,
    mut changes: watch::Receiver<Option<String>>,
) {
    while changes.changed().await.is_ok() {
        let pending = screen.lock().await.request();
        let outcome = pending.await;
        screen.lock().await.apply(outcome);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
