//! RemoteControlClient: delivers commands to the remote host.
//!
//! # Delivery policy
//!
//! | Command                                   | Policy            |
//! |-------------------------------------------|-------------------|
//! | Move, Scroll, RunAction, ActivateApp, RightClick | fire-and-forget |
//! | Type                                      | response-checked  |
//!
//! Fire-and-forget calls return immediately.  The host is snapshotted and the
//! request encoded synchronously, then the exchange is spawned on the Tokio
//! runtime; its outcome is only logged.  A lost move sample is superseded by
//! the next one a few tens of milliseconds later.
//!
//! `Type` is awaited and reports success only for HTTP 200, because the
//! caller decides whether to clear the input field based on it.
//!
//! Without a configured host nothing is sent: fire-and-forget calls no-op and
//! checked calls fail with [`ControlError::NoHostConfigured`].

use std::sync::Arc;

use remote_touch_core::protocol::{encode_command, stream_url, EncodedRequest};
use remote_touch_core::{Command, ControlAction, NormalizedPoint};
use tokio::runtime::Handle;
use tracing::{debug, trace, warn};

use crate::application::gesture_adapter::CommandSink;
use crate::application::host_target::HostTarget;
use crate::application::transport::{ControlError, ControlTransport, TransportResponse};

/// HTTP status the host uses to acknowledge typed text.
const TYPE_ACK_STATUS: u16 = 200;

/// Sends commands to the host held by a [`HostTarget`].
#[derive(Clone)]
pub struct RemoteControlClient {
    transport: Arc<dyn ControlTransport>,
    host: HostTarget,
    port: u16,
    runtime: Handle,
}

impl RemoteControlClient {
    /// Creates a client.
    ///
    /// `runtime` is where fire-and-forget exchanges are spawned, which lets
    /// the client be driven from a non-async UI thread.
    pub fn new(
        transport: Arc<dyn ControlTransport>,
        host: HostTarget,
        port: u16,
        runtime: Handle,
    ) -> Self {
        Self {
            transport,
            host,
            port,
            runtime,
        }
    }

    /// The shared host target.
    pub fn host(&self) -> &HostTarget {
        &self.host
    }

    /// The shared transport, for sibling use cases that issue their own reads.
    pub fn transport(&self) -> Arc<dyn ControlTransport> {
        Arc::clone(&self.transport)
    }

    /// URL of the live video feed for the display layer, or `None` without a
    /// host.
    pub fn stream_url(&self) -> Option<String> {
        self.host
            .current()
            .and_then(|host| stream_url(&host, self.port))
    }

    // ── Fire-and-forget commands ──────────────────────────────────────────────

    /// Places the remote cursor; with `click` the host also clicks there.
    pub fn send_move(&self, point: NormalizedPoint, click: bool) {
        self.send(Command::Move { point, click });
    }

    /// Scrolls by `delta`.
    pub fn send_scroll(&self, delta: f64) {
        self.send(Command::Scroll { delta });
    }

    /// Triggers a fixed control action.
    pub fn run_action(&self, action: ControlAction) {
        self.send(Command::RunAction(action));
    }

    /// Force-quits the frontmost application on the host.
    pub fn force_quit(&self) {
        self.run_action(ControlAction::ForceQuit);
    }

    /// Brings `name` to the front on the host.
    pub fn activate_app(&self, name: &str) {
        self.send(Command::ActivateApp {
            name: name.to_string(),
        });
    }

    /// Right-clicks at the current cursor position.
    pub fn right_click(&self) {
        self.send(Command::RightClick);
    }

    /// Sends any command without awaiting the outcome.
    ///
    /// Returns `false` if nothing was sent (no host, or the command could not
    /// be encoded).  The network outcome itself is never reported.
    pub fn send(&self, command: Command) -> bool {
        let kind = command.kind();
        let Some(host) = self.host.current() else {
            debug!(kind, "no remote host configured; command dropped");
            return false;
        };
        let request = match encode_command(&command) {
            Ok(r) => r,
            Err(e) => {
                warn!(kind, "could not encode command: {e}");
                return false;
            }
        };

        let transport = Arc::clone(&self.transport);
        let high_frequency = command.is_high_frequency();
        self.runtime.spawn(async move {
            let outcome = transport.execute(&host, request).await;
            log_fire_and_forget(kind, high_frequency, outcome);
        });
        true
    }

    // ── Response-checked commands ─────────────────────────────────────────────

    /// Sends `command` and waits for the host's answer.
    ///
    /// For one-shot callers such as the command-line tool, which would
    /// otherwise exit before a spawned exchange completes.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::NoHostConfigured`] without a host,
    /// [`ControlError::InvalidRequest`] if the command cannot be encoded, and
    /// [`ControlError::NonSuccessStatus`] for a non-2xx answer.
    pub async fn send_and_confirm(&self, command: Command) -> Result<u16, ControlError> {
        let host = self.host.current().ok_or(ControlError::NoHostConfigured)?;
        let request = encode_command(&command)?;
        let response = self.transport.execute(&host, request).await?;
        if response.is_success() {
            trace!(kind = command.kind(), status = response.status, "command confirmed");
            Ok(response.status)
        } else {
            Err(ControlError::NonSuccessStatus(response.status))
        }
    }

    /// Types `text` on the host and reports whether the host acknowledged it.
    ///
    /// Every failure, including a missing host, yields `false`.
    pub async fn send_type(&self, text: &str) -> bool {
        match self.try_send_type(text).await {
            Ok(()) => true,
            Err(e) => {
                warn!("type command failed: {e}");
                false
            }
        }
    }

    /// Like [`send_type`](Self::send_type) but returns the failure kind.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::NoHostConfigured`] before any network attempt,
    /// [`ControlError::TransportFailure`] if the host was unreachable, and
    /// [`ControlError::NonSuccessStatus`] for any status other than 200.
    pub async fn try_send_type(&self, text: &str) -> Result<(), ControlError> {
        let host = self.host.current().ok_or(ControlError::NoHostConfigured)?;
        let request = encode_command(&Command::Type {
            text: text.to_string(),
        })?;
        let response = self.transport.execute(&host, request).await?;
        if response.status == TYPE_ACK_STATUS {
            debug!(chars = text.chars().count(), "text delivered");
            Ok(())
        } else {
            Err(ControlError::NonSuccessStatus(response.status))
        }
    }
}

impl CommandSink for RemoteControlClient {
    fn dispatch(&self, command: Command) {
        self.send(command);
    }
}

/// Snapshots the host and runs one read request against it.
///
/// Shared by the use cases that fetch data from the host; the returned host
/// string lets callers tag the result with the host it belongs to.
pub(crate) async fn fetch_from(
    transport: &dyn ControlTransport,
    host: Option<String>,
    request: EncodedRequest,
) -> (Option<String>, Result<Vec<u8>, ControlError>) {
    let Some(h) = host.clone() else {
        return (None, Err(ControlError::NoHostConfigured));
    };
    let result = match transport.execute(&h, request).await {
        Ok(resp) => resp.into_success_body(),
        Err(e) => Err(e),
    };
    (host, result)
}

fn log_fire_and_forget(
    kind: &'static str,
    high_frequency: bool,
    outcome: Result<TransportResponse, ControlError>,
) {
    match outcome {
        Ok(resp) if resp.is_success() => trace!(kind, status = resp.status, "command delivered"),
        Ok(resp) if high_frequency => {
            debug!(kind, status = resp.status, "command rejected by host")
        }
        Ok(resp) => warn!(kind, status = resp.status, "command rejected by host"),
        Err(e) if high_frequency => debug!(kind, "command not delivered: {e}"),
        Err(e) => warn!(kind, "command not delivered: {e}"),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
