//! remote-touch-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does remote-touch-client do? (for beginners)
//!
//! The client runs on the handheld device.  It sits between the platform's
//! gesture recognizer (which says "one finger moved to (x, y)", "pinch is now
//! 1.8×", ...) and the remote host's HTTP control API.
//!
//! 1. The `GestureAdapter` receives classified gesture events and updates the
//!    local pan/zoom state or maps the touch to a normalized remote
//!    coordinate, throttling high-frequency samples.
//! 2. The `RemoteControlClient` turns each resulting command into an HTTP
//!    request and fires it at the host currently held by the `HostTarget`.
//! 3. The `AppInventory` and `RemoteScreen` fetch the host's application list
//!    and screen size for the surrounding UI.
//!
//! Video display, widget layout, haptics, and settings persistence belong to
//! the host UI toolkit and are not part of this crate.

/// Application layer: use cases for the client.
pub mod application;

/// Infrastructure layer: HTTP transport and configuration file loading.
pub mod infrastructure;
