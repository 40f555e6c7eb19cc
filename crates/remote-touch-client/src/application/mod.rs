//! Application layer use cases for the client application.
//!
//! # What use cases does the client have?
//!
//! - **`host_target`** – The single, explicitly owned address of the remote
//!   host, with change notification.
//!
//! - **`transport`** – The `ControlTransport` trait that actually sends an
//!   encoded request, plus the `ControlError` kinds every operation reports.
//!
//! - **`remote_control`** – Sends commands: fire-and-forget for pointer and
//!   action commands, response-checked for typed text.
//!
//! - **`gesture_adapter`** – The gesture state machine that routes touch
//!   events to the view transform, the coordinate mapper, and the throttle.
//!
//! - **`app_inventory`** / **`remote_screen`** – Fetch and cache the host's
//!   application list and screen aspect ratio.
//!
//! - **`prompt_input`** – The text composition field whose contents are sent
//!   with a checked `Type` command.

pub mod app_inventory;
pub mod gesture_adapter;
pub mod host_target;
pub mod prompt_input;
pub mod remote_control;
pub mod remote_screen;
pub mod transport;
