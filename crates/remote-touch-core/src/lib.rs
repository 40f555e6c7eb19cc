//! # remote-touch-core
//!
//! Shared library for Remote Touch containing the viewport geometry, the
//! input throttle, and the remote control wire protocol.
//!
//! This crate is used by the client application and by anything that needs to
//! speak the remote host's control API.  It has zero dependencies on UI
//! toolkits, async runtimes, or network sockets.
//!
//! # Architecture overview (for beginners)
//!
//! Remote Touch turns a handheld touch screen into a trackpad and keyboard for
//! a remote computer.  The user looks at a live video feed of the remote
//! screen and touches it: one finger moves the remote cursor, a tap clicks,
//! two fingers pan the (zoomed) video, and a pinch zooms it.
//!
//! This crate (`remote-touch-core`) is the shared foundation.  It defines:
//!
//! - **`domain`** – Pure input-translation logic.  The `ViewTransform` holds the
//!   local pan/zoom state, the `mapping` module converts touch points into
//!   normalized remote-screen coordinates, and the `ThrottleGate` drops samples
//!   that arrive faster than the remote host needs them.
//!
//! - **`protocol`** – How commands travel over the network.  Each command is
//!   encoded into an HTTP method, a path, and a JSON body, and responses are
//!   decoded back into typed Rust structs.

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `remote_touch_core::ViewTransform` instead of the full module path.
pub use domain::geometry::{NormalizedPoint, Point, Rect, Size, Vector};
pub use domain::mapping::{
    center_point_from_transform, fit_viewport, point_to_normalized, CursorOffsets, MappedPoint,
    MappingError,
};
pub use domain::throttle::{Channel, ThrottleGate};
pub use domain::view_transform::ViewTransform;
pub use protocol::codec::{decode_app_list, decode_screen_size, encode_command, ProtocolError};
pub use protocol::messages::{Command, ControlAction};
