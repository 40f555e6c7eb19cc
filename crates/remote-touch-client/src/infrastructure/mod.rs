//! Infrastructure layer for the client application.
//!
//! Contains the adapters that touch the outside world: the HTTP transport to
//! the remote host and the TOML configuration file.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `remote_touch_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`http`** – `reqwest`-based implementation of `ControlTransport`.
//!
//! - **`config`** – Loads `ClientConfig` from a TOML file, falling back to
//!   defaults when the file or individual keys are absent.

pub mod config;
pub mod http;
