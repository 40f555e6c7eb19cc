//! TOML-based configuration for the client.
//!
//! Example `remote-touch.toml`:
//!
//! ```toml
//! [remote]
//! host = "192.168.1.20"
//! port = 8000
//! request_timeout_ms = 5000
//!
//! [input]
//! move_interval_ms = 30
//! scroll_interval_ms = 50
//! screen_lead_x = -20.0
//! screen_lead_y = -50.0
//! overlay_hotspot = 10.0
//! default_aspect_ratio = 1.7777777777777777
//! clear_on_send = true
//!
//! [logging]
//! log_level = "info"
//! ```
//!
//! # Serde default values
//!
//! Every field has a `#[serde(default = "...")]` helper, so a missing file,
//! a missing section, or a missing key all fall back to the built-in value.
//! The file is only ever read: saving user settings is the host UI's job.

use std::path::{Path, PathBuf};
use std::time::Duration;

use remote_touch_core::protocol::DEFAULT_CONTROL_PORT;
use remote_touch_core::{CursorOffsets, Vector};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is outside its allowed range.
    #[error("invalid config value for '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the remote host's control API lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteConfig {
    /// Host name or IP address.  Empty means "not configured".
    #[serde(default)]
    pub host: String,
    /// Port of the control API and video stream.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

/// Touch translation tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Minimum spacing between move samples sent to the host.
    #[serde(default = "default_move_interval_ms")]
    pub move_interval_ms: u64,
    /// Minimum spacing between scroll samples sent to the host.
    #[serde(default = "default_scroll_interval_ms")]
    pub scroll_interval_ms: u64,
    /// Horizontal cursor lead in view points (divided by zoom).
    #[serde(default = "default_screen_lead_x")]
    pub screen_lead_x: f64,
    /// Vertical cursor lead in view points (divided by zoom).
    #[serde(default = "default_screen_lead_y")]
    pub screen_lead_y: f64,
    /// Offset from cursor tip to the drawn indicator, both axes.
    #[serde(default = "default_overlay_hotspot")]
    pub overlay_hotspot: f64,
    /// Remote aspect ratio assumed until the host reports its screen size.
    #[serde(default = "default_aspect_ratio")]
    pub default_aspect_ratio: f64,
    /// Clear the prompt field after the host acknowledges typed text.
    #[serde(default = "default_true")]
    pub clear_on_send: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_port() -> u16 {
    DEFAULT_CONTROL_PORT
}
fn default_request_timeout_ms() -> u64 {
    5_000
}
fn default_move_interval_ms() -> u64 {
    30
}
fn default_scroll_interval_ms() -> u64 {
    50
}
fn default_screen_lead_x() -> f64 {
    CursorOffsets::DEFAULT_SCREEN_LEAD.dx
}
fn default_screen_lead_y() -> f64 {
    CursorOffsets::DEFAULT_SCREEN_LEAD.dy
}
fn default_overlay_hotspot() -> f64 {
    CursorOffsets::DEFAULT_VISUAL_HOTSPOT.dx
}
fn default_aspect_ratio() -> f64 {
    16.0 / 9.0
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_port(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_interval_ms: default_move_interval_ms(),
            scroll_interval_ms: default_scroll_interval_ms(),
            screen_lead_x: default_screen_lead_x(),
            screen_lead_y: default_screen_lead_y(),
            overlay_hotspot: default_overlay_hotspot(),
            default_aspect_ratio: default_aspect_ratio(),
            clear_on_send: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

// ── Derived values ────────────────────────────────────────────────────────────

impl RemoteConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl InputConfig {
    pub fn move_interval(&self) -> Duration {
        Duration::from_millis(self.move_interval_ms)
    }

    pub fn scroll_interval(&self) -> Duration {
        Duration::from_millis(self.scroll_interval_ms)
    }

    pub fn cursor_offsets(&self) -> CursorOffsets {
        CursorOffsets {
            screen_lead: Vector::new(self.screen_lead_x, self.screen_lead_y),
            visual_hotspot: Vector::new(self.overlay_hotspot, self.overlay_hotspot),
        }
    }
}

impl ClientConfig {
    /// Checks values that parse but cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.remote.port == 0 {
            return Err(invalid("remote.port", "must be non-zero"));
        }
        if self.remote.request_timeout_ms == 0 {
            return Err(invalid("remote.request_timeout_ms", "must be non-zero"));
        }
        let ratio = self.input.default_aspect_ratio;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(invalid(
                "input.default_aspect_ratio",
                format!("must be a positive number, got {ratio}"),
            ));
        }
        for (key, v) in [
            ("input.screen_lead_x", self.input.screen_lead_x),
            ("input.screen_lead_y", self.input.screen_lead_y),
            ("input.overlay_hotspot", self.input.overlay_hotspot),
        ] {
            if !v.is_finite() {
                return Err(invalid(key, "must be a finite number"));
            }
        }
        Ok(())
    }
}

fn invalid(key: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.into(),
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Parses and validates configuration from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed TOML and
/// [`ConfigError::Invalid`] for out-of-range values.
pub fn parse_config(content: &str) -> Result<ClientConfig, ConfigError> {
    let cfg: ClientConfig = toml::from_str(content)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Loads `ClientConfig` from `path`, returning `ClientConfig::default()` if
/// the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// plus any error from [`parse_config`].
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ClientConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
