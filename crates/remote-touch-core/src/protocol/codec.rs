//! HTTP/JSON codec for the remote control API.
//!
//! Every command becomes an [`EncodedRequest`]: a method, a path relative to
//! the host's base URL, and an optional JSON body.  The codec never touches the
//! network; the client's transport layer sends the request.
//!
//! Wire format:
//! ```text
//! POST http://{host}:8000/action/move        {"x":0.48,"y":0.45,"click":false}
//! POST http://{host}:8000/action/scroll      {"delta":25.0}
//! POST http://{host}:8000/action/type        {"text":"hello"}
//! POST http://{host}:8000/action/command     {"command":"run"}
//! POST http://{host}:8000/action/activate    {"app_name":"Safari"}
//! POST http://{host}:8000/action/right_click (no body)
//! GET  http://{host}:8000/apps               -> {"apps":["Safari","Terminal"]}
//! GET  http://{host}:8000/screen_size        -> {"width":1920,"height":1080}
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::protocol::messages::{
    ActivateBody, AppListResponse, Command, CommandBody, MoveBody, ScreenSizeResponse,
    ScrollBody, TypeBody, PATH_ACTIVATE, PATH_APPS, PATH_COMMAND, PATH_MOVE, PATH_RIGHT_CLICK,
    PATH_SCREEN_SIZE, PATH_SCROLL, PATH_STREAM, PATH_TYPE,
};

/// Port the remote host's control API listens on.
pub const DEFAULT_CONTROL_PORT: u16 = 8000;

/// Errors that can occur during request encoding or response decoding.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A response body is not the expected JSON shape.
    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A numeric field that must be finite is NaN or infinite.
    #[error("non-finite value for '{field}'")]
    NonFinite { field: &'static str },

    /// The host reported a screen size that cannot produce an aspect ratio.
    #[error("invalid screen size {width}x{height}")]
    InvalidScreenSize { width: f64, height: f64 },
}

/// HTTP method of an encoded request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A command translated into HTTP terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRequest {
    pub method: HttpMethod,
    /// Path relative to the base URL, without a leading slash.
    pub path: &'static str,
    /// JSON body, if the endpoint takes one.
    pub body: Option<Vec<u8>>,
}

impl EncodedRequest {
    /// A body-less `GET` request.
    pub fn get(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Get,
            path,
            body: None,
        }
    }

    fn post_json<T: Serialize>(path: &'static str, body: &T) -> Result<Self, ProtocolError> {
        let bytes = serde_json::to_vec(body).map_err(ProtocolError::Encode)?;
        Ok(Self {
            method: HttpMethod::Post,
            path,
            body: Some(bytes),
        })
    }

    /// The `GET apps` request.
    pub fn list_apps() -> Self {
        Self::get(PATH_APPS)
    }

    /// The `GET screen_size` request.
    pub fn screen_size() -> Self {
        Self::get(PATH_SCREEN_SIZE)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Encodes a [`Command`] into an HTTP request.
///
/// Move coordinates are clamped to `[0, 1]` here, whatever the caller passed
/// in, so no out-of-range cursor position can reach the host.
///
/// # Errors
///
/// Returns [`ProtocolError::NonFinite`] for a NaN/infinite scroll delta and
/// [`ProtocolError::Encode`] if serialization fails.
///
/// # Examples
///
/// ```rust
/// use remote_touch_core::protocol::{encode_command, Command, HttpMethod};
/// use remote_touch_core::NormalizedPoint;
///
/// let req = encode_command(&Command::Move {
///     point: NormalizedPoint::new(1.2, -0.3),
///     click: false,
/// })
/// .unwrap();
/// assert_eq!(req.method, HttpMethod::Post);
/// assert_eq!(req.path, "action/move");
/// assert_eq!(req.body.unwrap(), br#"{"x":1.0,"y":0.0,"click":false}"#);
/// ```
pub fn encode_command(command: &Command) -> Result<EncodedRequest, ProtocolError> {
    match command {
        Command::Move { point, click } => {
            let p = point.clamped();
            EncodedRequest::post_json(
                PATH_MOVE,
                &MoveBody {
                    x: p.x,
                    y: p.y,
                    click: *click,
                },
            )
        }
        Command::Scroll { delta } => {
            if !delta.is_finite() {
                return Err(ProtocolError::NonFinite { field: "delta" });
            }
            EncodedRequest::post_json(PATH_SCROLL, &ScrollBody { delta: *delta })
        }
        Command::Type { text } => {
            EncodedRequest::post_json(PATH_TYPE, &TypeBody { text: text.clone() })
        }
        Command::RunAction(action) => {
            EncodedRequest::post_json(PATH_COMMAND, &CommandBody { command: *action })
        }
        Command::ActivateApp { name } => EncodedRequest::post_json(
            PATH_ACTIVATE,
            &ActivateBody {
                app_name: name.clone(),
            },
        ),
        Command::RightClick => Ok(EncodedRequest {
            method: HttpMethod::Post,
            path: PATH_RIGHT_CLICK,
            body: None,
        }),
    }
}

/// Decodes the body of a `GET apps` response into the ordered app list.
///
/// # Errors
///
/// Returns [`ProtocolError::Decode`] if the body is not `{"apps": [string]}`.
pub fn decode_app_list(body: &[u8]) -> Result<Vec<String>, ProtocolError> {
    let parsed: AppListResponse = serde_json::from_slice(body).map_err(ProtocolError::Decode)?;
    Ok(parsed.apps)
}

/// Decodes the body of a `GET screen_size` response.
///
/// # Errors
///
/// Returns [`ProtocolError::Decode`] for malformed JSON and
/// [`ProtocolError::InvalidScreenSize`] when either dimension is not positive.
pub fn decode_screen_size(body: &[u8]) -> Result<ScreenSizeResponse, ProtocolError> {
    let parsed: ScreenSizeResponse =
        serde_json::from_slice(body).map_err(ProtocolError::Decode)?;
    if parsed.aspect_ratio().is_none() {
        return Err(ProtocolError::InvalidScreenSize {
            width: parsed.width,
            height: parsed.height,
        });
    }
    Ok(parsed)
}

// ── URLs ──────────────────────────────────────────────────────────────────────

/// `http://{host}:{port}` for a configured host; `None` when `host` is blank.
pub fn base_url(host: &str, port: u16) -> Option<String> {
    let host = host.trim();
    if host.is_empty() {
        None
    } else {
        Some(format!("http://{host}:{port}"))
    }
}

/// Full URL of `path` on the host, or `None` when `host` is blank.
pub fn request_url(host: &str, port: u16, path: &str) -> Option<String> {
    base_url(host, port).map(|base| format!("{base}/{path}"))
}

/// URL of the live video feed for the display layer.
pub fn stream_url(host: &str, port: u16) -> Option<String> {
    request_url(host, port, PATH_STREAM)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::NormalizedPoint;
    use crate::protocol::messages::ControlAction;

    fn body_json(req: &EncodedRequest) -> serde_json::Value {
        serde_json::from_slice(req.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn test_encode_move_clamps_coordinates() {
        // Arrange
        let cmd = Command::Move {
            point: NormalizedPoint::new(1.2, -0.3),
            click: false,
        };

        // Act
        let req = encode_command(&cmd).unwrap();

        // Assert
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "action/move");
        assert_eq!(
            body_json(&req),
            serde_json::json!({"x": 1.0, "y": 0.0, "click": false})
        );
    }

    #[test]
    fn test_encode_tap_sets_click_flag() {
        let req = encode_command(&Command::Move {
            point: NormalizedPoint::new(0.25, 0.5),
            click: true,
        })
        .unwrap();
        assert_eq!(
            body_json(&req),
            serde_json::json!({"x": 0.25, "y": 0.5, "click": true})
        );
    }

    #[test]
    fn test_encode_scroll_body() {
        let req = encode_command(&Command::Scroll { delta: -12.5 }).unwrap();
        assert_eq!(req.path, "action/scroll");
        assert_eq!(body_json(&req), serde_json::json!({"delta": -12.5}));
    }

    #[test]
    fn test_encode_scroll_rejects_nan_delta() {
        let result = encode_command(&Command::Scroll { delta: f64::NAN });
        assert!(matches!(
            result,
            Err(ProtocolError::NonFinite { field: "delta" })
        ));
    }

    #[test]
    fn test_encode_type_body_preserves_unicode() {
        let req = encode_command(&Command::Type {
            text: "héllo \"world\"".to_string(),
        })
        .unwrap();
        assert_eq!(req.path, "action/type");
        assert_eq!(
            body_json(&req),
            serde_json::json!({"text": "héllo \"world\""})
        );
    }

    #[test]
    fn test_encode_run_action_uses_wire_names() {
        for (action, name) in [
            (ControlAction::Run, "run"),
            (ControlAction::Stop, "stop"),
            (ControlAction::ForceQuit, "force_quit"),
        ] {
            let req = encode_command(&Command::RunAction(action)).unwrap();
            assert_eq!(req.path, "action/command");
            assert_eq!(body_json(&req), serde_json::json!({ "command": name }));
        }
    }

    #[test]
    fn test_encode_activate_uses_app_name_key() {
        let req = encode_command(&Command::ActivateApp {
            name: "Safari".to_string(),
        })
        .unwrap();
        assert_eq!(req.path, "action/activate");
        assert_eq!(body_json(&req), serde_json::json!({"app_name": "Safari"}));
    }

    #[test]
    fn test_encode_right_click_has_no_body() {
        let req = encode_command(&Command::RightClick).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "action/right_click");
        assert!(req.body.is_none());
    }

    #[test]
    fn test_decode_app_list_preserves_order() {
        let apps = decode_app_list(br#"{"apps":["Terminal","Safari","Xcode"]}"#).unwrap();
        assert_eq!(apps, vec!["Terminal", "Safari", "Xcode"]);
    }

    #[test]
    fn test_decode_app_list_rejects_malformed_json() {
        let err = decode_app_list(b"{\"apps\": [1, 2").unwrap_err();
        assert!(matches!(err, ProtocolError::Decode(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_decode_screen_size_accepts_integer_dimensions() {
        let size = decode_screen_size(br#"{"width":1920,"height":1080}"#).unwrap();
        assert_eq!(size.width, 1920.0);
        assert_eq!(size.height, 1080.0);
    }

    #[test]
    fn test_decode_screen_size_rejects_zero_height() {
        let err = decode_screen_size(br#"{"width":1920,"height":0}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidScreenSize { .. }));
    }

    #[test]
    fn test_request_url_joins_host_port_and_path() {
        assert_eq!(
            request_url("192.168.1.20", DEFAULT_CONTROL_PORT, "apps").as_deref(),
            Some("http://192.168.1.20:8000/apps")
        );
    }

    #[test]
    fn test_blank_host_has_no_urls() {
        assert_eq!(base_url("   ", 8000), None);
        assert_eq!(stream_url("", 8000), None);
    }

    #[test]
    fn test_stream_url_points_at_stream_path() {
        assert_eq!(
            stream_url(" studio.local ", 8000).as_deref(),
            Some("http://studio.local:8000/stream")
        );
    }
}
