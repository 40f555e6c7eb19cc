//! Remote control message types.
//!
//! [`Command`] is the closed set of things the client can ask the remote host
//! to do.  The `*Body` structs are the exact JSON shapes the host's control
//! API expects, and the `*Response` structs are what it sends back.

use serde::{Deserialize, Serialize};

use crate::domain::geometry::NormalizedPoint;

// ── Endpoint paths ────────────────────────────────────────────────────────────

pub const PATH_MOVE: &str = "action/move";
pub const PATH_SCROLL: &str = "action/scroll";
pub const PATH_TYPE: &str = "action/type";
pub const PATH_COMMAND: &str = "action/command";
pub const PATH_ACTIVATE: &str = "action/activate";
pub const PATH_RIGHT_CLICK: &str = "action/right_click";
pub const PATH_APPS: &str = "apps";
pub const PATH_SCREEN_SIZE: &str = "screen_size";
pub const PATH_STREAM: &str = "stream";

// ── Control actions ───────────────────────────────────────────────────────────

/// Named actions accepted by the `action/command` endpoint.
///
/// Kept as an enum rather than a free-form string so the set of commands the
/// client can trigger on the host stays fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlAction {
    /// Start the host's current task.
    Run,
    /// Stop the host's current task.
    Stop,
    /// Force-quit the frontmost application on the host.
    ForceQuit,
}

impl ControlAction {
    pub const ALL: [ControlAction; 3] = [
        ControlAction::Run,
        ControlAction::Stop,
        ControlAction::ForceQuit,
    ];

    /// The wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlAction::Run => "run",
            ControlAction::Stop => "stop",
            ControlAction::ForceQuit => "force_quit",
        }
    }
}

impl std::fmt::Display for ControlAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ControlAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "run" => Ok(ControlAction::Run),
            "stop" => Ok(ControlAction::Stop),
            "force_quit" => Ok(ControlAction::ForceQuit),
            other => Err(format!(
                "unknown control action '{other}' (expected run, stop, or force_quit)"
            )),
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// A single request to the remote host.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Place the cursor, optionally clicking at the new position in the same
    /// request.
    Move { point: NormalizedPoint, click: bool },
    /// Scroll by `delta` (positive = content moves down).
    Scroll { delta: f64 },
    /// Type a string of text at the focused element.
    Type { text: String },
    /// Trigger one of the fixed control actions.
    RunAction(ControlAction),
    /// Bring the named application to the front.
    ActivateApp { name: String },
    /// Right-click at the current cursor position.
    RightClick,
}

impl Command {
    /// Short label used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Move { click: true, .. } => "click",
            Command::Move { .. } => "move",
            Command::Scroll { .. } => "scroll",
            Command::Type { .. } => "type",
            Command::RunAction(_) => "command",
            Command::ActivateApp { .. } => "activate",
            Command::RightClick => "right_click",
        }
    }

    /// Returns `true` for commands sampled at gesture rate, whose failures
    /// are not worth more than a debug log line.
    pub fn is_high_frequency(&self) -> bool {
        matches!(self, Command::Move { click: false, .. } | Command::Scroll { .. })
    }
}

// ── Request bodies ────────────────────────────────────────────────────────────

/// Body of `POST action/move`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveBody {
    pub x: f64,
    pub y: f64,
    pub click: bool,
}

/// Body of `POST action/scroll`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollBody {
    pub delta: f64,
}

/// Body of `POST action/type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeBody {
    pub text: String,
}

/// Body of `POST action/command`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommandBody {
    pub command: ControlAction,
}

/// Body of `POST action/activate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivateBody {
    pub app_name: String,
}

// ── Responses ─────────────────────────────────────────────────────────────────

/// Response of `GET apps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppListResponse {
    pub apps: Vec<String>,
}

/// Response of `GET screen_size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSizeResponse {
    pub width: f64,
    pub height: f64,
}

impl ScreenSizeResponse {
    /// Width divided by height, or `None` if either dimension is not a
    /// positive finite number.
    pub fn aspect_ratio(&self) -> Option<f64> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        (usable(self.width) && usable(self.height)).then(|| self.width / self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_action_wire_names() {
        assert_eq!(ControlAction::Run.as_str(), "run");
        assert_eq!(ControlAction::Stop.as_str(), "stop");
        assert_eq!(ControlAction::ForceQuit.as_str(), "force_quit");
    }

    #[test]
    fn test_control_action_from_str_rejects_unknown_names() {
        assert_eq!("stop".parse::<ControlAction>(), Ok(ControlAction::Stop));
        assert!("reboot".parse::<ControlAction>().is_err());
    }

    #[test]
    fn test_command_body_serializes_action_as_snake_case() {
        let json = serde_json::to_string(&CommandBody {
            command: ControlAction::ForceQuit,
        })
        .unwrap();
        assert_eq!(json, r#"{"command":"force_quit"}"#);
    }

    #[test]
    fn test_screen_size_aspect_ratio_ignores_zero_dimension() {
        let r = ScreenSizeResponse {
            width: 0.0,
            height: 1080.0,
        };
        assert_eq!(r.aspect_ratio(), None);
    }

    #[test]
    fn test_command_kind_distinguishes_click_from_move() {
        let click = Command::Move {
            point: NormalizedPoint::CENTER,
            click: true,
        };
        let mv = Command::Move {
            point: NormalizedPoint::CENTER,
            click: false,
        };
        assert_eq!(click.kind(), "click");
        assert_eq!(mv.kind(), "move");
        assert!(mv.is_high_frequency());
        assert!(!click.is_high_frequency());
    }
}
