//! Remote Touch command-line client: entry point.
//!
//! Sends one command to the remote host's control API and reports the
//! outcome.  Useful for scripting the host and for checking that a host is
//! reachable before pointing the touch client at it.
//!
//! # Usage
//!
//! ```text
//! remote-touch [OPTIONS] <COMMAND>
//!
//! Options:
//!   --config <PATH>   TOML config file [default: remote-touch.toml]
//!   --host   <HOST>   Remote host, overrides the config file
//!   --port   <PORT>   Control API port, overrides the config file
//!
//! Commands:
//!   move, click, tap, scroll, type, command, right-click,
//!   apps, activate, screen-size, stream-url
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable            | Description                               |
//! |---------------------|-------------------------------------------|
//! | `REMOTE_TOUCH_HOST` | Remote host (same as `--host`)            |
//! | `REMOTE_TOUCH_PORT` | Control API port (same as `--port`)       |
//! | `RUST_LOG`          | Log filter, overrides `logging.log_level` |
//!
//! Unlike the touch UI, every command here waits for the host's answer so the
//! process does not exit before the request is on the wire.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use remote_touch_client::application::app_inventory::AppInventory;
use remote_touch_client::application::gesture_adapter::{
    CommandSink, GestureAdapter, GestureEvent,
};
use remote_touch_client::application::host_target::HostTarget;
use remote_touch_client::application::remote_control::RemoteControlClient;
use remote_touch_client::application::remote_screen::RemoteScreen;
use remote_touch_client::application::transport::ControlTransport;
use remote_touch_client::infrastructure::config::{load_config, ClientConfig};
use remote_touch_client::infrastructure::http::HttpTransport;
use remote_touch_core::{Command, ControlAction, NormalizedPoint, Point, Size};
use tokio::runtime::Handle;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Remote Touch command-line client.
#[derive(Debug, Parser)]
#[command(
    name = "remote-touch",
    about = "Send touch-style control commands to a remote host",
    version
)]
struct Cli {
    /// Path to the TOML configuration file.  A missing file means defaults.
    #[arg(long, default_value = "remote-touch.toml", env = "REMOTE_TOUCH_CONFIG")]
    config: PathBuf,

    /// Host name or IP address of the remote host.
    #[arg(long, env = "REMOTE_TOUCH_HOST")]
    host: Option<String>,

    /// Port of the host's control API.
    #[arg(long, env = "REMOTE_TOUCH_PORT")]
    port: Option<u16>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Move the cursor to a normalized position (0..1 on both axes).
    Move { x: f64, y: f64 },
    /// Move the cursor to a normalized position and click.
    Click { x: f64, y: f64 },
    /// Tap at a point in a view of the given size, as the touch UI would.
    Tap {
        x: f64,
        y: f64,
        /// Width of the view showing the video feed, in points.
        #[arg(long, default_value_t = 390.0)]
        view_width: f64,
        /// Height of the view showing the video feed, in points.
        #[arg(long, default_value_t = 844.0)]
        view_height: f64,
    },
    /// Scroll by a signed delta.
    Scroll {
        #[arg(allow_negative_numbers = true)]
        delta: f64,
    },
    /// Type text on the host.
    Type { text: String },
    /// Run a control action: run, stop or force_quit.
    Command { action: ControlAction },
    /// Right-click at the current cursor position.
    RightClick,
    /// List the host's switchable applications.
    Apps,
    /// Bring an application to the front.
    Activate { name: String },
    /// Print the host's screen aspect ratio.
    ScreenSize,
    /// Print the URL of the host's video stream.
    StreamUrl,
}

impl Cli {
    /// Applies the command-line overrides on top of the loaded config.
    fn apply_overrides(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(host) = &self.host {
            config.remote.host = host.clone();
        }
        if let Some(port) = self.port {
            config.remote.port = port;
        }
        config
    }
}

// ── Command execution ─────────────────────────────────────────────────────────

/// Commands produced by the gesture adapter are confirmed by the caller.
struct Deferred;

impl CommandSink for Deferred {
    fn dispatch(&self, command: Command) {
        debug!(kind = command.kind(), "gesture produced command");
    }
}

async fn confirm(client: &RemoteControlClient, command: Command) -> anyhow::Result<()> {
    let kind = command.kind();
    let status = client
        .send_and_confirm(command)
        .await
        .with_context(|| format!("{kind} command failed"))?;
    println!("{kind}: HTTP {status}");
    Ok(())
}

async fn run(command: CliCommand, config: &ClientConfig) -> anyhow::Result<()> {
    let transport: Arc<dyn ControlTransport> = Arc::new(
        HttpTransport::new(config.remote.port, config.remote.request_timeout())
            .context("failed to create HTTP transport")?,
    );
    let host = HostTarget::new(&config.remote.host);
    let client = RemoteControlClient::new(
        Arc::clone(&transport),
        host.clone(),
        config.remote.port,
        Handle::current(),
    );

    match command {
        CliCommand::Move { x, y } => {
            let point = NormalizedPoint::new(x, y);
            confirm(&client, Command::Move { point, click: false }).await
        }
        CliCommand::Click { x, y } => {
            let point = NormalizedPoint::new(x, y);
            confirm(&client, Command::Move { point, click: true }).await
        }
        CliCommand::Tap {
            x,
            y,
            view_width,
            view_height,
        } => {
            let mut screen = RemoteScreen::with_default_ratio(
                Arc::clone(&transport),
                host.clone(),
                config.input.default_aspect_ratio,
            );
            screen.refresh().await;
            let frame = screen
                .viewport_in(Size::new(view_width, view_height))
                .context("view size cannot show the remote screen")?;
            let mut adapter = GestureAdapter::with_intervals(
                Arc::new(Deferred),
                frame.size,
                config.input.move_interval(),
                config.input.scroll_interval(),
                config.input.cursor_offsets(),
            );
            let location = frame.to_local(Point::new(x, y));
            let Some(command) = adapter.handle(GestureEvent::Tap { location }, Instant::now())
            else {
                bail!("tap produced no command");
            };
            if let Command::Move { point, .. } = &command {
                info!(x = point.x, y = point.y, "tap mapped to remote position");
            }
            confirm(&client, command).await
        }
        CliCommand::Scroll { delta } => confirm(&client, Command::Scroll { delta }).await,
        CliCommand::Type { text } => {
            client
                .try_send_type(&text)
                .await
                .context("type command failed")?;
            println!("type: delivered");
            Ok(())
        }
        CliCommand::Command { action } => confirm(&client, Command::RunAction(action)).await,
        CliCommand::RightClick => confirm(&client, Command::RightClick).await,
        CliCommand::Activate { name } => confirm(&client, Command::ActivateApp { name }).await,
        CliCommand::Apps => {
            let mut inventory = AppInventory::new(transport, host);
            inventory.fetch().await;
            if let Some(err) = inventory.error() {
                bail!("could not load applications: {err}");
            }
            for app in inventory.apps() {
                println!("{app}");
            }
            Ok(())
        }
        CliCommand::ScreenSize => {
            if !host.is_configured() {
                bail!("no remote host configured");
            }
            let mut screen = RemoteScreen::with_default_ratio(
                transport,
                host,
                config.input.default_aspect_ratio,
            );
            println!("{:.4}", screen.refresh().await);
            Ok(())
        }
        CliCommand::StreamUrl => {
            let url = client.stream_url().context("no remote host configured")?;
            println!("{url}");
            Ok(())
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// 1. CLI arguments are parsed with `clap`.
/// 2. The config file is loaded and the CLI overrides applied.
/// 3. `tracing_subscriber` is initialised; `RUST_LOG` wins over the config's
///    `logging.log_level`.
/// 4. The subcommand runs against the configured host.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;
    let config = cli.apply_overrides(config);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .init();

    debug!(host = %config.remote.host, port = config.remote.port, "configuration resolved");
    run(cli.command, &config).await
}

// ── Tests ─────────────────────────────────────────────────────────────────────
