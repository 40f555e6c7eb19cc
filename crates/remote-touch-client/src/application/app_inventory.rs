//! AppInventory: the list of applications the user can switch to on the host.
//!
//! A fetch is split in two so the owner never holds its state across the
//! network round trip:
//!
//! 1. [`AppInventory::request`] snapshots the host and returns a `'static`
//!    future that performs the `GET apps` exchange.
//! 2. [`AppInventory::apply`] folds the result back in on the owning thread.
//!
//! Each result is tagged with the host it was fetched from.  If the host has
//! changed in the meantime the result is stale and dropped.  [`fetch`] does
//! both steps for callers that own the inventory in an async context.
//!
//! [`fetch`]: AppInventory::fetch

use std::future::Future;
use std::sync::Arc;

use remote_touch_core::decode_app_list;
use remote_touch_core::protocol::EncodedRequest;
use tracing::{debug, info, warn};

use crate::application::host_target::HostTarget;
use crate::application::remote_control::fetch_from;
use crate::application::transport::{ControlError, ControlTransport};

/// Outcome of one `GET apps` exchange, tagged for staleness checks.
#[derive(Debug, Clone, PartialEq)]
pub struct AppListResult {
    host: Option<String>,
    generation: u64,
    result: Result<Vec<String>, ControlError>,
}

/// Cached application list plus the fetch error and loading flag shown by
/// the app switcher.
pub struct AppInventory {
    transport: Arc<dyn ControlTransport>,
    host: HostTarget,
    apps: Vec<String>,
    error: Option<String>,
    loading: bool,
    generation: u64,
}

impl AppInventory {
    pub fn new(transport: Arc<dyn ControlTransport>, host: HostTarget) -> Self {
        Self {
            transport,
            host,
            apps: Vec::new(),
            error: None,
            loading: false,
            generation: 0,
        }
    }

    /// Application names in the order the host reported them.
    pub fn apps(&self) -> &[String] {
        &self.apps
    }

    /// Human-readable cause of the last failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// `true` while the most recent request has not been applied.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Starts a fetch.  Await the returned future anywhere, then pass its
    /// output to [`apply`](Self::apply).
    pub fn request(&mut self) -> impl Future<Output = AppListResult> + Send + 'static {
        self.generation += 1;
        self.loading = true;
        let generation = self.generation;
        let host = self.host.current();
        let transport = Arc::clone(&self.transport);
        async move {
            let (host, body) =
                fetch_from(transport.as_ref(), host, EncodedRequest::list_apps()).await;
            let result = body.and_then(|b| decode_app_list(&b).map_err(ControlError::from));
            AppListResult {
                host,
                generation,
                result,
            }
        }
    }

    /// Applies a fetch result.
    ///
    /// Returns `false` if the result was for a host that is no longer
    /// current and was therefore dropped.
    pub fn apply(&mut self, outcome: AppListResult) -> bool {
        if outcome.generation == self.generation {
            self.loading = false;
        }
        if outcome.host != self.host.current() {
            debug!(
                fetched_for = ?outcome.host,
                "dropping app list for a host that is no longer current"
            );
            return false;
        }
        match outcome.result {
            Ok(apps) => {
                info!(count = apps.len(), "app list updated");
                self.apps = apps;
                self.error = None;
            }
            Err(e) => {
                warn!("app list fetch failed: {e}");
                self.apps.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Fetches and applies in one step.  Calling it again is the retry.
    pub async fn fetch(&mut self) {
        let pending = self.request();
        let outcome = pending.await;
        self.apply(outcome);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
