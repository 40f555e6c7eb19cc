//! The address of the remote host every request is sent to.
//!
//! There is exactly one host per session.  Rather than a global, it is an
//! explicitly owned [`HostTarget`] value that is cloned into each component
//! that talks to the host (`RemoteControlClient`, `AppInventory`,
//! `RemoteScreen`).  Clones share the same underlying value.
//!
//! Readers take a snapshot with [`HostTarget::current`] at the moment they
//! build a request and never hold on to it across calls, so a host change takes
//! effect for the very next request.  Components that must react to a change
//! (the screen-size refetch) use [`HostTarget::subscribe`].

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

/// Shared, observable remote host address.
///
/// Internally a `tokio::sync::watch` channel: one latest value, any number of
/// observers.  `None` means no host is configured.
#[derive(Debug, Clone)]
pub struct HostTarget {
    tx: Arc<watch::Sender<Option<String>>>,
}

impl Default for HostTarget {
    fn default() -> Self {
        Self::unconfigured()
    }
}

impl HostTarget {
    /// Creates a target with no host configured.
    pub fn unconfigured() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Creates a target pointing at `host` (blank means unconfigured).
    pub fn new(host: &str) -> Self {
        let target = Self::unconfigured();
        target.set(host);
        target
    }

    /// Snapshot of the current host, or `None` when unconfigured.
    pub fn current(&self) -> Option<String> {
        self.tx.borrow().clone()
    }

    /// Returns `true` if a host is configured.
    pub fn is_configured(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Replaces the host.
    ///
    /// Surrounding whitespace is trimmed and an empty string clears the
    /// target.  Observers are notified only if the value actually changed;
    /// the return value says whether it did.
    pub fn set(&self, host: &str) -> bool {
        let normalized = normalize(host);
        let changed = self.tx.send_if_modified(|current| {
            if *current == normalized {
                false
            } else {
                *current = normalized.clone();
                true
            }
        });
        if changed {
            match &normalized {
                Some(h) => info!(host = %h, "remote host changed"),
                None => info!("remote host cleared"),
            }
        }
        changed
    }

    /// Clears the host.
    pub fn clear(&self) -> bool {
        self.set("")
    }

    /// Returns a receiver that is notified on every host change.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.tx.subscribe()
    }
}

fn normalize(host: &str) -> Option<String> {
    let trimmed = host.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_target_has_no_host() {
        let target = HostTarget::unconfigured();
        assert_eq!(target.current(), None);
        assert!(!target.is_configured());
    }

    #[test]
    fn test_set_trims_whitespace() {
        let target = HostTarget::new("  192.168.0.12 \n");
        assert_eq!(target.current().as_deref(), Some("192.168.0.12"));
    }

    #[test]
    fn test_blank_host_means_unconfigured() {
        // Arrange
        let target = HostTarget::new("studio.local");

        // Act
        let changed = target.set("   ");

        // Assert
        assert!(changed);
        assert_eq!(target.current(), None);
    }

    #[test]
    fn test_set_same_host_reports_no_change() {
        let target = HostTarget::new("10.0.0.2");
        assert!(!target.set(" 10.0.0.2"));
    }

    #[test]
    fn test_clones_share_the_same_value() {
        let a = HostTarget::unconfigured();
        let b = a.clone();
        a.set("10.0.0.9");
        assert_eq!(b.current().as_deref(), Some("10.0.0.9"));
    }

    #[tokio::test]
    async fn test_subscriber_is_notified_on_change() {
        // Arrange
        let target = HostTarget::unconfigured();
        let mut rx = target.subscribe();

        // Act
        target.set("10.0.0.3");

        // Assert
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().as_deref(), Some("10.0.0.3"));
    }

    #[tokio::test]
    async fn test_subscriber_is_not_notified_without_change() {
        let target = HostTarget::new("10.0.0.3");
        let mut rx = target.subscribe();

        target.set("10.0.0.3");

        assert!(!rx.has_changed().unwrap());
    }
}
