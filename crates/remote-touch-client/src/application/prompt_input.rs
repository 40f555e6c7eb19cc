//! PromptInput: the text field whose contents are typed on the host.
//!
//! Submission is response-checked.  While a send is in flight further submits
//! are refused, and the text is only cleared once the host has acknowledged
//! it, so a failed send leaves the field exactly as the user left it and they
//! can simply press send again.

use tracing::debug;

use crate::application::remote_control::RemoteControlClient;

/// Why a submit did not deliver the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The host acknowledged the text.
    Sent,
    /// The host did not acknowledge the text; the field is unchanged.
    Failed,
    /// Nothing was sent: the field is empty or a send is already running.
    Refused,
}

/// State of the prompt composition field.
#[derive(Debug, Clone, Default)]
pub struct PromptInput {
    text: String,
    sending: bool,
    clear_on_send: bool,
}

impl PromptInput {
    /// Creates an empty field.  With `clear_on_send` the text is cleared
    /// after a successful send.
    pub fn new(clear_on_send: bool) -> Self {
        Self {
            text: String::new(),
            sending: false,
            clear_on_send,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Returns `true` when the send button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.text.is_empty() && !self.sending
    }

    /// Marks a send as started and returns the text to send, or `None` if a
    /// submit is not allowed right now.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.sending = true;
        Some(self.text.clone())
    }

    /// Records the host's answer for the send started by
    /// [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(&mut self, delivered: bool) -> SubmitOutcome {
        self.sending = false;
        if delivered {
            if self.clear_on_send {
                self.text.clear();
            }
            SubmitOutcome::Sent
        } else {
            SubmitOutcome::Failed
        }
    }

    /// Sends the current text through `client` and updates the field.
    pub async fn submit(&mut self, client: &RemoteControlClient) -> SubmitOutcome {
        let Some(text) = self.begin_submit() else {
            debug!("prompt submit refused");
            return SubmitOutcome::Refused;
        };
        let delivered = client.send_type(&text).await;
        self.finish_submit(delivered)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::host_target::HostTarget;
    use crate::application::transport::{ControlError, MockControlTransport, TransportResponse};
    use std::sync::Arc;
    use tokio::runtime::Handle;

    fn client_answering(status: Option<u16>) -> RemoteControlClient {
        let mut mock = MockControlTransport::new();
        mock.expect_execute().returning(move |_, _| match status {
            Some(status) => Ok(TransportResponse {
                status,
                body: Vec::new(),
            }),
            None => Err(ControlError::TransportFailure("connection refused".into())),
        });
        RemoteControlClient::new(
            Arc::new(mock),
            HostTarget::new("10.0.0.4"),
            8000,
            Handle::current(),
        )
    }

    #[test]
    fn test_empty_text_cannot_be_submitted() {
        let mut input = PromptInput::new(true);
        assert!(!input.can_submit());
        assert_eq!(input.begin_submit(), None);
    }

    #[test]
    fn test_submit_refused_while_sending() {
        let mut input = PromptInput::new(true);
        input.set_text("ls");
        assert!(input.begin_submit().is_some());
        assert!(input.is_sending());
        assert_eq!(input.begin_submit(), None);
    }

    #[tokio::test]
    async fn test_successful_submit_clears_text() {
        // Arrange
        let client = client_answering(Some(200));
        let mut input = PromptInput::new(true);
        input.set_text("hello");

        // Act
        let outcome = input.submit(&client).await;

        // Assert
        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(input.text(), "");
        assert!(!input.is_sending());
    }

    #[tokio::test]
    async fn test_successful_submit_keeps_text_without_clear_on_send() {
        let client = client_answering(Some(200));
        let mut input = PromptInput::new(false);
        input.set_text("hello");

        assert_eq!(input.submit(&client).await, SubmitOutcome::Sent);
        assert_eq!(input.text(), "hello");
    }

    #[tokio::test]
    async fn test_http_500_leaves_text_untouched_and_retryable() {
        // Arrange
        let client = client_answering(Some(500));
        let mut input = PromptInput::new(true);
        input.set_text("hello");

        // Act
        let outcome = input.submit(&client).await;

        // Assert
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(input.text(), "hello");
        assert!(input.can_submit());
    }

    #[tokio::test]
    async fn test_network_error_leaves_text_untouched() {
        let client = client_answering(None);
        let mut input = PromptInput::new(true);
        input.set_text("hello");

        assert_eq!(input.submit(&client).await, SubmitOutcome::Failed);
        assert_eq!(input.text(), "hello");
        assert!(!input.is_sending());
    }
}
