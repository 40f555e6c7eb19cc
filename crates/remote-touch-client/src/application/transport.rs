//! The seam between the use cases and the network.
//!
//! Use cases build an [`EncodedRequest`] with the core codec and hand it to a
//! [`ControlTransport`] together with the host snapshot they took.  The
//! production implementation is `infrastructure::http::HttpTransport`; tests
//! inject fakes.

use async_trait::async_trait;
use remote_touch_core::protocol::{EncodedRequest, ProtocolError};
use thiserror::Error;

/// Error kinds reported by remote control operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ControlError {
    /// No host address is configured; nothing was sent.
    #[error("no remote host configured")]
    NoHostConfigured,

    /// The request could not be delivered (unreachable, refused, timed out).
    #[error("transport failure: {0}")]
    TransportFailure(String),

    /// The response body was not in the expected format.
    #[error("could not decode response: {0}")]
    DecodeFailure(String),

    /// The host answered with a status other than the expected one.
    #[error("remote host returned HTTP {0}")]
    NonSuccessStatus(u16),

    /// The command could not be encoded into a request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<ProtocolError> for ControlError {
    fn from(e: ProtocolError) -> Self {
        match e {
            ProtocolError::Decode(_) | ProtocolError::InvalidScreenSize { .. } => {
                ControlError::DecodeFailure(e.to_string())
            }
            ProtocolError::Encode(_) | ProtocolError::NonFinite { .. } => {
                ControlError::InvalidRequest(e.to_string())
            }
        }
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the body if the status is 2xx.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::NonSuccessStatus`] otherwise.
    pub fn into_success_body(self) -> Result<Vec<u8>, ControlError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(ControlError::NonSuccessStatus(self.status))
        }
    }
}

/// Sends one encoded request to a host.
///
/// Implementations must not retry.  Any HTTP status, including 4xx/5xx, is a
/// successful *exchange* and is returned as a [`TransportResponse`]; only
/// delivery failures are errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ControlTransport: Send + Sync {
    /// Sends `request` to `host`.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::TransportFailure`] if no response was received.
    async fn execute(
        &self,
        host: &str,
        request: EncodedRequest,
    ) -> Result<TransportResponse, ControlError>;
}
