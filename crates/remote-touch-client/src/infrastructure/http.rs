//! HTTP implementation of [`ControlTransport`] built on `reqwest`.
//!
//! One `reqwest::Client` (and therefore one connection pool) is shared by all
//! requests.  Every request carries the configured timeout so a vanished host
//! turns into a `TransportFailure` instead of a hung task.

use std::time::Duration;

use async_trait::async_trait;
use remote_touch_core::protocol::{request_url, EncodedRequest, HttpMethod};
use tracing::trace;

use crate::application::transport::{ControlError, ControlTransport, TransportResponse};

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Sends encoded requests to `http://{host}:{port}/{path}`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    port: u16,
    timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport for the control API on `port`.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::TransportFailure`] if the HTTP client cannot be
    /// built (for example, the TLS backend fails to initialise).
    pub fn new(port: u16, timeout: Duration) -> Result<Self, ControlError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("remote-touch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ControlError::TransportFailure(format!("failed to build HTTP client: {e}"))
            })?;
        Ok(Self {
            client,
            port,
            timeout,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl ControlTransport for HttpTransport {
    async fn execute(
        &self,
        host: &str,
        request: EncodedRequest,
    ) -> Result<TransportResponse, ControlError> {
        let url = request_url(host, self.port, request.path)
            .ok_or(ControlError::NoHostConfigured)?;

        let builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        let builder = match request.body {
            Some(body) => builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body),
            None => builder,
        };

        let resp = builder
            .send()
            .await
            .map_err(|e| ControlError::TransportFailure(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| ControlError::TransportFailure(e.to_string()))?;
        trace!(%url, status, len = body.len(), "exchange complete");

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_port_and_timeout() {
        let transport = HttpTransport::new(8000, Duration::from_millis(1500)).unwrap();
        assert_eq!(transport.port(), 8000);
        assert_eq!(transport.timeout(), Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn test_blank_host_is_rejected_before_connecting() {
        let transport = HttpTransport::new(8000, DEFAULT_REQUEST_TIMEOUT).unwrap();
        let result = transport.execute("  ", EncodedRequest::list_apps()).await;
        assert_eq!(result, Err(ControlError::NoHostConfigured));
    }
}
