//! Form relay client.

use reqwest::Url;
use std::time::Duration;

use crate::config::ContactConfig;
use crate::message::ContactMessage;
use crate::{Error, Result};

/// Posts contact messages to the form relay.
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ContactClient {
    /// Create a client for the configured relay.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidEndpoint`] if the URL does not parse, [`Error::Http`]
    /// if the HTTP client cannot be built.
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| Error::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            message: e.to_string(),
        })?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, endpoint })
    }

    /// Relay URL in use.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Validates and submits `message`.
    ///
    /// Any 2xx response is success. Non-2xx responses, transport failures
    /// and timeouts all come back as [`Error::Relay`]. No retry.
    pub async fn send(&self, message: &ContactMessage) -> Result<()> {
        message.validate()?;

        tracing::debug!(endpoint = %self.endpoint, "submitting contact message");
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(message)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "contact relay unreachable");
                Error::transport(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "contact message accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "contact relay rejected message");
        Err(Error::rejected(status.as_u16(), &body))
    }
}
