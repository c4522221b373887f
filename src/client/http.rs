//! HTTP backend implementation
//!
//! This module posts summarize requests over HTTP:
//! - Building the client with the configured user agent and timeouts
//! - Sending the JSON payload to the configured endpoint
//! - Classifying transport failures for diagnostics

use crate::client::response::interpret_response;
use crate::client::{SummarizeBackend, SummarizeResponse};
use crate::config::Config;
use crate::input::SummarizeRequest;
use crate::DigestError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Summarization backend reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    /// Creates a backend from configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use article_digest::config::Config;
    /// use article_digest::client::HttpBackend;
    ///
    /// let backend = HttpBackend::new(&Config::default()).unwrap();
    /// ```
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
            endpoint: config.backend.endpoint.clone(),
        })
    }
}

/// Builds an HTTP client with proper configuration
///
/// Timeouts are only applied when configured; otherwise the transport
/// defaults stand.
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.client.user_agent())
        .gzip(true)
        .brotli(true);

    if let Some(secs) = config.backend.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = config.backend.connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Describes a transport failure for the developer log
fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        format!("Connection refused: {}", e)
    } else {
        e.to_string()
    }
}

#[async_trait]
impl SummarizeBackend for HttpBackend {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummarizeResponse, DigestError> {
        let connection_error = |e: reqwest::Error| DigestError::Connection {
            endpoint: self.endpoint.clone(),
            reason: describe_transport_error(&e),
        };

        tracing::debug!("POST {} ({} payload)", self.endpoint, request.kind());

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(connection_error)?;

        tracing::debug!("Backend answered {} ({} bytes)", status, body.len());

        interpret_response(&self.endpoint, status, &body)
    }
}
