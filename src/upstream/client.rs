//! Outbound HTTP client for the upstream API.
//!
//! # Responsibilities
//! - Build the target URL from the configured base and the stripped suffix
//! - Issue the outbound GET with the proxy's own User-Agent
//! - Classify the result into a `FetchOutcome`
//!
//! # Design Decisions
//! - The base URL and suffix are concatenated verbatim: no slash
//!   normalization, no query re-encoding. What the browser sent after the
//!   prefix is exactly what the upstream sees
//! - Inbound headers are never forwarded; the User-Agent set here is the
//!   only header the proxy adds
//! - An explicit total-request timeout bounds how long one fetch can pin a
//!   server task

use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

use crate::config::UpstreamConfig;
use crate::upstream::outcome::FetchOutcome;

/// Client for the fixed upstream API.
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build a client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Compute the target URL for a stripped suffix.
    pub fn target_url(&self, suffix: &str) -> String {
        format!("{}{}", self.base_url, suffix)
    }

    /// Fetch the target for `suffix` and classify what came back.
    pub async fn fetch(&self, suffix: &str) -> FetchOutcome {
        let target = self.target_url(suffix);
        tracing::info!(target_url = %target, "Proxying request upstream");

        let response = match self.client.get(target.as_str()).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(target_url = %target, error = %e, "Upstream request failed");
                return FetchOutcome::LocalFailure {
                    message: e.to_string(),
                };
            }
        };

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            match response.bytes().await {
                Ok(body) => FetchOutcome::UpstreamError { status, body },
                Err(e) => {
                    tracing::error!(target_url = %target, error = %e, "Failed to read upstream error body");
                    FetchOutcome::LocalFailure {
                        message: e.to_string(),
                    }
                }
            }
        } else {
            let content_type = response.headers().get(CONTENT_TYPE).cloned();
            match response.bytes().await {
                Ok(body) => FetchOutcome::Success {
                    status,
                    content_type,
                    body,
                },
                Err(e) => {
                    tracing::error!(target_url = %target, error = %e, "Failed to read upstream body");
                    FetchOutcome::LocalFailure {
                        message: e.to_string(),
                    }
                }
            }
        }
    }
}
