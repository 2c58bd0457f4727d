//! HTTP client for the read and write webhook endpoints.

use reqwest::header::CONTENT_TYPE;

use crate::config::EndpointConfig;
use crate::error::SyncError;

use super::models::WireMember;

/// Thin client over the two roster endpoints.
///
/// Both endpoints are plain POST targets speaking JSON; there is no
/// authentication, retry, or timeout handling in the upstream contract.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    config: EndpointConfig,
}

impl WebhookClient {
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch the full roster from the read endpoint.
    ///
    /// The read endpoint expects a POST with a JSON content type and an
    /// empty body, and answers with a JSON array of wire records.
    pub async fn fetch_members(&self) -> Result<Vec<WireMember>, SyncError> {
        log::debug!("POST {} (fetch roster)", self.config.read_url);

        let response = self
            .http
            .post(&self.config.read_url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| SyncError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Fetch(format!(
                "read endpoint returned {}",
                status
            )));
        }

        let members: Vec<WireMember> = response
            .json()
            .await
            .map_err(|e| SyncError::Decode(e.to_string()))?;

        log::debug!("Fetched {} roster records", members.len());
        Ok(members)
    }

    /// Submit changed records as a JSON array to the write endpoint.
    pub async fn submit_changes(&self, changes: &[WireMember]) -> Result<(), SyncError> {
        log::debug!(
            "POST {} ({} changed records)",
            self.config.write_url,
            changes.len()
        );

        let response = self
            .http
            .post(&self.config.write_url)
            .json(changes)
            .send()
            .await
            .map_err(|e| SyncError::Save(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Save(format!(
                "write endpoint returned {}",
                status
            )));
        }

        Ok(())
    }
}
