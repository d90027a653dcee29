//! HTTP implementation of the listing client backed by `reqwest`.

use reqwest::header::ACCEPT;

use super::wire::{DeleteRequest, ListingEnvelope};
use super::ListingClient;
use crate::domain::{ListingSnapshot, MediashelfError, Result};
use crate::Config;

/// Listing client that talks to a deployed remote file store over HTTP.
///
/// Endpoints are injected through [`Config`] at construction; nothing is read
/// from ambient or global scope. The client holds a single connection-pooled
/// `reqwest::Client` and is cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpListingClient {
    http: reqwest::Client,
    api_endpoint: String,
}

impl HttpListingClient {
    /// Creates a client bound to the configured API endpoint.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_endpoint: config.api_endpoint.trim_end_matches('/').to_string(),
        }
    }

    fn files_url(&self) -> String {
        format!("{}/files", self.api_endpoint)
    }
}

impl ListingClient for HttpListingClient {
    async fn fetch_listing(&self) -> Result<ListingSnapshot> {
        let response = self.http.get(self.files_url()).send().await?;

        if !response.status().is_success() {
            return Err(MediashelfError::Network(format!(
                "listing fetch returned {}",
                response.status()
            )));
        }

        let envelope: ListingEnvelope = response.json().await?;
        Ok(envelope.response_data)
    }

    async fn delete_asset(&self, path: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.files_url())
            .header(ACCEPT, "application/json")
            .json(&DeleteRequest { file_path: path })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MediashelfError::Network(format!(
                "delete of {path:?} returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}
