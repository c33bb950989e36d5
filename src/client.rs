//! Caller side of `POST /api/store-s3-data`

use reqwest::Client;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

const STORE_S3_DATA_PATH: &str = "/api/store-s3-data";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The gateway answered with a non-success status
    #[error("Failed to store room URL: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Failed to store room URL: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the persistence endpoint
///
/// No timeout beyond the transport defaults and no retry.
#[derive(Debug, Clone)]
pub struct StoreS3DataClient {
    client: Client,
    endpoint: String,
}

impl StoreS3DataClient {
    /// `base_url` is the gateway origin, e.g. `http://localhost:3001`
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), STORE_S3_DATA_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the gateway to record `room_url`
    pub async fn store_s3_data(&self, room_url: &str) -> Result<(), ClientError> {
        debug!(endpoint = %self.endpoint, room_url, "Storing room URL");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "roomUrl": room_url }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status, body = %body, "Gateway rejected room URL");
            return Err(ClientError::Status { status, body });
        }

        Ok(())
    }
}
