use super::reading::LatencyReading;
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to start publisher thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} answered with status {status}")]
    Status { endpoint: String, status: u16 },
}

/// Blocking JSON client for the indexing endpoint.
#[derive(Debug, Clone)]
pub struct IndexClient {
    http: Client,
    endpoint: String,
}

impl IndexClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, PublishError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PublishError::Client)?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one reading. Any 2xx counts as indexed.
    pub fn post(&self, reading: &LatencyReading) -> Result<(), PublishError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .json(reading)
            .send()
            .map_err(|source| PublishError::Request {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PublishError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
