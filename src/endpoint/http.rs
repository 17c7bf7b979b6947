// src/endpoint/http.rs

use crate::config::ClientConfig;
use crate::endpoint::{TaskEndpoint, TransportError};
use crate::protocol::{HealthStatus, ProcessRequest, ProcessResponse};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Talks to the task-processing service over HTTP.
pub struct HttpEndpoint {
    client: Client,
    process_url: String,
    health_url: String,
}

impl HttpEndpoint {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            process_url: config.process_url(),
            health_url: config.health_url(),
        }
    }

    /// Asks the service whether it is up. Any non-2xx answer is an error.
    pub async fn health(&self) -> Result<HealthStatus, TransportError> {
        let response = self.client.get(&self.health_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for HttpEndpoint {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

#[async_trait]
impl TaskEndpoint for HttpEndpoint {
    fn name(&self) -> &str {
        "http"
    }

    async fn process(&self, prompt: &str) -> Result<ProcessResponse, TransportError> {
        let payload = ProcessRequest::new(prompt);

        // `.json()` also sets the `Content-Type: application/json` header
        let response = self
            .client
            .post(&self.process_url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "process response received");

        // The service reports its own failures with 4xx/5xx bodies that still follow
        // the contract, so the status only matters when the body does not.
        match serde_json::from_str::<ProcessResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => Err(TransportError::Status {
                status: status.as_u16(),
            }),
            Err(err) => Err(TransportError::Decode(err)),
        }
    }
}
