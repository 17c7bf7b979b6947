// src/endpoint/mod.rs

use crate::protocol::ProcessResponse;
use async_trait::async_trait;
use thiserror::Error;

pub mod http;
pub use http::HttpEndpoint;

/// Anything that kept a well-formed reply from reaching the client.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connect, timeout, or other failure inside the HTTP client
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx answer whose body is not part of the contract
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    /// Body was not a JSON object
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The remote task-processing service, as seen by the controller.
#[async_trait]
pub trait TaskEndpoint: Send + Sync {
    fn name(&self) -> &str;

    /// Sends one already-trimmed prompt and waits for the service to answer.
    async fn process(&self, prompt: &str) -> Result<ProcessResponse, TransportError>;
}
