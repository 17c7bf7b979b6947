//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use crew_task_client::{ProcessResponse, TaskEndpoint, TransportError};
use std::collections::VecDeque;
use std::sync::Mutex;
use wiremock::MockServer;

/// Endpoint that replays canned outcomes and records every prompt it receives.
#[derive(Default)]
pub struct ScriptedEndpoint {
    replies: Mutex<VecDeque<Result<ProcessResponse, TransportError>>>,
    calls: Mutex<Vec<String>>,
    stall_next: Mutex<bool>,
}

impl ScriptedEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, outcome: Result<ProcessResponse, TransportError>) -> Self {
        self.replies.lock().unwrap().push_back(outcome);
        self
    }

    pub fn completed(self, result: &str) -> Self {
        self.reply(Ok(ProcessResponse::Completed {
            result: result.into(),
        }))
    }

    pub fn rejected(self, error: Option<&str>) -> Self {
        self.reply(Ok(ProcessResponse::Rejected {
            error: error.map(str::to_string),
        }))
    }

    /// The next call never answers, like a server that hangs.
    pub fn stalled(self) -> Self {
        *self.stall_next.lock().unwrap() = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskEndpoint for ScriptedEndpoint {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn process(&self, prompt: &str) -> Result<ProcessResponse, TransportError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        let stall = std::mem::take(&mut *self.stall_next.lock().unwrap());
        if stall {
            std::future::pending::<()>().await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TransportError::Status { status: 599 }))
    }
}

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}
