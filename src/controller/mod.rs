// src/controller/mod.rs

use crate::config::ClientConfig;
use crate::endpoint::{TaskEndpoint, TransportError};
use crate::model::{LifecycleState, SubmissionSession};
use crate::protocol::ProcessResponse;
use crate::validation::{SkipReason, normalize_prompt};
use tracing::{debug, info, warn};

/// What a call to [`SubmissionController::submit`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// The request went out and the session reached this terminal state.
    Settled(LifecycleState),
    /// Nothing was sent and the session is untouched.
    Skipped(SkipReason),
}

/// Proof that a request was started. Only [`SubmissionController::begin`]
/// hands these out, and [`SubmissionController::settle`] consumes it.
#[derive(Debug)]
pub struct PendingRequest {
    prompt: String,
}

impl PendingRequest {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Owns the session and the one request it may have in flight.
pub struct SubmissionController<E: TaskEndpoint> {
    session: SubmissionSession,
    endpoint: E,
    config: ClientConfig,
}

impl<E: TaskEndpoint> SubmissionController<E> {
    pub fn new(endpoint: E) -> Self {
        Self::with_config(endpoint, ClientConfig::default())
    }

    pub fn with_config(endpoint: E, config: ClientConfig) -> Self {
        Self {
            session: SubmissionSession::new(),
            endpoint,
            config,
        }
    }

    pub fn session(&self) -> &SubmissionSession {
        &self.session
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn update_input(&mut self, text: impl Into<String>) {
        self.session.set_input(text.into());
    }

    /// Validates the current input and, if accepted, clears the previous
    /// outcome and moves the session to `Submitting`.
    pub fn begin(&mut self) -> Result<PendingRequest, SkipReason> {
        if self.session.is_submitting() {
            return Err(SkipReason::AlreadySubmitting);
        }
        let Some(prompt) = normalize_prompt(self.session.input_text()) else {
            return Err(SkipReason::EmptyPrompt);
        };
        let prompt = prompt.to_string();

        self.session.mark_submitting();
        debug!(endpoint = self.endpoint.name(), prompt_len = prompt.len(), "submission started");

        Ok(PendingRequest { prompt })
    }

    /// Applies the outcome of the request started by `begin`.
    pub fn settle(
        &mut self,
        pending: PendingRequest,
        outcome: Result<ProcessResponse, TransportError>,
    ) -> LifecycleState {
        if !self.session.is_submitting() {
            warn!(prompt_len = pending.prompt.len(), "settle called without a request in flight");
            return self.session.lifecycle_state();
        }

        match outcome {
            Ok(ProcessResponse::Completed { result }) => {
                info!(result_len = result.len(), "submission succeeded");
                self.session.mark_succeeded(result);
            }
            Ok(ProcessResponse::Rejected { error }) => {
                info!(server_message = error.is_some(), "submission rejected by service");
                let message = error.unwrap_or_else(|| self.config.generic_failure_message.clone());
                self.session.mark_failed(message);
            }
            Err(err) => {
                warn!(error = %err, "submission transport failure");
                self.session
                    .mark_failed(self.config.connectivity_failure_message.clone());
            }
        }

        self.session.lifecycle_state()
    }

    /// Sends the current input and waits for it to settle. A no-op while a
    /// request is in flight or when the input is blank.
    pub async fn submit(&mut self) -> Submission {
        let pending = match self.begin() {
            Ok(pending) => pending,
            Err(reason) => {
                debug!(%reason, "submission skipped");
                return Submission::Skipped(reason);
            }
        };

        let mut in_flight = InFlight {
            session: &mut self.session,
            fallback: &self.config.connectivity_failure_message,
            armed: true,
        };
        let outcome = self.endpoint.process(pending.prompt()).await;
        in_flight.armed = false;
        drop(in_flight);

        Submission::Settled(self.settle(pending, outcome))
    }
}

// Fails the session if the `submit` future is dropped while awaiting the
// endpoint, so an abandoned call never leaves it stuck in `Submitting`.
struct InFlight<'a> {
    session: &'a mut SubmissionSession,
    fallback: &'a str,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed && self.session.is_submitting() {
            warn!("submission dropped before the endpoint answered");
            self.session.mark_failed(self.fallback.to_string());
        }
    }
}
