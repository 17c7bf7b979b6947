// src/model/mod.rs

/// Phase of the current submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl LifecycleState {
    pub fn is_terminal(self) -> bool {
        matches!(self, LifecycleState::Succeeded | LifecycleState::Failed)
    }
}

// Outcome text lives inside the phase so a result and an error can never coexist.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

/// The single piece of client state: the prompt being edited plus the
/// phase of the latest submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionSession {
    input_text: String,
    phase: Phase,
}

impl SubmissionSession {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            phase: Phase::Idle,
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn lifecycle_state(&self) -> LifecycleState {
        match self.phase {
            Phase::Idle => LifecycleState::Idle,
            Phase::Submitting => LifecycleState::Submitting,
            Phase::Succeeded(_) => LifecycleState::Succeeded,
            Phase::Failed(_) => LifecycleState::Failed,
        }
    }

    pub fn result_text(&self) -> Option<&str> {
        match &self.phase {
            Phase::Succeeded(text) => Some(text),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Whether a submit would be accepted right now.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.input_text.trim().is_empty()
    }

    /// Whether there is anything to show in the result panel.
    pub fn has_output(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input_text = text;
    }

    pub(crate) fn mark_submitting(&mut self) {
        self.phase = Phase::Submitting;
    }

    pub(crate) fn mark_succeeded(&mut self, result: String) {
        self.phase = Phase::Succeeded(result);
    }

    pub(crate) fn mark_failed(&mut self, message: String) {
        self.phase = Phase::Failed(message);
    }
}

impl Default for SubmissionSession {
    fn default() -> Self {
        Self::new()
    }
}
