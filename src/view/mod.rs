// src/view/mod.rs

use crate::model::{LifecycleState, SubmissionSession};
use colored::Colorize;

const AGENT_PROGRESS: [&str; 3] = [
    "Research Agent gathering information...",
    "Analysis Agent processing data...",
    "Writing Agent creating content...",
];

pub fn panel_title(session: &SubmissionSession) -> Option<&'static str> {
    match session.lifecycle_state() {
        LifecycleState::Idle => None,
        LifecycleState::Submitting => Some("Agents Working..."),
        LifecycleState::Failed => Some("Error"),
        LifecycleState::Succeeded => Some("Agent Results"),
    }
}

/// Text shown on the submit control.
pub fn submit_label(session: &SubmissionSession) -> &'static str {
    if session.is_submitting() {
        "Processing..."
    } else {
        "Process Task"
    }
}

/// Renders the result panel. Empty while the session is idle.
pub fn render(session: &SubmissionSession) -> String {
    let Some(title) = panel_title(session) else {
        return String::new();
    };

    let mut out = String::new();
    match session.lifecycle_state() {
        LifecycleState::Submitting => {
            out.push_str(&format!("{}\n", title.blue().bold()));
            for line in AGENT_PROGRESS {
                out.push_str(&format!("  {} {}\n", "•".cyan(), line.dimmed()));
            }
        }
        LifecycleState::Failed => {
            out.push_str(&format!("{}\n", title.red().bold()));
            if let Some(message) = session.error_message() {
                out.push_str(&format!("{}\n", message.red()));
            }
        }
        LifecycleState::Succeeded => {
            out.push_str(&format!("{}\n", title.green().bold()));
            if let Some(result) = session.result_text() {
                out.push_str(result);
                out.push('\n');
            }
        }
        LifecycleState::Idle => {}
    }
    out
}
