// src/validation/mod.rs

use std::fmt;

/// Why a submit attempt was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    EmptyPrompt,
    AlreadySubmitting,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyPrompt => write!(f, "prompt is empty"),
            SkipReason::AlreadySubmitting => write!(f, "a request is already in flight"),
        }
    }
}

/// Returns the prompt that would be sent for `input`, or `None` when
/// there is nothing left after trimming.
pub fn normalize_prompt(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
