// src/protocol/mod.rs

use serde::{Deserialize, Serialize};

/// Body of `POST /api/crewai/process`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ProcessRequest {
    pub prompt: String,
}

impl ProcessRequest {
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
        }
    }
}

/// Reply from the processing endpoint, reduced to the two outcomes the
/// client cares about.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(try_from = "serde_json::Value")]
pub enum ProcessResponse {
    Completed { result: String },
    Rejected { error: Option<String> },
}

impl ProcessResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessResponse::Completed { .. })
    }
}

// The service answers 400 with only an `error` field, so `success` is optional.
// Only a literal `true` counts as success; any other value is a rejection.
#[derive(Deserialize)]
struct RawProcessResponse {
    #[serde(default)]
    success: Option<serde_json::Value>,
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

impl TryFrom<serde_json::Value> for ProcessResponse {
    type Error = String;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err("expected a JSON object".to_string());
        }
        let raw: RawProcessResponse = serde_json::from_value(value).map_err(|e| e.to_string())?;
        Ok(raw.into())
    }
}

impl From<RawProcessResponse> for ProcessResponse {
    fn from(raw: RawProcessResponse) -> Self {
        let text = |value: Option<serde_json::Value>| match value {
            Some(serde_json::Value::String(s)) => Some(s),
            _ => None,
        };

        let success = matches!(raw.success, Some(serde_json::Value::Bool(true)));
        match (success, text(raw.result)) {
            (true, Some(result)) => ProcessResponse::Completed { result },
            // success without a textual result does not honor the contract
            (true, None) => ProcessResponse::Rejected { error: None },
            (false, _) => ProcessResponse::Rejected {
                error: text(raw.error).filter(|e| !e.is_empty()),
            },
        }
    }
}

/// Body of `GET /api/crewai/health`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> serde_json::Result<ProcessResponse> {
        serde_json::from_str(body)
    }

    #[test]
    fn success_with_result_is_completed() {
        let parsed = decode(r#"{"success": true, "result": "Y"}"#).unwrap();
        assert_eq!(parsed, ProcessResponse::Completed { result: "Y".into() });
        assert!(parsed.is_success());
    }

    #[test]
    fn failure_keeps_server_message() {
        let parsed = decode(r#"{"success": false, "error": "bad prompt"}"#).unwrap();
        assert_eq!(
            parsed,
            ProcessResponse::Rejected {
                error: Some("bad prompt".into())
            }
        );
    }

    #[test]
    fn missing_success_flag_is_a_rejection() {
        let parsed = decode(r#"{"error": "Prompt is required"}"#).unwrap();
        assert_eq!(
            parsed,
            ProcessResponse::Rejected {
                error: Some("Prompt is required".into())
            }
        );
        assert_eq!(decode("{}").unwrap(), ProcessResponse::Rejected { error: None });
    }

    #[test]
    fn success_without_text_result_is_rejected_without_message() {
        assert_eq!(
            decode(r#"{"success": true}"#).unwrap(),
            ProcessResponse::Rejected { error: None }
        );
        assert_eq!(
            decode(r#"{"success": true, "result": 42}"#).unwrap(),
            ProcessResponse::Rejected { error: None }
        );
    }

    #[test]
    fn non_text_or_empty_error_is_dropped() {
        assert_eq!(
            decode(r#"{"success": false, "error": {"code": 1}}"#).unwrap(),
            ProcessResponse::Rejected { error: None }
        );
        assert_eq!(
            decode(r#"{"success": false, "error": ""}"#).unwrap(),
            ProcessResponse::Rejected { error: None }
        );
    }

    #[test]
    fn non_boolean_success_flag_is_a_rejection() {
        assert_eq!(
            decode(r#"{"success": null, "error": "bad prompt"}"#).unwrap(),
            ProcessResponse::Rejected {
                error: Some("bad prompt".into())
            }
        );
        assert_eq!(
            decode(r#"{"success": "true", "result": "Y"}"#).unwrap(),
            ProcessResponse::Rejected { error: None }
        );
        assert_eq!(
            decode(r#"{"success": 1, "result": "Y"}"#).unwrap(),
            ProcessResponse::Rejected { error: None }
        );
    }

    #[test]
    fn non_object_bodies_fail_to_decode() {
        assert!(decode("not json").is_err());
        assert!(decode(r#""just a string""#).is_err());
        assert!(decode("[1, 2]").is_err());
        assert!(decode("[]").is_err());
        assert!(decode("null").is_err());
    }

    #[test]
    fn request_serializes_prompt_field() {
        let body = serde_json::to_value(ProcessRequest::new("Explain X")).unwrap();
        assert_eq!(body, serde_json::json!({ "prompt": "Explain X" }));
    }

    #[test]
    fn health_status_reads_service_name() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status": "healthy", "service": "CrewAI"}"#).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.service.as_deref(), Some("CrewAI"));
    }
}
