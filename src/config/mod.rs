// src/config/mod.rs

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const PROCESS_PATH: &str = "/api/crewai/process";
pub const HEALTH_PATH: &str = "/api/crewai/health";

pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while processing your request.";
pub const CONNECTIVITY_FAILURE_MESSAGE: &str =
    "Failed to connect to the server. Please try again.";

/// Where the client talks to and what it tells the user when things go wrong.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub process_path: String,
    pub health_path: String,
    pub generic_failure_message: String,
    pub connectivity_failure_message: String,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            process_path: PROCESS_PATH.into(),
            health_path: HEALTH_PATH.into(),
            generic_failure_message: GENERIC_FAILURE_MESSAGE.into(),
            connectivity_failure_message: CONNECTIVITY_FAILURE_MESSAGE.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_process_path(mut self, path: &str) -> Self {
        self.process_path = path.into();
        self
    }

    pub fn with_failure_messages(mut self, generic: &str, connectivity: &str) -> Self {
        self.generic_failure_message = generic.into();
        self.connectivity_failure_message = connectivity.into();
        self
    }

    pub fn process_url(&self) -> String {
        self.join(&self.process_path)
    }

    pub fn health_url(&self) -> String {
        self.join(&self.health_path)
    }

    fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
