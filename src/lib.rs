pub mod config;
pub mod controller;
pub mod endpoint;
pub mod model;
pub mod protocol;
pub mod validation;
pub mod view;

pub use config::ClientConfig;
pub use controller::{Submission, SubmissionController};
pub use endpoint::{HttpEndpoint, TaskEndpoint, TransportError};
pub use model::{LifecycleState, SubmissionSession};
pub use protocol::{HealthStatus, ProcessRequest, ProcessResponse};
pub use validation::SkipReason;
