// Analyzer module - backend boundary and submission orchestration

pub mod backend;
pub mod config;
pub mod http_client;
pub mod orchestrator;
pub mod payload;
pub mod progress;
pub mod simulated;

pub use backend::{create_backend, AnalysisBackend, BackendConfig};
pub use config::OrchestratorConfig;
pub use http_client::HttpBackend;
pub use orchestrator::{AnalysisOrchestrator, SubmissionOutcome};
pub use payload::{SubmissionPayload, FILE_FIELD_NAME};
pub use progress::{ProgressReporter, ProgressSink};
pub use simulated::{sample_results, SimulatedBackend};
