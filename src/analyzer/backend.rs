use crate::analyzer::http_client::HttpBackend;
use crate::analyzer::payload::SubmissionPayload;
use crate::analyzer::progress::ProgressReporter;
use crate::analyzer::simulated::SimulatedBackend;
use crate::error::BrainsightError;
use crate::models::ResultSet;
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Duration;

/// The inference service boundary. A backend settles exactly once per call,
/// with the full per-model result map or an error. It may call `progress`
/// any number of times before settling, or never.
pub trait AnalysisBackend: Send + Sync {
    fn analyze<'a>(
        &'a self,
        payload: &'a SubmissionPayload,
        progress: ProgressReporter,
    ) -> BoxFuture<'a, Result<ResultSet, BrainsightError>>;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    /// Base URL of a real inference service. `None` selects the simulation.
    pub base_url: Option<String>,
    pub simulated_delay: Duration,
}

impl BackendConfig {
    pub fn simulated() -> Self {
        Self {
            base_url: None,
            simulated_delay: SimulatedBackend::DEFAULT_DELAY,
        }
    }

    pub fn remote<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: Some(base_url.into()),
            simulated_delay: SimulatedBackend::DEFAULT_DELAY,
        }
    }

    pub fn is_simulated(&self) -> bool {
        self.base_url.is_none()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::simulated()
    }
}

pub fn validate_backend_url(url: &str) -> Result<(), BrainsightError> {
    let trimmed = url.trim();
    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| {
            BrainsightError::ConfigError(format!(
                "Backend URL '{}' must start with http:// or https://",
                trimmed
            ))
        })?;

    if rest.trim_matches('/').is_empty() {
        return Err(BrainsightError::ConfigError(format!(
            "Backend URL '{}' has no host",
            trimmed
        )));
    }

    Ok(())
}

pub fn create_backend(config: &BackendConfig) -> Result<Arc<dyn AnalysisBackend>, BrainsightError> {
    match config.base_url.as_deref() {
        Some(url) => {
            validate_backend_url(url)?;
            Ok(Arc::new(HttpBackend::new(url)?))
        }
        None => Ok(Arc::new(
            SimulatedBackend::new().with_delay(config.simulated_delay),
        )),
    }
}
