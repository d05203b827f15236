use crate::analyzer::backend::AnalysisBackend;
use crate::analyzer::config::OrchestratorConfig;
use crate::analyzer::payload::SubmissionPayload;
use crate::analyzer::progress::{ProgressReporter, ProgressSink, ProgressState};
use crate::error::BrainsightError;
use crate::models::{AnalysisPhase, AnalysisProgress, PendingFile, ResultSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// How a call to [`AnalysisOrchestrator::submit`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Nothing was selected; nothing happened.
    Skipped,
    Completed(ResultSet),
    Failed { reason: String },
}

impl SubmissionOutcome {
    pub fn results(&self) -> Option<&ResultSet> {
        match self {
            SubmissionOutcome::Completed(results) => Some(results),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, SubmissionOutcome::Failed { .. })
    }
}

struct Shared {
    progress: Arc<ProgressState>,
    phase: watch::Sender<AnalysisPhase>,
}

/// Drives one submission at a time through `Idle -> Submitting -> Settled
/// -> Idle`, owning the progress value for the whole run.
#[derive(Clone)]
pub struct AnalysisOrchestrator {
    backend: Arc<dyn AnalysisBackend>,
    config: OrchestratorConfig,
    shared: Arc<Shared>,
}

impl AnalysisOrchestrator {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self::build(backend, OrchestratorConfig::default(), Vec::new())
    }

    /// Fails with `ConfigError` when `config` does not pass
    /// [`OrchestratorConfig::validate`].
    pub fn with_config(
        backend: Arc<dyn AnalysisBackend>,
        config: OrchestratorConfig,
        sinks: Vec<Arc<dyn ProgressSink>>,
    ) -> Result<Self, BrainsightError> {
        config.validate()?;
        Ok(Self::build(backend, config, sinks))
    }

    fn build(
        backend: Arc<dyn AnalysisBackend>,
        config: OrchestratorConfig,
        sinks: Vec<Arc<dyn ProgressSink>>,
    ) -> Self {
        let (phase, _) = watch::channel(AnalysisPhase::Idle);
        Self {
            backend,
            config,
            shared: Arc::new(Shared {
                progress: Arc::new(ProgressState::new(sinks)),
                phase,
            }),
        }
    }

    pub fn progress(&self) -> AnalysisProgress {
        self.shared.progress.current()
    }

    pub fn phase(&self) -> AnalysisPhase {
        *self.shared.phase.borrow()
    }

    pub fn subscribe_progress(&self) -> watch::Receiver<AnalysisProgress> {
        self.shared.progress.subscribe()
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Uploads `files` and waits for the backend to settle.
    ///
    /// An empty selection is a no-op. A call made while a previous run has
    /// not returned to idle is rejected. Backend errors are logged and
    /// reported as [`SubmissionOutcome::Failed`], never returned as `Err`.
    pub async fn submit(&self, files: &[PendingFile]) -> Result<SubmissionOutcome, BrainsightError> {
        if files.is_empty() {
            tracing::debug!("submission skipped: no files selected");
            return Ok(SubmissionOutcome::Skipped);
        }

        if !self.try_begin() {
            return Err(BrainsightError::SubmissionInFlight);
        }

        let run = RunGuard::start(&self.shared, &self.config);
        let payload = SubmissionPayload::from_files(files);

        tracing::info!(
            backend = self.backend.name(),
            files = payload.len(),
            "analysis started"
        );

        let result = self.backend.analyze(&payload, run.reporter()).await;
        run.stop_estimator();

        let outcome = match result {
            Ok(results) => {
                self.shared.progress.raise(AnalysisProgress::COMPLETE);
                tracing::info!(models = results.len(), "analysis completed");
                SubmissionOutcome::Completed(results)
            }
            Err(e) => {
                tracing::error!(backend = self.backend.name(), error = %e, "analysis failed");
                SubmissionOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        drop(run);
        Ok(outcome)
    }

    /// Resolves once the orchestrator is back in [`AnalysisPhase::Idle`].
    pub async fn wait_idle(&self) {
        let mut phase = self.shared.phase.subscribe();
        // The sender lives in `self.shared`, so the channel cannot close here.
        let _ = phase.wait_for(|p| *p == AnalysisPhase::Idle).await;
    }

    fn try_begin(&self) -> bool {
        self.shared.phase.send_if_modified(|phase| {
            if *phase != AnalysisPhase::Idle {
                return false;
            }
            *phase = AnalysisPhase::Submitting;
            true
        })
    }
}

/// Lives exactly as long as the `Submitting` phase. Dropping it, on any
/// path, aborts the estimator, moves to `Settled` and schedules the reset.
struct RunGuard {
    shared: Arc<Shared>,
    estimator: Option<JoinHandle<()>>,
    reporter: ProgressReporter,
    reset_delay: Duration,
}

impl RunGuard {
    fn start(shared: &Arc<Shared>, config: &OrchestratorConfig) -> Self {
        shared
            .progress
            .raise(AnalysisProgress::new(config.initial_progress as u32));

        let progress = Arc::clone(&shared.progress);
        let (step, ceiling, period) = (config.step, config.ceiling, config.tick_interval);
        let estimator = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                progress.advance(step, ceiling);
            }
        });

        Self {
            shared: Arc::clone(shared),
            estimator: Some(estimator),
            reporter: ProgressReporter::new(Arc::clone(&shared.progress)),
            reset_delay: config.reset_delay,
        }
    }

    fn reporter(&self) -> ProgressReporter {
        self.reporter.clone()
    }

    /// Stops every progress source of this run: the estimator and the
    /// backend's reporter.
    fn stop_estimator(&self) {
        if let Some(estimator) = &self.estimator {
            estimator.abort();
        }
        self.reporter.revoke();
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        if let Some(estimator) = self.estimator.take() {
            estimator.abort();
        }
        self.reporter.revoke();

        self.shared.phase.send_replace(AnalysisPhase::Settled);

        let shared = Arc::clone(&self.shared);
        let delay = self.reset_delay;
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    return_to_idle(&shared);
                });
            }
            Err(_) => return_to_idle(&shared),
        }
    }
}

fn return_to_idle(shared: &Shared) {
    shared.progress.reset();
    shared.phase.send_replace(AnalysisPhase::Idle);
    tracing::debug!("orchestrator idle");
}
