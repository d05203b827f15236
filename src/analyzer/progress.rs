use crate::models::AnalysisProgress;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Receives every change of the displayed progress value.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, progress: AnalysisProgress);
}

/// Holds the progress value. While a run is in flight the value only moves
/// up; `reset` is the single way back to zero.
pub(crate) struct ProgressState {
    value: watch::Sender<AnalysisProgress>,
    sinks: Vec<Arc<dyn ProgressSink>>,
}

impl ProgressState {
    pub(crate) fn new(sinks: Vec<Arc<dyn ProgressSink>>) -> Self {
        let (value, _) = watch::channel(AnalysisProgress::IDLE);
        Self { value, sinks }
    }

    pub(crate) fn current(&self) -> AnalysisProgress {
        *self.value.borrow()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<AnalysisProgress> {
        self.value.subscribe()
    }

    pub(crate) fn raise(&self, target: AnalysisProgress) {
        self.update(|current| target.max(current));
    }

    pub(crate) fn advance(&self, step: u8, ceiling: u8) {
        self.update(|current| current.advance(step, ceiling));
    }

    pub(crate) fn reset(&self) {
        self.update(|_| AnalysisProgress::IDLE);
    }

    /// Raises only while `active` holds. The flag is read under the channel
    /// lock so a report cannot land after [`ProgressState::revoke`] returns.
    fn raise_while(&self, active: &AtomicBool, target: AnalysisProgress) {
        self.update(|current| {
            if active.load(Ordering::Acquire) {
                target.max(current)
            } else {
                current
            }
        });
    }

    fn revoke(&self, active: &AtomicBool) {
        self.value.send_if_modified(|_| {
            active.store(false, Ordering::Release);
            false
        });
    }

    fn update<F>(&self, next: F)
    where
        F: FnOnce(AnalysisProgress) -> AnalysisProgress,
    {
        let mut changed_to = None;
        self.value.send_if_modified(|current| {
            let updated = next(*current);
            if updated == *current {
                return false;
            }
            *current = updated;
            changed_to = Some(updated);
            true
        });

        if let Some(progress) = changed_to {
            tracing::trace!(progress = progress.value(), "progress changed");
            for sink in &self.sinks {
                sink.on_progress(progress);
            }
        }
    }
}

/// Handed to a backend so it can push its own progress estimate. A reporter
/// belongs to one run: once that run settles, every clone goes quiet.
#[derive(Clone)]
pub struct ProgressReporter {
    state: Arc<ProgressState>,
    active: Arc<AtomicBool>,
}

impl ProgressReporter {
    pub(crate) fn new(state: Arc<ProgressState>) -> Self {
        Self {
            state,
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A reporter not tied to any orchestrator, for driving a backend
    /// directly.
    pub fn detached() -> Self {
        Self::new(Arc::new(ProgressState::new(Vec::new())))
    }

    /// Reports `percent` (clamped to 100). Values below the current
    /// progress are ignored.
    /// Reports after the run has settled are dropped.
    pub fn report(&self, percent: u32) {
        if !self.is_active() {
            tracing::debug!(percent, "progress report after settlement ignored");
            return;
        }
        self.state.raise_while(&self.active, AnalysisProgress::new(percent));
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub(crate) fn revoke(&self) {
        self.state.revoke(&self.active);
    }

    pub fn current(&self) -> AnalysisProgress {
        self.state.current()
    }
}
