use crate::analyzer::SubmissionOutcome;
use crate::models::{FileSelection, ModelId, ModelToggleSet, PendingFile, ResultSet};

/// Everything the operator can see and change, owned by the top-level
/// composition. Components get read-only views and go through the update
/// methods below.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    selection: FileSelection,
    toggles: ModelToggleSet,
    results: Option<ResultSet>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_files(&mut self, files: Vec<PendingFile>) {
        self.selection.replace(files);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn toggle_model(&mut self, id: ModelId, enabled: bool) {
        self.toggles.toggle_model(id, enabled);
    }

    /// Stores the results of a completed run, replacing any previous set.
    /// Skipped and failed runs leave the current results untouched.
    pub fn apply_outcome(&mut self, outcome: &SubmissionOutcome) {
        if let SubmissionOutcome::Completed(results) = outcome {
            self.results = Some(results.clone());
        }
    }

    pub fn pending_files(&self) -> &[PendingFile] {
        self.selection.files()
    }

    pub fn selection(&self) -> &FileSelection {
        &self.selection
    }

    pub fn toggles(&self) -> &ModelToggleSet {
        &self.toggles
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        !self.selection.is_empty()
    }
}
