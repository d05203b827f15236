pub mod args;
pub mod progress;
pub mod reporter;

pub use args::Cli;
pub use progress::TerminalProgress;
pub use reporter::ReportFormatter;

use crate::analyzer::{
    create_backend, AnalysisOrchestrator, BackendConfig, OrchestratorConfig, ProgressSink,
};
use crate::error::BrainsightError;
use crate::intake::{FileIntake, FileSource, IntakePolicy};
use crate::models::PendingFile;
use crate::output::export_results;
use crate::state::AppState;
use std::io;
use std::sync::Arc;

pub struct CliHandler {
    cli: Cli,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(&self) -> Result<i32, BrainsightError> {
        let formatter = ReportFormatter::new(&self.cli);

        if self.cli.list_models {
            println!("{}", formatter.format_model_catalog());
            return Ok(0);
        }

        let mut state = AppState::new();

        // Step 1: File intake
        state.select_files(self.collect_files()?);

        // Step 2: Model selection (shown, not transmitted)
        for id in self.cli.skipped_models() {
            state.toggle_model(*id, false);
        }
        tracing::debug!(
            enabled = ?state.toggles().enabled_models(),
            "model selection is not sent to the backend; all models are requested"
        );

        println!("{}\n", formatter.format_selected_files(state.pending_files()));
        println!("{}\n", formatter.format_model_selection(state.toggles()));

        if !state.can_submit() {
            tracing::info!("nothing to analyze");
            return Ok(0);
        }

        // Step 3: Submission
        let orchestrator = self.build_orchestrator()?;
        tracing::info!(backend = orchestrator.backend_name(), "using analysis backend");

        let outcome = orchestrator.submit(state.pending_files()).await?;
        state.apply_outcome(&outcome);
        orchestrator.wait_idle().await;

        // Step 4: Results
        println!("{}", formatter.format_results(state.results()));

        // Step 5: Export
        if self.cli.export {
            if let Some(path) = export_results(state.results(), &self.cli.export_dir)? {
                println!("\nResults saved to {}", path.display());
            }
        }

        if outcome.is_failure() {
            return Ok(3);
        }

        Ok(0)
    }

    fn collect_files(&self) -> Result<Vec<PendingFile>, BrainsightError> {
        let policy = if self.cli.strict {
            IntakePolicy::Strict
        } else {
            IntakePolicy::Permissive
        };
        let intake = FileIntake::new(policy);

        let source = if self.cli.reads_stdin() {
            FileSource::from_reader(io::stdin().lock())?
        } else {
            FileSource::Paths(self.cli.file_paths())
        };

        let files = intake.collect(source)?;
        tracing::info!(count = files.len(), policy = ?policy, "files selected");
        Ok(files)
    }

    fn backend_config(&self) -> BackendConfig {
        match self.cli.get_backend_url() {
            Some(url) => BackendConfig::remote(url),
            None => BackendConfig::simulated(),
        }
    }

    fn build_orchestrator(&self) -> Result<AnalysisOrchestrator, BrainsightError> {
        let backend = create_backend(&self.backend_config())?;

        let sink: Arc<dyn ProgressSink> =
            Arc::new(TerminalProgress::new(self.cli.should_use_color()));

        AnalysisOrchestrator::with_config(backend, OrchestratorConfig::default(), vec![sink])
    }
}
