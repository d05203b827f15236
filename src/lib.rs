pub mod analyzer;
pub mod cli;
pub mod error;
pub mod intake;
pub mod logging;
pub mod models;
pub mod output;
pub mod state;

pub use error::BrainsightError;

// Re-export commonly used types
pub use models::{
    AnalysisPhase, AnalysisProgress, ModelId, ModelResult, ModelToggleSet, PendingFile, ResultSet,
};

pub use analyzer::{AnalysisBackend, AnalysisOrchestrator, SubmissionOutcome};
pub use intake::{FileIntake, FileSource, IntakePolicy};
pub use output::{export_results, render};
pub use state::AppState;

pub use cli::CliHandler;
