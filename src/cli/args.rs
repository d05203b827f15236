use crate::analyzer::backend::validate_backend_url;
use crate::error::BrainsightError;
use crate::models::ModelId;
use clap::Parser;
use std::path::PathBuf;

pub const BACKEND_URL_ENV: &str = "BRAINSIGHT_BACKEND_URL";
pub const STDIN_MARKER: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "brainsight")]
#[command(about = "BrainSightAI - multi-model brain tumor classification for MRI scans")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// MRI files to analyze (JPG, PNG or DICOM). Use `-` to read paths from stdin
    pub files: Vec<String>,

    /// Base URL of the inference backend (defaults to $BRAINSIGHT_BACKEND_URL, else a simulation)
    #[arg(short = 'b', long)]
    pub backend_url: Option<String>,

    /// Untick a model in the selection (repeatable). All models are still requested
    #[arg(long = "skip-model", value_name = "MODEL", value_parser = validate_model)]
    pub skip_models: Vec<ModelId>,

    /// Enforce the accepted file types and the 50MB per-file limit
    #[arg(long)]
    pub strict: bool,

    /// Write brainsightai_results.json after a successful analysis
    #[arg(short = 'e', long)]
    pub export: bool,

    /// Directory to write the exported results into
    #[arg(long, default_value = ".")]
    pub export_dir: PathBuf,

    /// Print the available models and exit
    #[arg(long)]
    pub list_models: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug output including backend communication
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    pub fn parse_args() -> Result<Self, BrainsightError> {
        let cli = Self::try_parse().map_err(|e| match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => e.exit(),
            _ => BrainsightError::InvalidArguments(e.to_string()),
        })?;

        cli.validate()?;

        Ok(cli)
    }

    pub fn validate(&self) -> Result<(), BrainsightError> {
        if self.reads_stdin() && self.files.len() > 1 {
            return Err(BrainsightError::InvalidArguments(
                "`-` cannot be combined with other file arguments".to_string(),
            ));
        }

        if let Some(url) = self.get_backend_url() {
            validate_backend_url(&url)?;
        }

        if self.export && !self.export_dir.is_dir() {
            return Err(BrainsightError::InvalidArguments(format!(
                "Export directory does not exist: {}",
                self.export_dir.display()
            )));
        }

        Ok(())
    }

    pub fn reads_stdin(&self) -> bool {
        self.files.iter().any(|f| f == STDIN_MARKER)
    }

    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files
            .iter()
            .filter(|f| f.as_str() != STDIN_MARKER)
            .map(PathBuf::from)
            .collect()
    }

    pub fn get_backend_url(&self) -> Option<String> {
        if let Some(ref url) = self.backend_url {
            return Some(url.clone());
        }

        std::env::var(BACKEND_URL_ENV)
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
    }

    pub fn skipped_models(&self) -> &[ModelId] {
        &self.skip_models
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn should_use_color(&self) -> bool {
        !self.no_color && std::env::var("NO_COLOR").is_err()
    }
}

fn validate_model(s: &str) -> Result<ModelId, String> {
    ModelId::from_str(s).map_err(|_| {
        format!(
            "Unknown model '{}'. Available: {}",
            s,
            ModelId::ALL
                .iter()
                .map(|id| id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}
