//! Diagnostic logging.
//!
//! Installs a global `tracing` subscriber writing to stderr so that stdout
//! stays reserved for the result report.

use crate::error::BrainsightError;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

static INSTALLED: OnceLock<()> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        }
    }

    pub fn default_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Verbose => "brainsight=info,warn",
            Verbosity::Debug => "brainsight=debug,info",
        }
    }
}

/// `RUST_LOG` wins over the verbosity flags when set.
fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.default_directive()))
}

/// Installs the subscriber. Later calls are no-ops.
pub fn init(verbosity: Verbosity, use_colors: bool) -> Result<(), BrainsightError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let stderr_layer = fmt::layer()
        .with_ansi(use_colors)
        .with_target(verbosity == Verbosity::Debug)
        .with_writer(std::io::stderr);

    let subscriber = Registry::default()
        .with(build_env_filter(verbosity))
        .with(stderr_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| BrainsightError::LoggingError(e.to_string()))?;
    let _ = INSTALLED.set(());

    tracing::debug!("logging initialized at {:?}", verbosity);
    Ok(())
}
