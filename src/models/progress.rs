use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse submission progress, always within 0..=100. Zero means idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct AnalysisProgress(u8);

impl AnalysisProgress {
    pub const IDLE: AnalysisProgress = AnalysisProgress(0);
    pub const COMPLETE: AnalysisProgress = AnalysisProgress(100);

    pub fn new(percent: u32) -> Self {
        Self(percent.min(100) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_idle(&self) -> bool {
        self.0 == 0
    }

    pub fn is_complete(&self) -> bool {
        self.0 == 100
    }

    /// Adds `step`, never going past `ceiling`. A value already above the
    /// ceiling is left as is.
    pub fn advance(&self, step: u8, ceiling: u8) -> Self {
        let next = self.0.saturating_add(step).min(ceiling);
        Self(next.max(self.0))
    }
}

impl fmt::Display for AnalysisProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Lifecycle of the orchestrator: `Idle -> Submitting -> Settled -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisPhase {
    Idle,
    Submitting,
    Settled,
}

impl AnalysisPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisPhase::Idle => "idle",
            AnalysisPhase::Submitting => "submitting",
            AnalysisPhase::Settled => "settled",
        }
    }
}
