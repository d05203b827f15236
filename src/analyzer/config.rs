use crate::error::BrainsightError;
use std::time::Duration;

/// Timing of the heuristic progress estimator and the post-run reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorConfig {
    pub initial_progress: u8,
    pub step: u8,
    pub tick_interval: Duration,
    pub ceiling: u8,
    pub reset_delay: Duration,
}

impl OrchestratorConfig {
    pub fn new() -> Self {
        Self {
            initial_progress: 5,
            step: 7,
            tick_interval: Duration::from_millis(300),
            ceiling: 95,
            reset_delay: Duration::from_millis(1000),
        }
    }

    pub fn with_step(mut self, step: u8) -> Self {
        self.step = step;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_ceiling(mut self, ceiling: u8) -> Self {
        self.ceiling = ceiling;
        self
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn validate(&self) -> Result<(), BrainsightError> {
        if self.ceiling >= 100 {
            return Err(BrainsightError::ConfigError(
                "Progress ceiling must stay below 100".to_string(),
            ));
        }

        if self.initial_progress == 0 || self.initial_progress > self.ceiling {
            return Err(BrainsightError::ConfigError(format!(
                "Initial progress must be between 1 and the ceiling ({})",
                self.ceiling
            )));
        }

        if self.tick_interval.is_zero() {
            return Err(BrainsightError::ConfigError(
                "Estimator interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
