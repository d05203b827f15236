use crate::analyzer::backend::AnalysisBackend;
use crate::analyzer::payload::SubmissionPayload;
use crate::analyzer::progress::ProgressReporter;
use crate::error::BrainsightError;
use crate::models::{ModelId, ModelResult, ResultSet};
use futures::future::BoxFuture;
use std::time::Duration;

/// Stand-in for the inference service: waits, reports 96% and answers with
/// a fixed four-model sample regardless of the uploaded files.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1400);
    const REPORTED_PROGRESS: u32 = 96;

    pub fn new() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisBackend for SimulatedBackend {
    fn analyze<'a>(
        &'a self,
        payload: &'a SubmissionPayload,
        progress: ProgressReporter,
    ) -> BoxFuture<'a, Result<ResultSet, BrainsightError>> {
        Box::pin(async move {
            tracing::debug!(
                files = payload.len(),
                bytes = payload.total_bytes(),
                "simulating multi-model inference"
            );

            tokio::time::sleep(self.delay).await;
            progress.report(Self::REPORTED_PROGRESS);

            Ok(sample_results())
        })
    }

    fn name(&self) -> &str {
        "simulated"
    }
}

/// The canned response returned by [`SimulatedBackend`].
pub fn sample_results() -> ResultSet {
    ResultSet::new()
        .with_result(
            ModelId::Lenet5,
            ModelResult::new("Glioma")
                .with_confidence(92.4)
                .with_time_ms(118)
                .with_features(["Irregular border", "Hyperintense core", "Edema region"]),
        )
        .with_result(
            ModelId::Resnet50,
            ModelResult::new("Meningioma")
                .with_confidence(81.1)
                .with_time_ms(204)
                .with_features(["Dural tail sign", "Extra-axial position"]),
        )
        .with_result(
            ModelId::Vgg16,
            ModelResult::new("Glioma")
                .with_confidence(87.9)
                .with_time_ms(173)
                .with_features(["Heterogeneous texture", "Mass effect"]),
        )
        .with_result(
            ModelId::Densenet121,
            ModelResult::new("Pituitary")
                .with_confidence(69.5)
                .with_time_ms(226)
                .with_features(["Sellar region", "Clear margins"]),
        )
}
