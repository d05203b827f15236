use brainsight::analyzer::{
    sample_results, AnalysisOrchestrator, ProgressSink, SimulatedBackend, SubmissionOutcome,
};
use brainsight::models::{AnalysisProgress, ModelId, ResultSet};
use brainsight::{AppState, FileIntake, FileSource, IntakePolicy};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::{Arc, Mutex};
use tokio::process::Command;

#[derive(Default)]
struct Recorder(Mutex<Vec<u8>>);

impl ProgressSink for Recorder {
    fn on_progress(&self, progress: AnalysisProgress) {
        self.0.lock().unwrap().push(progress.value());
    }
}

fn sized_file(dir: &Path, name: &str, size: u64) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    file.set_len(size).unwrap();
    path
}

#[tokio::test(start_paused = true)]
async fn test_simulated_analysis_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let paths = vec![
        sized_file(dir.path(), "a.png", 2 * 1024 * 1024),
        sized_file(dir.path(), "scan.dcm", 10 * 1024 * 1024),
    ];

    let intake = FileIntake::new(IntakePolicy::Strict);
    let mut state = AppState::new();
    state.select_files(intake.collect(FileSource::Paths(paths)).unwrap());

    let labels: Vec<_> = state.pending_files().iter().map(|f| f.display_label()).collect();
    assert_eq!(labels, vec!["a.png (2.00 MB)", "scan.dcm (10.00 MB)"]);
    assert_eq!(state.pending_files()[1].mime_type, "application/dicom");

    let recorder = Arc::new(Recorder::default());
    let orchestrator = AnalysisOrchestrator::with_config(
        Arc::new(SimulatedBackend::new()),
        Default::default(),
        vec![recorder.clone()],
    )
    .unwrap();

    let outcome = orchestrator.submit(state.pending_files()).await.unwrap();
    state.apply_outcome(&outcome);
    orchestrator.wait_idle().await;

    let results = state.results().expect("simulated run should complete");
    let lenet = results.get(ModelId::Lenet5).unwrap();
    assert_eq!(lenet.prediction, "Glioma");
    assert_eq!(lenet.confidence, Some(92.4));
    assert_eq!(results.model_ids(), ModelId::ALL.to_vec());

    let seen = recorder.0.lock().unwrap().clone();
    assert_eq!(seen.first(), Some(&5));
    assert_eq!(seen.last(), Some(&0));
    let complete_at = seen.iter().position(|p| *p == 100).expect("reaches 100");
    assert_eq!(complete_at, seen.len() - 2);
    assert!(seen[..complete_at].windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test(start_paused = true)]
async fn test_empty_selection_is_skipped() {
    let recorder = Arc::new(Recorder::default());
    let orchestrator = AnalysisOrchestrator::with_config(
        Arc::new(SimulatedBackend::new()),
        Default::default(),
        vec![recorder.clone()],
    )
    .unwrap();

    let outcome = orchestrator.submit(&[]).await.unwrap();

    assert_eq!(outcome, SubmissionOutcome::Skipped);
    assert!(recorder.0.lock().unwrap().is_empty());
    assert!(orchestrator.progress().is_idle());
}

#[tokio::test]
async fn test_binary_exports_simulated_results() {
    let dir = tempfile::tempdir().unwrap();
    let scan = sized_file(dir.path(), "a.png", 1024);

    let output = Command::new(env!("CARGO_BIN_EXE_brainsight"))
        .arg("--export")
        .arg("--export-dir")
        .arg(dir.path())
        .arg(&scan)
        .env_remove("BRAINSIGHT_BACKEND_URL")
        .env("NO_COLOR", "1")
        .stdin(Stdio::null())
        .output()
        .await
        .expect("Failed to spawn brainsight process");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("a.png (0.00 MB)"));
    assert!(stdout.contains("Prediction: Glioma   Confidence: 92.4%   Time: 118 ms"));
    assert!(stdout.contains("Results saved to"));

    let exported = std::fs::read_to_string(dir.path().join("brainsightai_results.json")).unwrap();
    let parsed: ResultSet = serde_json::from_str(&exported).unwrap();
    assert_eq!(parsed, sample_results());
}
