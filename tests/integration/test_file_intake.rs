use brainsight::error::BrainsightError;
use brainsight::{AppState, FileIntake, FileSource, IntakePolicy};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

fn sized_file(dir: &Path, name: &str, size: u64) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    file.set_len(size).unwrap();
    path
}

#[test]
fn test_new_selection_replaces_previous_one() {
    let dir = tempfile::tempdir().unwrap();
    let intake = FileIntake::default();
    let mut state = AppState::new();

    let first = vec![sized_file(dir.path(), "x.png", 10)];
    state.select_files(intake.collect(FileSource::Paths(first)).unwrap());

    let second = vec![
        sized_file(dir.path(), "b.dcm", 20),
        sized_file(dir.path(), "a.jpg", 30),
    ];
    state.select_files(intake.collect(FileSource::Paths(second)).unwrap());

    let names: Vec<_> = state.pending_files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["b.dcm", "a.jpg"]);
    assert_eq!(state.selection().total_bytes(), 50);
}

#[test]
fn test_permissive_policy_keeps_unknown_types() {
    let dir = tempfile::tempdir().unwrap();
    let notes = sized_file(dir.path(), "notes.txt", 64);

    let files = FileIntake::new(IntakePolicy::Permissive)
        .collect(FileSource::Paths(vec![notes]))
        .unwrap();

    assert_eq!(files.len(), 1);
    assert!(!files[0].is_accepted_type());
    assert_eq!(files[0].mime_type, "application/octet-stream");
}

#[test]
fn test_strict_policy_rejects_type_and_size() {
    let dir = tempfile::tempdir().unwrap();
    let strict = FileIntake::new(IntakePolicy::Strict);

    let notes = sized_file(dir.path(), "notes.txt", 64);
    let err = strict.collect(FileSource::Paths(vec![notes])).unwrap_err();
    assert!(matches!(err, BrainsightError::UnsupportedFileType { ref name } if name == "notes.txt"));
    assert_eq!(err.exit_code(), 4);

    let huge = sized_file(dir.path(), "huge.dcm", 50 * 1024 * 1024 + 1);
    let err = strict.collect(FileSource::Paths(vec![huge.clone()])).unwrap_err();
    assert!(matches!(err, BrainsightError::FileTooLarge { .. }));

    let exact = sized_file(dir.path(), "exact.dcm", 50 * 1024 * 1024);
    assert!(strict.collect(FileSource::Paths(vec![exact])).is_ok());

    let relaxed = FileIntake::new(IntakePolicy::Strict).with_max_file_bytes(u64::MAX);
    assert!(relaxed.collect(FileSource::Paths(vec![huge])).is_ok());
}

#[test]
fn test_drop_list_preserves_order() {
    let dir = tempfile::tempdir().unwrap();
    let b = sized_file(dir.path(), "b.png", 1);
    let a = sized_file(dir.path(), "a.png", 1);

    let text = format!("{}\n\n{}\n", b.display(), a.display());
    let files = FileIntake::default()
        .collect(FileSource::DropList(text))
        .unwrap();

    let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["b.png", "a.png"]);
}

#[tokio::test]
async fn test_binary_reads_drop_list_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let scan = sized_file(dir.path(), "scan.dcm", 1024);

    let mut child = Command::new(env!("CARGO_BIN_EXE_brainsight"))
        .arg("-")
        .env_remove("BRAINSIGHT_BACKEND_URL")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn brainsight process");

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(format!("{}\n", scan.display()).as_bytes())
            .await
            .unwrap();
        drop(stdin);
    }

    let output = child.wait_with_output().await.unwrap();
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("scan.dcm (0.00 MB)"));
    assert!(stdout.contains("Prediction: Pituitary"));
}

#[tokio::test]
async fn test_binary_missing_file_exits_with_intake_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_brainsight"))
        .arg("/nonexistent/brainsight/scan.dcm")
        .env("NO_COLOR", "1")
        .stdin(Stdio::null())
        .output()
        .await
        .expect("Failed to spawn brainsight process");

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot access file"));
}
