use brainsight::analyzer::{create_backend, BackendConfig, OrchestratorConfig};
use brainsight::error::BrainsightError;
use brainsight::models::ModelId;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn unknown_model_identifier_is_rejected() {
    let err = ModelId::from_str("inception").unwrap_err();

    assert!(matches!(err, BrainsightError::UnknownModel(ref id) if id == "inception"));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn backend_creation_fails_for_malformed_url() {
    let err = create_backend(&BackendConfig::remote("localhost:8000")).err().unwrap();

    assert!(matches!(err, BrainsightError::ConfigError(_)));
    assert_eq!(err.exit_code(), 5);
}

#[test]
fn orchestrator_config_rejects_zero_interval() {
    let config = OrchestratorConfig::new().with_tick_interval(Duration::ZERO);
    assert!(matches!(config.validate(), Err(BrainsightError::ConfigError(_))));
}

#[test]
fn exit_codes_group_errors_by_stage() {
    let access = BrainsightError::FileAccess {
        path: PathBuf::from("scan.dcm"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };
    assert_eq!(access.exit_code(), 4);

    let rejected = BrainsightError::BackendRejected {
        status: 502,
        body: "bad gateway".to_string(),
    };
    assert_eq!(rejected.exit_code(), 3);
    assert_eq!(BrainsightError::InvalidResponse("x".into()).exit_code(), 3);
    assert_eq!(BrainsightError::InvalidArguments("x".into()).exit_code(), 2);
    assert_eq!(BrainsightError::SubmissionInFlight.exit_code(), 1);
}

#[test]
fn error_messages_name_the_offending_file() {
    let err = BrainsightError::FileTooLarge {
        name: "huge.dcm".to_string(),
        size_bytes: 60,
        limit_bytes: 50,
    };

    let message = err.to_string();
    assert!(message.contains("huge.dcm"));
    assert!(message.contains("limit 50 bytes"));
}
