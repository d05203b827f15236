use brainsight::cli::args::Cli;
use brainsight::models::ModelId;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_basic_cli_parsing() {
    let cli = Cli::try_parse_from(vec!["brainsight", "a.png", "scan.dcm"]);

    assert!(cli.is_ok());
    let cli = cli.unwrap();

    assert_eq!(cli.file_paths(), vec![PathBuf::from("a.png"), PathBuf::from("scan.dcm")]);
    assert!(!cli.reads_stdin());
    assert!(!cli.export);
    assert!(!cli.strict);
}

#[test]
fn test_cli_with_all_options() {
    let args = vec![
        "brainsight",
        "--backend-url", "http://localhost:8000",
        "--skip-model", "densenet121",
        "--strict",
        "--export",
        "--export-dir", ".",
        "--verbose",
        "a.png",
    ];

    let cli = Cli::try_parse_from(args);
    assert!(cli.is_ok());
    let cli = cli.unwrap();

    assert_eq!(cli.get_backend_url().as_deref(), Some("http://localhost:8000"));
    assert_eq!(cli.skipped_models(), &[ModelId::Densenet121]);
    assert!(cli.strict);
    assert!(cli.export);
    assert!(cli.is_verbose());
    assert!(cli.validate().is_ok());
}

#[test]
fn test_skip_model_validation() {
    for id in ModelId::ALL {
        let cli = Cli::try_parse_from(vec!["brainsight", "--skip-model", id.as_str(), "a.png"]);
        assert!(cli.is_ok(), "{} should be accepted", id);
    }

    assert!(Cli::try_parse_from(vec!["brainsight", "--skip-model", "inception", "a.png"]).is_err());
}

#[test]
fn test_invalid_backend_url_fails_validation() {
    let cli = Cli::try_parse_from(vec!["brainsight", "-b", "ftp://files.example", "a.png"]).unwrap();
    assert!(cli.validate().is_err());
}

#[test]
fn test_no_color_flag() {
    let cli = Cli::try_parse_from(vec!["brainsight", "--no-color", "a.png"]).unwrap();
    assert!(!cli.should_use_color());
}
