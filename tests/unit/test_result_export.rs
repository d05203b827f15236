use brainsight::analyzer::sample_results;
use brainsight::models::{ModelId, ModelResult, ResultSet};
use brainsight::output::{export_results, to_export_json, EXPORT_FILE_NAME};

#[test]
fn export_writes_pretty_json_that_parses_back() {
    let dir = tempfile::tempdir().unwrap();
    let results = sample_results();

    let path = export_results(Some(&results), dir.path()).unwrap().unwrap();
    assert_eq!(path, dir.path().join(EXPORT_FILE_NAME));

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, to_export_json(&results).unwrap());
    assert!(written.contains("\n  \"lenet5\": {\n"));
    assert!(written.contains("\"timeMs\": 118"));

    let parsed: ResultSet = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, results);
}

#[test]
fn export_keeps_result_order() {
    let results = ResultSet::new()
        .with_result(ModelId::Densenet121, ModelResult::new("Pituitary"))
        .with_result(ModelId::Lenet5, ModelResult::new("Glioma"));

    let json = to_export_json(&results).unwrap();
    let densenet = json.find("densenet121").unwrap();
    let lenet = json.find("lenet5").unwrap();
    assert!(densenet < lenet);
}

#[test]
fn export_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(EXPORT_FILE_NAME), "stale").unwrap();

    let results = ResultSet::new().with_result(ModelId::Vgg16, ModelResult::new("Glioma"));
    export_results(Some(&results), dir.path()).unwrap();

    let written = std::fs::read_to_string(dir.path().join(EXPORT_FILE_NAME)).unwrap();
    assert!(written.contains("vgg16"));
    assert!(!written.contains("stale"));
}

#[test]
fn export_without_results_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();

    assert_eq!(export_results(None, dir.path()).unwrap(), None);
    assert!(!dir.path().join(EXPORT_FILE_NAME).exists());
}
