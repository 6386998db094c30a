use std::{fs, path::PathBuf};

use tempfile::tempdir;

use isogloss_cli::{Args, CliError, run};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn args_for(input: &str, output: &std::path::Path) -> Args {
    Args {
        input: fixture(input).to_string_lossy().to_string(),
        locations: fixture("languages.tsv").to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_sample_export() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("sample.json");

    run(&args_for("sample.dot", &output_path)).expect("sample export should convert");

    let json = fs::read_to_string(&output_path).expect("output file should exist");
    let payload: serde_json::Value = serde_json::from_str(&json).expect("output should be JSON");

    assert_eq!(payload["name"], "LanguageGraph");

    // `yrk` has no entry in the locations file and is dropped; `node` is a
    // statement keyword, not a node.
    let nodes = payload["nodes"].as_object().unwrap();
    assert_eq!(nodes.len(), 7);
    assert!(nodes.contains_key("fin"));
    assert!(!nodes.contains_key("yrk"));
    assert!(!nodes.contains_key("node"));
    assert_eq!(payload["nodes"]["fin"][0], 61.0);
    assert_eq!(payload["nodes"]["fin"][1], 24.45);

    // Undirected edges first, then directed.
    let edges = payload["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[0]["head"], "fin");
    assert_eq!(edges[0]["tail"], "krl");
    assert_eq!(edges[0]["is_directed"], false);
    assert_eq!(edges[0]["weight"], 4);
    assert_eq!(edges[0]["colour"], "#000000");
    assert_eq!(edges[0]["opacity"], 1.0);

    assert_eq!(edges[2]["head"], "fin");
    assert_eq!(edges[2]["tail"], "smn");
    assert_eq!(edges[2]["is_directed"], true);
    assert_eq!(edges[2]["weight"], 3);
    assert_eq!(edges[2]["colour"], "#00cc66");
    let opacity = edges[2]["opacity"].as_f64().unwrap();
    assert!((opacity - 0.9294117647058824).abs() < 1e-12);
}

#[test]
fn e2e_smoke_test_malformed_export() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("malformed.json");

    let err = run(&args_for("malformed.dot", &output_path))
        .expect_err("malformed export should fail");

    assert!(matches!(err, CliError::Graph(_)));
    assert!(!output_path.exists());
}

#[test]
fn e2e_smoke_test_empty_export() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("empty.json");

    let err = run(&args_for("empty.dot", &output_path)).expect_err("empty export should fail");

    assert!(matches!(err, CliError::EmptyInput(_)));
}

#[test]
fn e2e_smoke_test_missing_locations_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("out.json");

    let mut args = args_for("sample.dot", &output_path);
    args.locations = fixture("no_such_file.tsv").to_string_lossy().to_string();

    let err = run(&args).expect_err("missing locations file should fail");
    assert!(matches!(err, CliError::Io(_)));
}
