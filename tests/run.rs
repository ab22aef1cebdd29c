use jsonbench::{run_benchmarks, BenchError, Config};
use std::path::Path;

fn write_data(dir: &Path, large: &str, lines: &str) -> Config {
    let large_path = dir.join("large.json");
    let small_path = dir.join("one-json-per-line.txt");
    std::fs::write(&large_path, large).unwrap();
    std::fs::write(&small_path, lines).unwrap();

    let mut config = Config::default();
    config.runs = 3;
    config.repeats = 2;
    config.data.large_path = large_path;
    config.data.small_path = small_path;
    config
}

#[test]
fn test_four_cases_with_positive_times() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_data(dir.path(), r#"{"a": 1}"#, "{\"a\":1}\n{\"b\":2}\n");
    config.candidates = vec!["serde_json".to_string(), "serde_json_static".to_string()];

    let mut out = Vec::new();
    let results = run_benchmarks(&config, &mut out).unwrap();

    assert_eq!(
        results.labels(),
        vec![
            "loads (large obj)",
            "loads (small objs)",
            "dumps (large obj)",
            "dumps (small objs)"
        ]
    );
    assert_eq!(results.candidates().len(), 2);
    for label in results.labels() {
        for candidate in results.candidates() {
            let seconds = results.get(label, candidate).unwrap();
            assert!(seconds.is_finite());
            assert!(seconds > 0.0, "{label} / {candidate} took {seconds}");
        }
    }

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("\nResults\n=======\n"));
    assert!(text.contains("Running serde_json_static "));
}

#[test]
fn test_unresolvable_candidate_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_data(dir.path(), "[1, 2, 3]", "1\n2\n");
    config.candidates = vec![
        "no_such_codec".to_string(),
        "canonical".to_string(),
        "serde_json".to_string(),
    ];

    let mut out = Vec::new();
    let results = run_benchmarks(&config, &mut out).unwrap();

    let names = results.candidates();
    assert_eq!(names.len(), 2);
    assert!(names.iter().all(|name| !name.starts_with("no_such_codec")));
    assert!(names[0].starts_with("canonical "));

    // the encode-only candidate opened the table, so encode columns come first
    assert_eq!(results.labels()[0], "dumps (large obj)");
    assert!(results.get("loads (large obj)", names[0]).is_none());

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Unable to load no_such_codec: unknown candidate 'no_such_codec'\n"));

    let table = text.split("=======\n").nth(1).unwrap();
    let canonical_row = table.lines().find(|l| l.starts_with("canonical ")).unwrap();
    assert!(canonical_row.trim_end().ends_with("0.000000"));
}

#[test]
fn test_missing_dataset_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.data.large_path = dir.path().join("missing.json");
    config.data.small_path = dir.path().join("missing.txt");

    let mut out = Vec::new();
    let err = run_benchmarks(&config, &mut out).unwrap_err();
    assert!(matches!(err, BenchError::Io { .. }));
    assert!(out.is_empty());
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jsonbench.json");

    let mut config = Config::default();
    config.runs = 11;
    config.candidates = vec!["canonical".to_string()];
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.runs, 11);
    assert_eq!(loaded.repeats, 5);
    assert_eq!(loaded.candidates, vec!["canonical"]);
}
