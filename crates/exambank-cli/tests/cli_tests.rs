//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn exambank() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("exambank").unwrap()
}

fn bucket_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../buckets")
}

fn read_ids(path: &Path) -> Vec<u64> {
    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    doc.as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_u64().unwrap())
        .collect()
}

const DUPLICATE_BUCKET: &str = r#"[bucket]
name = "NAME"

[[questions]]
id = 1042
level = "I"
topic = "Ethics"
subtopic = "Code and Standards"
question = "Which?"
options = ["a", "b", "c", "d", "e"]
answer_index = ANSWER
difficulty = "Easy"
type = "Core Concept"
tags = ["Ethics"]
reference = "ref"

[questions.explanation]
concise = "c"
detailed = "d"
exam_tip = "e"
misstep_alert = "m"
practical_insight = "p"
"#;

fn write_bucket(dir: &Path, name: &str, answer_index: i64) {
    let content = DUPLICATE_BUCKET
        .replace("NAME", name)
        .replace("ANSWER", &answer_index.to_string());
    std::fs::write(dir.join(format!("{name}.toml")), content).unwrap();
}

#[test]
fn generate_builtin_catalog() {
    let dir = TempDir::new().unwrap();

    exambank()
        .current_dir(dir.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 5 questions from 4 bucket(s)"));

    let ids = read_ids(&dir.path().join("questions_data.json"));
    assert_eq!(ids, vec![1001, 1002, 1016, 1081, 1151]);
}

#[test]
fn generate_from_bucket_directory() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("bank.json");

    exambank()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--buckets")
        .arg(bucket_dir())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 5 questions from 2 bucket(s)"));

    assert_eq!(read_ids(&output), vec![1001, 1002, 1003, 1004, 1005]);
}

#[test]
fn generate_with_id_base_and_compact() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("bank.json");

    exambank()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--buckets")
        .arg(bucket_dir().join("fixed-income-l2.toml"))
        .arg("--output")
        .arg(&output)
        .arg("--id-base")
        .arg("5000")
        .arg("--compact")
        .assert()
        .success();

    assert_eq!(read_ids(&output), vec![5001, 5002]);
    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn generate_empty_directory_writes_empty_array() {
    let dir = TempDir::new().unwrap();
    let buckets = dir.path().join("buckets");
    std::fs::create_dir(&buckets).unwrap();
    let output = dir.path().join("empty.json");

    exambank()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--buckets")
        .arg(&buckets)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 0 questions"));

    assert!(read_ids(&output).is_empty());
}

#[test]
fn generate_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("missing").join("bank.json");

    exambank()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("bank.json"));

    assert!(!output.exists());
    assert!(!dir.path().join("missing").exists());
}

#[test]
fn generate_duplicate_ids_fails() {
    let dir = TempDir::new().unwrap();
    let buckets = dir.path().join("buckets");
    std::fs::create_dir(&buckets).unwrap();
    write_bucket(&buckets, "ethics_a", 1);
    write_bucket(&buckets, "ethics_b", 2);
    let output = dir.path().join("bank.json");

    exambank()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--buckets")
        .arg(&buckets)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate question id(s): 1042"));

    assert!(!output.exists());
}

#[test]
fn generate_answer_index_at_length_fails() {
    let dir = TempDir::new().unwrap();
    write_bucket(dir.path(), "ethics_bad", 5);
    let output = dir.path().join("bank.json");

    exambank()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--buckets")
        .arg(dir.path().join("ethics_bad.toml"))
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bucket `ethics_bad`, record #0 (id 1042)"))
        .stderr(predicate::str::contains("answer_index 5 is out of range for 5 options"));

    assert!(!output.exists());
}

#[test]
fn validate_bucket_directory() {
    exambank()
        .arg("validate")
        .arg("--buckets")
        .arg(bucket_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Bucket: ethics_l1 (3 questions)"))
        .stdout(predicate::str::contains("Bucket: fixed_income_l2 (2 questions)"))
        .stdout(predicate::str::contains("All 5 questions valid."));
}

#[test]
fn validate_requires_a_source() {
    exambank().arg("validate").assert().failure();
}

#[test]
fn validate_nonexistent_file() {
    exambank()
        .arg("validate")
        .arg("--buckets")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_and_stats_on_generated_document() {
    let dir = TempDir::new().unwrap();

    exambank()
        .current_dir(dir.path())
        .arg("generate")
        .assert()
        .success();

    exambank()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--document")
        .arg("questions_data.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("(5 questions)"))
        .stdout(predicate::str::contains("All 5 questions valid."));

    exambank()
        .current_dir(dir.path())
        .arg("stats")
        .arg("--document")
        .arg("questions_data.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 questions"))
        .stdout(predicate::str::contains("Portfolio Management"));

    let output = exambank()
        .current_dir(dir.path())
        .arg("stats")
        .arg("--document")
        .arg("questions_data.json")
        .arg("--level")
        .arg("I")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let hits: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(hits.as_array().unwrap().len(), 3);
}

#[test]
fn stats_rejects_unknown_level() {
    let dir = TempDir::new().unwrap();

    exambank()
        .current_dir(dir.path())
        .arg("generate")
        .assert()
        .success();

    exambank()
        .current_dir(dir.path())
        .arg("stats")
        .arg("--document")
        .arg("questions_data.json")
        .arg("--level")
        .arg("IV")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown level"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    exambank()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created exambank.toml"))
        .stdout(predicate::str::contains("Created buckets/example.toml"));

    assert!(dir.path().join("exambank.toml").exists());
    assert!(dir.path().join("buckets/example.toml").exists());

    exambank()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--buckets")
        .arg("buckets")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 1 questions valid."));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    exambank()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    exambank()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
