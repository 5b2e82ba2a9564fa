use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FRONT: &str = "GOVERNMENT OF INDIA\n\
                     Rahul Kumar\n\
                     DOB: 15/06/2000\n\
                     MALE\n\
                     4821 7390 5566\n";

const BACK: &str = "Address: 12 MG Road\n\
                    Bengaluru Karnataka\n\
                    560001\n\
                    4821 7390 5566\n";

fn aadhaar(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("aadhaar").unwrap();
    cmd.env("XDG_CONFIG_HOME", home).env("HOME", home);
    cmd
}

fn write_sides(dir: &TempDir, front: &str, back: &str) -> (PathBuf, PathBuf) {
    let front_path = dir.path().join("front.txt");
    let back_path = dir.path().join("back.txt");
    fs::write(&front_path, front).unwrap();
    fs::write(&back_path, back).unwrap();
    (front_path, back_path)
}

#[test]
fn parse_text_input_prints_json_record() {
    let dir = TempDir::new().unwrap();
    let (front, back) = write_sides(&dir, FRONT, BACK);

    aadhaar(dir.path())
        .args(["parse", "--text-input"])
        .arg(&front)
        .arg(&back)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"uid\": \"482173905566\""))
        .stdout(predicate::str::contains("\"name\": \"Rahul Kumar\""))
        .stdout(predicate::str::contains("\"gender\": \"MALE\""))
        .stdout(predicate::str::contains("\"pincode\": \"560001\""))
        .stdout(predicate::str::contains("\"uidMatch\": \"MATCHED\""))
        .stdout(predicate::str::contains("\"dateOfBirth\": \"15/06/2000\""));
}

#[test]
fn parse_masked_output_hides_sensitive_fields() {
    let dir = TempDir::new().unwrap();
    let (front, back) = write_sides(&dir, FRONT, BACK);

    aadhaar(dir.path())
        .args(["parse", "--text-input", "--mask"])
        .arg(&front)
        .arg(&back)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"uid\": \"************\""))
        .stdout(predicate::str::contains("482173905566").not())
        .stdout(predicate::str::contains("rawText").not());
}

#[test]
fn parse_writes_csv_to_file() {
    let dir = TempDir::new().unwrap();
    let (front, back) = write_sides(&dir, FRONT, BACK);
    let output = dir.path().join("record.csv");

    aadhaar(dir.path())
        .args(["parse", "--text-input", "-f", "csv", "-o"])
        .arg(&output)
        .arg(&front)
        .arg(&back)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("name,dateOfBirth,gender,uid,"));
    assert!(csv.contains("482173905566"));
}

#[test]
fn parse_rejects_non_card_text() {
    let dir = TempDir::new().unwrap();
    let (front, back) = write_sides(&dir, "Grocery list\nmilk\neggs", "bread\nbutter");

    aadhaar(dir.path())
        .args(["parse", "--text-input"])
        .arg(&front)
        .arg(&back)
        .assert()
        .failure()
        .stderr(predicate::str::contains("[INVALID_AADHAAR_IMAGE]"));
}

#[test]
fn parse_reports_missing_uid() {
    let dir = TempDir::new().unwrap();
    let (front, back) = write_sides(
        &dir,
        "GOVERNMENT OF INDIA\nRahul Kumar\nDOB: 15/06/2000\nMALE",
        "Address: 12 MG Road\nBengaluru 560001",
    );

    aadhaar(dir.path())
        .args(["parse", "--text-input"])
        .arg(&front)
        .arg(&back)
        .assert()
        .failure()
        .stderr(predicate::str::contains("[UID_NOT_FOUND]"));
}

#[test]
fn parse_missing_input_file() {
    let dir = TempDir::new().unwrap();

    aadhaar(dir.path())
        .args(["parse", "--text-input", "nope-front.txt", "nope-back.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn age_band_with_reference_date() {
    let dir = TempDir::new().unwrap();

    aadhaar(dir.path())
        .args(["age-band", "15/06/2000", "--today", "2026-10-19"])
        .assert()
        .success()
        .stdout("20-30\n");

    aadhaar(dir.path())
        .args(["age-band", "not a date"])
        .assert()
        .success()
        .stdout("Unknown\n");
}

#[test]
fn config_init_then_get_and_set() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");

    aadhaar(dir.path())
        .args(["config", "init", "-o"])
        .arg(&config)
        .assert()
        .success();
    assert!(config.exists());

    aadhaar(dir.path())
        .arg("-c")
        .arg(&config)
        .args(["config", "set", "extraction.min_keyword_matches", "3"])
        .assert()
        .success();

    aadhaar(dir.path())
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "extraction.min_keyword_matches"])
        .assert()
        .success()
        .stdout("3\n");

    aadhaar(dir.path())
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "extraction.nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();

    aadhaar(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"min_keyword_matches\": 2"))
        .stdout(predicate::str::contains("\"recognition_model\": \"latin_rec.onnx\""));
}
