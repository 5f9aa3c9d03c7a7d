use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn protlog_cmd(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("protlog").unwrap();
    cmd.env("PROTLOG_DATA_DIR", data_dir.as_os_str());
    cmd
}

#[test]
fn test_add_then_list_shows_the_record() {
    let temp = TempDir::new().unwrap();

    protlog_cmd(temp.path())
        .args([
            "add",
            "--sequence",
            "ABCDE",
            "--ph",
            "7.4",
            "--temperature",
            "25",
            "--solvent",
            "water",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data saved successfully"));

    protlog_cmd(temp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ABCDE"))
        .stdout(predicate::str::contains("pH: 7.4"))
        .stdout(predicate::str::contains("water"));
}

#[test]
fn test_data_file_has_the_persisted_format() {
    let temp = TempDir::new().unwrap();

    protlog_cmd(temp.path())
        .args(["add", "--sequence", "ABCDE", "--ph", "7.4"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("protein_stability_data.json")).unwrap();
    assert!(content.starts_with("[\n  {"));
    assert!(content.contains("\"pH\": \"7.4\""));
    // Omitted flags are stored as empty strings, not dropped.
    assert!(content.contains("\"solvent\": \"\""));
}

#[test]
fn test_appends_accumulate_in_order() {
    let temp = TempDir::new().unwrap();

    for seq in ["AAA", "BBB", "CCC"] {
        protlog_cmd(temp.path())
            .args(["add", "--sequence", seq])
            .assert()
            .success();
    }

    let content = fs::read_to_string(temp.path().join("protein_stability_data.json")).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["sequence"], "AAA");
    assert_eq!(records[2]["sequence"], "CCC");
}

#[test]
fn test_list_on_fresh_dir_reports_no_data_and_creates_nothing() {
    let temp = TempDir::new().unwrap();

    protlog_cmd(temp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved data"));

    assert!(!temp.path().join("protein_stability_data.json").exists());
}

#[test]
fn test_export_writes_the_download_snapshot() {
    let temp = TempDir::new().unwrap();

    protlog_cmd(temp.path())
        .args(["add", "--sequence", "ABCDE", "--ph", "7.4"])
        .assert()
        .success();

    protlog_cmd(temp.path())
        .args(["export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data downloaded to"));

    let snapshot =
        fs::read_to_string(temp.path().join("protein_stability_data_download.json")).unwrap();
    assert!(snapshot.contains("\"sequence\": \"ABCDE\""));
}

#[test]
fn test_export_snapshot_is_unchanged_by_later_adds() {
    let temp = TempDir::new().unwrap();

    protlog_cmd(temp.path())
        .args(["add", "--sequence", "OLD"])
        .assert()
        .success();
    protlog_cmd(temp.path()).args(["export"]).assert().success();

    let before =
        fs::read_to_string(temp.path().join("protein_stability_data_download.json")).unwrap();

    protlog_cmd(temp.path())
        .args(["add", "--sequence", "NEW"])
        .assert()
        .success();

    let after =
        fs::read_to_string(temp.path().join("protein_stability_data_download.json")).unwrap();
    assert_eq!(before, after);
    assert!(!after.contains("NEW"));
}

#[test]
fn test_share_without_export_fails_cleanly() {
    let temp = TempDir::new().unwrap();

    protlog_cmd(temp.path())
        .args(["share"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export the data first"));
}

#[test]
fn test_corrupt_store_fails_without_panicking() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("protein_stability_data.json"),
        r#"{"a":1}"#,
    )
    .unwrap();

    protlog_cmd(temp.path())
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt store"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_corrupt_store_is_left_untouched_by_a_failed_add() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("protein_stability_data.json");
    fs::write(&data_file, "\"{").unwrap();

    protlog_cmd(temp.path())
        .args(["add", "--sequence", "ABC"])
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&data_file).unwrap(), "\"{");
}

#[test]
fn test_config_show_and_set_round_trip() {
    let temp = TempDir::new().unwrap();

    protlog_cmd(temp.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "fetch-url = https://www.uniprot.org/uniprot",
        ));

    protlog_cmd(temp.path())
        .args(["config", "fetch-url", "http://localhost:9999/uniprot"])
        .assert()
        .success();

    protlog_cmd(temp.path())
        .args(["config", "fetch-url"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:9999/uniprot"));
}

#[test]
fn test_fetch_rejects_blank_id() {
    let temp = TempDir::new().unwrap();

    protlog_cmd(temp.path())
        .args(["fetch", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid UniProt ID"));
}
