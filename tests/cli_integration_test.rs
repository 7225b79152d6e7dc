use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn csvgate() -> Command {
    Command::cargo_bin("csvgate").unwrap()
}

#[test]
fn evaluate_clean_root_exits_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.csv"), "a,b\n1,2\n3,4\n").unwrap();

    let assert = csvgate().arg("evaluate").arg(dir.path()).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Overall: PASS"));
}

#[test]
fn evaluate_empty_root_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    csvgate().arg("evaluate").arg(dir.path()).assert().code(1);
}

#[test]
fn evaluate_failing_file_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty.csv"), "\n\n").unwrap();
    csvgate().arg("evaluate").arg(dir.path()).assert().code(1);
}

#[test]
fn json_report_is_written_with_the_contract_shape() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.csv"), "a,b\n1,2\n").unwrap();
    let report_path = dir.path().join("out").join("report.json");

    csvgate()
        .arg("evaluate")
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(value["overall_status"], "PASS");
    assert_eq!(value["pass_count"], 1);
    let file = &value["files"][0];
    assert_eq!(file["file"], "a.csv");
    assert_eq!(file["rows"], 2);
    assert_eq!(file["cols"], 2);
    assert_eq!(file["detected_delimiter"], ",");
    assert_eq!(file["duplicate_rows_est"]["scanned"], 2);
    assert_eq!(file["duplicate_rows_est"]["dups"], 0);
}

#[test]
fn csv_report_has_one_line_per_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.csv"), "a,b\n1,2\n").unwrap();
    fs::write(dir.path().join("b.csv"), "x;y\n1;2\n").unwrap();
    let report_path = dir.path().join("report.csv");

    csvgate()
        .arg("evaluate")
        .arg(dir.path())
        .arg("--format")
        .arg("csv")
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success();

    let report = fs::read_to_string(&report_path).unwrap();
    assert_eq!(report.lines().count(), 3);
    assert!(report.starts_with("file,status,rows,cols"));
}

#[test]
fn threshold_flags_are_honored() {
    let dir = TempDir::new().unwrap();
    // one duplicate out of three scanned (ratio 0.33)
    fs::write(dir.path().join("a.csv"), "a,b\n1,2\n1,2\n").unwrap();

    let assert = csvgate()
        .arg("evaluate")
        .arg(dir.path())
        .arg("--duplicate-warn-ratio")
        .arg("0.5")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Overall: PASS"));
}

#[test]
fn config_file_at_root_is_picked_up() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.csv"), "a,b\n1,2\n1,2\n").unwrap();
    fs::write(
        dir.path().join(".csvgate.toml"),
        "[thresholds]\nduplicate_warn_ratio = 0.5\n",
    )
    .unwrap();

    csvgate()
        .arg("evaluate")
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn ignore_patterns_skip_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("keep.csv"), "a,b\n1,2\n").unwrap();
    fs::create_dir_all(dir.path().join("fixtures")).unwrap();
    fs::write(dir.path().join("fixtures/skip.csv"), "\n\n").unwrap();

    csvgate()
        .arg("evaluate")
        .arg(dir.path())
        .arg("--ignore")
        .arg("**/fixtures/**")
        .assert()
        .success();
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.csv"), "a,b\n1,2\n").unwrap();

    csvgate()
        .arg("evaluate")
        .arg(dir.path())
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .assert()
        .failure();
}

#[test]
fn init_writes_config_and_refuses_overwrite() {
    let dir = TempDir::new().unwrap();

    csvgate()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .success();
    assert!(dir.path().join(".csvgate.toml").exists());

    csvgate()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .failure();

    csvgate()
        .arg("init")
        .arg("--force")
        .current_dir(dir.path())
        .assert()
        .success();
}
