use assert_cmd::Command;
use predicates::str::contains;
use regex::Regex;
use tempfile::TempDir;

fn cli(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("datebook_cli").unwrap();
    cmd.env("DATEBOOK_CONFIG", config_dir.path().join("config.json"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn date_task_runs_from_stdin() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .write_stdin("1\n2\n31 12 2023\n1 1 2023\n")
        .assert()
        .success()
        .stdout(contains("Дати впорядковані за зростанням:\n01.01.2023\n31.12.2023\n"))
        .stdout(contains("Найбільша кількість днів між датами: 364"));
}

#[test]
fn document_task_prints_four_records() {
    let dir = TempDir::new().unwrap();
    let output = cli(&dir).write_stdin("2\n").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stamp = Regex::new(r"(?m)^Date: \d{2}\.\d{2}\.\d{4} \d{2}:\d{2}:\d{2}$").unwrap();
    assert_eq!(stamp.find_iter(&stdout).count(), 4);

    let titles: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("Title: "))
        .collect();
    assert_eq!(titles, ["Receipt 2", "Invoice 2", "Receipt 1", "Invoice 1"]);
}

#[test]
fn invalid_choice_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let output = cli(&dir).write_stdin("abc\n").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("2. Робота з документами\nНевірний вибір завдання.\n"));
}

#[test]
fn validation_failure_exits_with_error() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .write_stdin("1\n1\n0 5 2024\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Помилка: Day must be between 1 and 31, got 0"));
}

#[test]
fn version_flag_prints_summary() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(format!("datebook {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn config_file_changes_document_rendering() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"display":{"decimal_separator":".","datetime_format":"%Y/%m/%d"}}"#,
    )
    .unwrap();
    let output = cli(&dir).write_stdin("2\n").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Amount: 100.50\n"));
    assert!(Regex::new(r"(?m)^Date: \d{4}/\d{2}/\d{2}$").unwrap().is_match(&stdout));
}
