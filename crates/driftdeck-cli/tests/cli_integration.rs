use assert_cmd::Command;
use predicates::prelude::*;

fn driftdeck() -> Command {
    Command::cargo_bin("driftdeck").expect("binary should build")
}

#[test]
fn help_lists_the_commands() {
    driftdeck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("review"))
        .stdout(predicate::str::contains("sources"))
        .stdout(predicate::str::contains("snapshot"));
}

#[test]
fn bare_invocation_prints_guidance() {
    let dir = tempfile::tempdir().unwrap();
    driftdeck()
        .args(["--data-dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("driftdeck review --demo"));
}

#[test]
fn demo_sources_list_plain() {
    let dir = tempfile::tempdir().unwrap();
    driftdeck()
        .args(["--data-dir", dir.path().to_str().unwrap(), "sources", "--demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("Demo sandbox"));
}

#[test]
fn demo_sources_list_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = driftdeck()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--format",
            "json",
            "sources",
            "--demo",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let sources: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(sources[0]["id"], "demo");
}

#[test]
fn sources_without_a_host_fails_with_guidance() {
    let dir = tempfile::tempdir().unwrap();
    driftdeck()
        .args(["--data-dir", dir.path().to_str().unwrap(), "sources"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--demo"));
}

#[test]
fn snapshot_show_and_clear_on_a_fresh_dir() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().to_str().unwrap();

    driftdeck()
        .args(["--data-dir", data_dir, "snapshot", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No session snapshot"));

    driftdeck()
        .args(["--data-dir", data_dir, "snapshot", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cleared"));
}
