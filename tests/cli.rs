use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn jira_workload() -> Command {
    Command::cargo_bin("jira-workload").unwrap()
}

#[test]
fn missing_config_exits_with_25() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join(".jira.json");
    jira_workload()
        .args(["--config", config.to_str().unwrap(), "project = X"])
        .assert()
        .code(25)
        .stdout(predicate::str::contains("There is no config file"));
}

#[test]
fn incomplete_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join(".jira.json");
    fs::write(&config, r#"{"user": "bob", "pass": "secret"}"#).unwrap();
    jira_workload()
        .args(["--config", config.to_str().unwrap(), "project = X"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not found 'host' field"));
}

#[test]
fn query_argument_is_required() {
    jira_workload()
        .assert()
        .failure()
        .stderr(predicate::str::contains("<JQL>"));
}

#[test]
fn help_lists_report_flags() {
    jira_workload()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--markup")
                .and(predicate::str::contains("--no-color"))
                .and(predicate::str::contains("--links"))
                .and(predicate::str::contains("--active")),
        );
}
