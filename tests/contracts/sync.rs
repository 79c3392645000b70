//! Sync contracts: exit codes, idempotence and dry runs.

use crate::common::*;

#[test]
fn contract_sync_without_upstream_change_is_a_noop() {
    let env = TestEnv::new();
    env.create();
    let before = env.read_lockfile();

    let result = env.sync(&[]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("0 updated"), "{}", result.stderr);
    assert_eq!(env.read_lockfile(), before, "lockfile untouched without changes");
}

#[test]
fn contract_dry_run_writes_nothing() {
    let env = TestEnv::new();
    env.create();
    env.write_upstream("_defaults/.gitignore", GITIGNORE_V2);
    let before = env.read_lockfile();

    let result = env.sync(&["--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("(dry run)"));
    assert!(result.stderr.contains("1 updated"));
    assert_eq!(env.read_project_file(".gitignore"), GITIGNORE_V1);
    assert_eq!(env.read_lockfile(), before);
}

#[test]
fn contract_conflicts_exit_with_code_two() {
    let env = TestEnv::new();
    env.create();
    env.write_project_file("Makefile", &MAKEFILE_V1.replace("lint run\n", "lint run -v\n"));
    env.write_upstream("go/api/Makefile", MAKEFILE_V2);

    let result = env.sync(&[]);

    assert_eq!(result.exit_code, 2, "{}", result.combined_output());
    assert!(result.stderr.contains("Merge conflicts in 1 file:"));
    assert!(result
        .stderr
        .contains("run `forge resolve <file> --keep local|remote`"));
    assert!(env.read_project_file("Makefile").contains("<<<<<<< local"));
}

#[test]
fn contract_failure_exits_with_code_one() {
    let env = TestEnv::new();
    // No project was created, so there is no lockfile to sync from
    let result = env.sync(&[]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("Error:"));
}

#[test]
fn contract_json_events_are_ndjson() {
    let env = TestEnv::new();
    env.create();
    env.write_upstream("go/_defaults/.golangci.yml", GOLANGCI_V2);

    let result = env.sync(&["--json"]);
    assert!(result.success, "{}", result.combined_output());

    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is JSON"))
        .collect();
    let names: Vec<&str> = events
        .iter()
        .map(|e| e["event"].as_str().unwrap())
        .collect();

    assert_eq!(names.first(), Some(&"start"));
    assert_eq!(names.last(), Some(&"complete"));
    assert!(names.contains(&"item_updated"));
    assert!(names.contains(&"lockfile_saved"));
    assert_eq!(events.last().unwrap()["status"], "success");
}
