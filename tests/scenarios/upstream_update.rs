//! Scenario: a team edits its project while the registry moves on.

use crate::common::*;

fn statuses(env: &TestEnv) -> Vec<(String, String)> {
    let registry = env.registry.path().display().to_string();
    let project = env.project_dir().display().to_string();
    let result = env.run(&["check", "--project", &project, "--registry", &registry, "--json"]);
    assert!(result.success, "{}", result.combined_output());

    let report: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    let mut out = Vec::new();
    for section in ["defaults_updates", "managed_updates"] {
        for update in report[section].as_array().unwrap() {
            out.push((
                update["path"].as_str().unwrap().to_string(),
                update["status"].as_str().unwrap().to_string(),
            ));
        }
    }
    out
}

fn status_of(statuses: &[(String, String)], path: &str) -> String {
    statuses
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, s)| s.clone())
        .unwrap_or_else(|| panic!("{} not reported", path))
}

#[test]
fn scenario_local_edit_and_upstream_change_merge_cleanly() {
    let env = TestEnv::new();
    env.create();

    // Local: change the build line. Upstream: change lint, gitignore, golangci.
    let local_makefile = MAKEFILE_V1.replace("go build ./...", "go build -race ./...");
    env.write_project_file("Makefile", &local_makefile);
    env.write_upstream("go/api/Makefile", MAKEFILE_V2);
    env.write_upstream("_defaults/.gitignore", GITIGNORE_V2);
    env.write_upstream("go/_defaults/.golangci.yml", GOLANGCI_V2);

    let before = statuses(&env);
    assert_eq!(status_of(&before, "Makefile"), "both-changed");
    assert_eq!(status_of(&before, ".gitignore"), "upstream-changed");
    assert_eq!(status_of(&before, ".golangci.yml"), "upstream-changed");

    let result = env.sync(&[]);
    assert!(result.success, "{}", result.combined_output());
    assert!(
        result.stderr.contains("3 updated, 0 skipped, 0 conflicts"),
        "{}",
        result.stderr
    );

    assert_eq!(
        env.read_project_file("Makefile"),
        MAKEFILE_V2.replace("go build ./...", "go build -race ./...")
    );
    assert_eq!(env.read_project_file(".gitignore"), GITIGNORE_V2);
    assert_eq!(env.read_project_file(".golangci.yml"), GOLANGCI_V2);

    // Hashes now track upstream; only the local Makefile edit remains
    let after = statuses(&env);
    assert_eq!(status_of(&after, "Makefile"), "modified-locally");
    assert_eq!(status_of(&after, ".gitignore"), "up-to-date");
    assert_eq!(status_of(&after, ".golangci.yml"), "up-to-date");
}

#[test]
fn scenario_rerun_after_sync_changes_nothing() {
    let env = TestEnv::new();
    env.create();
    env.write_upstream("_defaults/.gitignore", GITIGNORE_V2);

    assert!(env.sync(&[]).success);
    let lockfile = env.read_lockfile();

    let second = env.sync(&[]);
    assert!(second.success);
    assert!(second.stderr.contains("0 updated"), "{}", second.stderr);
    assert_eq!(env.read_lockfile(), lockfile);
}

#[test]
fn scenario_deleted_file_is_restored() {
    let env = TestEnv::new();
    env.create();
    std::fs::remove_file(env.project_path("Makefile")).unwrap();

    let project = env.project_dir().display().to_string();
    let check = env.run(&["check", "--project", &project]);
    assert!(check.success);
    assert!(check.stdout.contains("missing"), "{}", check.stdout);

    let result = env.sync(&[]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read_project_file("Makefile"), MAKEFILE_V1);
}

#[test]
fn scenario_file_filter_limits_sync() {
    let env = TestEnv::new();
    env.create();
    env.write_upstream("_defaults/.gitignore", GITIGNORE_V2);
    env.write_upstream("go/api/Makefile", MAKEFILE_V2);

    let result = env.sync(&["--file", "Makefile"]);
    assert!(result.success, "{}", result.combined_output());

    assert_eq!(env.read_project_file("Makefile"), MAKEFILE_V2);
    assert_eq!(env.read_project_file(".gitignore"), GITIGNORE_V1);
}
