//! Lockfile contracts: what a project records about its provenance.

use crate::common::*;

use forge::domain::entities::EntryKind;
use forge::domain::value_objects::{ContentHash, SyncStrategy};
use forge::Lockfile;

fn load(env: &TestEnv) -> Lockfile {
    serde_yaml_ng::from_str(&env.read_lockfile()).expect("lockfile parses")
}

#[test]
fn contract_lockfile_records_blueprint_and_variables() {
    let env = TestEnv::new();
    env.create();
    let lockfile = load(&env);

    assert_eq!(lockfile.blueprint.name, "api");
    assert_eq!(lockfile.blueprint.path, "go/api");
    assert_eq!(
        lockfile.variables.get("module"),
        Some(&serde_json::json!("example.com/svc"))
    );
    assert_eq!(
        lockfile.variables.get("use_grpc"),
        Some(&serde_json::json!(false))
    );
}

#[test]
fn contract_tracked_hashes_match_written_content() {
    let env = TestEnv::new();
    env.create();
    let lockfile = load(&env);

    for file in lockfile.tracked_files() {
        let content = std::fs::read(env.project_path(file.path)).unwrap();
        assert!(
            ContentHash::from_bytes(&content).matches_str(file.hash),
            "hash mismatch for {}",
            file.path
        );
    }
}

#[test]
fn contract_managed_files_keep_declared_strategy() {
    let env = TestEnv::new();
    env.create();
    let lockfile = load(&env);

    let tracked: Vec<_> = lockfile
        .tracked_files()
        .map(|f| (f.path.to_string(), f.kind, f.strategy))
        .collect();

    assert!(tracked.contains(&(".gitignore".into(), EntryKind::Default, SyncStrategy::Overwrite)));
    assert!(tracked.contains(&("Makefile".into(), EntryKind::Managed, SyncStrategy::Merge)));
    assert!(tracked.contains(&(".golangci.yml".into(), EntryKind::Managed, SyncStrategy::Overwrite)));
    assert!(
        !tracked.iter().any(|(p, _, _)| p == "main.go"),
        "plain blueprint files are not tracked"
    );
}

#[test]
fn contract_create_refuses_existing_project() {
    let env = TestEnv::new();
    env.create();

    let base = env.base.path().display().to_string();
    let project = env.project_dir().display().to_string();
    let result = env.run(&["create", "go/api", &project, "--registry", &base]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
}
