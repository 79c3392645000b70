//! Scenario: both sides edit the same line and the user settles it.

use crate::common::*;

fn conflicting_env() -> TestEnv {
    let env = TestEnv::new();
    env.create();
    env.write_project_file("Makefile", &MAKEFILE_V1.replace("lint run\n", "lint run -v\n"));
    env.write_upstream("go/api/Makefile", MAKEFILE_V2);
    env
}

#[test]
fn scenario_keep_remote_after_conflict() {
    let env = conflicting_env();
    let result = env.sync(&[]);
    assert_eq!(result.exit_code, 2, "{}", result.combined_output());
    assert!(result.stderr.contains("Makefile (1 conflict)"), "{}", result.stderr);

    let makefile = env.project_path("Makefile").display().to_string();
    let resolve = env.run(&["resolve", &makefile, "--keep", "remote"]);
    assert!(resolve.success, "{}", resolve.combined_output());
    assert!(resolve.stdout.contains("Resolved 1 conflict(s)"));

    assert_eq!(env.read_project_file("Makefile"), MAKEFILE_V2);
}

#[test]
fn scenario_keep_local_after_conflict() {
    let env = conflicting_env();
    assert_eq!(env.sync(&[]).exit_code, 2);

    let makefile = env.project_path("Makefile").display().to_string();
    assert!(env.run(&["resolve", &makefile, "--keep", "local"]).success);

    assert_eq!(
        env.read_project_file("Makefile"),
        MAKEFILE_V1.replace("lint run\n", "lint run -v\n")
    );
}

#[test]
fn scenario_force_discards_local_edits() {
    let env = conflicting_env();

    let result = env.sync(&["--force"]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read_project_file("Makefile"), MAKEFILE_V2);
}

#[test]
fn scenario_resolve_rejects_unknown_side() {
    let env = conflicting_env();
    let makefile = env.project_path("Makefile").display().to_string();

    let result = env.run(&["resolve", &makefile, "--keep", "theirs"]);
    assert_eq!(result.exit_code, 1);
}
