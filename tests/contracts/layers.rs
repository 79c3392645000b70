//! Layering contracts: which files a new project receives and from where.

use crate::common::*;

#[test]
fn contract_blueprint_layers_are_merged_into_project() {
    let env = TestEnv::new();
    env.create();

    assert_eq!(env.read_project_file(".gitignore"), GITIGNORE_V1);
    assert_eq!(env.read_project_file(".golangci.yml"), GOLANGCI_V1);
    assert_eq!(env.read_project_file("Makefile"), MAKEFILE_V1);
    assert!(env.project_path("main.go").is_file());
}

#[test]
fn contract_category_default_overrides_registry_default() {
    let env = TestEnv::new();
    write(env.base.path(), "_defaults/.golangci.yml", "registry-wide\n");
    env.create();

    assert_eq!(env.read_project_file(".golangci.yml"), GOLANGCI_V1);
}

#[test]
fn contract_templates_render_and_drop_suffix() {
    let env = TestEnv::new();
    env.create();

    assert!(!env.project_path("go.mod.tmpl").exists());
    assert_eq!(
        env.read_project_file("go.mod"),
        "module example.com/svc\n\ngo 1.22\n"
    );
}

#[test]
fn contract_exclusions_and_conditions_remove_files() {
    let env = TestEnv::new();
    env.create();

    assert!(!env.project_path("LICENSE").exists(), "LICENSE is excluded");
    assert!(
        !env.project_path("proto/api.proto").exists(),
        "proto/* is dropped while use_grpc is false"
    );
    assert!(!env.project_path("blueprint.yaml").exists());
}

#[test]
fn contract_variable_override_disables_condition() {
    let env = TestEnv::new();
    let base = env.base.path().display().to_string();
    let project = env.project_dir().display().to_string();
    let result = env.run(&[
        "create",
        "go/api",
        &project,
        "--registry",
        &base,
        "--var",
        "module=example.com/svc",
        "--var",
        "use_grpc=true",
    ]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.project_path("proto/api.proto").is_file());
}
