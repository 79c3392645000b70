//! Test environment builder for isolated Forge testing.
//!
//! `TestEnv` owns a registry checkout at two versions (`base` is what the
//! project was created from, `registry` is upstream now) and a project
//! directory, plus helpers to run the `forge` binary against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::*;

/// Result of running a Forge CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated base registry, upstream registry and project workspace.
pub struct TestEnv {
    pub base: TempDir,
    pub registry: TempDir,
    /// Parent of the project directory; `create` needs a fresh target
    pub workdir: TempDir,
    /// Isolated config home so user config never leaks in
    pub config_home: TempDir,
}

impl TestEnv {
    /// Both registry versions hold the v1 `go/api` blueprint.
    pub fn new() -> Self {
        let env = Self {
            base: TempDir::new().unwrap(),
            registry: TempDir::new().unwrap(),
            workdir: TempDir::new().unwrap(),
            config_home: TempDir::new().unwrap(),
        };
        seed_registry(env.base.path());
        seed_registry(env.registry.path());
        env
    }

    pub fn project_dir(&self) -> PathBuf {
        self.workdir.path().join("svc")
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_dir().join(relative)
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read project file {}: {}", relative, e))
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        write(&self.project_dir(), relative, content);
    }

    /// Change a file in the upstream registry checkout
    pub fn write_upstream(&self, relative: &str, content: &str) {
        write(self.registry.path(), relative, content);
    }

    pub fn read_lockfile(&self) -> String {
        std::fs::read_to_string(self.project_path(".forge-lock.yaml")).unwrap_or_default()
    }

    /// `forge create go/api svc` from the base checkout
    pub fn create(&self) -> TestResult {
        let base = self.base.path().display().to_string();
        let project = self.project_dir().display().to_string();
        let result = self.run(&[
            "create",
            "go/api",
            &project,
            "--registry",
            &base,
            "--var",
            "module=example.com/svc",
        ]);
        assert!(result.success, "create failed: {}", result.combined_output());
        result
    }

    /// `forge sync` against upstream with the base checkout as merge base
    pub fn sync(&self, extra: &[&str]) -> TestResult {
        let project = self.project_dir().display().to_string();
        let registry = self.registry.path().display().to_string();
        let base = self.base.path().display().to_string();
        let mut args = vec![
            "sync",
            "--project",
            &project,
            "--registry",
            &registry,
            "--base",
            &base,
        ];
        args.extend_from_slice(extra);
        self.run(&args)
    }

    /// Run forge from the workspace directory with an isolated environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_forge"))
            .current_dir(self.workdir.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("FORGE_REGISTRY")
            .env_remove("FORGE_BASE_DIR")
            .env_remove("FORGE_VERBOSITY")
            .env_remove("FORGE_OUTPUT_JSON")
            .env_remove("FORGE_LOG")
            .output()
            .expect("Failed to execute forge");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Write `content` to `root/relative`, creating parent directories
pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(&path, content).expect("Failed to write file");
}

/// Registry with root defaults, a `go` category layer and the `go/api` blueprint
pub fn seed_registry(root: &Path) {
    write(root, "_defaults/.gitignore", GITIGNORE_V1);
    write(root, "_defaults/LICENSE", "MIT\n");
    write(root, "go/_defaults/.golangci.yml", GOLANGCI_V1);
    write(root, "go/api/blueprint.yaml", API_BLUEPRINT);
    write(root, "go/api/Makefile", MAKEFILE_V1);
    write(root, "go/api/go.mod.tmpl", GO_MOD_TEMPLATE);
    write(root, "go/api/main.go", "package main\n\nfunc main() {}\n");
    write(root, "go/api/proto/api.proto", "syntax = \"proto3\";\n");
}
