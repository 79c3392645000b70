//! Test fixtures - reusable registry content.

/// Blueprint metadata for `go/api`
pub const API_BLUEPRINT: &str = r#"
name: api
description: Go HTTP service
variables:
  use_grpc: false
exclude:
  - LICENSE
conditions:
  - when: "{{ not use_grpc }}"
    exclude: ["proto/*"]
managed_files:
  - path: Makefile
    strategy: merge
  - path: .golangci.yml
    strategy: overwrite
"#;

pub const MAKEFILE_V1: &str =
    "build:\n\tgo build ./...\ntest:\n\tgo test ./...\nlint:\n\tgolangci-lint run\n";

/// Upstream edits the lint target
pub const MAKEFILE_V2: &str =
    "build:\n\tgo build ./...\ntest:\n\tgo test ./...\nlint:\n\tgolangci-lint run --fix\n";

pub const GOLANGCI_V1: &str = "linters:\n  enable:\n    - govet\n";
pub const GOLANGCI_V2: &str = "linters:\n  enable:\n    - govet\n    - staticcheck\n";

pub const GITIGNORE_V1: &str = "bin/\n";
pub const GITIGNORE_V2: &str = "bin/\n.env\n";

pub const GO_MOD_TEMPLATE: &str = "module {{ module }}\n\ngo 1.22\n";
