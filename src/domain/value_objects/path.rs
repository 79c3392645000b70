//! Registry path conventions
//!
//! Reserved names inside a blueprint registry and helpers for the
//! slash-separated relative paths recorded in lockfiles.

use std::path::Path;

/// Directory holding files inherited by every blueprint below it
pub const DEFAULTS_DIR: &str = "_defaults";

/// Blueprint metadata file, never copied into output
pub const METADATA_FILE: &str = "blueprint.yaml";

/// Suffix marking a file that is rendered before being written
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Lockfile name at the root of a scaffolded project
pub const LOCKFILE_NAME: &str = ".forge-lock.yaml";

/// Returns true if the relative path names a template
pub fn is_template(rel_path: &str) -> bool {
    rel_path.ends_with(TEMPLATE_SUFFIX) && rel_path.len() > TEMPLATE_SUFFIX.len()
}

/// Output path for a registry-relative path (template suffix removed)
pub fn strip_template_suffix(rel_path: &str) -> &str {
    if is_template(rel_path) {
        &rel_path[..rel_path.len() - TEMPLATE_SUFFIX.len()]
    } else {
        rel_path
    }
}

/// Normalize a filesystem path to the forward-slash form used in lockfiles.
pub fn to_slash(path: &Path) -> String {
    let joined = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    joined.replace('\\', "/")
}

/// Split a blueprint path like `go/api` into its non-empty segments.
pub fn segments(blueprint_path: &str) -> Vec<&str> {
    blueprint_path
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}
