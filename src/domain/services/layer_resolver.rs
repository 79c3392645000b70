//! Layer resolver
//!
//! Builds the output manifest for one blueprint by walking the registry's
//! inheritance chain, lowest priority first:
//! - `<root>/_defaults/` (registry-wide defaults)
//! - `<root>/<prefix>/_defaults/` for each category prefix, outermost first
//! - `<root>/<blueprint>/` (the blueprint itself)
//!
//! A later layer replaces an earlier layer's entry for the same path.

use std::path::{Path, PathBuf};

use crate::domain::entities::{FileEntry, FileSet};
use crate::domain::value_objects::path::{
    is_template, segments, to_slash, DEFAULTS_DIR, METADATA_FILE,
};
use crate::domain::value_objects::SourceLayer;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("failed to read registry directory {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

impl ResolveError {
    fn io(path: &Path, err: std::io::Error) -> Self {
        ResolveError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// One directory in the inheritance chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerDir {
    pub path: PathBuf,
    pub layer: SourceLayer,
}

/// Resolves the layered file set of a blueprint inside a registry checkout
#[derive(Debug, Clone)]
pub struct LayerResolver {
    registry_root: PathBuf,
}

impl LayerResolver {
    pub fn new(registry_root: impl Into<PathBuf>) -> Self {
        Self {
            registry_root: registry_root.into(),
        }
    }

    pub fn registry_root(&self) -> &Path {
        &self.registry_root
    }

    /// Directories walked for `blueprint_path`, lowest priority first
    pub fn layer_dirs(&self, blueprint_path: &str) -> Vec<LayerDir> {
        let segs = segments(blueprint_path);
        let mut dirs = vec![LayerDir {
            path: self.registry_root.join(DEFAULTS_DIR),
            layer: SourceLayer::RegistryDefault,
        }];

        let mut prefix = self.registry_root.clone();
        for seg in segs.iter().take(segs.len().saturating_sub(1)) {
            prefix.push(seg);
            dirs.push(LayerDir {
                path: prefix.join(DEFAULTS_DIR),
                layer: SourceLayer::CategoryDefault,
            });
        }

        let mut blueprint_dir = self.registry_root.clone();
        for seg in &segs {
            blueprint_dir.push(seg);
        }
        dirs.push(LayerDir {
            path: blueprint_dir,
            layer: SourceLayer::Blueprint,
        });
        dirs
    }

    /// Resolve the file set for `blueprint_path`, dropping `exclusions` at the end.
    pub fn resolve(
        &self,
        blueprint_path: &str,
        exclusions: &[String],
    ) -> Result<FileSet, ResolveError> {
        let mut files = FileSet::new();

        for dir in self.layer_dirs(blueprint_path) {
            let before = files.len();
            walk_layer(&dir.path, &dir.path, dir.layer, &mut files)?;
            tracing::debug!(
                layer = %dir.layer,
                path = %dir.path.display(),
                new_paths = files.len() - before,
                "walked layer"
            );
        }

        for excluded in exclusions {
            if files.remove(excluded).is_some() {
                tracing::trace!(path = %excluded, "excluded by blueprint");
            }
        }

        Ok(files)
    }
}

/// Recursively add files under `current` to `files`, relative to `layer_root`.
///
/// A missing layer directory contributes nothing; any other I/O error aborts.
fn walk_layer(
    layer_root: &Path,
    current: &Path,
    layer: SourceLayer,
    files: &mut FileSet,
) -> Result<(), ResolveError> {
    let read = match std::fs::read_dir(current) {
        Ok(read) => read,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && current == layer_root => {
            return Ok(())
        }
        Err(e) => return Err(ResolveError::io(current, e)),
    };

    let mut entries = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| ResolveError::io(current, e))?;
        entries.push(entry.path());
    }
    // read_dir order is platform dependent
    entries.sort();

    for path in entries {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut meta = std::fs::symlink_metadata(&path).map_err(|e| ResolveError::io(&path, e))?;
        if meta.file_type().is_symlink() {
            meta = match std::fs::metadata(&path) {
                Ok(target) => target,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "skipping dangling symlink");
                    continue;
                }
                Err(e) => return Err(ResolveError::io(&path, e)),
            };
        }

        if meta.is_dir() {
            // Nested _defaults belong to a deeper category pass
            if name == DEFAULTS_DIR {
                continue;
            }
            walk_layer(layer_root, &path, layer, files)?;
        } else if meta.is_file() {
            if name == METADATA_FILE {
                continue;
            }
            let rel = path
                .strip_prefix(layer_root)
                .map(to_slash)
                .unwrap_or_else(|_| name.clone());
            let template = is_template(&rel);
            files.add(FileEntry::new(path, rel, layer, template));
        }
    }

    Ok(())
}
