//! YAML Lockfile Repository
//!
//! Implements the LockfileRepository port using a YAML document
//! (`.forge-lock.yaml`). Saves rewrite the whole document atomically.

use std::path::Path;

use crate::domain::entities::Lockfile;
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::lockfile_repository::{LockfileError, LockfileRepository, LockfileResult};
use crate::infrastructure::fs::LocalFs;

/// YAML-based lockfile repository
pub struct YamlLockfileRepository<FS: FileSystem = LocalFs> {
    fs: FS,
}

impl YamlLockfileRepository<LocalFs> {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl<FS: FileSystem> YamlLockfileRepository<FS> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }
}

impl Default for YamlLockfileRepository<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<FS: FileSystem> LockfileRepository for YamlLockfileRepository<FS> {
    fn load(&self, path: &Path) -> LockfileResult<Lockfile> {
        let bytes = self.fs.read(path).map_err(|e| {
            if e.is_not_found() {
                LockfileError::NotFound(path.to_path_buf())
            } else {
                LockfileError::Io {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        })?;

        serde_yaml_ng::from_slice(&bytes).map_err(|e| LockfileError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn save(&self, lockfile: &Lockfile, path: &Path) -> LockfileResult<()> {
        let content =
            serde_yaml_ng::to_string(lockfile).map_err(|e| LockfileError::Serialize(e.to_string()))?;
        self.fs
            .write(path, content.as_bytes())
            .map_err(|e| LockfileError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BlueprintRef, DefaultEntry};
    use crate::domain::value_objects::{SyncStrategy, Variables};
    use tempfile::tempdir;

    fn sample() -> Lockfile {
        let mut lockfile = Lockfile::new(
            BlueprintRef {
                name: "api".into(),
                path: "go/api".into(),
                ..Default::default()
            },
            Variables::new(),
        );
        lockfile.defaults.push(DefaultEntry {
            path: ".editorconfig".into(),
            source: "_defaults/.editorconfig".into(),
            strategy: SyncStrategy::Overwrite,
            hash: "sha256:abc".into(),
        });
        lockfile
    }

    #[test]
    fn load_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let repo = YamlLockfileRepository::new();
        let err = repo.load(&dir.path().join(".forge-lock.yaml")).unwrap_err();
        assert!(matches!(err, LockfileError::NotFound(_)));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".forge-lock.yaml");
        let repo = YamlLockfileRepository::new();
        let lockfile = sample();

        repo.save(&lockfile, &path).unwrap();
        let loaded = repo.load(&path).unwrap();

        assert_eq!(loaded, lockfile);
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".forge-lock.yaml");
        std::fs::write(&path, "blueprint: [unclosed").unwrap();

        let err = YamlLockfileRepository::new().load(&path).unwrap_err();
        assert!(matches!(err, LockfileError::Parse { .. }));
    }

    #[test]
    fn missing_required_fields_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".forge-lock.yaml");
        std::fs::write(&path, "defaults: []\n").unwrap();

        let err = YamlLockfileRepository::new().load(&path).unwrap_err();
        assert!(matches!(err, LockfileError::Parse { .. }));
    }
}
