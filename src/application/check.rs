//! Drift Check Use Case
//!
//! Classifies every tracked file of a scaffolded project against its
//! lockfile record and, when a registry checkout is supplied, against the
//! registry's current content. Never writes anything.

use std::path::Path;

use serde::Serialize;

use crate::domain::entities::{EntryKind, Lockfile, TrackedFile};
use crate::domain::ports::{FileSystem, TemplateRenderer};
use crate::domain::value_objects::{ContentHash, FileStatus};
use crate::error::ForgeResult;

use super::source::{fetch_source, SourceLocator};

/// Status of one tracked file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileUpdate {
    pub path: String,
    pub status: FileStatus,
    /// Registry source for defaults, blueprint path for managed files
    pub source: String,
}

/// Result of a drift check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub defaults_updates: Vec<FileUpdate>,
    pub managed_updates: Vec<FileUpdate>,
}

impl CheckResult {
    /// All updates, defaults first
    pub fn iter(&self) -> impl Iterator<Item = &FileUpdate> {
        self.defaults_updates
            .iter()
            .chain(self.managed_updates.iter())
    }

    /// True when any file is not up to date
    pub fn has_drift(&self) -> bool {
        self.iter().any(|u| !u.status.is_up_to_date())
    }
}

/// Drift checker over an injected file system and renderer
pub struct DriftChecker<FS, R>
where
    FS: FileSystem,
    R: TemplateRenderer,
{
    file_system: FS,
    renderer: R,
}

impl<FS, R> DriftChecker<FS, R>
where
    FS: FileSystem,
    R: TemplateRenderer,
{
    pub fn new(file_system: FS, renderer: R) -> Self {
        Self {
            file_system,
            renderer,
        }
    }

    /// Check `lockfile` against `project_dir` (and `registry_dir` when given).
    pub fn check(
        &self,
        lockfile: &Lockfile,
        project_dir: &Path,
        registry_dir: Option<&Path>,
    ) -> ForgeResult<CheckResult> {
        let locator = registry_dir.map(|root| SourceLocator::new(root, &lockfile.blueprint.path));
        let mut result = CheckResult::default();

        for file in lockfile.tracked_files() {
            let status = self.classify(lockfile, &file, project_dir, locator.as_ref())?;
            tracing::debug!(path = %file.path, status = %status, "classified");

            let update = FileUpdate {
                path: file.path.to_string(),
                status,
                source: match file.kind {
                    EntryKind::Default => file.source.to_string(),
                    EntryKind::Managed => lockfile.blueprint.path.clone(),
                },
            };
            match file.kind {
                EntryKind::Default => result.defaults_updates.push(update),
                EntryKind::Managed => result.managed_updates.push(update),
            }
        }

        Ok(result)
    }

    fn classify(
        &self,
        lockfile: &Lockfile,
        file: &TrackedFile<'_>,
        project_dir: &Path,
        locator: Option<&SourceLocator<'_>>,
    ) -> ForgeResult<FileStatus> {
        let local = match self.file_system.read(&project_dir.join(file.path)) {
            Ok(bytes) => bytes,
            Err(_) => return Ok(FileStatus::Missing),
        };

        if !file.has_hash() {
            return Ok(FileStatus::UpToDate);
        }

        let local_changed = !ContentHash::from_bytes(&local).matches_str(file.hash);

        let registry_hash = match locator {
            Some(locator) => fetch_source(
                locator,
                &self.file_system,
                &self.renderer,
                file,
                &lockfile.variables,
            )?
            .map(|bytes| ContentHash::from_bytes(&bytes)),
            None => None,
        };

        Ok(match registry_hash {
            Some(hash) => FileStatus::from_changes(local_changed, !hash.matches_str(file.hash)),
            None if local_changed => FileStatus::Modified,
            None => FileStatus::UpToDate,
        })
    }
}
