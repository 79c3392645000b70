//! Sync Use Case
//!
//! Orchestrates a sync run:
//! 1. Load the lockfile
//! 2. Resolve each tracked file's upstream content
//! 3. Apply overwrite or three-way merge per entry
//! 4. Persist the lockfile when something changed
//!
//! Files are processed in lockfile order, defaults before managed files.

use std::sync::Arc;

use crate::domain::entities::{EntryKind, Lockfile, TrackedFile};
use crate::domain::ports::{
    FileSystem, LockfileRepository, NoopEventSink, SyncEvent, SyncEventSink, TemplateRenderer,
};
use crate::domain::services::{merge, PathPattern};
use crate::domain::value_objects::path::LOCKFILE_NAME;
use crate::domain::value_objects::{ContentHash, SyncStrategy};
use crate::error::ForgeResult;

use super::super::source::{fetch_source, SourceLocator};
use super::options::SyncOptions;
use super::result::{ConflictFile, SyncResult};

/// Outcome for one tracked file
enum Outcome {
    Skipped(&'static str),
    Updated { content: Vec<u8> },
    Conflicted { content: Vec<u8>, file: ConflictFile },
}

/// Sync use case - applies upstream blueprint changes to a project
pub struct SyncUseCase<LR, FS, R>
where
    LR: LockfileRepository,
    FS: FileSystem,
    R: TemplateRenderer,
{
    lockfile_repo: LR,
    file_system: FS,
    renderer: R,
    event_sink: Arc<dyn SyncEventSink>,
}

impl<LR, FS, R> SyncUseCase<LR, FS, R>
where
    LR: LockfileRepository,
    FS: FileSystem,
    R: TemplateRenderer,
{
    pub fn new(lockfile_repo: LR, file_system: FS, renderer: R) -> Self {
        Self {
            lockfile_repo,
            file_system,
            renderer,
            event_sink: Arc::new(NoopEventSink),
        }
    }

    /// Report progress to `event_sink`
    pub fn with_events(mut self, event_sink: Arc<dyn SyncEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    /// Execute the sync use case
    pub fn execute(&self, options: &SyncOptions) -> ForgeResult<SyncResult> {
        let lockfile_path = options.project_dir.join(LOCKFILE_NAME);
        let mut lockfile = self.lockfile_repo.load(&lockfile_path)?;
        let filter = options.file_filter.as_deref().map(PathPattern::new);

        self.event_sink.on_event(SyncEvent::Started {
            project: options.project_dir.clone(),
            registry: options.registry_dir.clone(),
            tracked_count: lockfile.len(),
            dry_run: options.dry_run,
        });

        let mut result = SyncResult::new();
        let mut new_hashes: Vec<(EntryKind, String, ContentHash)> = Vec::new();

        {
            let registry = SourceLocator::new(&options.registry_dir, &lockfile.blueprint.path);
            let base = options
                .base_dir
                .as_deref()
                .map(|dir| SourceLocator::new(dir, &lockfile.blueprint.path));

            for file in lockfile.tracked_files() {
                if filter.as_ref().is_some_and(|f| !f.matches(file.path)) {
                    continue;
                }

                let Some(remote) = fetch_source(
                    &registry,
                    &self.file_system,
                    &self.renderer,
                    &file,
                    &lockfile.variables,
                )?
                else {
                    tracing::debug!(path = %file.path, "no upstream source");
                    self.skip(&mut result, file.path, "no upstream source");
                    continue;
                };

                let outcome = self.decide(&lockfile, &file, &remote, base.as_ref(), options)?;
                let strategy = if options.force {
                    SyncStrategy::Overwrite
                } else {
                    file.strategy
                };

                match outcome {
                    Outcome::Skipped(reason) => self.skip(&mut result, file.path, reason),
                    Outcome::Updated { content } => {
                        self.apply(options, file.path, &content)?;
                        self.emit(SyncEvent::FileUpdated {
                            path: file.path.to_string(),
                            strategy: strategy.to_string(),
                        });
                        result.updated.push(file.path.to_string());
                        new_hashes.push((
                            file.kind,
                            file.path.to_string(),
                            ContentHash::from_bytes(&remote),
                        ));
                    }
                    Outcome::Conflicted { content, file: conflict } => {
                        self.apply(options, file.path, &content)?;
                        self.emit(SyncEvent::FileConflicted {
                            path: file.path.to_string(),
                            conflicts: conflict.count(),
                        });
                        result.updated.push(file.path.to_string());
                        result.conflicts.push(file.path.to_string());
                        result.conflict_files.push(conflict);
                        new_hashes.push((
                            file.kind,
                            file.path.to_string(),
                            ContentHash::from_bytes(&remote),
                        ));
                    }
                }
            }
        }

        if !options.dry_run && result.has_changes() {
            for (kind, path, hash) in new_hashes {
                lockfile.set_hash(kind, &path, hash.as_str());
            }
            if let Some(commit) = &options.commit {
                lockfile.blueprint.commit = commit.clone();
            }
            lockfile.touch();
            self.lockfile_repo.save(&lockfile, &lockfile_path)?;
            self.event_sink.on_event(SyncEvent::LockfileSaved {
                path: lockfile_path,
            });
        }

        self.event_sink.on_event(SyncEvent::Completed {
            updated_count: result.updated.len(),
            skipped_count: result.skipped.len(),
            conflict_count: result.conflicts.len(),
        });

        Ok(result)
    }

    /// Pick the outcome for one file given its rendered upstream content.
    fn decide(
        &self,
        lockfile: &Lockfile,
        file: &TrackedFile<'_>,
        remote: &[u8],
        base: Option<&SourceLocator<'_>>,
        options: &SyncOptions,
    ) -> ForgeResult<Outcome> {
        let local_path = options.project_dir.join(file.path);
        let local = match self.file_system.read(&local_path) {
            Ok(bytes) => bytes,
            Err(e) if e.is_not_found() => {
                return Ok(Outcome::Updated {
                    content: remote.to_vec(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        if options.force || !file.strategy.is_merge() {
            return Ok(overwrite(&local, remote));
        }

        let base_content = match base {
            Some(locator) => fetch_source(
                locator,
                &self.file_system,
                &self.renderer,
                file,
                &lockfile.variables,
            )?,
            None => None,
        };
        let Some(base_content) = base_content else {
            tracing::debug!(path = %file.path, "no merge base, overwriting");
            return Ok(overwrite(&local, remote));
        };

        let merged = merge(&base_content, &local, remote);
        if merged.content == local {
            return Ok(Outcome::Skipped("up to date"));
        }
        tracing::debug!(
            path = %file.path,
            conflicts = merged.conflicts.len(),
            "merged"
        );

        if merged.has_conflicts() {
            Ok(Outcome::Conflicted {
                file: ConflictFile::new(file.path, merged.conflicts),
                content: merged.content,
            })
        } else {
            Ok(Outcome::Updated {
                content: merged.content,
            })
        }
    }

    fn apply(&self, options: &SyncOptions, rel_path: &str, content: &[u8]) -> ForgeResult<()> {
        if options.dry_run {
            return Ok(());
        }
        let path = options.project_dir.join(rel_path);
        tracing::trace!(path = %path.display(), bytes = content.len(), "writing");
        self.file_system.write(&path, content)?;
        Ok(())
    }

    fn skip(&self, result: &mut SyncResult, path: &str, reason: &str) {
        self.emit(SyncEvent::FileSkipped {
            path: path.to_string(),
            reason: reason.to_string(),
        });
        result.skipped.push(path.to_string());
    }

    fn emit(&self, event: SyncEvent) {
        if self.event_sink.wants_detailed_events() {
            self.event_sink.on_event(event);
        }
    }
}

fn overwrite(local: &[u8], remote: &[u8]) -> Outcome {
    if local == remote {
        Outcome::Skipped("up to date")
    } else {
        Outcome::Updated {
            content: remote.to_vec(),
        }
    }
}
