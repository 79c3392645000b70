//! Upstream source lookup
//!
//! Finds the registry-side (or base-side) file for a lockfile entry and
//! loads its rendered content. Shared by drift checking and sync.
//!
//! For an entry key (`source` if recorded, else `path`) the candidates are,
//! in order:
//! 1. `<root>/<key>`
//! 2. `<root>/_defaults/<key>`
//! 3. managed files only: `<root>/<blueprint>/<key>`, then each category
//!    `_defaults` directory from innermost to outermost
//!
//! Each candidate is tried as-is before `<candidate>.tmpl`.

use std::path::{Path, PathBuf};

use crate::domain::entities::{EntryKind, TrackedFile};
use crate::domain::ports::{FileSystem, TemplateError, TemplateRenderer};
use crate::domain::value_objects::path::{is_template, segments, DEFAULTS_DIR, TEMPLATE_SUFFIX};
use crate::domain::value_objects::Variables;
use crate::error::ForgeResult;

/// A located upstream file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedSource {
    pub path: PathBuf,
    pub is_template: bool,
}

/// Looks up entry sources under one registry (or base) checkout
#[derive(Debug, Clone, Copy)]
pub struct SourceLocator<'a> {
    root: &'a Path,
    blueprint_path: &'a str,
}

impl<'a> SourceLocator<'a> {
    pub fn new(root: &'a Path, blueprint_path: &'a str) -> Self {
        Self {
            root,
            blueprint_path,
        }
    }

    pub fn root(&self) -> &Path {
        self.root
    }

    /// Candidate paths for `file`, highest priority first
    pub fn candidates(&self, file: &TrackedFile<'_>) -> Vec<PathBuf> {
        let key = file.lookup_key();
        let mut dirs = vec![self.root.to_path_buf(), self.root.join(DEFAULTS_DIR)];

        if file.kind == EntryKind::Managed {
            let segs = segments(self.blueprint_path);
            let mut blueprint_dir = self.root.to_path_buf();
            blueprint_dir.extend(&segs);
            dirs.push(blueprint_dir);

            for depth in (1..segs.len()).rev() {
                let mut category = self.root.to_path_buf();
                category.extend(&segs[..depth]);
                dirs.push(category.join(DEFAULTS_DIR));
            }
        }

        let mut out = Vec::with_capacity(dirs.len() * 2);
        for dir in dirs {
            let plain = dir.join(key);
            let mut templated = plain.clone().into_os_string();
            templated.push(TEMPLATE_SUFFIX);
            out.push(plain);
            out.push(PathBuf::from(templated));
        }
        out
    }

    /// First existing candidate for `file`
    pub fn locate<FS: FileSystem>(&self, fs: &FS, file: &TrackedFile<'_>) -> Option<LocatedSource> {
        let found = self.candidates(file).into_iter().find(|p| fs.is_file(p))?;
        let is_template = found
            .file_name()
            .map(|n| is_template(&n.to_string_lossy()))
            .unwrap_or(false);
        tracing::trace!(entry = %file.path, source = %found.display(), "located source");
        Some(LocatedSource {
            path: found,
            is_template,
        })
    }
}

/// Read a located source, rendering it with `vars` when it is a template.
pub fn load_source<FS, R>(
    fs: &FS,
    renderer: &R,
    source: &LocatedSource,
    vars: &Variables,
) -> ForgeResult<Vec<u8>>
where
    FS: FileSystem,
    R: TemplateRenderer,
{
    let bytes = fs.read(&source.path)?;
    if !source.is_template {
        return Ok(bytes);
    }
    render_bytes(renderer, &source.path, bytes, vars)
}

/// Render raw template bytes read from `path`
pub fn render_bytes<R: TemplateRenderer>(
    renderer: &R,
    path: &Path,
    bytes: Vec<u8>,
    vars: &Variables,
) -> ForgeResult<Vec<u8>> {
    let text = String::from_utf8(bytes).map_err(|_| TemplateError::Read {
        path: path.to_path_buf(),
        message: "template is not valid UTF-8".to_string(),
    })?;
    Ok(renderer.render_string(&text, vars)?.into_bytes())
}

/// Locate and load in one step; `Ok(None)` when nothing is found.
pub fn fetch_source<FS, R>(
    locator: &SourceLocator<'_>,
    fs: &FS,
    renderer: &R,
    file: &TrackedFile<'_>,
    vars: &Variables,
) -> ForgeResult<Option<Vec<u8>>>
where
    FS: FileSystem,
    R: TemplateRenderer,
{
    match locator.locate(fs, file) {
        Some(source) => load_source(fs, renderer, &source, vars).map(Some),
        None => Ok(None),
    }
}
