//! FileSet entity - the resolved output manifest for one blueprint
//!
//! Entries are keyed by output-relative path. Re-adding a path replaces the
//! entry but keeps the slot where the path was first seen, so iteration order
//! is stable across layers while the highest layer wins on content.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::value_objects::path::strip_template_suffix;
use crate::domain::value_objects::SourceLayer;

/// One file contributed by a registry layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Source location on disk
    pub abs_path: PathBuf,
    /// Path relative to the layer root; keeps the template suffix
    pub rel_path: String,
    pub source_layer: SourceLayer,
    pub is_template: bool,
}

impl FileEntry {
    pub fn new(
        abs_path: impl Into<PathBuf>,
        rel_path: impl Into<String>,
        source_layer: SourceLayer,
        is_template: bool,
    ) -> Self {
        Self {
            abs_path: abs_path.into(),
            rel_path: rel_path.into(),
            source_layer,
            is_template,
        }
    }

    /// Path this entry will have in the generated project
    pub fn output_path(&self) -> &str {
        if self.is_template {
            strip_template_suffix(&self.rel_path)
        } else {
            &self.rel_path
        }
    }
}

/// Ordered, override-aware collection of file entries
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    entries: HashMap<String, FileEntry>,
    order: Vec<String>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; an existing path keeps its position but takes the new entry.
    pub fn add(&mut self, entry: FileEntry) {
        let key = entry.rel_path.clone();
        if self.entries.insert(key.clone(), entry).is_none() {
            self.order.push(key);
        }
    }

    pub fn get(&self, rel_path: &str) -> Option<&FileEntry> {
        self.entries.get(rel_path)
    }

    pub fn contains(&self, rel_path: &str) -> bool {
        self.entries.contains_key(rel_path)
    }

    /// Remove a path. Returns the removed entry, if any.
    pub fn remove(&mut self, rel_path: &str) -> Option<FileEntry> {
        let removed = self.entries.remove(rel_path)?;
        self.order.retain(|k| k != rel_path);
        Some(removed)
    }

    /// Remove every path for which `predicate` returns true.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> Vec<String>
    where
        F: FnMut(&str) -> bool,
    {
        let doomed: Vec<String> = self
            .order
            .iter()
            .filter(|k| predicate(k))
            .cloned()
            .collect();
        for key in &doomed {
            self.remove(key);
        }
        doomed
    }

    /// Number of unique paths
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Paths in first-seen order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.order.iter().filter_map(|k| self.entries.get(k))
    }
}
