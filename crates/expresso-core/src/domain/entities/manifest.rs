//! The `ResourceManifest`: the ordered plan of what lands on disk.
//!
//! Resolving a blueprint produces a manifest; the materializer executes it
//! in order. Between those two steps nothing touches the filesystem, which
//! is what makes `--dry-run` free.

use std::collections::BTreeSet;

use crate::domain::{
    entities::common::{FileMode, RelativePath},
    error::DomainError,
};

/// Identifier of a payload in the template catalog.
///
/// Keys are flat strings (`"app.js"`, `"views/index.pug"`); the catalog
/// adapter owns the mapping to actual bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateKey(String);

impl TemplateKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TemplateKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a resource reaches its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Rendered through the template engine with the assembly locals.
    Template,
    /// Catalog bytes copied verbatim.
    StaticCopy,
}

/// One file the generator will produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub source: TemplateKey,
    pub dest: RelativePath,
    pub kind: FileKind,
    pub mode: FileMode,
}

impl ResourceEntry {
    pub fn template(source: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            source: TemplateKey::new(source),
            dest: RelativePath::new(dest.into()),
            kind: FileKind::Template,
            mode: FileMode::Regular,
        }
    }

    pub fn static_copy(source: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            source: TemplateKey::new(source),
            dest: RelativePath::new(dest.into()),
            kind: FileKind::StaticCopy,
            mode: FileMode::Regular,
        }
    }

    pub fn executable(mut self) -> Self {
        self.mode = FileMode::Executable;
        self
    }
}

/// Ordered resource plan for one generation run.
///
/// Invariants, checked by [`ResourceManifest::validate`]:
/// - destination paths are unique;
/// - every path is relative and free of `..` (guaranteed by
///   [`RelativePath`] on construction, revalidated here).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceManifest {
    entries: Vec<ResourceEntry>,
    directories: Vec<RelativePath>,
}

impl ResourceManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ResourceEntry) {
        self.entries.push(entry);
    }

    /// Record a directory that must exist even when no entry lands in it
    /// (e.g. `public/images`).
    pub fn push_dir(&mut self, dir: impl Into<String>) {
        self.directories.push(RelativePath::new(dir.into()));
    }

    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.directories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = BTreeSet::new();
        for entry in &self.entries {
            if !seen.insert(&entry.dest) {
                return Err(DomainError::DuplicateDestination {
                    path: entry.dest.to_string(),
                });
            }
            // RelativePath enforces this on construction; a failure here
            // means an entry was built around the newtype.
            RelativePath::try_new(entry.dest.as_path())?;
        }
        Ok(())
    }
}
