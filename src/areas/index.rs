//! Staging index
//!
//! The index records what the next commit changes on top of the HEAD
//! manifest: the blob each staged path should point to, or the removal of a
//! tracked path. It is loaded once when the repository handle is built and
//! written back as a full snapshot after every mutation; there are no partial
//! or append writes.
//!
//! ## Index File Format
//!
//! One `<path> <oid>` record per line, sorted by path. A removal is written as
//! `<path> -`. The digest (or marker) is always the last field so paths may
//! contain spaces.

use crate::artifacts::objects::commit::Manifest;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Last field of a removal record
const REMOVAL_MARKER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEntry {
    Staged(ObjectId),
    Removed,
}

impl IndexEntry {
    fn parse(raw: &str) -> anyhow::Result<Self> {
        if raw == REMOVAL_MARKER {
            Ok(IndexEntry::Removed)
        } else {
            Ok(IndexEntry::Staged(ObjectId::try_parse(raw.to_string())?))
        }
    }
}

impl std::fmt::Display for IndexEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexEntry::Staged(oid) => write!(f, "{oid}"),
            IndexEntry::Removed => write!(f, "{REMOVAL_MARKER}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.minigit/index`)
    path: Box<Path>,
    entries: BTreeMap<PathBuf, IndexEntry>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entry_by_path(&self, path: &Path) -> Option<&IndexEntry> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> &BTreeMap<PathBuf, IndexEntry> {
        &self.entries
    }

    /// Paths staged with a blob, removals excluded
    pub fn staged_paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries
            .iter()
            .filter(|(_, entry)| matches!(entry, IndexEntry::Staged(_)))
            .map(|(path, _)| path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Lay the staged changes over `manifest`
    pub fn apply_to(&self, mut manifest: Manifest) -> Manifest {
        for (path, entry) in &self.entries {
            match entry {
                IndexEntry::Staged(oid) => {
                    manifest.insert(path.clone(), oid.clone());
                }
                IndexEntry::Removed => {
                    manifest.remove(path);
                }
            }
        }

        manifest
    }

    /// Load the index from disk, replacing the in-memory entries
    ///
    /// A missing or empty file yields an empty index.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read index file {}", self.path.display()))?;

        for line in content.lines().filter(|line| !line.trim().is_empty()) {
            let (path, entry) = line
                .rsplit_once(' ')
                .with_context(|| format!("Invalid index record: {line:?}"))?;
            self.entries
                .insert(PathBuf::from(path), IndexEntry::parse(entry)?);
        }

        tracing::debug!(entries = self.entries.len(), "loaded index");
        Ok(())
    }

    /// Upsert one entry and persist the whole index
    pub fn stage(&mut self, path: PathBuf, oid: ObjectId) -> anyhow::Result<()> {
        self.entries.insert(path, IndexEntry::Staged(oid));
        self.write_updates()
    }

    /// Record that `path` leaves the next commit
    pub fn stage_removal(&mut self, path: PathBuf) -> anyhow::Result<()> {
        self.entries.insert(path, IndexEntry::Removed);
        self.write_updates()
    }

    /// Forget whatever is staged for `path`
    pub fn unstage(&mut self, path: &Path) -> anyhow::Result<()> {
        if self.entries.remove(path).is_some() {
            self.write_updates()?;
        }

        Ok(())
    }

    /// Drop every entry, in memory and on disk
    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.write_updates()
    }

    pub fn write_updates(&self) -> anyhow::Result<()> {
        let content = self
            .entries
            .iter()
            .map(|(path, entry)| format!("{} {}\n", path.to_string_lossy(), entry))
            .collect::<String>();

        std::fs::write(&self.path, content).map_err(|source| Error::IndexPersistFailed {
            path: self.path.to_path_buf(),
            source,
        })?;

        tracing::debug!(entries = self.entries.len(), "persisted index");
        Ok(())
    }
}
