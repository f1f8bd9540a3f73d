use crate::areas::repository::METADATA_DIR;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Manifest;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [METADATA_DIR, ".", ".."];

/// Working tree rooted at the repository path
///
/// All paths handed in and out are relative to the root.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).exists()
    }

    pub fn parse_blob(&self, path: &Path) -> anyhow::Result<Blob> {
        let data = self.read_file(path)?;
        Ok(Blob::new(data))
    }

    /// Regular files under `root_file_path` (or the whole tree), relative to
    /// the workspace root, sorted, metadata directory excluded
    pub fn list_files(&self, root_file_path: Option<PathBuf>) -> anyhow::Result<Vec<PathBuf>> {
        let root_file_path = match root_file_path {
            Some(p) => self
                .path
                .join(&p)
                .canonicalize()
                .map_err(|_| Error::PathNotFound(p))?,
            None => self.path.to_path_buf(),
        };

        let relative = root_file_path
            .strip_prefix(self.path.as_ref())
            .with_context(|| format!("{:?} is outside the repository", root_file_path))?;
        if Self::is_ignored(relative) {
            return Ok(vec![]);
        }

        if root_file_path.is_dir() {
            let mut files = WalkDir::new(&root_file_path)
                .into_iter()
                .filter_entry(|entry| !Self::is_ignored_name(entry.file_name()))
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .filter_map(|entry| {
                    entry
                        .path()
                        .strip_prefix(self.path.as_ref())
                        .ok()
                        .map(Path::to_path_buf)
                })
                .collect::<Vec<_>>();
            files.sort();

            Ok(files)
        } else {
            Ok(vec![relative.to_path_buf()])
        }
    }

    /// Hash every regular file into an ephemeral manifest
    ///
    /// Nothing is written to the object store.
    pub fn snapshot(&self) -> anyhow::Result<Manifest> {
        self.list_files(None)?
            .into_iter()
            .map(|path| -> anyhow::Result<(PathBuf, ObjectId)> {
                let oid = self.parse_blob(&path)?.object_id()?;
                Ok((path, oid))
            })
            .collect()
    }

    fn is_ignored_name(name: &std::ffi::OsStr) -> bool {
        IGNORED_PATHS.contains(&name.to_string_lossy().as_ref())
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                Self::is_ignored_name(name)
            } else {
                false
            }
        })
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        let content = std::fs::read(&full_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(content.into())
    }

    /// Write a file, creating parent directories and replacing a directory
    /// that sits where the file should go
    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for: {:?}", file_path))?;
        }

        if full_path.is_dir() {
            std::fs::remove_dir_all(&full_path).with_context(|| {
                format!("Failed to remove existing directory: {:?}", file_path)
            })?;
        }

        std::fs::write(&full_path, data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))
    }

    /// Remove a file and prune the directories it leaves empty
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if full_path.is_file() {
            std::fs::remove_file(&full_path)
                .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
        }

        self.prune_empty_parent_dirs(&full_path)
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.starts_with(self.path.as_ref())
            && parent.is_dir()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)
                .with_context(|| format!("Failed to remove empty directory: {:?}", parent))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}
