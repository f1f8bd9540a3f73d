//! References (branches and HEAD)
//!
//! References are human-readable names pointing to commits:
//! - Branches: `refs/heads/*`, one file per branch holding its tip
//! - HEAD: `refs/HEAD`, either symbolic (`ref: refs/heads/<name>`) or a
//!   detached commit ID
//!
//! Symbolic targets are resolved relative to the metadata directory. A branch
//! file that is missing or empty means the branch has no commits yet.

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::artifacts::branch::HEAD_REF_NAME;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (`.minigit`)
    path: Box<Path>,
}

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Outcome of `create_branch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchCreation {
    Created(ObjectId),
    AlreadyExists,
}

#[derive(Debug, Clone)]
enum SymRefOrOid {
    SymRef { sym_ref_name: SymRefName },
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef {
                sym_ref_name: SymRefName::new(symref_match[1].to_string()),
            }))
        } else {
            Ok(Some(SymRefOrOid::Oid(ObjectId::try_parse(
                content.to_string(),
            )?)))
        }
    }
}

impl Refs {
    /// Resolve HEAD to a commit ID; `None` on a fresh repository
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.read_symref(&self.head_path())
    }

    /// The ref HEAD currently designates: `refs/heads/<name>` when symbolic,
    /// `HEAD` when detached
    pub fn current_ref(&self) -> anyhow::Result<SymRefName> {
        match SymRefOrOid::read_symref_or_oid(&self.head_path())? {
            Some(SymRefOrOid::SymRef { sym_ref_name }) => Ok(sym_ref_name),
            Some(SymRefOrOid::Oid(_)) | None => Ok(SymRefName::head()),
        }
    }

    /// Branch HEAD points at, or `None` when detached
    pub fn current_branch(&self) -> anyhow::Result<Option<BranchName>> {
        BranchName::try_parse_sym_ref_name(&self.current_ref()?)
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    /// Tip of a branch; `None` when the branch is absent or has no commits
    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        self.read_symref(&self.branch_path(branch_name))
    }

    fn read_symref(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        match SymRefOrOid::read_symref_or_oid(path)? {
            Some(SymRefOrOid::SymRef { sym_ref_name }) => {
                self.read_symref(&self.path.join(sym_ref_name.as_ref_path()))
            }
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            None => Ok(None),
        }
    }

    /// Point HEAD at `oid`
    ///
    /// With a branch, the branch tip moves to `oid` and HEAD becomes symbolic
    /// to it; without one, HEAD is detached at `oid`.
    pub fn update_head(&self, oid: &ObjectId, branch: Option<&BranchName>) -> anyhow::Result<()> {
        match branch {
            Some(branch) => {
                self.update_ref_file(&self.branch_path(branch), oid.as_ref())?;
                self.set_head_symbolic(branch)
            }
            None => {
                tracing::debug!(oid = %oid, "detaching HEAD");
                self.update_ref_file(&self.head_path(), oid.as_ref())
            }
        }
    }

    /// Move whatever HEAD designates (checked-out branch or detached HEAD)
    pub fn advance_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        let branch = self.current_branch()?;
        self.update_head(oid, branch.as_ref())
    }

    pub fn set_head_symbolic(&self, branch: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(
            &self.head_path(),
            &format!("ref: {}", branch.to_sym_ref_name().as_ref_path()),
        )
    }

    /// Create a branch at the current HEAD commit
    ///
    /// Fails with `NoCommitsYet` on a fresh repository; an existing name is
    /// left untouched.
    pub fn create_branch(&self, name: &BranchName) -> anyhow::Result<BranchCreation> {
        let head_oid = self.read_head()?.ok_or(Error::NoCommitsYet)?;

        if self.branch_exists(name) {
            return Ok(BranchCreation::AlreadyExists);
        }

        self.update_ref_file(&self.branch_path(name), head_oid.as_ref())?;
        tracing::info!(branch = %name, oid = %head_oid, "created branch");

        Ok(BranchCreation::Created(head_oid))
    }

    /// Create an empty branch file (no commits yet)
    pub fn create_unborn_branch(&self, name: &BranchName) -> anyhow::Result<()> {
        if !self.branch_exists(name) {
            self.update_ref_file(&self.branch_path(name), "")?;
        }

        Ok(())
    }

    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                BranchName::try_parse(relative_path.to_string_lossy().replace('\\', "/")).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn update_ref_file(&self, path: &Path, raw_ref: &str) -> anyhow::Result<()> {
        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, raw_ref)
        };

        write().map_err(|source| Error::RefWriteFailed {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), value = raw_ref, "updated ref");
        Ok(())
    }

    pub fn branch_path(&self, branch_name: &BranchName) -> PathBuf {
        self.path.join(branch_name.to_sym_ref_name().as_ref_path())
    }

    pub fn head_path(&self) -> PathBuf {
        self.refs_path().join(HEAD_REF_NAME)
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }
}
