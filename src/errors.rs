//! Error taxonomy surfaced by repository operations
//!
//! Operations return `anyhow::Result`; every failure a user can act on is
//! raised as one of these variants so callers can `downcast_ref::<Error>()`.
//! Merge conflicts are not errors and never appear here.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    #[error("commit not found: {0}")]
    CommitNotFound(String),

    #[error("branch not found: {0}")]
    BranchNotFound(String),

    #[error("failed to write ref {path:?}: {source}")]
    RefWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no commits exist yet")]
    NoCommitsYet,

    #[error("invalid branch or commit: {0}")]
    InvalidTarget(String),

    #[error("failed to save index {path:?}: {source}")]
    IndexPersistFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot merge while HEAD is detached; checkout a branch first")]
    DetachedHeadMerge,

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("not a minigit repository: {0:?}")]
    NotARepository(PathBuf),

    #[error("path not found: {0:?}")]
    PathNotFound(PathBuf),

    #[error("short object id {prefix} is ambiguous ({} candidates)", candidates.len())]
    AmbiguousObjectId {
        prefix: String,
        candidates: Vec<ObjectId>,
    },
}

impl Error {
    pub fn commit_not_found(revision: impl Into<String>) -> Self {
        Self::CommitNotFound(revision.into())
    }

    pub fn branch_not_found(name: impl Into<String>) -> Self {
        Self::BranchNotFound(name.into())
    }

    pub fn invalid_target(target: impl Into<String>) -> Self {
        Self::InvalidTarget(target.into())
    }
}
