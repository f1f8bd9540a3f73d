//! Three-way manifest resolution
//!
//! Every path in the union of the base, ours (HEAD) and theirs (merged
//! branch) manifests is classified from its three blob IDs, an absent path
//! being its own distinguished value. Rules apply in order:
//!
//! 1. absent in base and ours: the file is new on their side, take theirs
//! 2. ours matches base, theirs changed it: take theirs
//! 3. ours and theirs both differ from base and from each other: content conflict
//! 4. ours matches base, theirs deleted it: remove it;
//!    ours modified, theirs deleted: delete/modify conflict
//! 5. anything else keeps our entry
//!
//! Resolution is pure: it only decides. Writing files and commits is left to
//! the merge command.

use crate::artifacts::objects::commit::Manifest;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// What the merge does for one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// File only exists on their side
    AddFromTheirs { path: PathBuf, oid: ObjectId },
    /// Only their side changed the file
    TakeTheirs { path: PathBuf, oid: ObjectId },
    /// Both sides changed the file differently; an absent side is empty
    ContentConflict {
        path: PathBuf,
        ours: Option<ObjectId>,
        theirs: ObjectId,
    },
    /// Their side deleted a file ours left unchanged
    Remove { path: PathBuf },
    /// Their side deleted a file ours modified; ours stays in place
    DeleteModifyConflict { path: PathBuf },
}

impl MergeAction {
    pub fn path(&self) -> &Path {
        match self {
            MergeAction::AddFromTheirs { path, .. }
            | MergeAction::TakeTheirs { path, .. }
            | MergeAction::ContentConflict { path, .. }
            | MergeAction::Remove { path }
            | MergeAction::DeleteModifyConflict { path } => path,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            MergeAction::ContentConflict { .. } | MergeAction::DeleteModifyConflict { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResolution {
    merged: Manifest,
    actions: Vec<MergeAction>,
}

impl MergeResolution {
    /// Manifest of the merge commit: ours with every clean action applied
    pub fn merged(&self) -> &Manifest {
        &self.merged
    }

    /// Actions in path order; paths kept as ours have none
    pub fn actions(&self) -> &[MergeAction] {
        &self.actions
    }

    pub fn has_conflicts(&self) -> bool {
        self.actions.iter().any(MergeAction::is_conflict)
    }

    pub fn conflicted_paths(&self) -> Vec<&Path> {
        self.actions
            .iter()
            .filter(|action| action.is_conflict())
            .map(MergeAction::path)
            .collect()
    }

    pub fn into_merged(self) -> Manifest {
        self.merged
    }
}

/// Inputs of a three-way merge; the base is empty for unrelated histories
#[derive(Debug, new)]
pub struct ThreeWayMerge<'m> {
    base: &'m Manifest,
    ours: &'m Manifest,
    theirs: &'m Manifest,
}

impl ThreeWayMerge<'_> {
    pub fn resolve(&self) -> MergeResolution {
        let paths = self
            .base
            .keys()
            .chain(self.ours.keys())
            .chain(self.theirs.keys())
            .collect::<BTreeSet<_>>();

        let mut merged = self.ours.clone();
        let mut actions = Vec::new();

        for path in paths {
            let Some(action) = self.classify(path) else {
                continue;
            };
            tracing::debug!(path = %path.display(), ?action, "classified");

            match &action {
                MergeAction::AddFromTheirs { path, oid } | MergeAction::TakeTheirs { path, oid } => {
                    merged.insert(path.clone(), oid.clone());
                }
                MergeAction::Remove { path } => {
                    merged.remove(path);
                }
                MergeAction::ContentConflict { .. } | MergeAction::DeleteModifyConflict { .. } => {}
            }
            actions.push(action);
        }

        MergeResolution { merged, actions }
    }

    fn classify(&self, path: &Path) -> Option<MergeAction> {
        let base = self.base.get(path);
        let ours = self.ours.get(path);
        let theirs = self.theirs.get(path);
        let path = path.to_path_buf();

        match (base, ours, theirs) {
            (None, None, Some(theirs)) => Some(MergeAction::AddFromTheirs {
                path,
                oid: theirs.clone(),
            }),
            (Some(base), ours, Some(theirs)) if ours == Some(base) && theirs != base => {
                Some(MergeAction::TakeTheirs {
                    path,
                    oid: theirs.clone(),
                })
            }
            (Some(base), ours, Some(theirs))
                if ours != Some(base) && theirs != base && ours != Some(theirs) =>
            {
                Some(MergeAction::ContentConflict {
                    path,
                    ours: ours.cloned(),
                    theirs: theirs.clone(),
                })
            }
            (Some(base), Some(ours), None) if ours == base => Some(MergeAction::Remove { path }),
            (Some(_), Some(_), None) => Some(MergeAction::DeleteModifyConflict { path }),
            _ => None,
        }
    }
}

/// Working-tree content for a content conflict
///
/// Unlike a plain concatenation of the markers and both sides, a non-empty
/// side without a trailing newline gets one appended, so `=======` and
/// `>>>>>>>` always start their own line. Empty sides stay empty.
pub fn conflict_markers(ours: &str, theirs: &str, branch: &str) -> String {
    fn terminated(text: &str) -> String {
        if text.is_empty() || text.ends_with('\n') {
            text.to_string()
        } else {
            format!("{text}\n")
        }
    }

    format!(
        "<<<<<<< HEAD\n{}=======\n{}>>>>>>> {}\n",
        terminated(ours),
        terminated(theirs),
        branch
    )
}
