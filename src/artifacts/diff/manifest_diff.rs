use crate::artifacts::objects::commit::Manifest;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileChangeType {
    Added,
    Removed,
    Modified,
}

impl FileChangeType {
    pub fn label(&self) -> &'static str {
        match self {
            FileChangeType::Added => "+++ Added",
            FileChangeType::Removed => "--- Removed",
            FileChangeType::Modified => "*** Modified",
        }
    }
}

/// One path whose blob differs between two manifests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub change_type: FileChangeType,
    pub old_oid: Option<ObjectId>,
    pub new_oid: Option<ObjectId>,
}

/// Compare two manifests path by path, in path order
///
/// Paths with identical blob IDs on both sides are not reported.
pub fn diff_manifests(old: &Manifest, new: &Manifest) -> Vec<FileChange> {
    let paths = old.keys().chain(new.keys()).collect::<BTreeSet<_>>();

    paths
        .into_iter()
        .filter_map(|path| {
            let old_oid = old.get(path);
            let new_oid = new.get(path);

            let change_type = match (old_oid, new_oid) {
                (None, Some(_)) => FileChangeType::Added,
                (Some(_), None) => FileChangeType::Removed,
                (Some(old_oid), Some(new_oid)) if old_oid != new_oid => FileChangeType::Modified,
                _ => return None,
            };

            Some(FileChange {
                path: path.clone(),
                change_type,
                old_oid: old_oid.cloned(),
                new_oid: new_oid.cloned(),
            })
        })
        .collect()
}
