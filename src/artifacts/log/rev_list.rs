use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// Mainline history starting at a commit
///
/// Follows first parents only, so the second parent of a merge commit is
/// never visited. A fresh `RevList` is needed to walk again.
#[derive(Clone, new)]
pub struct RevList<'r> {
    database: &'r Database,
    start_oid: Option<ObjectId>,
}

impl<'r> IntoIterator for RevList<'r> {
    type Item = (ObjectId, Commit);
    type IntoIter = RevListIntoIter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIntoIter {
            database: self.database,
            current_commit_oid: self.start_oid,
        }
    }
}

#[derive(Clone)]
pub struct RevListIntoIter<'r> {
    database: &'r Database,
    current_commit_oid: Option<ObjectId>,
}

impl Iterator for RevListIntoIter<'_> {
    type Item = (ObjectId, Commit);

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.database.parse_object_as_commit(&commit_oid) {
            Ok(commit) => {
                // Move to the first parent for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some((commit_oid, commit))
            }
            Err(error) => {
                // An unreadable commit ends the walk
                tracing::debug!(commit = %commit_oid, %error, "stopping history walk");
                None
            }
        }
    }
}
