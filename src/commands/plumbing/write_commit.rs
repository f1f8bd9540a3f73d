use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, Manifest, timestamp_from_env};
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Store a commit and move whatever HEAD designates onto it
    pub fn write_commit(
        &self,
        parents: Vec<ObjectId>,
        manifest: Manifest,
        message: String,
    ) -> anyhow::Result<(ObjectId, Commit)> {
        let commit = Commit::new(parents, timestamp_from_env(), manifest, message);
        let commit_id = self.database().store(&commit)?;

        self.refs().advance_head(&commit_id)?;

        Ok((commit_id, commit))
    }

    /// Manifest of the commit HEAD resolves to, empty on a fresh repository
    pub fn head_manifest(&self) -> anyhow::Result<Manifest> {
        match self.refs().read_head()? {
            Some(head_oid) => Ok(self
                .database()
                .parse_object_as_commit(&head_oid)?
                .into_manifest()),
            None => Ok(Manifest::new()),
        }
    }
}
