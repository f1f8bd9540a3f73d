use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::SymRefName;
use crate::artifacts::branch::revision::{Revision, RevisionTarget};
use crate::artifacts::objects::commit::Manifest;
use crate::artifacts::objects::object_id::ObjectId;

const DETACHMENT_NOTICE: &str = r#"
You are in 'detached HEAD' state. You can look around, make experimental
changes and commit them, and you can discard any commits you make in this
state without impacting any branches by performing another checkout.

If you want to create a new branch to retain commits you create, you may
do so (now or later) by using the branch command. Example:

    minigit branch <new-branch-name>
"#;

impl Repository {
    /// Make the working tree match a branch or commit and point HEAD at it
    ///
    /// Files tracked by the current commit but absent from the target are
    /// removed; untracked files are left alone. The index is discarded.
    pub fn checkout(&mut self, target: &str) -> anyhow::Result<()> {
        let current_ref = self.refs().current_ref()?;
        let current_oid = self.refs().read_head()?;

        let revision_target = Revision::try_parse(target)?.resolve_target(self)?;
        let target_oid = revision_target.oid().clone();
        let target_manifest = self
            .database()
            .parse_object_as_commit(&target_oid)?
            .into_manifest();

        let current_manifest = self.head_manifest()?;
        self.migrate_workspace(&current_manifest, &target_manifest)?;

        match &revision_target {
            RevisionTarget::Branch { name, .. } => self.refs().set_head_symbolic(name)?,
            RevisionTarget::Commit(oid) => self.refs().update_head(oid, None)?,
        }
        self.index_mut().clear()?;

        let new_ref = self.refs().current_ref()?;
        tracing::info!(target, oid = %target_oid, "checked out");

        self.print_previous_head(&current_ref, current_oid.as_ref(), &target_oid)?;
        self.print_detachment_notice(&current_ref, &new_ref, target)?;
        self.print_new_head(&current_ref, &new_ref, &target_oid, &revision_target)?;

        Ok(())
    }

    fn migrate_workspace(&self, current: &Manifest, target: &Manifest) -> anyhow::Result<()> {
        for path in current.keys().filter(|path| !target.contains_key(*path)) {
            tracing::debug!(path = %path.display(), "removing file absent from target");
            self.workspace().remove_file(path)?;
        }

        for (path, oid) in target {
            let blob = self.database().parse_object_as_blob(oid)?;
            self.workspace().write_file(path, blob.content())?;
        }

        Ok(())
    }

    fn print_previous_head(
        &self,
        current_ref: &SymRefName,
        current_oid: Option<&ObjectId>,
        target_oid: &ObjectId,
    ) -> anyhow::Result<()> {
        if let Some(current_oid) = current_oid
            && current_ref.is_detached_head()
            && current_oid != target_oid
        {
            self.print_head_position("Previous HEAD position was", current_oid)?;
        }

        Ok(())
    }

    fn print_detachment_notice(
        &self,
        current_ref: &SymRefName,
        new_ref: &SymRefName,
        target: &str,
    ) -> anyhow::Result<()> {
        if !current_ref.is_detached_head() && new_ref.is_detached_head() {
            eprintln!("Note: checking out '{}'.\n{}", target, DETACHMENT_NOTICE);
        }

        Ok(())
    }

    fn print_new_head(
        &self,
        current_ref: &SymRefName,
        new_ref: &SymRefName,
        target_oid: &ObjectId,
        revision_target: &RevisionTarget,
    ) -> anyhow::Result<()> {
        match revision_target.branch() {
            Some(branch) if new_ref == current_ref => eprintln!("Already on '{}'", branch),
            Some(branch) => eprintln!("Switched to branch '{}'", branch),
            None => self.print_head_position("HEAD is now at", target_oid)?,
        }

        Ok(())
    }

    fn print_head_position(&self, message: &str, oid: &ObjectId) -> anyhow::Result<()> {
        let commit = self.database().parse_object_as_commit(oid)?;
        let short_oid = oid.to_short_oid();

        eprintln!("{} {} {}", message, short_oid, commit.short_message());
        Ok(())
    }
}
