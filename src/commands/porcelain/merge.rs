use crate::areas::database::CommitCache;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::merge::lca_finder::LCAFinder;
use crate::artifacts::merge::resolution::{MergeAction, MergeResolution, ThreeWayMerge, conflict_markers};
use crate::artifacts::objects::commit::Manifest;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use std::io::Write;

impl Repository {
    /// Three-way merge of a branch into the checked-out branch
    ///
    /// A clean merge is committed with HEAD and the branch tip as parents. On
    /// conflicts the working tree keeps the partial result and no commit is
    /// made; refs are left untouched.
    pub fn merge(&mut self, target: &str) -> anyhow::Result<()> {
        let head_oid = self.refs().read_head()?.ok_or(Error::NoCommitsYet)?;

        let target_branch = BranchName::try_parse(target.to_string())
            .ok()
            .filter(|branch| self.refs().branch_exists(branch))
            .ok_or_else(|| Error::branch_not_found(target))?;
        let merge_oid = self
            .refs()
            .read_branch(&target_branch)?
            .ok_or_else(|| Error::branch_not_found(target))?;

        if merge_oid == head_oid {
            writeln!(self.writer(), "Already up to date")?;
            return Ok(());
        }

        let current_branch = self
            .refs()
            .current_branch()?
            .ok_or(Error::DetachedHeadMerge)?;

        writeln!(
            self.writer(),
            "Merging branch '{}' ({}) into {} ({})",
            target_branch,
            merge_oid.to_short_oid(),
            current_branch,
            head_oid.to_short_oid()
        )?;

        let base_manifest = match self.find_merge_base(&head_oid, &merge_oid) {
            Some(base_oid) => self
                .database()
                .parse_object_as_commit(&base_oid)?
                .into_manifest(),
            None => Manifest::new(),
        };
        let ours = self.database().parse_object_as_commit(&head_oid)?.into_manifest();
        let theirs = self
            .database()
            .parse_object_as_commit(&merge_oid)?
            .into_manifest();

        let resolution = ThreeWayMerge::new(&base_manifest, &ours, &theirs).resolve();
        self.apply_resolution(&resolution, &target_branch)?;

        if resolution.has_conflicts() {
            tracing::info!(
                conflicts = resolution.conflicted_paths().len(),
                "merge stopped on conflicts"
            );
            writeln!(
                self.writer(),
                "Merge conflicts detected. Resolve them and commit the result."
            )?;
            return Ok(());
        }

        let (commit_oid, _) = self.write_commit(
            vec![head_oid, merge_oid],
            resolution.into_merged(),
            format!("Merge branch '{}'", target_branch),
        )?;

        writeln!(
            self.writer(),
            "Merge successful. New commit: {}",
            commit_oid.to_short_oid()
        )?;

        Ok(())
    }

    fn find_merge_base(&self, head_oid: &ObjectId, merge_oid: &ObjectId) -> Option<ObjectId> {
        let commit_cache = CommitCache::new();
        let database = self.database();

        let lca_finder =
            LCAFinder::new(|oid| commit_cache.get_or_load_slim_commit(database, oid));
        let base_oid = lca_finder.find_common_ancestor(head_oid, merge_oid);

        tracing::debug!(
            base = ?base_oid.as_ref().map(ObjectId::to_short_oid),
            loaded = commit_cache.len(),
            "merge base"
        );
        base_oid
    }

    fn apply_resolution(
        &self,
        resolution: &MergeResolution,
        target_branch: &BranchName,
    ) -> anyhow::Result<()> {
        for action in resolution.actions() {
            let path = action.path();

            match action {
                MergeAction::AddFromTheirs { oid, .. } => {
                    writeln!(
                        self.writer(),
                        "Taking new file from branch '{}': {}",
                        target_branch,
                        path.display()
                    )?;
                    self.checkout_blob(path, oid)?;
                }
                MergeAction::TakeTheirs { oid, .. } => {
                    writeln!(
                        self.writer(),
                        "Taking changes from branch '{}' for: {}",
                        target_branch,
                        path.display()
                    )?;
                    self.checkout_blob(path, oid)?;
                }
                MergeAction::ContentConflict { ours, theirs, .. } => {
                    writeln!(
                        self.writer(),
                        "CONFLICT (content): {} modified in both branches",
                        path.display()
                    )?;
                    let ours = match ours {
                        Some(oid) => self.database().parse_object_as_blob(oid)?.text(),
                        None => String::new(),
                    };
                    let theirs = self.database().parse_object_as_blob(theirs)?.text();

                    self.workspace().write_file(
                        path,
                        conflict_markers(&ours, &theirs, target_branch.as_ref()).as_bytes(),
                    )?;
                }
                MergeAction::Remove { .. } => {
                    writeln!(
                        self.writer(),
                        "Removing file deleted in branch '{}': {}",
                        target_branch,
                        path.display()
                    )?;
                    self.workspace().remove_file(path)?;
                }
                MergeAction::DeleteModifyConflict { .. } => {
                    writeln!(
                        self.writer(),
                        "CONFLICT (delete/modify): {} was deleted in branch '{}' but modified in current branch",
                        path.display(),
                        target_branch
                    )?;
                }
            }
        }

        Ok(())
    }

    fn checkout_blob(&self, path: &std::path::Path, oid: &ObjectId) -> anyhow::Result<()> {
        let blob = self.database().parse_object_as_blob(oid)?;
        self.workspace().write_file(path, blob.content())
    }
}
