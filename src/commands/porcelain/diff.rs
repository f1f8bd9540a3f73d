use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::line_diff::zip_lines;
use crate::artifacts::diff::manifest_diff::{FileChange, diff_manifests};
use crate::artifacts::objects::commit::Manifest;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

/// Right-hand side of a comparison
enum DiffSide {
    Commit(ObjectId),
    WorkingTree,
}

impl Repository {
    /// Compare two commits, or a commit (HEAD by default) with the working tree
    pub fn diff(&self, old_revision: Option<&str>, new_revision: Option<&str>) -> anyhow::Result<()> {
        let old_oid = match old_revision {
            Some(revision) => Revision::try_parse(revision)?.resolve(self)?,
            None => match self.refs().read_head()? {
                Some(oid) => oid,
                None => {
                    writeln!(self.writer(), "No commits to compare")?;
                    return Ok(());
                }
            },
        };
        let new_side = match new_revision {
            Some(revision) => DiffSide::Commit(Revision::try_parse(revision)?.resolve(self)?),
            None => DiffSide::WorkingTree,
        };

        let old_manifest = self.database().parse_object_as_commit(&old_oid)?.into_manifest();
        let new_manifest = match &new_side {
            DiffSide::Commit(new_oid) => {
                writeln!(
                    self.writer(),
                    "Comparing commit {} with {}:",
                    old_oid.to_short_oid(),
                    new_oid.to_short_oid()
                )?;
                self.database().parse_object_as_commit(new_oid)?.into_manifest()
            }
            DiffSide::WorkingTree => {
                writeln!(
                    self.writer(),
                    "Comparing working directory against commit {}:",
                    old_oid.to_short_oid()
                )?;
                self.workspace().snapshot()?
            }
        };

        self.print_manifest_diff(&old_manifest, &new_manifest, &new_side)
    }

    fn print_manifest_diff(
        &self,
        old_manifest: &Manifest,
        new_manifest: &Manifest,
        new_side: &DiffSide,
    ) -> anyhow::Result<()> {
        for change in diff_manifests(old_manifest, new_manifest) {
            writeln!(
                self.writer(),
                "{}: {}",
                change.change_type.label(),
                change.path.display()
            )?;

            let old = match &change.old_oid {
                Some(oid) => DiffTarget::from_blob(&change.path, oid, self.database())?,
                None => DiffTarget::from_nothing(&change.path),
            };
            let new = self.new_diff_target(&change, new_side)?;

            self.print_diff(&old, &new)?;
        }

        Ok(())
    }

    fn new_diff_target(&self, change: &FileChange, new_side: &DiffSide) -> anyhow::Result<DiffTarget> {
        match (&change.new_oid, new_side) {
            (None, _) => Ok(DiffTarget::from_nothing(&change.path)),
            (Some(_), DiffSide::WorkingTree) => DiffTarget::from_file(&change.path, self.workspace()),
            (Some(oid), DiffSide::Commit(_)) => {
                DiffTarget::from_blob(&change.path, oid, self.database())
            }
        }
    }

    fn print_diff(&self, old: &DiffTarget, new: &DiffTarget) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", format!("--- a/{}", old.file().display()).bold())?;
        writeln!(self.writer(), "{}", format!("+++ b/{}", new.file().display()).bold())?;

        for edit in zip_lines(old.text(), new.text()) {
            writeln!(self.writer(), "{}", edit.colored())?;
        }
        writeln!(self.writer())?;

        Ok(())
    }
}
