use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Freeze the staged entries and removals on top of the HEAD manifest
    /// into a commit
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let message = message.trim().to_string();
        if message.is_empty() {
            anyhow::bail!("Aborting commit due to empty commit message");
        }

        if self.index().is_empty() {
            writeln!(self.writer(), "nothing to commit")?;
            return Ok(());
        }

        let parent = self.refs().read_head()?;
        let is_root = match parent {
            Some(_) => "",
            None => " (root-commit)",
        };

        let manifest = self.index().apply_to(self.head_manifest()?);

        let (commit_id, commit) = self.write_commit(parent.into_iter().collect(), manifest, message)?;
        self.index_mut().clear()?;

        let branch = match self.refs().current_branch()? {
            Some(branch) => branch.to_string(),
            None => "detached HEAD".to_string(),
        };

        writeln!(
            self.writer(),
            "[{}{} {}] {}",
            branch,
            is_root,
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
