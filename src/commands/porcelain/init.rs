use crate::areas::repository::Repository;
use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::artifacts::branch::branch_name::BranchName;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the metadata layout; running it again changes nothing
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.refs().head_path().is_file() {
            writeln!(
                self.writer(),
                "Repository already initialized in {}",
                self.metadata_path().display()
            )?;
            return Ok(());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .minigit/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .minigit/refs/heads directory")?;

        let default_branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;
        self.refs()
            .create_unborn_branch(&default_branch)
            .context("Failed to create default branch file")?;
        self.refs()
            .set_head_symbolic(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        let mut index = self.index_mut();
        // create the index file if it does not exist
        if !index.path().exists() {
            index.clear()?;
        }
        drop(index);

        writeln!(
            self.writer(),
            "Initialized empty MiniGit repository in {}",
            self.metadata_path().display()
        )?;

        Ok(())
    }
}
