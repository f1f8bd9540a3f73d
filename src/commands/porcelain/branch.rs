use crate::areas::refs::BranchCreation;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Create `branch_name` at HEAD, or list branches when no name is given
    pub fn branch(&mut self, branch_name: Option<&str>) -> anyhow::Result<()> {
        let Some(branch_name) = branch_name else {
            return self.list_branches();
        };

        let branch_name = BranchName::try_parse(branch_name.to_string())?;

        match self.refs().create_branch(&branch_name)? {
            BranchCreation::Created(oid) => writeln!(
                self.writer(),
                "Created branch {} at {}",
                branch_name,
                oid.to_short_oid()
            )?,
            BranchCreation::AlreadyExists => {
                writeln!(self.writer(), "Branch already exists: {}", branch_name)?
            }
        }

        Ok(())
    }

    fn list_branches(&self) -> anyhow::Result<()> {
        let current_branch = self.refs().current_branch()?;

        if current_branch.is_none() {
            let head = match self.refs().read_head()? {
                Some(oid) => oid.to_short_oid(),
                None => "(no commits)".to_string(),
            };
            writeln!(
                self.writer(),
                "* {}",
                format!("(HEAD detached at {})", head).green()
            )?;
        }

        for branch in self.refs().list_branches()? {
            if current_branch.as_ref() == Some(&branch) {
                writeln!(self.writer(), "* {}", branch.to_string().green())?;
            } else {
                writeln!(self.writer(), "  {}", branch)?;
            }
        }

        Ok(())
    }
}
