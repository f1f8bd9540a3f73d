use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// Mainline history from HEAD, newest first
    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        let Some(head_oid) = self.refs().read_head()? else {
            writeln!(self.writer(), "No commits yet")?;
            return Ok(());
        };

        for (index, (commit_oid, commit)) in RevList::new(self.database(), Some(head_oid))
            .into_iter()
            .enumerate()
        {
            if opts.oneline {
                self.show_commit_oneline(&commit_oid, &commit)?;
            } else {
                if index > 0 {
                    writeln!(self.writer())?;
                }
                self.show_commit_medium(&commit_oid, &commit)?;
            }
        }

        Ok(())
    }

    fn show_commit_medium(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", commit_oid).yellow()
        )?;
        if commit.is_merge() {
            let parents = commit
                .parents()
                .iter()
                .map(ObjectId::to_short_oid)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(self.writer(), "Merge: {}", parents)?;
        }
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            commit_oid.to_short_oid().yellow(),
            commit.short_message()
        )?;

        Ok(())
    }
}
