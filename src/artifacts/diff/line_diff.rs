//! Line aligner
//!
//! A synchronized zipper over the two line sequences, not an edit-distance
//! diff. Two cursors advance together while lines match; on a mismatch the
//! old line is emitted as removed and the new line as added in the same step.
//! The cursors never re-synchronize, so one inserted line near the top turns
//! every following line into a remove/add pair.
//!
//! Lines are split on `\n` only; a trailing `\r` stays part of the line.

use colored::Colorize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit<'a> {
    Equal(&'a str),
    Delete(&'a str),
    Insert(&'a str),
}

impl Edit<'_> {
    /// Line with its marker, coloured for terminals
    pub fn colored(&self) -> String {
        match self {
            Edit::Equal(_) => self.to_string(),
            Edit::Delete(_) => self.to_string().red().to_string(),
            Edit::Insert(_) => self.to_string().green().to_string(),
        }
    }
}

impl fmt::Display for Edit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Equal(line) => write!(f, "  {line}"),
            Edit::Delete(line) => write!(f, "- {line}"),
            Edit::Insert(line) => write!(f, "+ {line}"),
        }
    }
}

pub fn zip_lines<'a>(old: &'a str, new: &'a str) -> Vec<Edit<'a>> {
    let old_lines = old.split_terminator('\n').collect::<Vec<_>>();
    let new_lines = new.split_terminator('\n').collect::<Vec<_>>();

    let (mut i, mut j) = (0, 0);
    let mut edits = Vec::with_capacity(old_lines.len().max(new_lines.len()));

    while i < old_lines.len() || j < new_lines.len() {
        match (old_lines.get(i).copied(), new_lines.get(j).copied()) {
            (Some(old_line), Some(new_line)) if old_line == new_line => {
                edits.push(Edit::Equal(old_line));
                i += 1;
                j += 1;
            }
            (old_line, new_line) => {
                if let Some(old_line) = old_line {
                    edits.push(Edit::Delete(old_line));
                    i += 1;
                }
                if let Some(new_line) = new_line {
                    edits.push(Edit::Insert(new_line));
                    j += 1;
                }
            }
        }
    }

    edits
}
