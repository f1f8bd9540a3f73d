//! Diff algorithms
//!
//! - `manifest_diff`: which paths were added, removed or modified
//! - `diff_target`: text of one side (stored blob or working-tree file)
//! - `line_diff`: naive line aligner for the content of one path

pub mod diff_target;
pub mod line_diff;
pub mod manifest_diff;
