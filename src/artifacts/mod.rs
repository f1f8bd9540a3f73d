//! Data structures and algorithms
//!
//! - `branch`: Branch names and revision parsing
//! - `core`: Shared output utilities (pager wrapper)
//! - `diff`: Manifest comparison and line alignment
//! - `log`: Commit history traversal
//! - `merge`: Merge-base search and three-way resolution
//! - `objects`: Object types (blob, commit)

pub mod branch;
pub mod core;
pub mod diff;
pub mod log;
pub mod merge;
pub mod objects;
