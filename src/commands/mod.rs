//! Command implementations
//!
//! Every command is an inherent method on `Repository`, grouped in two
//! categories:
//!
//! - `plumbing`: low-level object access (cat-file, hash-object)
//! - `porcelain`: version control workflows (add, commit, merge, ...)

pub mod plumbing;
pub mod porcelain;
