//! Porcelain commands (user-facing workflows)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Create a new commit
//! - `log`: Show mainline history
//! - `branch`: Create or list branches
//! - `checkout`: Switch branches or detach at a commit
//! - `merge`: Three-way merge of a branch into the current one
//! - `diff`: Show changes between commits or against the working tree

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod merge;
