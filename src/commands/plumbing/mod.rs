//! Plumbing commands (low-level object access)
//!
//! - `cat-file`: pretty-print a stored object
//! - `hash-object`: compute a file's blob ID and optionally store it
//! - `write_commit`: commit creation shared by `commit` and `merge`

pub mod cat_file;
pub mod hash_object;
mod write_commit;
