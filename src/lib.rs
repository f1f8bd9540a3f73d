//! MiniGit: a minimal version control engine
//!
//! Content-addressed object storage, branch references, a staging index and
//! the algorithms that work over the commit graph: first-parent history,
//! merge-base search, three-way merge and a naive line diff.
//!
//! - `areas`: storage areas and the `Repository` handle
//! - `artifacts`: object model and algorithms
//! - `commands`: command implementations on `Repository`
//! - `errors`: error taxonomy

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use errors::Error;
