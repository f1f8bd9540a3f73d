//! Object types and operations
//!
//! All content is stored as objects identified by SHA-1 digests:
//!
//! - **Blob**: File content (raw bytes)
//! - **Commit**: Snapshot record (parents, timestamp, file manifest, message)
//!
//! Both are framed as `<type> <size>\0<content>` before hashing, so a blob can
//! never share a digest with a commit.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated form shown to users
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;

/// Shortest prefix accepted when resolving an abbreviated ID
pub const MIN_OBJECT_ID_PREFIX: usize = 4;
