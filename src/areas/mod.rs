//! Core repository components
//!
//! The storage areas behind every command:
//!
//! - `database`: content-addressed object store (blobs and commits)
//! - `index`: staging manifest for the next commit
//! - `refs`: branch tips and HEAD
//! - `repository`: handle owning the areas of one working tree
//! - `workspace`: working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
