//! Merge algorithms
//!
//! - `lca_finder`: merge base search over the commit graph
//! - `resolution`: per-path three-way classification of manifests

pub mod lca_finder;
pub mod resolution;
