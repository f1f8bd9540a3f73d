//! Commit history traversal for `log`
//!
//! - `rev_list`: first-parent walk from a starting commit

pub mod rev_list;
