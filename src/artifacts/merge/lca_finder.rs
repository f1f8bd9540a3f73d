//! Common ancestor search for merges
//!
//! Finds the merge base of two commits with a bidirectional breadth-first
//! search over the full parent sets of both commits.
//!
//! ## Algorithm
//!
//! Each side keeps a FIFO frontier and marks the commits it has reached. The
//! two frontiers take turns, one dequeue each:
//! - the dequeued commit is returned if the opposite side has already reached it
//! - otherwise its parents not yet reached by this side are marked and queued
//!
//! The search ends with no result once both frontiers are exhausted (disjoint
//! histories). A commit that cannot be loaded is a boundary: it is still
//! checked against the other side, but nothing is queued behind it.
//!
//! ## Tie-break
//!
//! The first intersection found in alternating order wins. With several merge
//! points at different depths this is not guaranteed to be the deepest common
//! ancestor:
//!
//! ```text
//!     A
//!    / \
//!   B   C
//!   |\ /|
//!   | X |
//!   |/ \|
//!   D   E
//! ```
//!
//! `lca(D, E)` is one of `B` or `C`, never `A`, but which one depends on
//! traversal order. The inputs are put in canonical (digest) order before the
//! search so the answer is the same whichever way round they are passed.

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use std::collections::{HashMap, VecDeque};
use std::fmt;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    struct VisitState: u8 {
        const NONE = 0b00;
        const VISITED_FROM_LEFT = 0b01;
        const VISITED_FROM_RIGHT = 0b10;
    }
}

impl fmt::Debug for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(VisitState::VISITED_FROM_LEFT) {
            flags.push("LEFT");
        }
        if self.contains(VisitState::VISITED_FROM_RIGHT) {
            flags.push("RIGHT");
        }
        if flags.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}

impl fmt::Display for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One side of the search: its frontier and the flag it leaves behind
struct Frontier {
    queue: VecDeque<ObjectId>,
    own: VisitState,
    other: VisitState,
}

impl Frontier {
    fn new(start: ObjectId, own: VisitState, other: VisitState) -> Self {
        Self {
            queue: VecDeque::from([start]),
            own,
            other,
        }
    }
}

/// Finds the merge base of two commits
///
/// Commit data comes from `commit_loader`, so any storage backend (object
/// database, commit cache, in-memory graph) can drive the search. The loader
/// returns `None` for commits it cannot read.
pub struct LCAFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> Option<SlimCommit>,
{
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> LCAFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> Option<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Common ancestor of `left` and `right`, or `None` for disjoint histories
    ///
    /// Symmetric in its arguments; `find_common_ancestor(x, x)` is `x`.
    pub fn find_common_ancestor(&self, left: &ObjectId, right: &ObjectId) -> Option<ObjectId> {
        let (left, right) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };

        let mut states = HashMap::<ObjectId, VisitState>::new();
        states.insert(left.clone(), VisitState::VISITED_FROM_LEFT);
        *states.entry(right.clone()).or_insert(VisitState::NONE) |= VisitState::VISITED_FROM_RIGHT;

        let mut frontiers = [
            Frontier::new(
                left.clone(),
                VisitState::VISITED_FROM_LEFT,
                VisitState::VISITED_FROM_RIGHT,
            ),
            Frontier::new(
                right.clone(),
                VisitState::VISITED_FROM_RIGHT,
                VisitState::VISITED_FROM_LEFT,
            ),
        ];

        while frontiers.iter().any(|frontier| !frontier.queue.is_empty()) {
            for frontier in frontiers.iter_mut() {
                if let Some(found) = self.expand(frontier, &mut states) {
                    tracing::debug!(%left, %right, ancestor = %found, "found common ancestor");
                    return Some(found);
                }
            }
        }

        tracing::debug!(%left, %right, visited = states.len(), "no common ancestor");
        None
    }

    /// Dequeue one commit from `frontier`; return it if the other side has it
    fn expand(
        &self,
        frontier: &mut Frontier,
        states: &mut HashMap<ObjectId, VisitState>,
    ) -> Option<ObjectId> {
        let current = frontier.queue.pop_front()?;
        let current_state = states.get(&current).copied().unwrap_or(VisitState::NONE);

        tracing::trace!(commit = %current, state = %current_state, "expanding");

        if current_state.contains(frontier.other) {
            return Some(current);
        }

        let Some(commit) = (self.commit_loader)(&current) else {
            tracing::debug!(commit = %current, "unreadable commit, not expanding");
            return None;
        };

        for parent in commit.parents {
            let state = states.entry(parent.clone()).or_insert(VisitState::NONE);
            if !state.contains(frontier.own) {
                *state |= frontier.own;
                frontier.queue.push_back(parent);
            }
        }

        None
    }
}
