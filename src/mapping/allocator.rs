//! Sequential node ids.
use tracing::{debug, trace};

use crate::core::types::NodeId;

/// Hands out node ids by post-increment. One per open document.
///
/// Mutation needs `&mut self`; wrap in a `Mutex` to share across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeIdAllocator {
    next: NodeId,
}

impl NodeIdAllocator {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(value: NodeId) -> Self {
        Self { next: value }
    }

    /// Returns the current value and advances by one.
    pub fn next_id(&mut self) -> NodeId {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        trace!(id, "allocated node id");
        id
    }

    /// Id the next call to [`Self::next_id`] will return.
    pub fn peek(&self) -> NodeId {
        self.next
    }

    /// Sets the next id. No bounds check: the caller passes a value past every
    /// id already in use.
    pub fn reset(&mut self, value: NodeId) {
        debug!(from = self.next, to = value, "node id counter reset");
        self.next = value;
    }

    /// Moves the counter up to `value` if it is behind, never backwards.
    pub fn advance_to(&mut self, value: NodeId) {
        if value > self.next {
            self.reset(value);
        }
    }
}
