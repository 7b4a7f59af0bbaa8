use std::fmt;
use uuid::Uuid;

/// Stable, locally-generated identity for a tree node.
///
/// Assigned once at construction and never reused, so it stays valid across
/// sibling inserts and deletes. Keys the deferred-ID correlation map and the
/// expansion set. Never sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalId(Uuid);

impl LocalId {
    pub fn new() -> Self {
        LocalId(Uuid::new_v4())
    }
}

impl Default for LocalId {
    fn default() -> Self {
        LocalId::new()
    }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
