use crate::models::LocalId;
use std::collections::HashMap;

/// Deferred-ID correlation map.
///
/// Records the server id assigned to a locally-created parent so a child
/// created right afterwards can still resolve its parent, even when the
/// create response has not been merged into the canonical tree yet. Keys
/// are stable local ids, never array positions, so sibling deletes and
/// inserts cannot misattribute a child. Cleared whenever the tree is
/// resynchronized from the authoritative source.
#[derive(Debug, Default)]
pub struct PendingParents {
    confirmed: HashMap<LocalId, String>,
}

impl PendingParents {
    pub fn new() -> Self {
        PendingParents::default()
    }

    pub fn record(&mut self, local_id: LocalId, server_id: String) {
        self.confirmed.insert(local_id, server_id);
    }

    pub fn resolve(&self, local_id: LocalId) -> Option<&str> {
        self.confirmed.get(&local_id).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.confirmed.clear();
    }

    pub fn len(&self) -> usize {
        self.confirmed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty()
    }
}
