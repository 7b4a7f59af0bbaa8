use crate::models::{Lesson, LocalId};
use serde::{Deserialize, Serialize};

/// Represents a top-level grouping of lessons within a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Server-assigned identifier; None until the backend confirms creation
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub order_index: u32,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(skip)]
    pub local_id: LocalId,
}

impl Section {
    /// Takes the server's view of this section's own fields, keeping the
    /// locally-owned lesson list and local identity.
    pub(crate) fn absorb_remote(&mut self, remote: Section) {
        self.id = remote.id;
        self.title = remote.title;
        self.description = remote.description;
    }
}
