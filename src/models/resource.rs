use crate::models::LocalId;
use serde::{Deserialize, Serialize};

/// Kind of supplementary material attached to a lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Pdf,
    ExternalLink,
    Video,
    Document,
}

/// Represents a downloadable or linked resource within a lesson
///
/// Resources carry no order index; array position defines their order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: Option<String>,
    pub kind: ResourceKind,
    pub title: String,
    pub url: String,
    #[serde(skip)]
    pub local_id: LocalId,
}

impl Resource {
    pub(crate) fn absorb_remote(&mut self, remote: Resource) {
        self.id = remote.id;
        self.kind = remote.kind;
        self.title = remote.title;
        self.url = remote.url;
    }
}
