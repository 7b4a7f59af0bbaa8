use crate::models::{LocalId, Resource};
use serde::{Deserialize, Serialize};

/// How a lesson delivers its material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Video,
    Reading,
}

/// Represents a lesson within a section
///
/// Exactly one of `video_url` / `content` is populated, determined by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Option<String>,
    pub title: String,
    pub duration_minutes: u32,
    pub kind: LessonKind,
    pub video_url: Option<String>,
    pub content: Option<String>,
    pub order_index: u32,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(skip)]
    pub local_id: LocalId,
}

impl Lesson {
    pub(crate) fn absorb_remote(&mut self, remote: Lesson) {
        self.id = remote.id;
        self.title = remote.title;
        self.duration_minutes = remote.duration_minutes;
        self.kind = remote.kind;
        self.video_url = remote.video_url;
        self.content = remote.content;
    }
}
