use crate::error::Result;
use crate::models::{Lesson, LessonKind, Resource, ResourceKind, Section};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSection {
    pub title: String,
    pub description: Option<String>,
    pub order_index: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionUpdate {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLesson {
    pub title: String,
    pub duration_minutes: u32,
    pub kind: LessonKind,
    pub video_url: Option<String>,
    pub content: Option<String>,
    pub order_index: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonUpdate {
    pub title: String,
    pub duration_minutes: u32,
    pub kind: LessonKind,
    pub video_url: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResource {
    pub kind: ResourceKind,
    pub title: String,
    pub url: String,
}

/// Updates carry the same fields as creation
pub type ResourceUpdate = NewResource;

/// Persists single course-content nodes and returns their server identity.
///
/// Any transport satisfying this contract is acceptable; the shipped
/// implementation is `RestContentService`. Transport, authorization and
/// backend-validation failures all surface as
/// `EditorError::Persistence`; a failed call means the mutation did not
/// happen.
#[async_trait]
pub trait ContentService: Send + Sync {
    async fn create_section(&self, course_id: &str, section: NewSection) -> Result<Section>;

    async fn update_section(&self, section_id: &str, update: SectionUpdate) -> Result<Section>;

    async fn delete_section(&self, section_id: &str) -> Result<()>;

    async fn create_lesson(&self, section_id: &str, lesson: NewLesson) -> Result<Lesson>;

    async fn update_lesson(&self, lesson_id: &str, update: LessonUpdate) -> Result<Lesson>;

    async fn delete_lesson(&self, lesson_id: &str) -> Result<()>;

    async fn create_resource(&self, lesson_id: &str, resource: NewResource) -> Result<Resource>;

    async fn update_resource(&self, resource_id: &str, update: ResourceUpdate) -> Result<Resource>;

    async fn delete_resource(&self, resource_id: &str) -> Result<()>;

    /// Fetches the authoritative nested tree for a course.
    async fn fetch_course_content(&self, course_id: &str) -> Result<Vec<Section>>;
}
