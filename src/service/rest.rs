use crate::error::Result;
use crate::models::{Lesson, LessonKind, LocalId, Resource, ResourceKind, Section};
use crate::service::provider::{
    ContentService, LessonUpdate, NewLesson, NewResource, NewSection, ResourceUpdate,
    SectionUpdate,
};
use crate::EditorError;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSectionBody {
    title: String,
    description: Option<String>,
    order_index: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateSectionBody {
    title: String,
    description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateLessonBody {
    title: String,
    duration: u32,
    #[serde(rename = "type")]
    kind: LessonKind,
    video_url: Option<String>,
    content: Option<String>,
    order_index: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateLessonBody {
    title: String,
    duration: u32,
    #[serde(rename = "type")]
    kind: LessonKind,
    video_url: Option<String>,
    content: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceBody {
    #[serde(rename = "type")]
    kind: ResourceKind,
    title: String,
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SectionDto {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    order_index: u32,
    #[serde(default)]
    lessons: Vec<LessonDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LessonDto {
    id: String,
    title: String,
    #[serde(default)]
    duration: u32,
    #[serde(rename = "type")]
    kind: LessonKind,
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    order_index: u32,
    #[serde(default)]
    resources: Vec<ResourceDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceDto {
    id: String,
    #[serde(rename = "type")]
    kind: ResourceKind,
    title: String,
    url: String,
}

impl From<SectionDto> for Section {
    fn from(dto: SectionDto) -> Self {
        Section {
            id: Some(dto.id),
            title: dto.title,
            description: dto.description,
            order_index: dto.order_index,
            lessons: dto.lessons.into_iter().map(Lesson::from).collect(),
            local_id: LocalId::new(),
        }
    }
}

impl From<LessonDto> for Lesson {
    fn from(dto: LessonDto) -> Self {
        Lesson {
            id: Some(dto.id),
            title: dto.title,
            duration_minutes: dto.duration,
            kind: dto.kind,
            video_url: dto.video_url,
            content: dto.content,
            order_index: dto.order_index,
            resources: dto.resources.into_iter().map(Resource::from).collect(),
            local_id: LocalId::new(),
        }
    }
}

impl From<ResourceDto> for Resource {
    fn from(dto: ResourceDto) -> Self {
        Resource {
            id: Some(dto.id),
            kind: dto.kind,
            title: dto.title,
            url: dto.url,
            local_id: LocalId::new(),
        }
    }
}

/// REST-backed [`ContentService`] speaking the marketplace backend's
/// JSON contract (camelCase fields, `type` discriminators, bearer auth).
pub struct RestContentService {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestContentService {
    pub fn new(base_url: String, api_key: Option<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| EditorError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(RestContentService {
            client,
            base_url,
            api_key,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| EditorError::Persistence(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(EditorError::Persistence(format!(
                "Content API error ({}): {}",
                status, error_text
            )));
        }

        Ok(response)
    }

    async fn execute_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.execute(request).await?;
        response
            .json()
            .await
            .map_err(|e| EditorError::Persistence(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl ContentService for RestContentService {
    async fn create_section(&self, course_id: &str, section: NewSection) -> Result<Section> {
        let url = self.endpoint(&format!("courses/{}/sections", course_id));
        let body = CreateSectionBody {
            title: section.title,
            description: section.description,
            order_index: section.order_index,
        };
        let dto: SectionDto = self.execute_json(self.client.post(&url).json(&body)).await?;
        Ok(dto.into())
    }

    async fn update_section(&self, section_id: &str, update: SectionUpdate) -> Result<Section> {
        let url = self.endpoint(&format!("sections/{}", section_id));
        let body = UpdateSectionBody {
            title: update.title,
            description: update.description,
        };
        let dto: SectionDto = self.execute_json(self.client.put(&url).json(&body)).await?;
        Ok(dto.into())
    }

    async fn delete_section(&self, section_id: &str) -> Result<()> {
        let url = self.endpoint(&format!("sections/{}", section_id));
        self.execute(self.client.delete(&url)).await?;
        Ok(())
    }

    async fn create_lesson(&self, section_id: &str, lesson: NewLesson) -> Result<Lesson> {
        let url = self.endpoint(&format!("sections/{}/lessons", section_id));
        let body = CreateLessonBody {
            title: lesson.title,
            duration: lesson.duration_minutes,
            kind: lesson.kind,
            video_url: lesson.video_url,
            content: lesson.content,
            order_index: lesson.order_index,
        };
        let dto: LessonDto = self.execute_json(self.client.post(&url).json(&body)).await?;
        Ok(dto.into())
    }

    async fn update_lesson(&self, lesson_id: &str, update: LessonUpdate) -> Result<Lesson> {
        let url = self.endpoint(&format!("lessons/{}", lesson_id));
        let body = UpdateLessonBody {
            title: update.title,
            duration: update.duration_minutes,
            kind: update.kind,
            video_url: update.video_url,
            content: update.content,
        };
        let dto: LessonDto = self.execute_json(self.client.put(&url).json(&body)).await?;
        Ok(dto.into())
    }

    async fn delete_lesson(&self, lesson_id: &str) -> Result<()> {
        let url = self.endpoint(&format!("lessons/{}", lesson_id));
        self.execute(self.client.delete(&url)).await?;
        Ok(())
    }

    async fn create_resource(&self, lesson_id: &str, resource: NewResource) -> Result<Resource> {
        let url = self.endpoint(&format!("lessons/{}/resources", lesson_id));
        let body = ResourceBody {
            kind: resource.kind,
            title: resource.title,
            url: resource.url,
        };
        let dto: ResourceDto = self.execute_json(self.client.post(&url).json(&body)).await?;
        Ok(dto.into())
    }

    async fn update_resource(&self, resource_id: &str, update: ResourceUpdate) -> Result<Resource> {
        let url = self.endpoint(&format!("resources/{}", resource_id));
        let body = ResourceBody {
            kind: update.kind,
            title: update.title,
            url: update.url,
        };
        let dto: ResourceDto = self.execute_json(self.client.put(&url).json(&body)).await?;
        Ok(dto.into())
    }

    async fn delete_resource(&self, resource_id: &str) -> Result<()> {
        let url = self.endpoint(&format!("resources/{}", resource_id));
        self.execute(self.client.delete(&url)).await?;
        Ok(())
    }

    async fn fetch_course_content(&self, course_id: &str) -> Result<Vec<Section>> {
        let url = self.endpoint(&format!("courses/{}/content", course_id));
        let dtos: Vec<SectionDto> = self.execute_json(self.client.get(&url)).await?;
        Ok(dtos.into_iter().map(Section::from).collect())
    }
}
