use crate::models::{Lesson, LessonKind, Resource, ResourceKind, Section};
use serde::{Deserialize, Serialize};

/// Form state for the add/edit section dialogs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionDraft {
    pub title: String,
    pub description: String,
}

impl SectionDraft {
    pub fn from_section(section: &Section) -> Self {
        SectionDraft {
            title: section.title.clone(),
            description: section.description.clone().unwrap_or_default(),
        }
    }
}

/// Form state for the add/edit lesson dialogs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonDraft {
    pub title: String,
    pub duration_minutes: u32,
    pub kind: LessonKind,
    pub video_url: String,
    pub content: String,
}

impl Default for LessonDraft {
    fn default() -> Self {
        LessonDraft {
            title: String::new(),
            duration_minutes: 0,
            kind: LessonKind::Video,
            video_url: String::new(),
            content: String::new(),
        }
    }
}

impl LessonDraft {
    pub fn from_lesson(lesson: &Lesson) -> Self {
        LessonDraft {
            title: lesson.title.clone(),
            duration_minutes: lesson.duration_minutes,
            kind: lesson.kind,
            video_url: lesson.video_url.clone().unwrap_or_default(),
            content: lesson.content.clone().unwrap_or_default(),
        }
    }
}

/// Form state for the add/edit resource dialogs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDraft {
    pub kind: ResourceKind,
    pub title: String,
    pub url: String,
}

impl Default for ResourceDraft {
    fn default() -> Self {
        ResourceDraft {
            kind: ResourceKind::Pdf,
            title: String::new(),
            url: String::new(),
        }
    }
}

impl ResourceDraft {
    pub fn from_resource(resource: &Resource) -> Self {
        ResourceDraft {
            kind: resource.kind,
            title: resource.title.clone(),
            url: resource.url.clone(),
        }
    }
}

/// The editor's single pending dialog.
///
/// Indices are the target's position at the moment the dialog opened; the
/// editor holds at most one dialog, so no mutation can shift them while it
/// is pending.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    AddSection {
        draft: SectionDraft,
    },
    EditSection {
        section: usize,
        draft: SectionDraft,
    },
    DeleteSection {
        section: usize,
    },
    AddLesson {
        section: usize,
        draft: LessonDraft,
    },
    EditLesson {
        section: usize,
        lesson: usize,
        draft: LessonDraft,
    },
    DeleteLesson {
        section: usize,
        lesson: usize,
    },
    AddResource {
        section: usize,
        lesson: usize,
        draft: ResourceDraft,
    },
    EditResource {
        section: usize,
        lesson: usize,
        resource: usize,
        draft: ResourceDraft,
    },
    DeleteResource {
        section: usize,
        lesson: usize,
        resource: usize,
    },
}
