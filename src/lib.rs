mod config;
mod editor;
mod error;
mod logger;
mod models;
mod service;
mod validate;

pub use config::{get_config_path, load_config, save_config, Config};
pub use editor::{CourseEditor, Dialog, LessonDraft, NodePath, ResourceDraft, SectionDraft};
pub use error::{EditorError, Result};
pub use logger::init_logging;
pub use models::{Lesson, LessonKind, LocalId, Resource, ResourceKind, Section};
pub use service::{
    create_service, ContentService, LessonUpdate, NewLesson, NewResource, NewSection,
    ResourceUpdate, RestContentService, SectionUpdate,
};
pub use validate::ValidationError;
