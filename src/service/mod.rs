pub mod factory;
pub mod provider;
pub mod rest;

pub use factory::create_service;
pub use provider::{
    ContentService, LessonUpdate, NewLesson, NewResource, NewSection, ResourceUpdate,
    SectionUpdate,
};
pub use rest::RestContentService;
