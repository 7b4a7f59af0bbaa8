mod lesson;
mod local_id;
mod resource;
mod section;

pub use lesson::{Lesson, LessonKind};
pub use local_id::LocalId;
pub use resource::{Resource, ResourceKind};
pub use section::Section;
