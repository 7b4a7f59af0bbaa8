mod correlation;
mod dialog;

pub use correlation::PendingParents;
pub use dialog::{Dialog, LessonDraft, ResourceDraft, SectionDraft};

use crate::error::{EditorError, Result};
use crate::models::{Lesson, LocalId, Resource, Section};
use crate::service::ContentService;
use crate::validate;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Position of an expandable node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodePath {
    Section(usize),
    Lesson(usize, usize),
}

/// The course-structure editor.
///
/// Owns the section → lesson → resource tree for one course, the pending
/// dialog, the expansion set and the deferred-ID correlation map. Every
/// mutation validates locally, then (when a persistence collaborator is
/// configured) persists the node before touching the tree, so a failed
/// call leaves the tree exactly as it was. Mutating operations take
/// `&mut self`; the exclusive borrow serializes them against one editor
/// instance.
pub struct CourseEditor {
    course_id: String,
    sections: Vec<Section>,
    service: Option<Arc<dyn ContentService>>,
    pending: PendingParents,
    expanded: HashSet<LocalId>,
    dialog: Option<Dialog>,
}

impl CourseEditor {
    pub fn new(course_id: &str, service: Option<Arc<dyn ContentService>>) -> Self {
        CourseEditor {
            course_id: course_id.to_string(),
            sections: Vec::new(),
            service,
            pending: PendingParents::new(),
            expanded: HashSet::new(),
            dialog: None,
        }
    }

    /// Editor with no persistence collaborator; every mutation applies
    /// locally only.
    pub fn offline(course_id: &str) -> Self {
        CourseEditor::new(course_id, None)
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    // ---- section operations ----

    /// Appends a new section at the end of the sibling sequence.
    ///
    /// Returns the index of the new section.
    pub async fn add_section(&mut self, title: &str, description: Option<&str>) -> Result<usize> {
        let draft = SectionDraft {
            title: title.to_string(),
            description: description.unwrap_or_default().to_string(),
        };
        self.add_section_from_draft(&draft).await
    }

    async fn add_section_from_draft(&mut self, draft: &SectionDraft) -> Result<usize> {
        let payload = validate::new_section(draft, self.sections.len() as u32)?;

        let mut section = Section {
            id: None,
            title: payload.title.clone(),
            description: payload.description.clone(),
            order_index: payload.order_index,
            lessons: Vec::new(),
            local_id: LocalId::new(),
        };

        if let Some(service) = self.service.clone() {
            let created = service.create_section(&self.course_id, payload).await?;
            section.absorb_remote(created);
            if let Some(id) = section.id.clone() {
                self.pending.record(section.local_id, id);
            }
            info!(
                course_id = %self.course_id,
                section_id = ?section.id,
                title = %section.title,
                "Created section"
            );
        } else {
            debug!(title = %section.title, "Added section locally");
        }

        self.sections.push(section);
        Ok(self.sections.len() - 1)
    }

    /// Updates a section's title and description in place.
    ///
    /// Ordering and lessons are untouched; on a failed persistence call the
    /// local section keeps its previous fields.
    pub async fn edit_section(
        &mut self,
        index: usize,
        title: &str,
        description: Option<&str>,
    ) -> Result<()> {
        let draft = SectionDraft {
            title: title.to_string(),
            description: description.unwrap_or_default().to_string(),
        };
        self.edit_section_from_draft(index, &draft).await
    }

    async fn edit_section_from_draft(&mut self, index: usize, draft: &SectionDraft) -> Result<()> {
        let update = validate::section_update(draft)?;
        let section_id = self.section_at(index)?.id.clone();

        match (self.service.clone(), section_id) {
            (Some(service), Some(id)) => {
                let updated = service.update_section(&id, update).await?;
                self.sections[index].absorb_remote(updated);
                info!(section_id = %id, "Updated section");
            }
            _ => {
                let section = &mut self.sections[index];
                section.title = update.title;
                section.description = update.description;
            }
        }
        Ok(())
    }

    /// Removes a section and renumbers the remaining siblings.
    ///
    /// `confirmed` is the caller-supplied confirmation gate; an unconfirmed
    /// delete is a no-op. Returns whether the section was removed.
    pub async fn delete_section(&mut self, index: usize, confirmed: bool) -> Result<bool> {
        let section_id = self.section_at(index)?.id.clone();
        if !confirmed {
            debug!(index, "Section delete not confirmed");
            return Ok(false);
        }

        if let (Some(service), Some(id)) = (self.service.clone(), section_id) {
            service.delete_section(&id).await?;
            info!(section_id = %id, "Deleted section");
        }

        let removed = self.sections.remove(index);
        renumber_sections(&mut self.sections);
        self.expanded.remove(&removed.local_id);
        for lesson in &removed.lessons {
            self.expanded.remove(&lesson.local_id);
        }
        Ok(true)
    }

    // ---- lesson operations ----

    /// Appends a lesson to a section.
    ///
    /// With a persistence collaborator configured, the owning section's
    /// server id is resolved first (directly, or through the deferred-ID
    /// map); a section with no known server identity fails with
    /// `ParentUnresolved` before any network call.
    pub async fn add_lesson(&mut self, section_index: usize, draft: &LessonDraft) -> Result<usize> {
        let lesson_count = self.section_at(section_index)?.lessons.len();
        let payload = validate::new_lesson(draft, lesson_count as u32)?;

        let mut lesson = Lesson {
            id: None,
            title: payload.title.clone(),
            duration_minutes: payload.duration_minutes,
            kind: payload.kind,
            video_url: payload.video_url.clone(),
            content: payload.content.clone(),
            order_index: payload.order_index,
            resources: Vec::new(),
            local_id: LocalId::new(),
        };

        if let Some(service) = self.service.clone() {
            let parent_id = self.resolve_section_id(section_index)?;
            let created = service.create_lesson(&parent_id, payload).await?;
            lesson.absorb_remote(created);
            if let Some(id) = lesson.id.clone() {
                self.pending.record(lesson.local_id, id);
            }
            info!(
                section_id = %parent_id,
                lesson_id = ?lesson.id,
                title = %lesson.title,
                "Created lesson"
            );
        } else {
            debug!(title = %lesson.title, "Added lesson locally");
        }

        let section = &mut self.sections[section_index];
        section.lessons.push(lesson);
        Ok(section.lessons.len() - 1)
    }

    pub async fn edit_lesson(
        &mut self,
        section_index: usize,
        lesson_index: usize,
        draft: &LessonDraft,
    ) -> Result<()> {
        let update = validate::lesson_update(draft)?;
        let lesson_id = self.lesson_at(section_index, lesson_index)?.id.clone();

        match (self.service.clone(), lesson_id) {
            (Some(service), Some(id)) => {
                let updated = service.update_lesson(&id, update).await?;
                self.sections[section_index].lessons[lesson_index].absorb_remote(updated);
                info!(lesson_id = %id, "Updated lesson");
            }
            _ => {
                let lesson = &mut self.sections[section_index].lessons[lesson_index];
                lesson.title = update.title;
                lesson.duration_minutes = update.duration_minutes;
                lesson.kind = update.kind;
                lesson.video_url = update.video_url;
                lesson.content = update.content;
            }
        }
        Ok(())
    }

    pub async fn delete_lesson(
        &mut self,
        section_index: usize,
        lesson_index: usize,
        confirmed: bool,
    ) -> Result<bool> {
        let lesson_id = self.lesson_at(section_index, lesson_index)?.id.clone();
        if !confirmed {
            debug!(section_index, lesson_index, "Lesson delete not confirmed");
            return Ok(false);
        }

        if let (Some(service), Some(id)) = (self.service.clone(), lesson_id) {
            service.delete_lesson(&id).await?;
            info!(lesson_id = %id, "Deleted lesson");
        }

        let section = &mut self.sections[section_index];
        let removed = section.lessons.remove(lesson_index);
        renumber_lessons(section);
        self.expanded.remove(&removed.local_id);
        Ok(true)
    }

    // ---- resource operations ----

    /// Appends a resource to a lesson. Resource order is implicit in array
    /// position; no order index is renumbered at this level.
    pub async fn add_resource(
        &mut self,
        section_index: usize,
        lesson_index: usize,
        draft: &ResourceDraft,
    ) -> Result<usize> {
        self.lesson_at(section_index, lesson_index)?;
        let payload = validate::new_resource(draft)?;

        let mut resource = Resource {
            id: None,
            kind: payload.kind,
            title: payload.title.clone(),
            url: payload.url.clone(),
            local_id: LocalId::new(),
        };

        if let Some(service) = self.service.clone() {
            let parent_id = self.resolve_lesson_id(section_index, lesson_index)?;
            let created = service.create_resource(&parent_id, payload).await?;
            resource.absorb_remote(created);
            info!(
                lesson_id = %parent_id,
                resource_id = ?resource.id,
                title = %resource.title,
                "Created resource"
            );
        } else {
            debug!(title = %resource.title, "Added resource locally");
        }

        let lesson = &mut self.sections[section_index].lessons[lesson_index];
        lesson.resources.push(resource);
        Ok(lesson.resources.len() - 1)
    }

    pub async fn edit_resource(
        &mut self,
        section_index: usize,
        lesson_index: usize,
        resource_index: usize,
        draft: &ResourceDraft,
    ) -> Result<()> {
        let update = validate::new_resource(draft)?;
        let resource_id = self
            .resource_at(section_index, lesson_index, resource_index)?
            .id
            .clone();

        match (self.service.clone(), resource_id) {
            (Some(service), Some(id)) => {
                let updated = service.update_resource(&id, update).await?;
                self.sections[section_index].lessons[lesson_index].resources[resource_index]
                    .absorb_remote(updated);
                info!(resource_id = %id, "Updated resource");
            }
            _ => {
                let resource = &mut self.sections[section_index].lessons[lesson_index].resources
                    [resource_index];
                resource.kind = update.kind;
                resource.title = update.title;
                resource.url = update.url;
            }
        }
        Ok(())
    }

    pub async fn delete_resource(
        &mut self,
        section_index: usize,
        lesson_index: usize,
        resource_index: usize,
        confirmed: bool,
    ) -> Result<bool> {
        let resource_id = self
            .resource_at(section_index, lesson_index, resource_index)?
            .id
            .clone();
        if !confirmed {
            debug!(resource_index, "Resource delete not confirmed");
            return Ok(false);
        }

        if let (Some(service), Some(id)) = (self.service.clone(), resource_id) {
            service.delete_resource(&id).await?;
            info!(resource_id = %id, "Deleted resource");
        }

        self.sections[section_index].lessons[lesson_index]
            .resources
            .remove(resource_index);
        Ok(true)
    }

    // ---- expansion state ----

    /// Toggles a node's visual expansion. Pure UI state keyed by the node's
    /// stable local id, so sibling inserts and deletes cannot shift it.
    /// Returns the new state.
    pub fn toggle_expand(&mut self, path: NodePath) -> Result<bool> {
        let local_id = match path {
            NodePath::Section(section) => self.section_at(section)?.local_id,
            NodePath::Lesson(section, lesson) => self.lesson_at(section, lesson)?.local_id,
        };

        if self.expanded.insert(local_id) {
            Ok(true)
        } else {
            self.expanded.remove(&local_id);
            Ok(false)
        }
    }

    pub fn is_expanded(&self, path: NodePath) -> bool {
        let local_id = match path {
            NodePath::Section(section) => self.sections.get(section).map(|s| s.local_id),
            NodePath::Lesson(section, lesson) => self
                .sections
                .get(section)
                .and_then(|s| s.lessons.get(lesson))
                .map(|l| l.local_id),
        };
        local_id.is_some_and(|id| self.expanded.contains(&id))
    }

    // ---- resynchronization ----

    /// Replaces the tree with the authoritative server state.
    ///
    /// Clears the deferred-ID map, the expansion set and any pending
    /// dialog; node order follows the server's order indexes, renumbered
    /// densely.
    pub async fn reload(&mut self) -> Result<()> {
        let service = self.service.clone().ok_or_else(|| {
            EditorError::Internal("No persistence collaborator configured".to_string())
        })?;

        let mut sections = service.fetch_course_content(&self.course_id).await?;
        sections.sort_by_key(|section| section.order_index);
        for section in &mut sections {
            section.lessons.sort_by_key(|lesson| lesson.order_index);
            renumber_lessons(section);
        }
        renumber_sections(&mut sections);

        info!(course_id = %self.course_id, count = sections.len(), "Reloaded course content");
        self.sections = sections;
        self.pending.clear();
        self.expanded.clear();
        self.dialog = None;
        Ok(())
    }

    // ---- dialogs ----

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Mutable access to the pending dialog so the UI can bind form fields
    /// directly to the draft.
    pub fn dialog_mut(&mut self) -> Option<&mut Dialog> {
        self.dialog.as_mut()
    }

    pub fn open_add_section(&mut self) {
        self.dialog = Some(Dialog::AddSection {
            draft: SectionDraft::default(),
        });
    }

    pub fn open_edit_section(&mut self, section: usize) -> Result<()> {
        let draft = SectionDraft::from_section(self.section_at(section)?);
        self.dialog = Some(Dialog::EditSection { section, draft });
        Ok(())
    }

    pub fn open_delete_section(&mut self, section: usize) -> Result<()> {
        self.section_at(section)?;
        self.dialog = Some(Dialog::DeleteSection { section });
        Ok(())
    }

    pub fn open_add_lesson(&mut self, section: usize) -> Result<()> {
        self.section_at(section)?;
        self.dialog = Some(Dialog::AddLesson {
            section,
            draft: LessonDraft::default(),
        });
        Ok(())
    }

    pub fn open_edit_lesson(&mut self, section: usize, lesson: usize) -> Result<()> {
        let draft = LessonDraft::from_lesson(self.lesson_at(section, lesson)?);
        self.dialog = Some(Dialog::EditLesson {
            section,
            lesson,
            draft,
        });
        Ok(())
    }

    pub fn open_delete_lesson(&mut self, section: usize, lesson: usize) -> Result<()> {
        self.lesson_at(section, lesson)?;
        self.dialog = Some(Dialog::DeleteLesson { section, lesson });
        Ok(())
    }

    pub fn open_add_resource(&mut self, section: usize, lesson: usize) -> Result<()> {
        self.lesson_at(section, lesson)?;
        self.dialog = Some(Dialog::AddResource {
            section,
            lesson,
            draft: ResourceDraft::default(),
        });
        Ok(())
    }

    pub fn open_edit_resource(
        &mut self,
        section: usize,
        lesson: usize,
        resource: usize,
    ) -> Result<()> {
        let draft = ResourceDraft::from_resource(self.resource_at(section, lesson, resource)?);
        self.dialog = Some(Dialog::EditResource {
            section,
            lesson,
            resource,
            draft,
        });
        Ok(())
    }

    pub fn open_delete_resource(
        &mut self,
        section: usize,
        lesson: usize,
        resource: usize,
    ) -> Result<()> {
        self.resource_at(section, lesson, resource)?;
        self.dialog = Some(Dialog::DeleteResource {
            section,
            lesson,
            resource,
        });
        Ok(())
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog = None;
    }

    /// Dispatches the pending dialog's mutation.
    ///
    /// On success the dialog closes; on validation or persistence failure it
    /// stays open with the entered draft intact so the user may retry or
    /// cancel.
    pub async fn confirm_dialog(&mut self) -> Result<()> {
        let dialog = self
            .dialog
            .clone()
            .ok_or_else(|| EditorError::Internal("No dialog is pending".to_string()))?;

        let outcome = match &dialog {
            Dialog::AddSection { draft } => {
                self.add_section_from_draft(draft).await.map(|_| ())
            }
            Dialog::EditSection { section, draft } => {
                self.edit_section_from_draft(*section, draft).await
            }
            Dialog::DeleteSection { section } => {
                self.delete_section(*section, true).await.map(|_| ())
            }
            Dialog::AddLesson { section, draft } => {
                self.add_lesson(*section, draft).await.map(|_| ())
            }
            Dialog::EditLesson {
                section,
                lesson,
                draft,
            } => self.edit_lesson(*section, *lesson, draft).await,
            Dialog::DeleteLesson { section, lesson } => {
                self.delete_lesson(*section, *lesson, true).await.map(|_| ())
            }
            Dialog::AddResource {
                section,
                lesson,
                draft,
            } => self.add_resource(*section, *lesson, draft).await.map(|_| ()),
            Dialog::EditResource {
                section,
                lesson,
                resource,
                draft,
            } => self.edit_resource(*section, *lesson, *resource, draft).await,
            Dialog::DeleteResource {
                section,
                lesson,
                resource,
            } => self
                .delete_resource(*section, *lesson, *resource, true)
                .await
                .map(|_| ()),
        };

        match outcome {
            Ok(()) => {
                self.dialog = None;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Dialog confirmation failed");
                Err(err)
            }
        }
    }

    // ---- lookup helpers ----

    fn section_at(&self, index: usize) -> Result<&Section> {
        self.sections
            .get(index)
            .ok_or_else(|| EditorError::NotFound(format!("Section index {} out of bounds", index)))
    }

    fn lesson_at(&self, section_index: usize, lesson_index: usize) -> Result<&Lesson> {
        self.section_at(section_index)?
            .lessons
            .get(lesson_index)
            .ok_or_else(|| {
                EditorError::NotFound(format!(
                    "Lesson index {} out of bounds in section {}",
                    lesson_index, section_index
                ))
            })
    }

    fn resource_at(
        &self,
        section_index: usize,
        lesson_index: usize,
        resource_index: usize,
    ) -> Result<&Resource> {
        self.lesson_at(section_index, lesson_index)?
            .resources
            .get(resource_index)
            .ok_or_else(|| {
                EditorError::NotFound(format!(
                    "Resource index {} out of bounds in lesson {}",
                    resource_index, lesson_index
                ))
            })
    }

    fn resolve_section_id(&self, section_index: usize) -> Result<String> {
        let section = self.section_at(section_index)?;
        section
            .id
            .clone()
            .or_else(|| self.pending.resolve(section.local_id).map(str::to_string))
            .ok_or_else(|| {
                EditorError::ParentUnresolved(format!(
                    "Section at index {} has no server id yet",
                    section_index
                ))
            })
    }

    fn resolve_lesson_id(&self, section_index: usize, lesson_index: usize) -> Result<String> {
        let lesson = self.lesson_at(section_index, lesson_index)?;
        lesson
            .id
            .clone()
            .or_else(|| self.pending.resolve(lesson.local_id).map(str::to_string))
            .ok_or_else(|| {
                EditorError::ParentUnresolved(format!(
                    "Lesson at index {} has no server id yet",
                    lesson_index
                ))
            })
    }
}

/// Reassigns dense zero-based order indexes after a structural mutation
fn renumber_sections(sections: &mut [Section]) {
    for (index, section) in sections.iter_mut().enumerate() {
        section.order_index = index as u32;
    }
}

fn renumber_lessons(section: &mut Section) {
    for (index, lesson) in section.lessons.iter_mut().enumerate() {
        lesson.order_index = index as u32;
    }
}
