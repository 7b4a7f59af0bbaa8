use crate::editor::{LessonDraft, ResourceDraft, SectionDraft};
use crate::models::LessonKind;
use crate::service::{LessonUpdate, NewLesson, NewResource, NewSection, SectionUpdate};
use reqwest::Url;
use thiserror::Error;

/// A draft field that failed validation. Raised before any persistence
/// call is attempted; the dialog stays open with the offending field marked.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Duration must be a positive number of minutes")]
    ZeroDuration,

    #[error("A video lesson requires a video URL")]
    MissingVideoUrl,

    #[error("A reading lesson requires content")]
    MissingContent,

    #[error("Resource URL cannot be empty")]
    EmptyUrl,

    #[error("Invalid URL: {message}")]
    InvalidUrl {
        field: &'static str,
        message: String,
    },
}

impl ValidationError {
    /// Form field the error should be attached to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyTitle => "title",
            ValidationError::ZeroDuration => "duration_minutes",
            ValidationError::MissingVideoUrl => "video_url",
            ValidationError::MissingContent => "content",
            ValidationError::EmptyUrl => "url",
            ValidationError::InvalidUrl { field, .. } => field,
        }
    }
}

pub(crate) fn new_section(
    draft: &SectionDraft,
    order_index: u32,
) -> Result<NewSection, ValidationError> {
    let update = section_update(draft)?;
    Ok(NewSection {
        title: update.title,
        description: update.description,
        order_index,
    })
}

pub(crate) fn section_update(draft: &SectionDraft) -> Result<SectionUpdate, ValidationError> {
    Ok(SectionUpdate {
        title: require_title(&draft.title)?,
        description: optional_text(&draft.description),
    })
}

pub(crate) fn new_lesson(
    draft: &LessonDraft,
    order_index: u32,
) -> Result<NewLesson, ValidationError> {
    let update = lesson_update(draft)?;
    Ok(NewLesson {
        title: update.title,
        duration_minutes: update.duration_minutes,
        kind: update.kind,
        video_url: update.video_url,
        content: update.content,
        order_index,
    })
}

pub(crate) fn lesson_update(draft: &LessonDraft) -> Result<LessonUpdate, ValidationError> {
    let title = require_title(&draft.title)?;

    if draft.duration_minutes == 0 {
        return Err(ValidationError::ZeroDuration);
    }

    // Exactly one of video_url/content survives, determined by kind.
    let (video_url, content) = match draft.kind {
        LessonKind::Video => {
            if draft.video_url.trim().is_empty() {
                return Err(ValidationError::MissingVideoUrl);
            }
            let url = normalize_http_url("video_url", &draft.video_url)?;
            (Some(url), None)
        }
        LessonKind::Reading => {
            let text = draft.content.trim();
            if text.is_empty() {
                return Err(ValidationError::MissingContent);
            }
            (None, Some(text.to_string()))
        }
    };

    Ok(LessonUpdate {
        title,
        duration_minutes: draft.duration_minutes,
        kind: draft.kind,
        video_url,
        content,
    })
}

pub(crate) fn new_resource(draft: &ResourceDraft) -> Result<NewResource, ValidationError> {
    let title = require_title(&draft.title)?;

    if draft.url.trim().is_empty() {
        return Err(ValidationError::EmptyUrl);
    }
    let url = normalize_http_url("url", &draft.url)?;

    Ok(NewResource {
        kind: draft.kind,
        title,
        url,
    })
}

fn require_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

fn optional_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalizes user input into a well-formed http(s) URL string.
///
/// Bare domains get an https scheme prefixed; anything that still fails to
/// parse, or parses with a non-http scheme, is rejected.
fn normalize_http_url(field: &'static str, input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&with_scheme).map_err(|e| ValidationError::InvalidUrl {
        field,
        message: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed.to_string()),
        _ => Err(ValidationError::InvalidUrl {
            field,
            message: "Only http/https URLs are supported".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceKind;

    fn reading_draft() -> LessonDraft {
        LessonDraft {
            title: "Basics".to_string(),
            duration_minutes: 10,
            kind: LessonKind::Reading,
            video_url: String::new(),
            content: "hello".to_string(),
        }
    }

    #[test]
    fn test_whitespace_title_rejected() {
        let draft = SectionDraft {
            title: "   ".to_string(),
            description: String::new(),
        };
        assert_eq!(
            section_update(&draft).unwrap_err(),
            ValidationError::EmptyTitle
        );
    }

    #[test]
    fn test_empty_description_becomes_none() {
        let draft = SectionDraft {
            title: "  Intro  ".to_string(),
            description: "  ".to_string(),
        };
        let update = section_update(&draft).unwrap();
        assert_eq!(update.title, "Intro");
        assert_eq!(update.description, None);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut draft = reading_draft();
        draft.duration_minutes = 0;
        assert_eq!(
            lesson_update(&draft).unwrap_err(),
            ValidationError::ZeroDuration
        );
    }

    #[test]
    fn test_video_lesson_requires_url() {
        let draft = LessonDraft {
            title: "Watch".to_string(),
            duration_minutes: 5,
            kind: LessonKind::Video,
            video_url: String::new(),
            content: "ignored".to_string(),
        };
        assert_eq!(
            lesson_update(&draft).unwrap_err(),
            ValidationError::MissingVideoUrl
        );
    }

    #[test]
    fn test_video_lesson_drops_content() {
        let draft = LessonDraft {
            title: "Watch".to_string(),
            duration_minutes: 5,
            kind: LessonKind::Video,
            video_url: "videos.example.com/intro".to_string(),
            content: "stale text".to_string(),
        };
        let update = lesson_update(&draft).unwrap();
        assert_eq!(
            update.video_url.as_deref(),
            Some("https://videos.example.com/intro")
        );
        assert_eq!(update.content, None);
    }

    #[test]
    fn test_reading_lesson_requires_content() {
        let mut draft = reading_draft();
        draft.content = " ".to_string();
        assert_eq!(
            lesson_update(&draft).unwrap_err(),
            ValidationError::MissingContent
        );
    }

    #[test]
    fn test_reading_lesson_without_url_succeeds() {
        let update = lesson_update(&reading_draft()).unwrap();
        assert_eq!(update.video_url, None);
        assert_eq!(update.content.as_deref(), Some("hello"));
    }

    #[test]
    fn test_malformed_resource_url_rejected() {
        let draft = ResourceDraft {
            kind: ResourceKind::ExternalLink,
            title: "Link".to_string(),
            url: "not a url".to_string(),
        };
        match new_resource(&draft).unwrap_err() {
            ValidationError::InvalidUrl { field, .. } => assert_eq!(field, "url"),
            other => panic!("expected InvalidUrl, got {:?}", other),
        }
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let draft = ResourceDraft {
            kind: ResourceKind::ExternalLink,
            title: "Link".to_string(),
            url: "ftp://example.com/file".to_string(),
        };
        assert!(matches!(
            new_resource(&draft).unwrap_err(),
            ValidationError::InvalidUrl { .. }
        ));
    }

    #[test]
    fn test_error_field_mapping() {
        assert_eq!(ValidationError::EmptyTitle.field(), "title");
        assert_eq!(ValidationError::MissingVideoUrl.field(), "video_url");
        assert_eq!(ValidationError::ZeroDuration.field(), "duration_minutes");
    }
}
