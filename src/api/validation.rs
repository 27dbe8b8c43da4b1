//! Input checks run at the boundary, before anything reaches the service.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{NewNote, NoteUpdate};
use crate::error::{NotesError, Result};

pub const MAX_TITLE_LENGTH: usize = 500;
pub const MAX_CONTENT_SIZE: usize = 102_400; // 100KB

/// Raw creation body; fields are optional so a missing one is reported
/// as a validation failure rather than a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    #[schema(example = "Groceries", max_length = 500)]
    pub title: Option<String>,
    #[schema(example = "Milk, eggs, bread")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DeleteManyRequest {
    #[serde(default)]
    pub ids: Vec<String>,
}

pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(NotesError::validation("title", "must not be empty"));
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LENGTH {
        return Err(NotesError::validation(
            "title",
            format!("too long: {} characters (max {})", len, MAX_TITLE_LENGTH),
        ));
    }
    Ok(())
}

pub fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(NotesError::validation("content", "must not be empty"));
    }
    if content.len() > MAX_CONTENT_SIZE {
        return Err(NotesError::validation(
            "content",
            format!(
                "too large: {} bytes (max {})",
                content.len(),
                MAX_CONTENT_SIZE
            ),
        ));
    }
    Ok(())
}

pub fn validate_new_note(request: CreateNoteRequest) -> Result<NewNote> {
    let title = request
        .title
        .ok_or_else(|| NotesError::validation("title", "is required"))?;
    let content = request
        .content
        .ok_or_else(|| NotesError::validation("content", "is required"))?;

    validate_title(&title)?;
    validate_content(&content)?;

    Ok(NewNote { title, content })
}

/// Present fields follow the creation rules; an empty update is allowed.
pub fn validate_note_update(request: UpdateNoteRequest) -> Result<NoteUpdate> {
    if let Some(ref title) = request.title {
        validate_title(title)?;
    }
    if let Some(ref content) = request.content {
        validate_content(content)?;
    }

    Ok(NoteUpdate {
        title: request.title,
        content: request.content,
    })
}
