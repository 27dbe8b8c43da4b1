// src/entity/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted text note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Build a note with a fresh v4 id and both timestamps set to now.
    pub fn new(payload: NewNote) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: payload.title,
            content: payload.content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the provided fields over this note and refresh `updated_at`.
    pub fn apply(&mut self, update: NoteUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        // Never step backwards if the wall clock was adjusted.
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

/// Creation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Partial update payload; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// List-view projection of a note, without its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteSummary {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteSummary {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_has_matching_timestamps() {
        let note = Note::new(NewNote::new("Groceries", "Milk, eggs"));
        assert_eq!(note.created_at, note.updated_at);
        assert_eq!(note.id.get_version_num(), 4);
    }

    #[test]
    fn test_apply_merges_only_provided_fields() {
        let mut note = Note::new(NewNote::new("Old", "Body"));
        let created = note.created_at;

        note.apply(NoteUpdate {
            title: Some("New".to_string()),
            content: None,
        });

        assert_eq!(note.title, "New");
        assert_eq!(note.content, "Body");
        assert_eq!(note.created_at, created);
        assert!(note.updated_at >= created);
    }

    #[test]
    fn test_serializes_camel_case() {
        let note = Note::new(NewNote::new("T", "C"));
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_summary_omits_content() {
        let note = Note::new(NewNote::new("T", "secret body"));
        let json = serde_json::to_value(NoteSummary::from(note)).unwrap();
        assert!(json.get("content").is_none());
        assert_eq!(json["title"], "T");
    }

    #[test]
    fn test_update_payload_deserializes_partial() {
        let update: NoteUpdate = serde_json::from_str(r#"{"content":"x"}"#).unwrap();
        assert_eq!(update.title, None);
        assert_eq!(update.content.as_deref(), Some("x"));
        assert_ne!(update, NoteUpdate::default());
    }
}
