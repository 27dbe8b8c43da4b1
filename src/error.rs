use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Validation failed for field '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Store file {} is corrupt: {message}", path.display())]
    Corrupt { path: PathBuf, message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NotesError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        NotesError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = NotesError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "Note not found: abc");

        let err = NotesError::validation("title", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Validation failed for field 'title': must not be empty"
        );

        let err = NotesError::Corrupt {
            path: PathBuf::from("data.json"),
            message: "expected value".to_string(),
        };
        assert!(err.to_string().contains("data.json"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: NotesError = io.into();
        assert!(matches!(err, NotesError::Io(_)));
    }
}
