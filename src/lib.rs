pub mod api;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod logging;
pub mod repository;
pub mod service;
pub mod storage;

pub use config::Config;
pub use entity::{NewNote, Note, NoteSummary, NoteUpdate};
pub use error::{NotesError, Result};
pub use repository::{FileNoteRepository, NoteRepository};
pub use service::{NoteService, SortKey};
pub use storage::{JsonFileStore, ReadPolicy};
