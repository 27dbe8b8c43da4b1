//! Note persistence addressed by id.
//!
//! The service layer only sees the [`NoteRepository`] trait; the binary wires
//! in [`FileNoteRepository`], which re-reads and rewrites the JSON store on
//! every call.

mod file_repository;

pub use file_repository::FileNoteRepository;

use uuid::Uuid;

use crate::entity::{NewNote, Note, NoteUpdate};
use crate::error::Result;

pub trait NoteRepository: Send + Sync {
    /// Every note, in storage order.
    fn find_all(&self) -> Result<Vec<Note>>;

    /// Fails with `NotesError::NotFound` when no note has `id`.
    fn find_by_id(&self, id: &str) -> Result<Note>;

    fn create(&self, payload: NewNote) -> Result<Note>;

    /// Fails with `NotesError::NotFound` when no note has `id`.
    fn update(&self, id: &str, update: NoteUpdate) -> Result<Note>;

    /// Returns `false` when nothing was removed.
    fn delete(&self, id: &str) -> Result<bool>;

    /// Returns `false` when none of `ids` matched.
    fn delete_many(&self, ids: &[String]) -> Result<bool>;
}

/// Ids arrive as path segments; anything that is not a UUID matches no note.
pub(crate) fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id.trim()).ok()
}
