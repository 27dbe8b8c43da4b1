use std::collections::HashSet;

use uuid::Uuid;

use super::{parse_id, NoteRepository};
use crate::entity::{NewNote, Note, NoteUpdate};
use crate::error::{NotesError, Result};
use crate::storage::JsonFileStore;

/// Repository backed by a [`JsonFileStore`]. Holds no notes between calls.
#[derive(Debug, Clone)]
pub struct FileNoteRepository {
    store: JsonFileStore,
}

impl FileNoteRepository {
    pub fn new(store: JsonFileStore) -> Self {
        Self { store }
    }
}

fn position(notes: &[Note], id: &str) -> Option<usize> {
    let id = parse_id(id)?;
    notes.iter().position(|n| n.id == id)
}

impl NoteRepository for FileNoteRepository {
    fn find_all(&self) -> Result<Vec<Note>> {
        self.store.load()
    }

    fn find_by_id(&self, id: &str) -> Result<Note> {
        let mut notes = self.store.load()?;
        match position(&notes, id) {
            Some(index) => Ok(notes.swap_remove(index)),
            None => Err(NotesError::NotFound(id.to_string())),
        }
    }

    fn create(&self, payload: NewNote) -> Result<Note> {
        let mut notes = self.store.load()?;
        let note = Note::new(payload);

        notes.push(note.clone());
        self.store.save(&notes)?;

        tracing::info!(id = %note.id, "created note");
        Ok(note)
    }

    fn update(&self, id: &str, update: NoteUpdate) -> Result<Note> {
        let mut notes = self.store.load()?;
        let index = position(&notes, id).ok_or_else(|| NotesError::NotFound(id.to_string()))?;

        notes[index].apply(update);
        let updated = notes[index].clone();
        self.store.save(&notes)?;

        tracing::info!(id = %updated.id, "updated note");
        Ok(updated)
    }

    fn delete(&self, id: &str) -> Result<bool> {
        let mut notes = self.store.load()?;
        let Some(index) = position(&notes, id) else {
            tracing::debug!(id, "delete matched no note");
            return Ok(false);
        };

        let removed = notes.remove(index);
        self.store.save(&notes)?;

        tracing::info!(id = %removed.id, "deleted note");
        Ok(true)
    }

    fn delete_many(&self, ids: &[String]) -> Result<bool> {
        let wanted: HashSet<Uuid> = ids.iter().filter_map(|id| parse_id(id)).collect();
        if wanted.is_empty() {
            return Ok(false);
        }

        let mut notes = self.store.load()?;
        let before = notes.len();
        notes.retain(|n| !wanted.contains(&n.id));

        let removed = before - notes.len();
        if removed == 0 {
            return Ok(false);
        }

        self.store.save(&notes)?;
        tracing::info!(removed, "deleted notes");
        Ok(true)
    }
}
