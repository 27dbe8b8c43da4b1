mod note;

pub use note::{NewNote, Note, NoteSummary, NoteUpdate};
