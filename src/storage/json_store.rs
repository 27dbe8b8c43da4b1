use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entity::Note;
use crate::error::{NotesError, Result};

/// How `JsonFileStore::load` treats a store file that exists but does not parse.
///
/// A missing file is always an empty collection and a file that cannot be
/// read is always an error. `Lenient` treats unparsable contents as empty
/// (logging a warning); `Strict` reports them as corrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadPolicy {
    #[default]
    Lenient,
    Strict,
}

impl std::fmt::Display for ReadPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadPolicy::Lenient => write!(f, "lenient"),
            ReadPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// The whole note collection, stored as one pretty-printed JSON array.
///
/// Every save overwrites the file. There is no locking: two writers racing
/// on the same file lose updates (last writer wins).
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    policy: ReadPolicy,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: ReadPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ReadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every note, in file order.
    pub fn load(&self) -> Result<Vec<Note>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "store file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(NotesError::Storage(format!(
                    "cannot read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => {
                tracing::debug!(path = %self.path.display(), count = notes.len(), "loaded notes");
                Ok(notes)
            }
            Err(e) => self.recover(NotesError::Corrupt {
                path: self.path.clone(),
                message: e.to_string(),
            }),
        }
    }

    /// Overwrite the file with `notes`, creating the parent directory if needed.
    pub fn save(&self, notes: &[Note]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(notes)?;
        fs::write(&self.path, json)?;

        tracing::debug!(path = %self.path.display(), count = notes.len(), "saved notes");
        Ok(())
    }

    fn recover(&self, err: NotesError) -> Result<Vec<Note>> {
        match self.policy {
            ReadPolicy::Strict => Err(err),
            ReadPolicy::Lenient => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "store file corrupt, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }
}
