use std::cmp::Ordering;

use crate::entity::{NewNote, Note, NoteSummary, NoteUpdate};
use crate::error::Result;
use crate::repository::NoteRepository;

/// Orderings offered by the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    CreationDate,
    ModificationDate,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Title => write!(f, "title"),
            SortKey::CreationDate => write!(f, "creationDate"),
            SortKey::ModificationDate => write!(f, "modificationDate"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortKey::Title),
            "creationDate" => Ok(SortKey::CreationDate),
            "modificationDate" => Ok(SortKey::ModificationDate),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}

impl SortKey {
    /// Lenient parse: absent or unrecognized keys mean "storage order".
    pub fn parse_optional(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| v.parse().ok())
    }

    fn compare(self, a: &Note, b: &Note) -> Ordering {
        match self {
            SortKey::Title => compare_titles(&a.title, &b.title),
            SortKey::CreationDate => a.created_at.cmp(&b.created_at),
            SortKey::ModificationDate => a.updated_at.cmp(&b.updated_at),
        }
    }
}

/// Case-insensitive first, so "apple" sits next to "Apple" rather than after "Zebra".
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Business rules layered over a [`NoteRepository`].
pub struct NoteService<R> {
    repository: R,
}

impl<R: NoteRepository> NoteService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn create(&self, payload: NewNote) -> Result<Note> {
        self.repository.create(payload)
    }

    /// List view: optionally sorted (stable), never carrying note content.
    pub fn find_all(&self, sort: Option<SortKey>) -> Result<Vec<NoteSummary>> {
        let mut notes = self.repository.find_all()?;

        if let Some(key) = sort {
            notes.sort_by(|a, b| key.compare(a, b));
        }

        Ok(notes.into_iter().map(NoteSummary::from).collect())
    }

    pub fn find_one(&self, id: &str) -> Result<Note> {
        self.repository.find_by_id(id)
    }

    pub fn update(&self, id: &str, update: NoteUpdate) -> Result<Note> {
        self.repository.update(id, update)
    }

    pub fn remove(&self, id: &str) -> Result<bool> {
        self.repository.delete(id)
    }

    pub fn remove_many(&self, ids: &[String]) -> Result<bool> {
        self.repository.delete_many(ids)
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.repository.find_all()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotesError;
    use crate::repository::FileNoteRepository;
    use crate::storage::JsonFileStore;
    use chrono::{Duration, Utc};
    use std::sync::Mutex;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn setup() -> (NoteService<FileNoteRepository>, TempDir) {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("data.json"));
        (NoteService::new(FileNoteRepository::new(store)), tmp)
    }

    /// Fixed collection with controlled timestamps.
    struct FixedRepository {
        notes: Mutex<Vec<Note>>,
    }

    impl FixedRepository {
        fn new(notes: Vec<Note>) -> Self {
            Self {
                notes: Mutex::new(notes),
            }
        }
    }

    impl NoteRepository for FixedRepository {
        fn find_all(&self) -> Result<Vec<Note>> {
            Ok(self.notes.lock().unwrap().clone())
        }

        fn find_by_id(&self, id: &str) -> Result<Note> {
            self.notes
                .lock()
                .unwrap()
                .iter()
                .find(|n| n.id.to_string() == id)
                .cloned()
                .ok_or_else(|| NotesError::NotFound(id.to_string()))
        }

        fn create(&self, payload: NewNote) -> Result<Note> {
            let note = Note::new(payload);
            self.notes.lock().unwrap().push(note.clone());
            Ok(note)
        }

        fn update(&self, id: &str, _update: NoteUpdate) -> Result<Note> {
            self.find_by_id(id)
        }

        fn delete(&self, _id: &str) -> Result<bool> {
            Ok(false)
        }

        fn delete_many(&self, _ids: &[String]) -> Result<bool> {
            Ok(false)
        }
    }

    fn note_at(title: &str, created_offset: i64, updated_offset: i64) -> Note {
        let base = Utc::now() - Duration::days(30);
        Note {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: format!("{} content", title),
            created_at: base + Duration::minutes(created_offset),
            updated_at: base + Duration::minutes(updated_offset),
        }
    }

    fn titles(summaries: &[NoteSummary]) -> Vec<&str> {
        summaries.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("title".parse::<SortKey>(), Ok(SortKey::Title));
        assert_eq!("creationDate".parse::<SortKey>(), Ok(SortKey::CreationDate));
        assert_eq!(
            "modificationDate".parse::<SortKey>(),
            Ok(SortKey::ModificationDate)
        );
        assert!("Title".parse::<SortKey>().is_err());
        assert_eq!(SortKey::parse_optional(Some("bogus")), None);
        assert_eq!(SortKey::parse_optional(None), None);
        assert_eq!(SortKey::ModificationDate.to_string(), "modificationDate");
    }

    #[test]
    fn test_find_all_by_title() {
        let (service, _tmp) = setup();
        let a = service.create(NewNote::new("Bread", "flour")).unwrap();
        let b = service.create(NewNote::new("Apple", "fruit")).unwrap();

        let listed = service.find_all(Some(SortKey::Title)).unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, b.id);
        assert_eq!(listed[1].id, a.id);

        let json = serde_json::to_value(&listed).unwrap();
        for item in json.as_array().unwrap() {
            assert!(item.get("content").is_none());
        }
    }

    #[test]
    fn test_find_all_without_sort_keeps_storage_order() {
        let (service, _tmp) = setup();
        service.create(NewNote::new("Charlie", "c")).unwrap();
        service.create(NewNote::new("alpha", "a")).unwrap();
        service.create(NewNote::new("Bravo", "b")).unwrap();

        let listed = service.find_all(None).unwrap();
        assert_eq!(titles(&listed), vec!["Charlie", "alpha", "Bravo"]);

        let unknown = service
            .find_all(SortKey::parse_optional(Some("size")))
            .unwrap();
        assert_eq!(titles(&unknown), vec!["Charlie", "alpha", "Bravo"]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let repo = FixedRepository::new(vec![
            note_at("banana", 0, 0),
            note_at("Cherry", 1, 1),
            note_at("apple", 2, 2),
        ]);
        let service = NoteService::new(repo);

        let listed = service.find_all(Some(SortKey::Title)).unwrap();
        assert_eq!(titles(&listed), vec!["apple", "banana", "Cherry"]);
    }

    #[test]
    fn test_title_sort_is_stable_for_ties() {
        let first = note_at("Same", 5, 5);
        let second = note_at("Same", 1, 1);
        let (first_id, second_id) = (first.id, second.id);
        let service = NoteService::new(FixedRepository::new(vec![
            note_at("Zed", 0, 0),
            first,
            second,
        ]));

        let listed = service.find_all(Some(SortKey::Title)).unwrap();
        assert_eq!(listed[0].id, first_id);
        assert_eq!(listed[1].id, second_id);
        assert_eq!(listed[2].title, "Zed");
    }

    #[test]
    fn test_sort_by_dates() {
        let service = NoteService::new(FixedRepository::new(vec![
            note_at("middle", 10, 50),
            note_at("newest", 20, 5),
            note_at("oldest", 0, 30),
        ]));

        let by_created = service.find_all(Some(SortKey::CreationDate)).unwrap();
        assert_eq!(titles(&by_created), vec!["oldest", "middle", "newest"]);

        let by_modified = service.find_all(Some(SortKey::ModificationDate)).unwrap();
        assert_eq!(titles(&by_modified), vec!["newest", "oldest", "middle"]);
    }

    #[test]
    fn test_find_one_includes_content() {
        let (service, _tmp) = setup();
        let created = service.create(NewNote::new("Title", "Body")).unwrap();

        let found = service.find_one(&created.id.to_string()).unwrap();
        assert_eq!(found.content, "Body");
    }

    #[test]
    fn test_update_scenario() {
        let (service, _tmp) = setup();
        let c = service.create(NewNote::new("C", "keep me")).unwrap();

        let updated = service
            .update(
                &c.id.to_string(),
                NoteUpdate {
                    title: Some("New".to_string()),
                    content: None,
                },
            )
            .unwrap();

        assert_eq!(updated.title, "New");
        assert_eq!(updated.content, "keep me");
        assert!(updated.updated_at >= c.updated_at);
    }

    #[test]
    fn test_remove_and_remove_many() {
        let (service, _tmp) = setup();
        let a = service.create(NewNote::new("A", "a")).unwrap();
        let b = service.create(NewNote::new("B", "b")).unwrap();
        let c = service.create(NewNote::new("C", "c")).unwrap();

        assert!(service.remove(&a.id.to_string()).unwrap());
        assert!(!service.remove(&a.id.to_string()).unwrap());
        assert!(service
            .remove_many(&[b.id.to_string(), c.id.to_string()])
            .unwrap());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let (service, _tmp) = setup();
        let id = Uuid::new_v4().to_string();

        assert!(matches!(service.find_one(&id), Err(NotesError::NotFound(_))));
        assert!(matches!(
            service.update(&id, NoteUpdate::default()),
            Err(NotesError::NotFound(_))
        ));
    }
}
