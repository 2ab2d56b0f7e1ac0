//! NoteStore — process-wide map from access code to its note collection.
//!
//! Backed by a DashMap so operations on distinct codes never contend.
//! Mutations go through `update`, which holds the entry lock for the whole
//! read-modify-write, so two writers to the same code cannot overwrite each
//! other's changes.

use dashmap::DashMap;

use super::Note;

pub struct NoteStore {
    collections: DashMap<String, Vec<Note>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
        }
    }

    /// Clone of the collection for `code`, in insertion order.
    /// Unknown codes yield an empty list, never an error.
    pub fn get(&self, code: &str) -> Vec<Note> {
        self.collections
            .get(code)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Overwrite the entire collection for `code`.
    pub fn replace(&self, code: &str, notes: Vec<Note>) {
        self.collections.insert(code.to_string(), notes);
    }

    /// Mutate the collection for `code` in place, creating it if absent.
    /// The entry lock is held for the duration of the closure.
    pub fn update<F: FnOnce(&mut Vec<Note>)>(&self, code: &str, f: F) {
        let mut entry = self.collections.entry(code.to_string()).or_default();
        f(entry.value_mut());
    }

    /// Number of access codes with a collection.
    pub fn code_count(&self) -> usize {
        self.collections.len()
    }

    /// Total notes across all collections.
    pub fn note_count(&self) -> usize {
        self.collections.iter().map(|entry| entry.value().len()).sum()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn note(id: &str) -> Note {
        Note {
            id: id.to_string(),
            title: String::new(),
            content: "body".to_string(),
            timestamp: 0,
        }
    }

    #[test]
    fn test_unknown_code_reads_empty() {
        let store = NoteStore::new();
        assert!(store.get("never-written").is_empty());
        assert_eq!(store.code_count(), 0);
    }

    #[test]
    fn test_replace_then_get() {
        let store = NoteStore::new();
        store.replace("abc", vec![note("1"), note("2")]);

        let notes = store.get("abc");
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, "1");
        assert_eq!(notes[1].id, "2");
    }

    #[test]
    fn test_update_creates_collection() {
        let store = NoteStore::new();
        store.update("abc", |notes| notes.push(note("1")));

        assert_eq!(store.get("abc").len(), 1);
        assert_eq!(store.code_count(), 1);
        assert_eq!(store.note_count(), 1);
    }

    #[test]
    fn test_codes_are_isolated() {
        let store = NoteStore::new();
        store.update("abc", |notes| notes.push(note("1")));
        store.update("xyz", |notes| notes.push(note("2")));

        assert_eq!(store.get("abc").len(), 1);
        assert_eq!(store.get("abc")[0].id, "1");
        assert_eq!(store.get("xyz").len(), 1);
        assert_eq!(store.get("xyz")[0].id, "2");
        assert_eq!(store.note_count(), 2);
    }

    #[test]
    fn test_concurrent_writers_to_same_code_lose_nothing() {
        let store = Arc::new(NoteStore::new());
        let mut handles = Vec::new();

        for t in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                for i in 0..50 {
                    store.update("shared", |notes| {
                        notes.push(note(&format!("{}-{}", t, i)));
                    });
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.get("shared").len(), 8 * 50);
    }
}
