//! # Notebook
//!
//! An ordered, append-only collection of [`Note`]s. Notes keep their insertion order for the
//! lifetime of the notebook and there is no removal operation.
//!
//! Lookups by id are a linear scan. Notebooks are small and append-only, so no index is kept.
//! Lookups that find nothing return `None`; modifying an unknown id is a no-op and it is left
//! to the caller to decide whether that deserves a report.

use crate::ids::{IdAllocator, NoteId, NoteKey};
use crate::model::Note;
use log::debug;

#[derive(Debug, Default)]
pub struct Notebook {
    notes: Vec<Note>,
    ids: IdAllocator,
}

impl Notebook {
    /// An empty notebook with its own id sequence starting at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty notebook drawing ids from `ids`.
    ///
    /// Notebooks built from clones of the same allocator never issue the same id.
    pub fn with_allocator(ids: IdAllocator) -> Self {
        Self {
            notes: Vec::new(),
            ids,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn new_note(&mut self, memo: impl Into<String>, tags: impl Into<String>) -> NoteId {
        let note = Note::new(&self.ids, memo, tags);
        let id = note.id();
        debug!("created note {}", id);
        self.notes.push(note);
        id
    }

    pub fn modify_memo<K: NoteKey>(&mut self, key: K, memo: impl Into<String>) -> Option<&Note> {
        let note = self.find_note_by_id_mut(&key)?;
        note.memo = memo.into();
        debug!("updated memo of note {}", note.id());
        Some(&*note)
    }

    pub fn modify_tags<K: NoteKey>(&mut self, key: K, tags: impl Into<String>) -> Option<&Note> {
        let note = self.find_note_by_id_mut(&key)?;
        note.tags = tags.into();
        debug!("updated tags of note {}", note.id());
        Some(&*note)
    }

    /// Notes whose memo or tags contain `filter`, in insertion order.
    pub fn search(&self, filter: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.matches(filter)).collect()
    }

    /// First note whose id matches `key` under canonical comparison.
    pub fn find_note_by_id<K: NoteKey>(&self, key: K) -> Option<&Note> {
        let wanted = key.canonical();
        let found = self.notes.iter().find(|n| n.id().canonical() == wanted);
        if found.is_none() {
            debug!("no note with id {:?}", wanted);
        }
        found
    }

    fn find_note_by_id_mut<K: NoteKey>(&mut self, key: &K) -> Option<&mut Note> {
        let wanted = key.canonical();
        let found = self.notes.iter_mut().find(|n| n.id().canonical() == wanted);
        if found.is_none() {
            debug!("no note with id {:?}", wanted);
        }
        found
    }
}
