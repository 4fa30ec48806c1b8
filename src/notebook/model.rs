use crate::ids::{IdAllocator, NoteId};
use chrono::{Local, NaiveDate};

/// A single tagged memo.
///
/// `id` and `creation_date` are fixed at construction; `memo` and `tags` may be edited freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    creation_date: NaiveDate,
    pub memo: String,
    pub tags: String,
}

impl Note {
    pub fn new(ids: &IdAllocator, memo: impl Into<String>, tags: impl Into<String>) -> Self {
        Self {
            id: ids.next_id(),
            creation_date: Local::now().date_naive(),
            memo: memo.into(),
            tags: tags.into(),
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    /// True if `filter` occurs verbatim in the memo or the tags.
    ///
    /// Case-sensitive; an empty filter matches every note.
    pub fn matches(&self, filter: &str) -> bool {
        self.memo.contains(filter) || self.tags.contains(filter)
    }
}
