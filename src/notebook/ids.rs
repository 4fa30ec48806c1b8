//! # Note Identity
//!
//! Every note carries a [`NoteId`] drawn from an [`IdAllocator`]. The allocator is an explicit
//! handle rather than process-global state: a fresh allocator starts at 1, and cloning a handle
//! shares its sequence. Notebooks that must never hand out the same id share one allocator;
//! independent notebooks (and tests) simply use their own.
//!
//! ## Loose Id Comparison
//!
//! Ids reach the notebook as typed integers from code and as raw text from the menu. Lookups
//! go through [`NoteKey::canonical`], which renders both sides to the same string form before
//! comparing. This is intentional: `"3"` and `3` name the same note.
//!
//! The canonical form is the decimal rendering for numbers and the text itself for strings.
//! Nothing is normalized, so `"03"` and `" 3"` do not match note 3. Callers reading ids from
//! user input strip whitespace before the lookup.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(u64);

impl NoteId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic source of note ids.
///
/// Ids are pre-incremented: the first id issued by a fresh allocator is 1. Ids are never
/// reused or handed out twice by the same sequence.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: Arc<AtomicU64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> NoteId {
        NoteId(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// The most recently issued id value, or 0 if none has been issued.
    pub fn last_id(&self) -> u64 {
        self.last.load(Ordering::Relaxed)
    }

    /// Rewinds the sequence so the next id is 1 again.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn reset(&self) {
        self.last.store(0, Ordering::Relaxed);
    }
}

/// Anything that can identify a note in a lookup.
pub trait NoteKey {
    /// Canonical string form used for comparison.
    fn canonical(&self) -> String;

    fn matches_id(&self, id: NoteId) -> bool {
        self.canonical() == id.canonical()
    }
}

impl NoteKey for NoteId {
    fn canonical(&self) -> String {
        self.0.to_string()
    }
}

impl NoteKey for str {
    fn canonical(&self) -> String {
        self.to_string()
    }
}

impl NoteKey for String {
    fn canonical(&self) -> String {
        self.as_str().canonical()
    }
}

impl<T: NoteKey + ?Sized> NoteKey for &T {
    fn canonical(&self) -> String {
        (**self).canonical()
    }
}

macro_rules! integer_keys {
    ($($t:ty),*) => {
        $(
            impl NoteKey for $t {
                fn canonical(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_keys!(i32, i64, u32, u64, usize);
