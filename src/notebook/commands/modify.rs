use crate::commands::{CmdResult, NoteUpdate};
use crate::error::{NotebookError, Result};
use crate::notebook::Notebook;

/// Applies `update` to the note it names.
///
/// An unknown id is silently ignored unless `report_missing` is set, in which case it is
/// returned as [`NotebookError::NoteNotFound`]. Nothing is changed in either case.
pub fn run(notebook: &mut Notebook, update: &NoteUpdate, report_missing: bool) -> Result<CmdResult> {
    if notebook.find_note_by_id(&update.key).is_none() {
        if report_missing {
            return Err(NotebookError::NoteNotFound(update.key.clone()));
        }
        return Ok(CmdResult::default());
    }

    if let Some(memo) = &update.memo {
        notebook.modify_memo(&update.key, memo.as_str());
    }
    if let Some(tags) = &update.tags {
        notebook.modify_tags(&update.key, tags.as_str());
    }

    let affected = notebook
        .find_note_by_id(&update.key)
        .cloned()
        .into_iter()
        .collect();
    Ok(CmdResult::default().with_affected_notes(affected))
}
