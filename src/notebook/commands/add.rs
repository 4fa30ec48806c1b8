use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notebook::Notebook;

pub fn run(notebook: &mut Notebook, memo: String, tags: String) -> Result<CmdResult> {
    let id = notebook.new_note(memo, tags);
    let added = notebook.find_note_by_id(id).cloned().into_iter().collect();

    let mut result = CmdResult::default().with_affected_notes(added);
    result.add_message(CmdMessage::success("Your note has been added."));
    Ok(result)
}
