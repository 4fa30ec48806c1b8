use crate::commands::CmdResult;
use crate::error::Result;
use crate::notebook::Notebook;

pub fn run(notebook: &Notebook) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_notes(notebook.notes().to_vec()))
}
