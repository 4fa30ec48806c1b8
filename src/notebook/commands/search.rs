use crate::commands::CmdResult;
use crate::error::Result;
use crate::notebook::Notebook;

pub fn run(notebook: &Notebook, filter: &str) -> Result<CmdResult> {
    let listed = notebook.search(filter).into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed_notes(listed))
}
