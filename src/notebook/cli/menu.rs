//! The interactive menu loop.
//!
//! [`Menu`] is generic over its input and output so sessions can be scripted in tests.
//! End of input at any prompt ends the session the same way choosing Quit does.

use super::print::{print_messages, print_notes};
use log::debug;
use notebook::api::{CmdMessage, CmdResult, NoteUpdate, NotebookApi};
use notebook::error::{NotebookError, Result};
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::str::FromStr;

const BANNER: &str = "
Notebook Menu

1. Show all Notes
2. Search Notes
3. Add Note
4. Modify Note
5. Quit
";

const FAREWELL: &str = "Thank you for using your notebook today.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowNotes,
    SearchNotes,
    AddNote,
    ModifyNote,
    Quit,
}

impl FromStr for MenuChoice {
    type Err = NotebookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MenuChoice::ShowNotes),
            "2" => Ok(MenuChoice::SearchNotes),
            "3" => Ok(MenuChoice::AddNote),
            "4" => Ok(MenuChoice::ModifyNote),
            "5" => Ok(MenuChoice::Quit),
            other => Err(NotebookError::InvalidChoice(other.to_string())),
        }
    }
}

pub struct Menu<R, W> {
    api: NotebookApi,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(api: NotebookApi, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", BANNER)?;
            let Some(answer) = self.prompt("Enter an option: ")? else {
                return self.quit();
            };

            let flow = match answer.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(e @ NotebookError::InvalidChoice(_)) => {
                    debug!("rejected menu choice {:?}", answer);
                    print_messages(&mut self.output, &[CmdMessage::error(e.to_string())])?;
                    ControlFlow::Continue(())
                }
                Err(e) => return Err(e),
            };

            if flow.is_break() {
                return self.quit();
            }
        }
    }

    #[cfg(test)]
    pub fn into_api(self) -> NotebookApi {
        self.api
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>> {
        match choice {
            MenuChoice::ShowNotes => self.show_notes(),
            MenuChoice::SearchNotes => self.search_notes(),
            MenuChoice::AddNote => self.add_note(),
            MenuChoice::ModifyNote => self.modify_note(),
            MenuChoice::Quit => Ok(ControlFlow::Break(())),
        }
    }

    fn show_notes(&mut self) -> Result<ControlFlow<()>> {
        let show_dates = self.show_dates();
        let result = self.api.show_notes()?;
        print_notes(&mut self.output, &result.listed_notes, show_dates)?;
        Ok(ControlFlow::Continue(()))
    }

    fn search_notes(&mut self) -> Result<ControlFlow<()>> {
        let Some(filter) = self.prompt("Search for: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let show_dates = self.show_dates();
        let result = self.api.search_notes(&filter)?;
        print_notes(&mut self.output, &result.listed_notes, show_dates)?;
        Ok(ControlFlow::Continue(()))
    }

    fn add_note(&mut self) -> Result<ControlFlow<()>> {
        let Some(memo) = self.prompt("Enter a memo: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let result = self.api.add_note(memo, String::new())?;
        log_affected("added", &result);
        print_messages(&mut self.output, &result.messages)?;
        Ok(ControlFlow::Continue(()))
    }

    fn modify_note(&mut self) -> Result<ControlFlow<()>> {
        let Some(key) = self.prompt("Enter a note id: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(memo) = self.prompt("Enter a memo: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(tags) = self.prompt("Enter tags: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        let update = NoteUpdate::from_answers(key.trim(), &memo, &tags);
        match self.api.modify_note(&update) {
            Ok(result) => {
                log_affected("modified", &result);
                print_messages(&mut self.output, &result.messages)?
            }
            Err(e @ NotebookError::NoteNotFound(_)) => {
                print_messages(&mut self.output, &[CmdMessage::warning(e.to_string())])?
            }
            Err(e) => return Err(e),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn quit(&mut self) -> Result<()> {
        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        Ok(())
    }

    fn show_dates(&self) -> bool {
        self.api.config().show_creation_date
    }

    /// Reads one line, without its line ending. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

fn log_affected(action: &str, result: &CmdResult) {
    for note in &result.affected_notes {
        debug!("{} note {}: tags={:?} memo={:?}", action, note.id(), note.tags, note.memo);
    }
}
