//! # API Facade
//!
//! [`NotebookApi`] is the single entry point a UI uses. It owns the [`Notebook`] and the
//! [`NotebookConfig`] for the session and dispatches each call to its command module.
//! No business logic lives here, and no I/O.

use crate::commands;
use crate::config::NotebookConfig;
use crate::error::Result;
use crate::notebook::Notebook;

pub struct NotebookApi {
    notebook: Notebook,
    config: NotebookConfig,
}

impl NotebookApi {
    pub fn new(notebook: Notebook, config: NotebookConfig) -> Self {
        Self { notebook, config }
    }

    pub fn show_notes(&self) -> Result<CmdResult> {
        commands::show::run(&self.notebook)
    }

    pub fn search_notes(&self, filter: &str) -> Result<CmdResult> {
        commands::search::run(&self.notebook, filter)
    }

    pub fn add_note(&mut self, memo: String, tags: String) -> Result<CmdResult> {
        commands::add::run(&mut self.notebook, memo, tags)
    }

    pub fn modify_note(&mut self, update: &NoteUpdate) -> Result<CmdResult> {
        commands::modify::run(&mut self.notebook, update, self.config.report_missing_notes)
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    pub fn config(&self) -> &NotebookConfig {
        &self.config
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, NoteUpdate};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotebookError;

    fn api(report_missing_notes: bool) -> NotebookApi {
        let config = NotebookConfig {
            report_missing_notes,
            ..NotebookConfig::default()
        };
        NotebookApi::new(Notebook::new(), config)
    }

    #[test]
    fn add_then_show() {
        let mut api = api(false);
        api.add_note("buy milk".into(), "shopping".into()).unwrap();
        api.add_note("call mom".into(), "family".into()).unwrap();

        let shown = api.show_notes().unwrap();
        assert_eq!(shown.listed_notes.len(), 2);
        assert_eq!(api.notebook().len(), 2);
    }

    #[test]
    fn search_dispatches_filter() {
        let mut api = api(false);
        api.add_note("buy milk".into(), "shopping".into()).unwrap();
        api.add_note("call mom".into(), "family".into()).unwrap();

        let found = api.search_notes("mom").unwrap();
        assert_eq!(found.listed_notes.len(), 1);
        assert_eq!(found.listed_notes[0].id().value(), 2);
    }

    #[test]
    fn modify_respects_report_missing_setting() {
        let update = NoteUpdate::new("7").with_memo("x");

        let mut silent = api(false);
        assert!(silent.modify_note(&update).is_ok());

        let mut strict = api(true);
        assert!(matches!(
            strict.modify_note(&update),
            Err(NotebookError::NoteNotFound(_))
        ));
    }

    #[test]
    fn modify_then_search_sees_new_memo() {
        let mut api = api(false);
        api.add_note("old".into(), "".into()).unwrap();
        api.modify_note(&NoteUpdate::new("1").with_memo("new")).unwrap();

        assert!(api.search_notes("old").unwrap().listed_notes.is_empty());
        assert_eq!(api.search_notes("new").unwrap().listed_notes.len(), 1);
    }
}
