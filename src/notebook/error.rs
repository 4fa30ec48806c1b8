use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotebookError {
    #[error("No note with id {0}")]
    NoteNotFound(String),

    #[error("{0} is not a valid choice")]
    InvalidChoice(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NotebookError>;
