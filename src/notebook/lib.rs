//! # Notebook Architecture
//!
//! A small library of tagged, searchable text notes, with an interactive menu as its client.
//! The notes live in memory only and are gone when the process exits.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Interactive menu, prompts, colored output, exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Notebook and config for the session             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (notebook.rs, model.rs, ids.rs)                       │
//! │  - Ordered note collection, id allocation, matching         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing reads stdin, writes stdout or exits the process.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each menu command
//! - [`notebook`]: The note collection
//! - [`model`]: The `Note` record
//! - [`ids`]: Id allocation and id comparison
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod notebook;

pub use ids::{IdAllocator, NoteId, NoteKey};
pub use model::Note;
pub use notebook::Notebook;
