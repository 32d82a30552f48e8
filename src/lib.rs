//! Trello export library crate.
//!
//! The library loads a Trello board through the REST API, renders its lists
//! and cards as numbered plain-text story lists, and writes one text file per
//! list (or one per board when merging). Configuration is layered from
//! defaults, files, environment variables and CLI arguments.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod trello;

pub use config::TrelloExportConfig;
pub use error::ExportError;
pub use export::{ExportConfig, ExportedDocuments, ListSelection, export, write_documents};
pub use trello::{Board, BoardIntake, LoadOptions, TrelloCredentials, TrelloGateway};
