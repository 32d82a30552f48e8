//! Trello board intake and credential handling.
//!
//! This module talks to the Trello REST API with a key and token pair, finds
//! a board by name, and assembles a [`Board`] snapshot of its open lists,
//! cards and, optionally, card comments. HTTP failures are mapped into
//! [`ExportError`](crate::ExportError) variants so the CLI can report them
//! without exposing credentials.

pub mod credentials;
pub mod gateway;
pub mod intake;
pub mod lookup;
pub mod models;
pub mod pagination;

pub use credentials::{ApiKey, ApiToken, TrelloCredentials};
pub use gateway::{BoardGateway, DEFAULT_API_BASE, TrelloGateway};
pub use intake::{BoardIntake, LoadOptions};
pub use lookup::find_board;
pub use models::{
    Board, BoardId, BoardList, BoardSummary, Card, CardId, CardSummary, Comment, ListId,
    ListSummary,
};

#[cfg(test)]
pub use gateway::MockBoardGateway;
