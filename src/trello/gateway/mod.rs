//! Gateways for loading board data from the Trello REST API.
//!
//! The trait keeps the intake logic independent of HTTP so it can be driven by
//! a mock in tests, while [`TrelloGateway`] performs the real blocking
//! requests.

mod client;
mod error_mapping;

pub use client::{DEFAULT_API_BASE, TrelloGateway};

use crate::error::ExportError;

use super::models::{BoardId, BoardSummary, CardId, CardSummary, Comment, ListId, ListSummary};

/// Gateway that can load the pieces of a board snapshot.
#[cfg_attr(test, mockall::automock)]
pub trait BoardGateway: Send + Sync {
    /// List every board visible to the authenticated member.
    fn boards(&self) -> Result<Vec<BoardSummary>, ExportError>;

    /// List the open lists of a board in board order.
    fn lists(&self, board: &BoardId) -> Result<Vec<ListSummary>, ExportError>;

    /// List the open cards of a list in list order.
    fn cards(&self, list: &ListId) -> Result<Vec<CardSummary>, ExportError>;

    /// Fetch every comment on a card, following pagination.
    fn comments(&self, card: &CardId) -> Result<Vec<Comment>, ExportError>;
}
