//! High-level intake facade that assembles a [`Board`] snapshot.

use tracing::{debug, info};

use crate::error::ExportError;
use crate::export::ListSelection;

use super::gateway::BoardGateway;
use super::lookup::find_board;
use super::models::{Board, BoardList, Card, ListSummary};

/// What to fetch beyond the board's lists and cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions<'a> {
    /// Only lists named here are loaded; `None` loads every list.
    pub lists: Option<&'a ListSelection>,
    /// Fetch each card's comments.
    pub comments: bool,
}

/// Loads board snapshots through a gateway.
pub struct BoardIntake<'client, Gateway>
where
    Gateway: BoardGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> BoardIntake<'client, Gateway>
where
    Gateway: BoardGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Resolve `board_name` and load its lists, cards and optional comments.
    ///
    /// Lists outside `options.lists` are left out of the snapshot and their
    /// cards are never requested. Requested names that do not exist are not
    /// reported here; [`export`](crate::export::export) does that.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::BoardNotFound`] or [`ExportError::AmbiguousBoard`]
    /// when the name does not resolve to one board, and propagates gateway
    /// failures such as rejected credentials or network problems.
    pub fn load(&self, board_name: &str, options: LoadOptions<'_>) -> Result<Board, ExportError> {
        let boards = self.client.boards()?;
        let summary = find_board(&boards, board_name)?;

        let lists: Vec<ListSummary> = self
            .client
            .lists(&summary.id)?
            .into_iter()
            .filter(|list| options.lists.is_none_or(|selection| selection.contains(&list.name)))
            .collect();

        if !lists.is_empty() {
            let names: Vec<&str> = lists.iter().map(|list| list.name.as_str()).collect();
            info!(lists = %names.join(", "), "exporting lists");
        }

        let loaded = lists
            .into_iter()
            .map(|list| self.load_list(list, options.comments))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Board {
            name: summary.name.clone(),
            lists: loaded,
        })
    }

    fn load_list(&self, list: ListSummary, with_comments: bool) -> Result<BoardList, ExportError> {
        let summaries = self.client.cards(&list.id)?;
        debug!(list = %list.name, cards = summaries.len(), "fetched cards");

        let cards = summaries
            .into_iter()
            .map(|card| {
                let comments = if with_comments {
                    self.client.comments(&card.id)?
                } else {
                    Vec::new()
                };
                Ok(Card::from_summary(card, comments))
            })
            .collect::<Result<Vec<_>, ExportError>>()?;

        Ok(BoardList {
            name: list.name,
            cards,
        })
    }
}

#[cfg(test)]
#[path = "intake_tests.rs"]
mod tests;
