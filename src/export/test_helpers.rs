//! Shared test utilities for export tests.
//!
//! Builders here keep board fixtures short in unit and behavioural tests.

use crate::trello::{Board, BoardList, Card, Comment};

/// Builder for test [`Board`] snapshots with a fluent API.
#[must_use]
#[derive(Debug, Default)]
pub struct BoardBuilder {
    board: Board,
}

impl BoardBuilder {
    /// Starts a board with the given name and no lists.
    pub fn new(name: &str) -> Self {
        Self {
            board: Board {
                name: name.to_owned(),
                lists: Vec::new(),
            },
        }
    }

    /// Appends a list.
    pub fn list(mut self, list: ListBuilder) -> Self {
        self.board.lists.push(list.build());
        self
    }

    /// Builds the [`Board`].
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}

/// Builder for test [`BoardList`] values.
#[must_use]
#[derive(Debug, Default)]
pub struct ListBuilder {
    list: BoardList,
}

impl ListBuilder {
    /// Starts a list with the given name and no cards.
    pub fn new(name: &str) -> Self {
        Self {
            list: BoardList {
                name: name.to_owned(),
                cards: Vec::new(),
            },
        }
    }

    /// Appends a card without comments.
    pub fn card(mut self, name: &str, description: &str) -> Self {
        self.list.cards.push(Card {
            name: name.to_owned(),
            description: description.to_owned(),
            comments: Vec::new(),
        });
        self
    }

    /// Appends a card with comments given as `(author, text)` pairs.
    pub fn card_with_comments(
        mut self,
        name: &str,
        description: &str,
        comments: &[(&str, &str)],
    ) -> Self {
        self.list.cards.push(Card {
            name: name.to_owned(),
            description: description.to_owned(),
            comments: comments
                .iter()
                .map(|(author, text)| Comment {
                    author: (*author).to_owned(),
                    text: (*text).to_owned(),
                })
                .collect(),
        });
        self
    }

    /// Builds the [`BoardList`].
    #[must_use]
    pub fn build(self) -> BoardList {
        self.list
    }
}

/// Board used throughout the docs: "Sprint 1" with a "To-Do" list.
#[must_use]
pub fn sprint_board() -> Board {
    BoardBuilder::new("Sprint 1")
        .list(
            ListBuilder::new("To-Do")
                .card("Fix bug", "desc A")
                .card("Write docs", ""),
        )
        .build()
}

/// Asserts that `haystack` contains `needle`, returning an error if not.
///
/// # Errors
///
/// Returns a description of the mismatch when `needle` is absent.
pub fn assert_contains(haystack: &str, needle: &str) -> Result<(), String> {
    if haystack.contains(needle) {
        Ok(())
    } else {
        Err(format!(
            "expected output to contain '{needle}', got:\n{haystack}"
        ))
    }
}

/// Asserts that `haystack` does NOT contain `needle`, returning an error if it does.
///
/// # Errors
///
/// Returns a description of the mismatch when `needle` is present.
pub fn assert_not_contains(haystack: &str, needle: &str) -> Result<(), String> {
    if haystack.contains(needle) {
        Err(format!(
            "expected output to NOT contain '{needle}', got:\n{haystack}"
        ))
    } else {
        Ok(())
    }
}
