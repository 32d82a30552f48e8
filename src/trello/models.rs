//! Board snapshot models and the summaries returned by the gateway.

use std::fmt;

use serde::Deserialize;

macro_rules! trello_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw Trello identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the identifier.
            #[must_use]
            pub const fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

trello_id!(
    /// Identifier of a Trello board.
    BoardId
);
trello_id!(
    /// Identifier of a Trello list.
    ListId
);
trello_id!(
    /// Identifier of a Trello card.
    CardId
);

/// A board as listed on the authenticated member's account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardSummary {
    /// Board identifier.
    pub id: BoardId,
    /// Board display name.
    pub name: String,
}

/// A list as returned for a board, without its cards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListSummary {
    /// List identifier.
    pub id: ListId,
    /// List display name.
    pub name: String,
}

/// A card as returned for a list, without its comments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardSummary {
    /// Card identifier.
    pub id: CardId,
    /// Card title.
    pub name: String,
    /// Card description; Trello sends an empty string when unset.
    #[serde(rename = "desc", default)]
    pub description: String,
}

/// Fully loaded board snapshot consumed by the exporter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// Board display name.
    pub name: String,
    /// Lists in the order Trello returned them.
    pub lists: Vec<BoardList>,
}

/// A named, ordered column of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardList {
    /// List display name.
    pub name: String,
    /// Cards in the order Trello returned them.
    pub cards: Vec<Card>,
}

/// A card with its description and any fetched comments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    /// Card title.
    pub name: String,
    /// Card description, possibly empty.
    pub description: String,
    /// Comments, empty unless comments were requested.
    pub comments: Vec<Comment>,
}

/// A comment left on a card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    /// Display name of the member who wrote the comment.
    pub author: String,
    /// Comment body.
    pub text: String,
}

impl Card {
    pub(crate) fn from_summary(summary: CardSummary, comments: Vec<Comment>) -> Self {
        Self {
            name: summary.name,
            description: summary.description,
            comments,
        }
    }
}
