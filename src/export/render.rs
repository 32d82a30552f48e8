//! Renders a board snapshot into plain-text documents.
//!
//! Each card becomes a block of lines:
//!
//! ```text
//! Story 1. Fix bug        <- label: optional prefix, ordinal, card name
//! desc A                  <- description, skipped when empty
//! Alice:                  <- one line per comment author, when enabled
//!                         <- blank separator
//! ```
//!
//! Ordinals start at 1 in every output document and run on across lists that
//! share a document.

use crate::error::ExportError;
use crate::trello::{Board, BoardList, Card};

use super::file_name::output_file_name;
use super::model::{Document, ExportConfig, ExportedDocuments, ListSelection};

/// Turns `board` into one document per output file.
///
/// Without `merge`, each selected list gets a file named after it; lists whose
/// names map to the same file share it. With `merge`, a single file named
/// after the board holds every selected list. Nothing is written to disk.
///
/// # Errors
///
/// Returns [`ExportError::NoMatchingList`] when any requested list name is
/// absent from the board. No documents are produced in that case.
pub fn export(board: &Board, config: &ExportConfig) -> Result<ExportedDocuments, ExportError> {
    let selected = select_lists(board, config.lists.as_ref())?;

    let mut groups: Vec<(String, Vec<&BoardList>)> = Vec::new();
    if config.merge {
        groups.push((output_file_name(&board.name), selected));
    } else {
        for list in selected {
            let file_name = output_file_name(&list.name);
            if let Some((_, lists)) = groups.iter_mut().find(|(name, _)| *name == file_name) {
                lists.push(list);
            } else {
                groups.push((file_name, vec![list]));
            }
        }
    }

    let documents = groups
        .into_iter()
        .map(|(file_name, lists)| Document {
            file_name,
            text: render_document(&lists, config),
        })
        .collect();

    Ok(ExportedDocuments::new(documents))
}

/// Returns the lists named by `selection` in board order, or every list when
/// there is no selection.
///
/// # Errors
///
/// Returns [`ExportError::NoMatchingList`] naming every requested list that
/// the board does not have.
pub fn select_lists<'a>(
    board: &'a Board,
    selection: Option<&ListSelection>,
) -> Result<Vec<&'a BoardList>, ExportError> {
    let Some(requested) = selection else {
        return Ok(board.lists.iter().collect());
    };

    let missing: Vec<String> = requested
        .names()
        .filter(|name| !board.lists.iter().any(|list| list.name == *name))
        .map(ToOwned::to_owned)
        .collect();
    if !missing.is_empty() {
        return Err(ExportError::NoMatchingList { missing });
    }

    Ok(board
        .lists
        .iter()
        .filter(|list| requested.contains(&list.name))
        .collect())
}

fn render_document(lists: &[&BoardList], config: &ExportConfig) -> String {
    let mut text = String::new();
    let cards = lists.iter().flat_map(|list| &list.cards);
    for (ordinal, card) in (1_usize..).zip(cards) {
        push_card(&mut text, card, ordinal, config);
    }
    text
}

fn push_card(text: &mut String, card: &Card, ordinal: usize, config: &ExportConfig) {
    text.push_str(&label(card, ordinal, config));
    text.push('\n');
    if !card.description.is_empty() {
        text.push_str(&card.description);
        text.push('\n');
    }

    if config.comments {
        for comment in &card.comments {
            text.push_str(&comment.author);
            text.push_str(": \n");
        }
    }

    text.push('\n');
}

fn label(card: &Card, ordinal: usize, config: &ExportConfig) -> String {
    if !config.numbering {
        return card.name.clone();
    }

    config
        .prefix
        .as_deref()
        .filter(|prefix| !prefix.trim().is_empty())
        .map_or_else(
            || format!("{ordinal}. {}", card.name),
            |prefix| format!("{prefix} {ordinal}. {}", card.name),
        )
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
