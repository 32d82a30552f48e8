//! Resolves a user-supplied board name against the account's boards.
//!
//! An exact, case-insensitive match always wins. Without one, a single board
//! whose name contains the query (again ignoring case) is accepted so that
//! `sprint` finds `Sprint 14 (current)`. Several candidates at either stage
//! are reported rather than guessed.

use tracing::info;

use crate::error::ExportError;

use super::models::BoardSummary;

/// Picks the one board that `name` refers to.
///
/// # Errors
///
/// Returns [`ExportError::AmbiguousBoard`] when several boards match at the
/// winning stage and [`ExportError::BoardNotFound`] when none match at all.
pub fn find_board<'a>(
    boards: &'a [BoardSummary],
    name: &str,
) -> Result<&'a BoardSummary, ExportError> {
    let query = name.to_lowercase();

    let exact: Vec<&BoardSummary> = boards
        .iter()
        .filter(|board| board.name.to_lowercase() == query)
        .collect();
    if let Some(board) = single(&exact, name)? {
        info!(board = %board.name, "found a board with exactly this name");
        return Ok(board);
    }

    let partial: Vec<&BoardSummary> = boards
        .iter()
        .filter(|board| board.name.to_lowercase().contains(&query))
        .collect();
    if let Some(board) = single(&partial, name)? {
        info!(board = %board.name, "found a board with a matching name");
        return Ok(board);
    }

    Err(ExportError::BoardNotFound {
        name: name.to_owned(),
    })
}

fn single<'a>(
    candidates: &[&'a BoardSummary],
    name: &str,
) -> Result<Option<&'a BoardSummary>, ExportError> {
    match candidates {
        [] => Ok(None),
        [board] => Ok(Some(*board)),
        many => Err(ExportError::AmbiguousBoard {
            name: name.to_owned(),
            matches: many.iter().map(|board| board.name.clone()).collect(),
        }),
    }
}
