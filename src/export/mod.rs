//! Plain-text export of board snapshots.
//!
//! Rendering is pure: [`export`] turns a [`Board`](crate::trello::Board) into
//! an [`ExportedDocuments`] set without touching the filesystem, and
//! [`write_documents`] persists that set into an output directory.
//!
//! # Layout
//!
//! Without merging, each selected list becomes `<list-name>.txt`. With
//! merging, every selected list goes into `<board-name>.txt`. Lists keep the
//! order they have on the board, as do the cards within them.

mod file_name;
mod model;
mod render;
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_helpers;
mod writer;

pub use file_name::output_file_name;
pub use model::{Document, ExportConfig, ExportedDocuments, ListSelection};
pub use render::{export, select_lists};
pub use writer::write_documents;
