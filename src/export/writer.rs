//! Writes rendered documents to an output directory.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::debug;

use crate::error::ExportError;

use super::model::ExportedDocuments;

/// Writes every document into `dir`, replacing files of the same name.
///
/// The directory is created when missing. Returns the written paths in
/// document order.
///
/// # Errors
///
/// Returns [`ExportError::Io`] when the directory cannot be created or opened,
/// or when a file cannot be written.
pub fn write_documents(
    dir: &Utf8Path,
    documents: &ExportedDocuments,
) -> Result<Vec<Utf8PathBuf>, ExportError> {
    let output = open_output_dir(dir)?;

    documents
        .iter()
        .map(|document| {
            output
                .write(&document.file_name, &document.text)
                .map_err(|error| ExportError::Io {
                    message: format!(
                        "failed to write '{}' in '{dir}': {error}",
                        document.file_name
                    ),
                })?;
            debug!(file = %document.file_name, bytes = document.text.len(), "wrote document");
            Ok(dir.join(&document.file_name))
        })
        .collect()
}

fn open_output_dir(dir: &Utf8Path) -> Result<Dir, ExportError> {
    Dir::create_ambient_dir_all(dir, ambient_authority()).map_err(|error| ExportError::Io {
        message: format!("failed to create output directory '{dir}': {error}"),
    })?;
    Dir::open_ambient_dir(dir, ambient_authority()).map_err(|error| ExportError::Io {
        message: format!("failed to open output directory '{dir}': {error}"),
    })
}
