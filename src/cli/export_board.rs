//! Board export operation: fetch, render, write.

use camino::Utf8PathBuf;
use tracing::info;

use crate::config::TrelloExportConfig;
use crate::error::ExportError;
use crate::export::{export, write_documents};
use crate::trello::{BoardGateway, BoardIntake, LoadOptions, TrelloGateway};

/// Exports the configured board to text files using the Trello REST API.
///
/// # Errors
///
/// Returns an error if:
/// - The board name or credentials are missing
/// - The API base URL is invalid
/// - Trello rejects the credentials or a request fails
/// - The board cannot be resolved or a requested list does not exist
/// - Writing to the output directory fails
pub fn run(config: &TrelloExportConfig) -> Result<Vec<Utf8PathBuf>, ExportError> {
    let credentials = config.resolve_credentials()?;
    let gateway = TrelloGateway::new(&credentials, config.api_base_url())?;
    run_with_gateway(config, &gateway)
}

/// Exports the configured board through `gateway`.
///
/// Nothing is written unless the whole board was fetched and rendered.
///
/// # Errors
///
/// Same as [`run`], minus credential and URL validation.
pub fn run_with_gateway<Gateway>(
    config: &TrelloExportConfig,
    gateway: &Gateway,
) -> Result<Vec<Utf8PathBuf>, ExportError>
where
    Gateway: BoardGateway,
{
    let board_name = config.require_board_name()?;
    let export_config = config.export_config();

    let intake = BoardIntake::new(gateway);
    let board = intake.load(
        board_name,
        LoadOptions {
            lists: export_config.lists.as_ref(),
            comments: export_config.comments,
        },
    )?;

    let documents = export(&board, &export_config)?;
    let output_dir = config.output_dir();
    let written = write_documents(&output_dir, &documents)?;

    info!(
        board = %board.name,
        files = written.len(),
        dir = %output_dir,
        "export complete"
    );
    Ok(written)
}
