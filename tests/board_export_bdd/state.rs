//! Scenario state and runtime/server initialisation for the board export
//! BDD tests.

use camino::Utf8PathBuf;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tempfile::TempDir;
use trello_export::ExportError;
use wiremock::MockServer;

use super::runtime::SharedRuntime;

/// Scenario state for board export tests.
#[derive(ScenarioState, Default)]
pub(crate) struct BoardExportState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) output_dir: Slot<TempDir>,
    pub(crate) written: Slot<Vec<Utf8PathBuf>>,
    pub(crate) error: Slot<ExportError>,
}

/// Ensures the runtime and server are initialised in `BoardExportState`.
pub(crate) fn ensure_runtime_and_server(
    state: &BoardExportState,
) -> Result<SharedRuntime, ExportError> {
    super::runtime::ensure_runtime_and_server(&state.runtime, &state.server).map_err(|error| {
        ExportError::Api {
            message: format!("failed to create Tokio runtime: {error}"),
        }
    })
}
