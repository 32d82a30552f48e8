//! Support modules for the board export BDD tests.

pub(crate) mod harness;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use harness::{FileCount, mount_rejected_credentials, mount_sprint_board, unescape};
pub(crate) use state::{BoardExportState, ensure_runtime_and_server};
