//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.trello-export.toml` in the current or home
//!    directory, or `trello-export.toml` in the XDG config directory
//! 3. **Environment variables** – `TRELLO_EXPORT_KEY`, `TRELLO_EXPORT_TOKEN`,
//!    and so on, or the legacy `TRELLO_API_KEY` and `TRELLO_TOKEN`
//! 4. **Command-line arguments** – `--key`/`-k`, `--token`/`-t`, ...
//!
//! # Configuration File
//!
//! ```toml
//! key = "0123456789abcdef"
//! secret = "fedcba9876543210"
//! token = "ATTA-example"
//! lists = "To-Do, Doing"
//! prefix = "Story"
//! output_dir = "exports"
//! ```

use std::env;
use std::fmt;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::export::{ExportConfig, ListSelection};
use crate::trello::{DEFAULT_API_BASE, TrelloCredentials};

/// Legacy environment variable consulted when no API key is configured.
pub const LEGACY_KEY_VAR: &str = "TRELLO_API_KEY";

/// Legacy environment variable consulted when no token is configured.
pub const LEGACY_TOKEN_VAR: &str = "TRELLO_TOKEN";

/// Application configuration supporting CLI, environment, and file sources.
///
/// The board name usually arrives as the positional argument, which the
/// binary strips before ortho-config parses the flags and hands back through
/// [`Self::set_board_name`].
///
/// # Environment Variables
///
/// - `TRELLO_EXPORT_BOARD` or `--board`: Board to export
/// - `TRELLO_EXPORT_KEY`, `TRELLO_API_KEY`, or `--key`: API key
/// - `TRELLO_EXPORT_TOKEN`, `TRELLO_TOKEN`, or `--token`: Member token
/// - `TRELLO_EXPORT_LISTS` or `--lists`: Comma-separated list names
/// - `TRELLO_EXPORT_PREFIX` or `--prefix`: Ordinal prefix
/// - `TRELLO_EXPORT_OUTPUT_DIR` or `--output-dir`: Output directory
///
/// # Example
///
/// ```no_run
/// use trello_export::TrelloExportConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = TrelloExportConfig::load().expect("failed to load configuration");
/// let board = config.require_board_name().expect("board name required");
/// let credentials = config.resolve_credentials().expect("credentials required");
/// ```
#[derive(Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "TRELLO_EXPORT",
    discovery(
        dotfile_name = ".trello-export.toml",
        config_file_name = "trello-export.toml",
        app_name = "trello-export"
    )
)]
pub struct TrelloExportConfig {
    /// Name of the board to export.
    ///
    /// Can be provided via:
    /// - CLI: the positional argument, or `--board <NAME>` / `-b <NAME>`
    /// - Environment: `TRELLO_EXPORT_BOARD`
    /// - Config file: `board = "..."`
    #[ortho_config(cli_short = 'b')]
    pub board: Option<String>,

    /// Trello developer API key.
    ///
    /// Can be provided via:
    /// - CLI: `--key <KEY>` or `-k <KEY>`
    /// - Environment: `TRELLO_EXPORT_KEY` or `TRELLO_API_KEY` (legacy)
    /// - Config file: `key = "..."`
    #[ortho_config(cli_short = 'k')]
    pub key: Option<String>,

    /// Trello API secret.
    ///
    /// Accepted for compatibility with existing credential files. Key and
    /// token authentication does not use it.
    #[ortho_config()]
    pub secret: Option<String>,

    /// Member token authorising access to the account's boards.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `TRELLO_EXPORT_TOKEN` or `TRELLO_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Comma-separated names of the lists to export; all lists when unset.
    #[ortho_config(cli_short = 'l')]
    pub lists: Option<String>,

    /// Text written before each card's ordinal, e.g. `Story`.
    #[ortho_config(cli_short = 'p')]
    pub prefix: Option<String>,

    /// Disables card numbering.
    ///
    /// Note: `TRELLO_EXPORT_NO_NUMBERING` is not supported because
    /// `ortho_config` does not load boolean values from the environment.
    #[ortho_config(cli_short = 'n')]
    pub no_numbering: bool,

    /// Appends one `author: ` line per card comment.
    #[ortho_config(cli_short = 'c')]
    pub comments: bool,

    /// Writes every selected list into a single file named after the board.
    #[ortho_config(cli_short = 'm')]
    pub merge: bool,

    /// Directory receiving the text files; the current directory when unset.
    #[ortho_config(cli_short = 'o')]
    pub output_dir: Option<String>,

    /// Base URL of the Trello REST API.
    ///
    /// Defaults to [`DEFAULT_API_BASE`]. Mainly useful for pointing the tool
    /// at a stub server.
    #[ortho_config()]
    pub api_base_url: Option<String>,
}

impl fmt::Debug for TrelloExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrelloExportConfig")
            .field("board", &self.board)
            .field("key", &redacted(self.key.as_ref()))
            .field("secret", &redacted(self.secret.as_ref()))
            .field("token", &redacted(self.token.as_ref()))
            .field("lists", &self.lists)
            .field("prefix", &self.prefix)
            .field("no_numbering", &self.no_numbering)
            .field("comments", &self.comments)
            .field("merge", &self.merge)
            .field("output_dir", &self.output_dir)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

fn redacted(value: Option<&String>) -> Option<&'static str> {
    value.map(|_| "***")
}

impl TrelloExportConfig {
    /// Stores the board name taken from the positional CLI argument.
    ///
    /// The positional value wins over `board` from files or the environment.
    pub fn set_board_name(&mut self, name: String) {
        self.board = Some(name);
    }

    /// Returns the trimmed board name or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MissingBoardName`] when no board is configured
    /// or the configured name is blank.
    pub fn require_board_name(&self) -> Result<&str, ExportError> {
        self.board
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ExportError::MissingBoardName)
    }

    /// Resolves the key and token, falling back to the legacy
    /// `TRELLO_API_KEY` and `TRELLO_TOKEN` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MissingApiKey`] or [`ExportError::MissingToken`]
    /// when no source provides a non-blank value.
    pub fn resolve_credentials(&self) -> Result<TrelloCredentials, ExportError> {
        let key = self
            .key
            .clone()
            .or_else(|| env::var(LEGACY_KEY_VAR).ok())
            .ok_or(ExportError::MissingApiKey)?;
        let token = self
            .token
            .clone()
            .or_else(|| env::var(LEGACY_TOKEN_VAR).ok())
            .ok_or(ExportError::MissingToken)?;

        TrelloCredentials::from_raw(&key, &token)
    }

    /// Builds the rendering options.
    ///
    /// A `lists` value containing no usable names selects every list.
    #[must_use]
    pub fn export_config(&self) -> ExportConfig {
        let lists = self
            .lists
            .as_deref()
            .map(ListSelection::parse)
            .filter(|selection| !selection.is_empty());

        ExportConfig {
            lists,
            prefix: self.prefix.clone(),
            numbering: !self.no_numbering,
            comments: self.comments,
            merge: self.merge,
        }
    }

    /// Directory the text files are written to.
    #[must_use]
    pub fn output_dir(&self) -> Utf8PathBuf {
        self.output_dir
            .as_deref()
            .map(str::trim)
            .filter(|dir| !dir.is_empty())
            .map_or_else(|| Utf8PathBuf::from("."), Utf8PathBuf::from)
    }

    /// Base URL of the Trello REST API.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests;
