//! Error types shared by configuration, the Trello gateway, and the exporter.

use thiserror::Error;

/// Errors surfaced while loading configuration, talking to Trello, or
/// exporting board contents.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    /// Neither the positional argument nor `--board` named a board.
    #[error("board name is required")]
    MissingBoardName,

    /// An unsupported CLI argument was supplied.
    #[error("unrecognised argument: {argument}")]
    InvalidArgument {
        /// The flag or value that the CLI does not accept.
        argument: String,
    },

    /// The Trello API key was missing.
    #[error("Trello API key is required (use --key, TRELLO_EXPORT_KEY, or a config file)")]
    MissingApiKey,

    /// The Trello token was missing.
    #[error("Trello token is required (use --token, TRELLO_EXPORT_TOKEN, or a config file)")]
    MissingToken,

    /// The configured API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Trello rejected the key or token.
    #[error("Trello rejected the credentials: {message}")]
    Authentication {
        /// Trello error message returned with the 401/403 response.
        message: String,
    },

    /// No board on the account matched the requested name.
    #[error("no board matches '{name}'")]
    BoardNotFound {
        /// The board name as supplied by the user.
        name: String,
    },

    /// More than one board matched the requested name.
    #[error("more than one board matches '{name}': {}", matches.join(", "))]
    AmbiguousBoard {
        /// The board name as supplied by the user.
        name: String,
        /// Names of every board that matched.
        matches: Vec<String>,
    },

    /// At least one requested list does not exist on the board.
    #[error("no list named {} on this board", quote_all(missing))]
    NoMatchingList {
        /// Requested list names that were not found.
        missing: Vec<String>,
    },

    /// Trello returned a non-authentication API error.
    #[error("Trello API error: {message}")]
    Api {
        /// Response detail describing the failure.
        message: String,
    },

    /// The API answered with 429 Too Many Requests.
    #[error("Trello API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Response detail describing the failure.
        message: String,
    },

    /// Networking failed while calling Trello.
    #[error("network error talking to Trello: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

fn quote_all(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
