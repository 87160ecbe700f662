//! Error type shared by the export pipeline and the Trello adapter

use thiserror::Error;

/// Errors that can occur while talking to Trello or rendering an export
#[derive(Debug, Error)]
pub enum Trello2mdError {
    /// Trello rejected the application key or token
    #[error("trello rejected the credentials (check --key and --token)")]
    Auth,

    /// The requested board, list or card does not exist
    #[error("not found: {resource}")]
    NotFound {
        /// What was being looked up, e.g. `board abc123`
        resource: String,
    },

    /// The board has no list whose name equals the filter
    #[error("board '{board}' has no list named '{filter}'")]
    NoMatchingList {
        /// Name of the board that was searched
        board: String,
        /// The list name that was expected
        filter: String,
    },

    /// Trello answered with a non-success status
    #[error("trello api returned {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// The request could not be built from the configured base URL
    #[error("invalid request url '{url}': {reason}")]
    InvalidUrl {
        /// The URL that failed to parse
        url: String,
        /// Parser message
        reason: String,
    },

    /// Network failure or undecodable response
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A date field was not valid RFC3339
    #[error("invalid timestamp '{value}': {source}")]
    TimestampParse {
        /// The offending value
        value: String,
        /// Underlying parse failure
        #[source]
        source: chrono::ParseError,
    },

    /// Writing the rendered document failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Trello2mdError>;
