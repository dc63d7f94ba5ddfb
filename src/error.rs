//! Errors that can occur while exporting a Linear view

use std::path::PathBuf;

use thiserror::Error;

/// Every failure of a run. They are all terminal: nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The `LINEAR_API_KEY` variable is absent or empty
    #[error("LINEAR_API_KEY environment variable is not set")]
    MissingApiKey,
    /// The `days` argument is not a positive integer
    #[error("days must be a positive integer")]
    InvalidDays(String),

    /// The URL does not look like `https://linear.app/<team>/view/<id>`
    #[error("Invalid Linear view URL")]
    InvalidViewUrl,
    /// The URL was valid, but the server does not know this view
    #[error("View not found: {0}")]
    ViewNotFound(String),

    /// The server answered with GraphQL errors, or with data that breaks the protocol
    #[error("Linear API error: {0}")]
    Api(String),
    #[error("Unexpected HTTP status code {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Invalid API endpoint: {0}")]
    Url(#[from] url::ParseError),

    #[error("Unable to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
