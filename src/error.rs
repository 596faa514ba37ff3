//! Error taxonomy for the whole crate.
//!
//! Configuration problems are caught before any network call; a
//! malformed search response or a bad article record aborts the
//! render; HTTP-level failures carry the status code so the top-level
//! command can report them without a backtrace.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),

    #[error("no search phrase provided")]
    EmptyPhrase,

    #[error("invalid request URL: {0}")]
    BadUrl(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("malformed search response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("article record is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("trending article has an empty image provider list")]
    EmptyProvider,

    #[error("URL shortener returned HTTP {status}")]
    Shortener { status: reqwest::StatusCode },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
