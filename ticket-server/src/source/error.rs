//! Ticket source error types.

use std::fmt;

use super::convert::ConvertError;

/// Errors from fetching and decoding the ticket collection.
#[derive(Debug)]
pub enum SourceError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// Reading a local ticket file failed
    Io(std::io::Error),

    /// Source returned a non-success status code
    Status { status: u16, message: String },

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// A record in the payload failed domain validation
    Invalid(ConvertError),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Http(e) => write!(f, "HTTP error: {e}"),
            SourceError::Io(e) => write!(f, "IO error: {e}"),
            SourceError::Status { status, message } => {
                write!(f, "source error {status}: {message}")
            }
            SourceError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            SourceError::Invalid(e) => write!(f, "invalid payload: {e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Http(e) => Some(e),
            SourceError::Io(e) => Some(e),
            SourceError::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Http(err)
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::Io(err)
    }
}

impl From<ConvertError> for SourceError {
    fn from(err: ConvertError) -> Self {
        SourceError::Invalid(err)
    }
}
