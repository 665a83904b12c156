//! Mock ticket source for development and tests.
//!
//! Serves a `tickets.json` file from disk through the same interface as
//! the HTTP source, so the rest of the system is exercised end to end
//! without a live upstream.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::Ticket;

use super::convert::convert_tickets;
use super::error::SourceError;
use super::fetch::TicketSource;
use super::types::TicketsPayload;

/// Ticket source backed by a local JSON file.
///
/// The file is re-read on every fetch, matching the re-fetch-everything
/// contract of the real source (and making it easy to edit the data while
/// the server runs).
#[derive(Debug, Clone)]
pub struct MockTicketSource {
    path: PathBuf,
}

impl MockTicketSource {
    /// Create a mock source reading from `path`.
    ///
    /// Fails immediately if the file is missing or malformed, so a broken
    /// setup surfaces at startup rather than on first use.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let source = Self {
            path: path.as_ref().to_path_buf(),
        };
        source.load()?;
        Ok(source)
    }

    fn load(&self) -> Result<Vec<Ticket>, SourceError> {
        let body = std::fs::read_to_string(&self.path)?;

        let payload: TicketsPayload =
            serde_json::from_str(&body).map_err(|e| SourceError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(convert_tickets(&payload)?)
    }
}

#[async_trait]
impl TicketSource for MockTicketSource {
    async fn fetch_tickets(&self) -> Result<Vec<Ticket>, SourceError> {
        self.load()
    }
}
