//! The fetch seam the board consumes.

use async_trait::async_trait;

use crate::domain::Ticket;

use super::error::SourceError;

/// A source of the full ticket collection.
///
/// One operation: fetch everything, validated. The board re-fetches the
/// whole collection on every filter change, so there is deliberately no
/// incremental or filtered variant.
#[async_trait]
pub trait TicketSource: Send + Sync {
    /// Fetch and validate the complete ticket collection.
    async fn fetch_tickets(&self) -> Result<Vec<Ticket>, SourceError>;
}
