//! Remote ticket source.
//!
//! The board's data comes from a single fetch-by-path operation returning
//! `{"tickets": [...]}`. This module provides the HTTP client for that
//! operation, the wire types, the raw-to-domain validation, a file-backed
//! mock for development and tests, and the async trait the board consumes
//! so sources are swappable.

mod client;
mod convert;
mod error;
mod fetch;
mod mock;
mod types;

pub use client::{HttpTicketSource, SourceConfig};
pub use convert::{ConvertError, convert_tickets};
pub use error::SourceError;
pub use fetch::TicketSource;
pub use mock::MockTicketSource;
pub use types::{RawTicket, TicketsPayload};
