//! The ticket board: list orchestration and display projection.
//!
//! Owns the filter configuration, the selected currency and the last
//! published ticket sequence. Filter changes re-fetch the whole collection
//! from the source; currency changes only re-project what is already
//! published.

mod controller;
mod view;

pub use controller::{BoardSnapshot, TicketBoard};
pub use view::DisplayTicket;
