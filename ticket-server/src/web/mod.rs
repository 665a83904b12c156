//! Web layer for the ticket board.
//!
//! Exposes the board over JSON: the current display sequence with its
//! filter/currency/loading/error state, plus the toggle and selection
//! operations.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
