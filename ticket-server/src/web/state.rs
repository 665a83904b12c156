//! Application state for the web layer.

use std::sync::Arc;

use crate::board::TicketBoard;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The ticket board controller
    pub board: Arc<TicketBoard>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(board: TicketBoard) -> Self {
        Self {
            board: Arc::new(board),
        }
    }
}
