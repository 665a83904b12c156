//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::board::{BoardSnapshot, DisplayTicket};

/// Request to toggle the "all" stop filter.
#[derive(Debug, Deserialize)]
pub struct ToggleAllRequest {
    /// New checked state of the "all" checkbox
    pub checked: bool,
}

/// Request to toggle an individual stop filter.
#[derive(Debug, Deserialize)]
pub struct ToggleStopRequest {
    /// Stop count to toggle (0-3)
    pub stops: u32,

    /// New checked state of that checkbox
    pub checked: bool,
}

/// Request to select the display currency.
#[derive(Debug, Deserialize)]
pub struct SetCurrencyRequest {
    /// Currency code ("RUB", "USD", "EUR")
    pub currency: String,
}

/// A ticket in the board response.
#[derive(Debug, Serialize)]
pub struct TicketView {
    /// Departure time of day
    pub departure_time: String,

    /// Arrival time of day
    pub arrival_time: String,

    /// Origin location code
    pub origin: String,

    /// Destination location code
    pub destination: String,

    /// Human-readable origin name
    pub origin_name: String,

    /// Human-readable destination name
    pub destination_name: String,

    /// Formatted departure date
    pub departure_date: String,

    /// Formatted arrival date
    pub arrival_date: String,

    /// Price in the selected currency, fixed two decimals
    pub price: String,

    /// Localized stop-count label
    pub stops_label: String,

    /// Carrier code
    pub carrier: String,
}

/// The filter configuration as exposed to clients.
#[derive(Debug, Serialize)]
pub struct FiltersView {
    /// The "all" sentinel
    pub all: bool,

    /// Individual stop flags, indexed by stop count
    pub stops: [bool; 4],
}

/// The full board response.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Display tickets, ascending by price
    pub tickets: Vec<TicketView>,

    /// Current filter configuration
    pub filters: FiltersView,

    /// Selected display currency
    pub currency: String,

    /// Whether a fetch is in flight
    pub loading: bool,

    /// Error message from the last failed fetch, if any
    pub error: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl TicketView {
    /// Create from a display ticket.
    pub fn from_display(ticket: &DisplayTicket) -> Self {
        Self {
            departure_time: ticket.departure_time.clone(),
            arrival_time: ticket.arrival_time.clone(),
            origin: ticket.origin.clone(),
            destination: ticket.destination.clone(),
            origin_name: ticket.origin_name.clone(),
            destination_name: ticket.destination_name.clone(),
            departure_date: ticket.departure_date.clone(),
            arrival_date: ticket.arrival_date.clone(),
            price: ticket.price.clone(),
            stops_label: ticket.stops_label.clone(),
            carrier: ticket.carrier.clone(),
        }
    }
}

impl BoardResponse {
    /// Create from a board snapshot.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Self {
        Self {
            tickets: snapshot
                .tickets
                .iter()
                .map(TicketView::from_display)
                .collect(),
            filters: FiltersView {
                all: snapshot.filters.all(),
                stops: snapshot.filters.stop_flags(),
            },
            currency: snapshot.currency.to_string(),
            loading: snapshot.loading,
            error: snapshot.error.clone(),
        }
    }
}
