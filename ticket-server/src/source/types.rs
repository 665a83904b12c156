//! Wire types for the ticket source payload.
//!
//! These mirror the JSON shape exactly and carry no invariants; validation
//! into domain types happens in [`convert`](super::convert).

use serde::Deserialize;

/// The top-level fetch payload: `{"tickets": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketsPayload {
    /// Raw ticket records in source order.
    pub tickets: Vec<RawTicket>,
}

/// A single ticket record as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTicket {
    /// Departure time of day ("12:00").
    pub departure_time: String,

    /// Arrival time of day ("16:30").
    pub arrival_time: String,

    /// Origin location code ("MOW").
    pub origin: String,

    /// Destination location code ("HKT").
    pub destination: String,

    /// Human-readable origin name.
    pub origin_name: String,

    /// Human-readable destination name.
    pub destination_name: String,

    /// ISO departure date ("2023-05-01").
    pub departure_date: String,

    /// ISO arrival date.
    pub arrival_date: String,

    /// Price in the base currency.
    pub price: f64,

    /// Number of connecting segments.
    pub stops: u32,

    /// Carrier code ("SU").
    pub carrier: String,
}
