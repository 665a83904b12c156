//! Domain types for the ticket board.
//!
//! This module contains the core domain model types that represent
//! validated ticket data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod carrier;
mod currency;
mod location;
mod ticket;

pub use carrier::{CarrierCode, InvalidCarrier};
pub use currency::{CurrencyCode, InvalidCurrency};
pub use location::{IataCode, InvalidIata};
pub use ticket::{InvalidPrice, Price, Ticket};
