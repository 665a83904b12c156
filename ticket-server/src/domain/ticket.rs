//! The ticket record.

use std::fmt;

use chrono::NaiveDate;

use super::{CarrierCode, IataCode};

/// Error returned when constructing an invalid price.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: {reason}")]
pub struct InvalidPrice {
    reason: &'static str,
}

/// A ticket price in the source's base currency.
///
/// Guaranteed finite and non-negative by construction, so prices admit a
/// total order and arithmetic on them cannot produce surprises from NaN
/// or negative values smuggled in by the data source.
///
/// # Examples
///
/// ```
/// use ticket_server::domain::Price;
///
/// let p = Price::new(12400.0).unwrap();
/// assert_eq!(p.get(), 12400.0);
///
/// assert!(Price::new(-1.0).is_err());
/// assert!(Price::new(f64::NAN).is_err());
/// assert!(Price::new(f64::INFINITY).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    /// Construct a price from a base-currency amount.
    ///
    /// The amount must be finite and non-negative.
    pub fn new(amount: f64) -> Result<Self, InvalidPrice> {
        if !amount.is_finite() {
            return Err(InvalidPrice {
                reason: "must be a finite number",
            });
        }
        if amount < 0.0 {
            return Err(InvalidPrice {
                reason: "must not be negative",
            });
        }
        // Normalise -0.0 so total_cmp agrees with ==
        Ok(Price(amount + 0.0))
    }

    /// Returns the amount in the base currency.
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Eq for Price {}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Total order is sound: construction rules out NaN
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price({})", self.0)
    }
}

/// An immutable travel ticket as received from the data source.
///
/// All fields are validated at the source boundary: codes are well-formed,
/// dates are resolved calendar dates, and the price is finite and
/// non-negative. The engine never mutates tickets; filtering and sorting
/// produce new sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    /// Departure time of day, already formatted for display ("12:00").
    pub departure_time: String,

    /// Arrival time of day, already formatted for display ("16:30").
    pub arrival_time: String,

    /// Origin location code.
    pub origin: IataCode,

    /// Destination location code.
    pub destination: IataCode,

    /// Human-readable origin name.
    pub origin_name: String,

    /// Human-readable destination name.
    pub destination_name: String,

    /// Departure calendar date.
    pub departure_date: NaiveDate,

    /// Arrival calendar date.
    pub arrival_date: NaiveDate,

    /// Price in the base currency.
    pub price: Price,

    /// Number of connecting segments in the itinerary.
    pub stops: u32,

    /// Operating carrier.
    pub carrier: CarrierCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_accepts_valid_amounts() {
        assert!(Price::new(0.0).is_ok());
        assert!(Price::new(0.01).is_ok());
        assert!(Price::new(1_000_000.0).is_ok());
    }

    #[test]
    fn price_rejects_negative() {
        assert!(Price::new(-0.01).is_err());
        assert!(Price::new(-1000.0).is_err());
    }

    #[test]
    fn price_rejects_non_finite() {
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
        assert!(Price::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn price_ordering() {
        let a = Price::new(10.0).unwrap();
        let b = Price::new(20.0).unwrap();
        let c = Price::new(10.0).unwrap();

        assert!(a < b);
        assert!(b > a);
        assert_eq!(a, c);
        assert_eq!(a.cmp(&c), std::cmp::Ordering::Equal);
    }

    #[test]
    fn negative_zero_normalised() {
        let neg = Price::new(-0.0).unwrap();
        let pos = Price::new(0.0).unwrap();
        assert_eq!(neg, pos);
        assert_eq!(neg.cmp(&pos), std::cmp::Ordering::Equal);
    }
}
