//! Currency code types.

use std::fmt;

/// Error returned when parsing an invalid currency code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid currency code: {reason}")]
pub struct InvalidCurrency {
    reason: &'static str,
}

/// A valid 3-letter ISO 4217 currency code.
///
/// Currency codes are always 3 uppercase ASCII letters. This type
/// guarantees that any `CurrencyCode` value is well-formed; whether the
/// currency is actually supported is decided by the conversion rate table
/// it is looked up in.
///
/// # Examples
///
/// ```
/// use ticket_server::domain::CurrencyCode;
///
/// let usd = CurrencyCode::parse("USD").unwrap();
/// assert_eq!(usd.as_str(), "USD");
/// assert_eq!(usd, CurrencyCode::USD);
///
/// assert!(CurrencyCode::parse("usd").is_err());
/// assert!(CurrencyCode::parse("US").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Russian rouble, the base currency of the ticket source.
    pub const RUB: CurrencyCode = CurrencyCode(*b"RUB");

    /// US dollar.
    pub const USD: CurrencyCode = CurrencyCode(*b"USD");

    /// Euro.
    pub const EUR: CurrencyCode = CurrencyCode(*b"EUR");

    /// Parse a currency code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidCurrency> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidCurrency {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidCurrency {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(CurrencyCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the currency code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurrencyCode({})", self.as_str())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
