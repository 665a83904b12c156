//! Carrier code types.

use std::fmt;

/// Error returned when parsing an invalid carrier code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid carrier code: {reason}")]
pub struct InvalidCarrier {
    reason: &'static str,
}

/// A valid 2-character carrier designator.
///
/// Carrier codes are 2 uppercase ASCII letters or digits ("SU", "S7",
/// "BA", "TK"). This type guarantees that any `CarrierCode` value is
/// valid by construction.
///
/// # Examples
///
/// ```
/// use ticket_server::domain::CarrierCode;
///
/// let s7 = CarrierCode::parse("S7").unwrap();
/// assert_eq!(s7.as_str(), "S7");
///
/// assert!(CarrierCode::parse("s7").is_err());
/// assert!(CarrierCode::parse("SVO").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarrierCode([u8; 2]);

impl CarrierCode {
    /// Parse a carrier code from a string.
    ///
    /// The input must be exactly 2 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidCarrier> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidCarrier {
                reason: "must be exactly 2 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() && !b.is_ascii_digit() {
                return Err(InvalidCarrier {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(CarrierCode([bytes[0], bytes[1]]))
    }

    /// Returns the carrier code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII letters and digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CarrierCode({})", self.as_str())
    }
}

impl fmt::Display for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
