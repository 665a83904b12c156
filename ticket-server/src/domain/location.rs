//! Airport codes.

use std::fmt;

/// Error returned when parsing an invalid IATA code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA code: {reason}")]
pub struct InvalidIata {
    reason: &'static str,
}

/// An IATA airport or metropolitan-area code, such as "MOW" or "HKT".
///
/// Exactly three uppercase ASCII letters. Parsing is the only way to
/// obtain one, so a held value never needs re-checking; tickets carry
/// these for origin and destination alongside the free-form display
/// names.
///
/// # Examples
///
/// ```
/// use ticket_server::domain::IataCode;
///
/// let mow = IataCode::parse("MOW").unwrap();
/// assert_eq!(mow.as_str(), "MOW");
///
/// assert!(IataCode::parse("mow").is_err());
/// assert!(IataCode::parse("MOWW").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IataCode([u8; 3]);

impl IataCode {
    /// Parse an IATA code: exactly 3 uppercase ASCII letters.
    pub fn parse(s: &str) -> Result<Self, InvalidIata> {
        let bytes: [u8; 3] = s.as_bytes().try_into().map_err(|_| InvalidIata {
            reason: "must be exactly 3 characters",
        })?;

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidIata {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(IataCode(bytes))
    }

    /// The code as text.
    pub fn as_str(&self) -> &str {
        // Construction admits uppercase ASCII only
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IataCode({})", self.as_str())
    }
}

impl fmt::Display for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
