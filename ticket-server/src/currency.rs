//! Currency display conversion.
//!
//! Ticket prices arrive in a single base currency; the board displays them
//! in whichever supported currency the user selects. The conversion is a
//! pure multiply-and-round against a fixed rate table loaded at startup.

use std::collections::HashMap;

use crate::domain::{CurrencyCode, Price};

/// Error returned when building a rate table with a bad multiplier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid conversion rate for {code}: {reason}")]
pub struct InvalidRate {
    code: CurrencyCode,
    reason: &'static str,
}

/// Error returned when converting to a currency absent from the table.
///
/// Reaching this from user input is a programming error: every public
/// selection path validates the currency against the table first, so the
/// supported set is the only thing a user can pick.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown currency: {code}")]
pub struct UnknownCurrency {
    code: CurrencyCode,
}

/// Conversion rate table: multiplier per currency relative to the base.
///
/// Immutable once built. The base currency carries rate 1.
///
/// # Examples
///
/// ```
/// use ticket_server::currency::ConversionRates;
/// use ticket_server::domain::{CurrencyCode, Price};
///
/// let rates = ConversionRates::default();
/// let price = Price::new(1000.0).unwrap();
/// assert_eq!(rates.convert(price, CurrencyCode::USD).unwrap(), "10.00");
/// assert_eq!(rates.convert(price, CurrencyCode::RUB).unwrap(), "1000.00");
/// ```
#[derive(Debug, Clone)]
pub struct ConversionRates {
    rates: HashMap<CurrencyCode, f64>,
}

impl Default for ConversionRates {
    /// The built-in table: RUB base, USD and EUR alternates.
    fn default() -> Self {
        let mut rates = HashMap::new();
        rates.insert(CurrencyCode::RUB, 1.0);
        rates.insert(CurrencyCode::USD, 0.01);
        rates.insert(CurrencyCode::EUR, 0.009);
        ConversionRates { rates }
    }
}

impl ConversionRates {
    /// Build a rate table, rejecting non-positive or non-finite
    /// multipliers.
    pub fn new(rates: HashMap<CurrencyCode, f64>) -> Result<Self, InvalidRate> {
        for (&code, &rate) in &rates {
            if !rate.is_finite() {
                return Err(InvalidRate {
                    code,
                    reason: "must be a finite number",
                });
            }
            if rate <= 0.0 {
                return Err(InvalidRate {
                    code,
                    reason: "must be positive",
                });
            }
        }
        Ok(ConversionRates { rates })
    }

    /// Whether `code` is in the table.
    pub fn supports(&self, code: CurrencyCode) -> bool {
        self.rates.contains_key(&code)
    }

    /// Validate that `code` is in the table.
    ///
    /// Selection paths call this before storing a currency, which is what
    /// keeps [`convert`](ConversionRates::convert) infallible for stored
    /// selections.
    pub fn check(&self, code: CurrencyCode) -> Result<(), UnknownCurrency> {
        if self.supports(code) {
            Ok(())
        } else {
            Err(UnknownCurrency { code })
        }
    }

    /// Convert a base-currency price for display in `target`.
    ///
    /// The result is rounded half-away-from-zero to exactly two decimal
    /// places and rendered with a fixed two-decimal representation
    /// ("10.00", never "10" or "10.0").
    pub fn convert(&self, price: Price, target: CurrencyCode) -> Result<String, UnknownCurrency> {
        let rate = self
            .rates
            .get(&target)
            .ok_or(UnknownCurrency { code: target })?;
        Ok(format_fixed2(price.get() * rate))
    }
}

/// Format a non-negative amount with exactly two decimal places,
/// rounding half-away-from-zero.
fn format_fixed2(amount: f64) -> String {
    // f64::round is half-away-from-zero; formatting from whole kopecks
    // sidesteps binary-representation drift at the hundredths place
    let cents = (amount * 100.0).round();

    // Past i64 cents the cast would clamp; at that magnitude the f64 has
    // no sub-unit precision left, so format the amount directly
    if cents >= i64::MAX as f64 {
        return format!("{amount:.2}");
    }

    let cents = cents as i64;
    format!("{}.{:02}", cents / 100, cents % 100)
}
