//! Display projection of a ticket.

use crate::currency::{ConversionRates, UnknownCurrency};
use crate::datefmt;
use crate::domain::{CurrencyCode, Ticket};

/// A ticket prepared for presentation: converted price, formatted dates,
/// localized stop-count label.
///
/// Ephemeral by design - rebuilt from the published [`Ticket`] sequence on
/// every snapshot, never stored, so a currency change is just a
/// re-projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTicket {
    /// Departure time of day ("12:00").
    pub departure_time: String,

    /// Arrival time of day ("16:30").
    pub arrival_time: String,

    /// Origin location code.
    pub origin: String,

    /// Destination location code.
    pub destination: String,

    /// Human-readable origin name.
    pub origin_name: String,

    /// Human-readable destination name.
    pub destination_name: String,

    /// Formatted departure date ("1 Май 2023, Пн").
    pub departure_date: String,

    /// Formatted arrival date.
    pub arrival_date: String,

    /// Price converted to the selected currency, fixed two decimals.
    pub price: String,

    /// Localized stop-count label ("Прямой рейс", "1 пересадка").
    pub stops_label: String,

    /// Carrier code.
    pub carrier: String,
}

impl DisplayTicket {
    /// Project a ticket for display in the given currency.
    pub fn from_ticket(
        ticket: &Ticket,
        currency: CurrencyCode,
        rates: &ConversionRates,
    ) -> Result<Self, UnknownCurrency> {
        Ok(DisplayTicket {
            departure_time: ticket.departure_time.clone(),
            arrival_time: ticket.arrival_time.clone(),
            origin: ticket.origin.as_str().to_string(),
            destination: ticket.destination.as_str().to_string(),
            origin_name: ticket.origin_name.clone(),
            destination_name: ticket.destination_name.clone(),
            departure_date: datefmt::format(ticket.departure_date),
            arrival_date: datefmt::format(ticket.arrival_date),
            price: rates.convert(ticket.price, currency)?,
            stops_label: stops_label(ticket.stops),
            carrier: ticket.carrier.as_str().to_string(),
        })
    }
}

/// Localized label for a stop count.
fn stops_label(stops: u32) -> String {
    match stops {
        0 => "Прямой рейс".to_string(),
        1 => "1 пересадка".to_string(),
        n => format!("{n} пересадки"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CarrierCode, IataCode, Price};
    use chrono::NaiveDate;

    fn make_ticket(price: f64, stops: u32) -> Ticket {
        Ticket {
            departure_time: "12:00".into(),
            arrival_time: "16:30".into(),
            origin: IataCode::parse("MOW").unwrap(),
            destination: IataCode::parse("HKT").unwrap(),
            origin_name: "Москва".into(),
            destination_name: "Пхукет".into(),
            departure_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            arrival_date: NaiveDate::from_ymd_opt(2023, 5, 2).unwrap(),
            price: Price::new(price).unwrap(),
            stops,
            carrier: CarrierCode::parse("SU").unwrap(),
        }
    }

    #[test]
    fn projects_all_fields() {
        let rates = ConversionRates::default();
        let view =
            DisplayTicket::from_ticket(&make_ticket(1000.0, 1), CurrencyCode::USD, &rates)
                .unwrap();

        assert_eq!(view.departure_time, "12:00");
        assert_eq!(view.arrival_time, "16:30");
        assert_eq!(view.origin, "MOW");
        assert_eq!(view.destination, "HKT");
        assert_eq!(view.origin_name, "Москва");
        assert_eq!(view.destination_name, "Пхукет");
        assert_eq!(view.departure_date, "1 Май 2023, Пн");
        assert_eq!(view.arrival_date, "2 Май 2023, Вт");
        assert_eq!(view.price, "10.00");
        assert_eq!(view.stops_label, "1 пересадка");
        assert_eq!(view.carrier, "SU");
    }

    #[test]
    fn stop_labels() {
        assert_eq!(stops_label(0), "Прямой рейс");
        assert_eq!(stops_label(1), "1 пересадка");
        assert_eq!(stops_label(2), "2 пересадки");
        assert_eq!(stops_label(3), "3 пересадки");
    }

    #[test]
    fn unknown_currency_propagates() {
        let rates = ConversionRates::default();
        let gbp = CurrencyCode::parse("GBP").unwrap();
        assert!(DisplayTicket::from_ticket(&make_ticket(1000.0, 0), gbp, &rates).is_err());
    }

    #[test]
    fn currency_changes_only_the_price() {
        let rates = ConversionRates::default();
        let ticket = make_ticket(1000.0, 0);

        let usd = DisplayTicket::from_ticket(&ticket, CurrencyCode::USD, &rates).unwrap();
        let rub = DisplayTicket::from_ticket(&ticket, CurrencyCode::RUB, &rates).unwrap();

        assert_eq!(usd.price, "10.00");
        assert_eq!(rub.price, "1000.00");
        assert_eq!(usd.departure_date, rub.departure_date);
        assert_eq!(usd.stops_label, rub.stops_label);
    }
}
