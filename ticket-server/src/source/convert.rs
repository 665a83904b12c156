//! Conversion from wire types to validated domain tickets.

use crate::datefmt;
use crate::domain::{CarrierCode, IataCode, Price, Ticket};

use super::types::{RawTicket, TicketsPayload};

/// Error returned when a wire record fails domain validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ticket {index}: invalid {field}: {reason}")]
pub struct ConvertError {
    /// Position of the offending record in the payload.
    pub index: usize,
    /// Which field failed.
    pub field: &'static str,
    /// What was wrong with it.
    pub reason: String,
}

impl ConvertError {
    fn new(index: usize, field: &'static str, reason: impl ToString) -> Self {
        ConvertError {
            index,
            field,
            reason: reason.to_string(),
        }
    }
}

/// Validate a fetched payload into domain tickets, preserving source
/// order.
///
/// Any malformed record fails the whole payload; a partially valid
/// collection is treated the same as unparseable JSON.
pub fn convert_tickets(payload: &TicketsPayload) -> Result<Vec<Ticket>, ConvertError> {
    payload
        .tickets
        .iter()
        .enumerate()
        .map(|(i, raw)| convert_ticket(raw, i))
        .collect()
}

fn convert_ticket(raw: &RawTicket, index: usize) -> Result<Ticket, ConvertError> {
    let origin =
        IataCode::parse(&raw.origin).map_err(|e| ConvertError::new(index, "origin", e))?;
    let destination = IataCode::parse(&raw.destination)
        .map_err(|e| ConvertError::new(index, "destination", e))?;
    let departure_date = datefmt::parse_iso(&raw.departure_date)
        .map_err(|e| ConvertError::new(index, "departure_date", e))?;
    let arrival_date = datefmt::parse_iso(&raw.arrival_date)
        .map_err(|e| ConvertError::new(index, "arrival_date", e))?;
    let price = Price::new(raw.price).map_err(|e| ConvertError::new(index, "price", e))?;
    let carrier =
        CarrierCode::parse(&raw.carrier).map_err(|e| ConvertError::new(index, "carrier", e))?;

    Ok(Ticket {
        departure_time: raw.departure_time.clone(),
        arrival_time: raw.arrival_time.clone(),
        origin,
        destination,
        origin_name: raw.origin_name.clone(),
        destination_name: raw.destination_name.clone(),
        departure_date,
        arrival_date,
        price,
        stops: raw.stops,
        carrier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn raw() -> RawTicket {
        RawTicket {
            departure_time: "12:00".into(),
            arrival_time: "16:30".into(),
            origin: "MOW".into(),
            destination: "HKT".into(),
            origin_name: "Москва".into(),
            destination_name: "Пхукет".into(),
            departure_date: "2023-05-01".into(),
            arrival_date: "2023-05-02".into(),
            price: 12400.0,
            stops: 1,
            carrier: "S7".into(),
        }
    }

    #[test]
    fn converts_valid_record() {
        let payload = TicketsPayload {
            tickets: vec![raw()],
        };

        let tickets = convert_tickets(&payload).unwrap();
        assert_eq!(tickets.len(), 1);

        let t = &tickets[0];
        assert_eq!(t.origin.as_str(), "MOW");
        assert_eq!(t.destination.as_str(), "HKT");
        assert_eq!(
            t.departure_date,
            NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()
        );
        assert_eq!(t.arrival_date, NaiveDate::from_ymd_opt(2023, 5, 2).unwrap());
        assert_eq!(t.price.get(), 12400.0);
        assert_eq!(t.carrier.as_str(), "S7");
    }

    #[test]
    fn rejects_negative_price() {
        let mut bad = raw();
        bad.price = -5.0;
        let payload = TicketsPayload { tickets: vec![bad] };

        let err = convert_tickets(&payload).unwrap_err();
        assert_eq!(err.field, "price");
        assert_eq!(err.index, 0);
    }

    #[test]
    fn rejects_malformed_date() {
        let mut bad = raw();
        bad.arrival_date = "01.05.2023".into();
        let payload = TicketsPayload { tickets: vec![bad] };

        let err = convert_tickets(&payload).unwrap_err();
        assert_eq!(err.field, "arrival_date");
    }

    #[test]
    fn rejects_bad_codes() {
        let mut bad = raw();
        bad.origin = "Moscow".into();
        let payload = TicketsPayload { tickets: vec![bad] };
        assert_eq!(convert_tickets(&payload).unwrap_err().field, "origin");

        let mut bad = raw();
        bad.carrier = "Аэрофлот".into();
        let payload = TicketsPayload { tickets: vec![bad] };
        assert_eq!(convert_tickets(&payload).unwrap_err().field, "carrier");
    }

    #[test]
    fn reports_index_of_offending_record() {
        let mut bad = raw();
        bad.destination = "??".into();
        let payload = TicketsPayload {
            tickets: vec![raw(), raw(), bad],
        };

        let err = convert_tickets(&payload).unwrap_err();
        assert_eq!(err.index, 2);
        assert!(err.to_string().contains("ticket 2"));
    }

    #[test]
    fn empty_payload_is_fine() {
        let payload = TicketsPayload { tickets: vec![] };
        assert!(convert_tickets(&payload).unwrap().is_empty());
    }
}
