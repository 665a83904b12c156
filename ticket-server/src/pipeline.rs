//! Ticket-processing pipeline.
//!
//! Turns the raw ticket collection into the sequence the board publishes:
//! sorted ascending by price, then filtered by the active stop-count
//! configuration. The sort is stable so equal-price tickets keep their
//! source order, which keeps render keys deterministic downstream.

use crate::domain::Ticket;
use crate::filter::StopFilters;

/// Sort and filter tickets for display.
///
/// Sorting happens before filtering; since filtering preserves relative
/// order the result is the same either way: stable ascending by price
/// among the surviving subset.
pub fn prepare(mut tickets: Vec<Ticket>, filters: &StopFilters) -> Vec<Ticket> {
    // Vec::sort_by is stable; Price is totally ordered by construction
    tickets.sort_by(|a, b| a.price.cmp(&b.price));
    tickets.retain(|t| filters.allows(t.stops));
    tickets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CarrierCode, IataCode, Price};
    use crate::filter::StopCount;
    use chrono::NaiveDate;

    fn ticket(origin_name: &str, price: f64, stops: u32) -> Ticket {
        let date = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        Ticket {
            departure_time: "12:00".into(),
            arrival_time: "16:30".into(),
            origin: IataCode::parse("MOW").unwrap(),
            destination: IataCode::parse("HKT").unwrap(),
            origin_name: origin_name.into(),
            destination_name: "Phuket".into(),
            departure_date: date,
            arrival_date: date,
            price: Price::new(price).unwrap(),
            stops,
            carrier: CarrierCode::parse("SU").unwrap(),
        }
    }

    fn stop(n: u32) -> StopCount {
        StopCount::new(n).unwrap()
    }

    #[test]
    fn sorts_ascending_by_price() {
        let tickets = vec![
            ticket("a", 300.0, 0),
            ticket("b", 100.0, 1),
            ticket("c", 200.0, 2),
        ];

        let out = prepare(tickets, &StopFilters::default());

        let prices: Vec<f64> = out.iter().map(|t| t.price.get()).collect();
        assert_eq!(prices, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn equal_prices_keep_source_order() {
        let tickets = vec![
            ticket("first", 100.0, 0),
            ticket("second", 100.0, 1),
            ticket("third", 50.0, 2),
            ticket("fourth", 100.0, 3),
        ];

        let out = prepare(tickets, &StopFilters::default());

        let names: Vec<&str> = out.iter().map(|t| t.origin_name.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second", "fourth"]);
    }

    #[test]
    fn all_keeps_supported_stop_counts() {
        let tickets = vec![
            ticket("a", 1.0, 0),
            ticket("b", 2.0, 1),
            ticket("c", 3.0, 2),
            ticket("d", 4.0, 3),
        ];

        let out = prepare(tickets, &StopFilters::default());
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn four_stops_excluded_even_under_all() {
        let tickets = vec![ticket("a", 1.0, 4), ticket("b", 2.0, 1)];

        let out = prepare(tickets, &StopFilters::default());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].stops, 1);
    }

    #[test]
    fn individual_selection_filters() {
        let mut filters = StopFilters::default();
        filters.toggle_stop(stop(0), true);
        filters.toggle_stop(stop(2), true);

        let tickets = vec![
            ticket("a", 4.0, 0),
            ticket("b", 3.0, 1),
            ticket("c", 2.0, 2),
            ticket("d", 1.0, 3),
        ];

        let out = prepare(tickets, &filters);

        let picked: Vec<u32> = out.iter().map(|t| t.stops).collect();
        assert_eq!(picked, vec![2, 0]); // sorted by price, stops 1 and 3 dropped
    }

    #[test]
    fn empty_input_is_empty_output() {
        let out = prepare(Vec::new(), &StopFilters::default());
        assert!(out.is_empty());
    }
}
