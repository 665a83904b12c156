//! The list controller.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::currency::{ConversionRates, UnknownCurrency};
use crate::domain::{CurrencyCode, Ticket};
use crate::filter::{StopCount, StopFilters};
use crate::pipeline;
use crate::source::TicketSource;

use super::view::DisplayTicket;

/// The single user-visible message for any fetch or decode failure.
///
/// Individual causes go to the log; the presentation layer only learns
/// that loading failed.
const FETCH_ERROR_MESSAGE: &str = "Не удалось загрузить билеты";

/// Everything the presentation layer needs, captured at one instant.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    /// Display tickets in publish order (ascending price).
    pub tickets: Vec<DisplayTicket>,

    /// Current filter configuration.
    pub filters: StopFilters,

    /// Currently selected display currency.
    pub currency: CurrencyCode,

    /// Whether a fetch is in flight.
    pub loading: bool,

    /// Generic error message if the last fetch failed.
    pub error: Option<String>,
}

/// Mutable board state, guarded by the controller's lock.
#[derive(Debug)]
struct BoardState {
    filters: StopFilters,
    currency: CurrencyCode,
    tickets: Vec<Ticket>,
    loading: bool,
    error: Option<String>,
}

/// The board controller.
///
/// Owns the filter configuration, the selected currency and the last
/// published (sorted, filtered) ticket sequence. All transitions run
/// atomically under the internal lock; the fetch itself runs without it.
///
/// Every effective filter change re-fetches the entire collection and runs
/// it through the pipeline - there is no cached re-filter. A currency
/// change never fetches; it only affects how snapshots project the
/// published sequence. Preserving that asymmetry is deliberate.
///
/// Concurrent fetches are sequenced: each takes a monotonically increasing
/// number, and a result is published only if no newer fetch has been
/// initiated meanwhile. A stale response, success or failure, is dropped
/// on arrival.
pub struct TicketBoard {
    source: Arc<dyn TicketSource>,
    rates: ConversionRates,
    fetch_seq: AtomicU64,
    state: RwLock<BoardState>,
}

impl TicketBoard {
    /// Create a board over `source` with the given rate table and initial
    /// display currency.
    ///
    /// Fails if the initial currency is not in the table; that check (and
    /// the one in [`set_currency`](TicketBoard::set_currency)) is what
    /// makes the stored selection always convertible.
    pub fn new(
        source: Arc<dyn TicketSource>,
        rates: ConversionRates,
        currency: CurrencyCode,
    ) -> Result<Self, UnknownCurrency> {
        rates.check(currency)?;
        Ok(Self {
            source,
            rates,
            fetch_seq: AtomicU64::new(0),
            state: RwLock::new(BoardState {
                filters: StopFilters::default(),
                currency,
                tickets: Vec::new(),
                loading: false,
                error: None,
            }),
        })
    }

    /// Fetch the full collection and publish it through the pipeline.
    ///
    /// Called once at startup and after every effective filter change.
    /// If a newer fetch is initiated while this one is in flight, this
    /// one's result is discarded when it arrives. An existing error state
    /// persists until a fetch succeeds.
    pub async fn refresh(&self) {
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.write().await;
            state.loading = true;
        }

        debug!(seq, "fetching ticket collection");
        let result = self.source.fetch_tickets().await;

        let mut state = self.state.write().await;
        if self.fetch_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, "discarding superseded fetch result");
            return;
        }

        state.loading = false;
        match result {
            Ok(tickets) => {
                state.tickets = pipeline::prepare(tickets, &state.filters);
                state.error = None;
                debug!(seq, count = state.tickets.len(), "published tickets");
            }
            Err(e) => {
                warn!(seq, error = %e, "ticket fetch failed");
                state.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Toggle the "all" stop filter, re-fetching if the toggle took
    /// effect.
    pub async fn toggle_all(&self, checked: bool) {
        let refresh = self.state.write().await.filters.toggle_all(checked);
        if refresh {
            self.refresh().await;
        }
    }

    /// Toggle an individual stop filter, re-fetching.
    pub async fn toggle_stop(&self, stop: StopCount, checked: bool) {
        let refresh = self.state.write().await.filters.toggle_stop(stop, checked);
        if refresh {
            self.refresh().await;
        }
    }

    /// Select the display currency.
    ///
    /// Validates the code against the rate table and never fetches: the
    /// next snapshot simply re-projects the already published sequence.
    pub async fn set_currency(&self, currency: CurrencyCode) -> Result<(), UnknownCurrency> {
        self.rates.check(currency)?;
        self.state.write().await.currency = currency;
        Ok(())
    }

    /// Capture the current board for presentation.
    ///
    /// Display tickets are recomputed on every call from the published
    /// sequence and the current currency; nothing derived is stored.
    pub async fn snapshot(&self) -> BoardSnapshot {
        let state = self.state.read().await;

        let tickets = state
            .tickets
            .iter()
            .map(|t| {
                DisplayTicket::from_ticket(t, state.currency, &self.rates)
                    .expect("stored currency was validated against the rate table")
            })
            .collect();

        BoardSnapshot {
            tickets,
            filters: state.filters,
            currency: state.currency,
            loading: state.loading,
            error: state.error.clone(),
        }
    }
}
