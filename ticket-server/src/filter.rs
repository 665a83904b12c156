//! Stop-count filter state machine.
//!
//! The board filters tickets by number of stops. The selection is either
//! the sentinel "all" (no restriction within the supported 0-3 range) or a
//! non-empty set of individual stop counts. The two toggle operations below
//! are the complete transition function over that configuration space; the
//! forbidden "nothing selected" state is unreachable.

use std::fmt;

/// Error returned when constructing an out-of-range stop count.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop count: {reason}")]
pub struct InvalidStopCount {
    reason: &'static str,
}

/// A filterable stop count: 0, 1, 2 or 3.
///
/// Tickets can report any number of stops, but only 0-3 are filter
/// dimensions; anything above is excluded from the board outright.
///
/// # Examples
///
/// ```
/// use ticket_server::filter::StopCount;
///
/// assert_eq!(StopCount::new(2).unwrap().get(), 2);
/// assert!(StopCount::new(4).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StopCount(u8);

impl StopCount {
    /// Highest stop count the filter supports.
    pub const MAX: u32 = 3;

    /// Construct a stop count, rejecting values above [`StopCount::MAX`].
    pub fn new(n: u32) -> Result<Self, InvalidStopCount> {
        if n > Self::MAX {
            return Err(InvalidStopCount {
                reason: "must be between 0 and 3",
            });
        }
        Ok(StopCount(n as u8))
    }

    /// Returns the stop count as a number.
    pub fn get(&self) -> u32 {
        u32::from(self.0)
    }

    fn index(&self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Debug for StopCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCount({})", self.0)
    }
}

impl fmt::Display for StopCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The active stop-count filter configuration.
///
/// Invariant: the sentinel `all` is set exactly when no individual stop
/// flag is set. In particular the five flags are never all false, so the
/// filter always selects something. The invariant is maintained entirely
/// inside [`toggle_all`](StopFilters::toggle_all) and
/// [`toggle_stop`](StopFilters::toggle_stop); there is no other way to
/// mutate the configuration.
///
/// # Examples
///
/// ```
/// use ticket_server::filter::{StopCount, StopFilters};
///
/// let mut filters = StopFilters::default();
/// assert!(filters.all());
///
/// filters.toggle_stop(StopCount::new(1).unwrap(), true);
/// assert!(!filters.all());
/// assert!(filters.allows(1));
/// assert!(!filters.allows(0));
///
/// // Clearing the last active flag falls back to "all"
/// filters.toggle_stop(StopCount::new(1).unwrap(), false);
/// assert!(filters.all());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopFilters {
    all: bool,
    stops: [bool; 4],
}

impl Default for StopFilters {
    /// The initial configuration: "all" selected, no individual flags.
    fn default() -> Self {
        StopFilters {
            all: true,
            stops: [false; 4],
        }
    }
}

impl StopFilters {
    /// Whether the "all" sentinel is selected.
    pub fn all(&self) -> bool {
        self.all
    }

    /// Whether the individual flag for `stop` is selected.
    pub fn stop(&self, stop: StopCount) -> bool {
        self.stops[stop.index()]
    }

    /// The four individual stop flags, indexed by stop count.
    pub fn stop_flags(&self) -> [bool; 4] {
        self.stops
    }

    /// Toggle the "all" sentinel.
    ///
    /// Checking it selects "all" and clears every individual flag.
    /// Unchecking it while no individual flag is set would leave nothing
    /// selected, so that case is a no-op; otherwise the individual flags
    /// (already a non-empty selection) simply remain.
    ///
    /// Returns whether the board should refresh. Every toggle except the
    /// guarded no-op produces a new configuration and triggers a re-fetch,
    /// including re-checking an already-checked "all".
    pub fn toggle_all(&mut self, checked: bool) -> bool {
        if checked {
            self.all = true;
            self.stops = [false; 4];
            true
        } else if self.any_stop() {
            self.all = false;
            true
        } else {
            false
        }
    }

    /// Toggle the individual flag for `stop`.
    ///
    /// Selecting any individual flag deselects "all". If the operation
    /// leaves no individual flag set, the configuration falls back to
    /// "all" rather than allowing an empty selection.
    ///
    /// Always returns `true`: every individual toggle produces a (possibly
    /// value-identical) new configuration and triggers a refresh.
    pub fn toggle_stop(&mut self, stop: StopCount, checked: bool) -> bool {
        self.stops[stop.index()] = checked;
        self.all = !self.any_stop();
        true
    }

    /// The filter predicate: whether a ticket with `stops` connecting
    /// segments is included.
    ///
    /// Stop counts above [`StopCount::MAX`] are always excluded, even
    /// under "all" - the supported dimensions are a hard cap, not merely
    /// a default.
    pub fn allows(&self, stops: u32) -> bool {
        match StopCount::new(stops) {
            Ok(stop) => self.all || self.stops[stop.index()],
            Err(_) => false,
        }
    }

    fn any_stop(&self) -> bool {
        self.stops.iter().any(|&s| s)
    }

    #[cfg(test)]
    fn invariant_holds(&self) -> bool {
        self.all != self.any_stop()
    }
}
