//! Discrete event overlay.
//!
//! Sums the impact of every event whose inclusive `[month_start, month_end]`
//! window contains a month. Overlapping events compound additively so that
//! shocks can be stacked deliberately. Clamping is opt-in.

use econ_core::types::{EconError, EconResult, EconomicEvent};
use serde::{Deserialize, Serialize};

/// Summed impact deltas for one month, in percentage points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDeltas {
    /// Inflation delta
    pub inflation: f64,
    /// Interest-rate delta
    pub interest_rate: f64,
    /// Market volatility delta
    pub market: f64,
}

impl EventDeltas {
    /// Check whether every delta is zero.
    pub fn is_zero(&self) -> bool {
        self.inflation == 0.0 && self.interest_rate == 0.0 && self.market == 0.0
    }
}

/// Symmetric per-component bounds applied after summation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeltaBounds {
    /// Maximum absolute inflation delta
    pub inflation: f64,
    /// Maximum absolute interest-rate delta
    pub interest_rate: f64,
    /// Maximum absolute market delta
    pub market: f64,
}

impl DeltaBounds {
    fn validate(&self) -> EconResult<()> {
        let all = [self.inflation, self.interest_rate, self.market];
        if all.iter().any(|b| !b.is_finite() || *b < 0.0) {
            return Err(EconError::invalid_input(
                "delta bounds must be non-negative finite numbers",
            ));
        }
        Ok(())
    }
}

/// Selects and sums the events in force at a given month.
///
/// # Examples
/// ```
/// use econ_core::types::{EconomicEvent, EventImpact, EventKind};
/// use econ_models::events::EventOverlay;
///
/// let events = vec![
///     EconomicEvent::new("a", "Crisis", EventKind::Crisis, 1, 6)
///         .with_impact(EventImpact { inflation: 2.0, interest_rate: 1.0, market: 10.0, duration_months: 6 }),
///     EconomicEvent::new("b", "Aftershock", EventKind::Crisis, 4, 8)
///         .with_impact(EventImpact { inflation: 1.0, interest_rate: 0.5, market: 5.0, duration_months: 5 }),
/// ];
/// let overlay = EventOverlay::new();
/// let deltas = overlay.active_deltas(&events, 5);
/// assert_eq!(deltas.inflation, 3.0);
/// assert_eq!(deltas.market, 15.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EventOverlay {
    bounds: Option<DeltaBounds>,
}

impl EventOverlay {
    /// Create an unclamped overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an overlay that clamps each summed delta to `±bounds`.
    pub fn with_bounds(bounds: DeltaBounds) -> EconResult<Self> {
        bounds.validate()?;
        Ok(Self {
            bounds: Some(bounds),
        })
    }

    /// Returns the configured bounds, if any.
    pub fn bounds(&self) -> Option<&DeltaBounds> {
        self.bounds.as_ref()
    }

    /// Events whose window contains `month`, in definition order.
    pub fn active_events<'a>(
        &self,
        events: &'a [EconomicEvent],
        month: u32,
    ) -> impl Iterator<Item = &'a EconomicEvent> + 'a {
        events.iter().filter(move |e| e.is_active(month))
    }

    /// Summed deltas of the events in force at `month`.
    pub fn active_deltas(&self, events: &[EconomicEvent], month: u32) -> EventDeltas {
        let summed = self
            .active_events(events, month)
            .fold(EventDeltas::default(), |acc, e| EventDeltas {
                inflation: acc.inflation + e.impact.inflation,
                interest_rate: acc.interest_rate + e.impact.interest_rate,
                market: acc.market + e.impact.market,
            });

        match self.bounds {
            None => summed,
            Some(b) => EventDeltas {
                inflation: summed.inflation.clamp(-b.inflation, b.inflation),
                interest_rate: summed.interest_rate.clamp(-b.interest_rate, b.interest_rate),
                market: summed.market.clamp(-b.market, b.market),
            },
        }
    }
}
