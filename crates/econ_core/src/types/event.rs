//! Discrete economic events.

use serde::{Deserialize, Serialize};

/// Event classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Financial or economic crisis
    Crisis,
    /// Expansion above trend
    Boom,
    /// Contraction
    Recession,
    /// Post-contraction recovery
    Recovery,
    /// No directional bias
    Neutral,
}

impl EventKind {
    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Crisis => "Crisis",
            Self::Boom => "Boom",
            Self::Recession => "Recession",
            Self::Recovery => "Recovery",
            Self::Neutral => "Neutral",
        }
    }
}

/// Impact deltas applied while an event is in force.
///
/// `inflation`, `interest_rate` and `market` are additive deltas in
/// percentage points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventImpact {
    /// Inflation delta (pp)
    pub inflation: f64,
    /// Interest-rate delta (pp)
    pub interest_rate: f64,
    /// Market volatility delta (pp)
    pub market: f64,
    /// Nominal duration of the event in months
    pub duration_months: u32,
}

/// A discrete economic event active over an inclusive month window.
///
/// # Examples
/// ```
/// use econ_core::types::{EconomicEvent, EventImpact, EventKind};
///
/// let crisis = EconomicEvent::new("e1", "Credit crunch", EventKind::Crisis, 3, 6)
///     .with_impact(EventImpact { inflation: 2.0, interest_rate: 3.0, market: 15.0, duration_months: 4 });
/// assert!(crisis.is_active(3));
/// assert!(crisis.is_active(6));
/// assert!(!crisis.is_active(7));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EconomicEvent {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Classification
    pub kind: EventKind,
    /// Impact deltas
    #[serde(default)]
    pub impact: EventImpact,
    /// Informational weight in [0, 1]; never sampled
    #[serde(default = "default_probability")]
    pub probability: f64,
    /// First month in force (inclusive)
    pub month_start: u32,
    /// Last month in force (inclusive)
    pub month_end: u32,
}

fn default_probability() -> f64 {
    1.0
}

impl EconomicEvent {
    /// Create an event with zero impact and probability one.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: EventKind,
        month_start: u32,
        month_end: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            impact: EventImpact::default(),
            probability: default_probability(),
            month_start,
            month_end,
        }
    }

    /// Set the impact deltas.
    pub fn with_impact(mut self, impact: EventImpact) -> Self {
        self.impact = impact;
        self
    }

    /// Set the informational probability.
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Check whether `month` falls inside the inclusive window.
    #[inline]
    pub fn is_active(&self, month: u32) -> bool {
        self.month_start <= month && month <= self.month_end
    }
}
