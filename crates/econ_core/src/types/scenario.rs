//! Scenario definitions.
//!
//! A [`Scenario`] bundles the macroeconomic paths (inflation, interest rate,
//! growth indicators), the volatility regime and the discrete events that a
//! simulation runs against. Scenarios are owned by the catalog; a simulation
//! result keeps a cloned snapshot of the scenario it was computed from.

use super::event::EconomicEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scenario classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    /// Favourable macro environment
    Optimistic,
    /// Central expectation
    Realistic,
    /// Adverse macro environment
    Pessimistic,
    /// User-defined
    Custom,
}

impl ScenarioKind {
    /// Get all scenario kinds.
    pub fn all() -> [Self; 4] {
        [
            Self::Optimistic,
            Self::Realistic,
            Self::Pessimistic,
            Self::Custom,
        ]
    }

    /// Get the lowercase tag used in catalogs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optimistic => "optimistic",
            Self::Realistic => "realistic",
            Self::Pessimistic => "pessimistic",
            Self::Custom => "custom",
        }
    }

    /// Parse a lowercase tag.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a trajectory moves from its initial to its final value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariationModel {
    /// Straight line between the endpoints
    #[default]
    Linear,
    /// Constant growth rate between the endpoints
    Exponential,
    /// Linear base plus symmetric random noise
    Volatile,
    /// Fixed at the initial value
    Constant,
}

/// Parametrised path of a macro variable across the simulation horizon.
///
/// Values are expressed in percent (e.g. `4.5` for 4.5 % inflation).
///
/// # Examples
/// ```
/// use econ_core::types::{Trajectory, VariationModel};
///
/// let inflation = Trajectory::linear(4.0, 4.5);
/// assert_eq!(inflation.variation, VariationModel::Linear);
/// assert_eq!(inflation.span(), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Value at month zero
    pub initial: f64,
    /// Target value at the end of the horizon
    pub final_value: f64,
    /// Variation model
    #[serde(default)]
    pub variation: VariationModel,
}

impl Trajectory {
    /// Create a trajectory.
    pub fn new(initial: f64, final_value: f64, variation: VariationModel) -> Self {
        Self {
            initial,
            final_value,
            variation,
        }
    }

    /// Create a linear trajectory.
    pub fn linear(initial: f64, final_value: f64) -> Self {
        Self::new(initial, final_value, VariationModel::Linear)
    }

    /// Create an exponential trajectory.
    pub fn exponential(initial: f64, final_value: f64) -> Self {
        Self::new(initial, final_value, VariationModel::Exponential)
    }

    /// Create a volatile trajectory.
    pub fn volatile(initial: f64, final_value: f64) -> Self {
        Self::new(initial, final_value, VariationModel::Volatile)
    }

    /// Create a constant trajectory.
    pub fn constant(value: f64) -> Self {
        Self::new(value, value, VariationModel::Constant)
    }

    /// Signed distance between the endpoints.
    #[inline]
    pub fn span(&self) -> f64 {
        self.final_value - self.initial
    }
}

/// Growth indicators. Informational only; the simulator does not read them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrowthIndicators {
    /// GDP growth (% per year)
    pub gdp: Trajectory,
    /// Unemployment rate (%)
    pub unemployment: Trajectory,
    /// Exchange rate against the reference currency
    pub exchange_rate: Trajectory,
}

impl Default for GrowthIndicators {
    fn default() -> Self {
        Self {
            gdp: Trajectory::constant(2.0),
            unemployment: Trajectory::constant(8.0),
            exchange_rate: Trajectory::constant(5.0),
        }
    }
}

/// Volatility regime, in annualised percent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VolatilityIndicators {
    /// Market (equity) volatility
    pub market: f64,
    /// FX volatility
    pub fx: f64,
    /// Commodities volatility
    pub commodities: f64,
}

impl Default for VolatilityIndicators {
    fn default() -> Self {
        Self {
            market: 15.0,
            fx: 12.0,
            commodities: 20.0,
        }
    }
}

impl VolatilityIndicators {
    /// Create volatility indicators.
    pub fn new(market: f64, fx: f64, commodities: f64) -> Self {
        Self {
            market,
            fx,
            commodities,
        }
    }
}

/// Full parameter set of a scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Inflation path (% per year)
    pub inflation: Trajectory,
    /// Interest-rate path (% per year)
    pub interest_rate: Trajectory,
    /// Growth indicators
    #[serde(default)]
    pub growth: GrowthIndicators,
    /// Volatility regime
    #[serde(default)]
    pub volatility: VolatilityIndicators,
    /// Ordered discrete events
    #[serde(default)]
    pub events: Vec<EconomicEvent>,
}

impl ScenarioParameters {
    /// Create parameters with default growth and volatility and no events.
    pub fn new(inflation: Trajectory, interest_rate: Trajectory) -> Self {
        Self {
            inflation,
            interest_rate,
            growth: GrowthIndicators::default(),
            volatility: VolatilityIndicators::default(),
            events: Vec::new(),
        }
    }

    /// Set the volatility regime.
    pub fn with_volatility(mut self, volatility: VolatilityIndicators) -> Self {
        self.volatility = volatility;
        self
    }

    /// Set the growth indicators.
    pub fn with_growth(mut self, growth: GrowthIndicators) -> Self {
        self.growth = growth;
        self
    }

    /// Append an event.
    pub fn with_event(mut self, event: EconomicEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Check whether any discrete event is defined.
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// A named macroeconomic scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Classification
    pub kind: ScenarioKind,
    /// Parameters
    pub parameters: ScenarioParameters,
    /// Whether the scenario belongs to the active set
    #[serde(default = "default_active")]
    pub active: bool,
    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl Scenario {
    /// Create an active scenario stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ScenarioKind,
        parameters: ScenarioParameters,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            kind,
            parameters,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Refresh the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
