//! Preset scenarios and events.
//!
//! Provides ready-to-use macro scenarios for typical analysis:
//! - Optimistic: falling inflation and rates, calm markets, a boom
//! - Realistic: mild drift upwards, no events
//! - Pessimistic: accelerating inflation, volatile rates, crisis then recession

use econ_core::types::{
    EconomicEvent, EventImpact, EventKind, GrowthIndicators, Scenario, ScenarioKind,
    ScenarioParameters, Trajectory, VolatilityIndicators,
};

/// Types of preset scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetScenarioType {
    /// Favourable environment
    Optimistic,
    /// Central expectation
    Realistic,
    /// Adverse environment
    Pessimistic,
}

impl PresetScenarioType {
    /// Get all preset scenarios.
    pub fn all() -> [Self; 3] {
        [Self::Optimistic, Self::Realistic, Self::Pessimistic]
    }

    /// Stable identifier used in catalogs.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Optimistic => "optimistic",
            Self::Realistic => "realistic",
            Self::Pessimistic => "pessimistic",
        }
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Optimistic => "Optimistic",
            Self::Realistic => "Realistic",
            Self::Pessimistic => "Pessimistic",
        }
    }

    /// Get description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Optimistic => "Inflation easing to 3%, rates cut to 9.5%, commodity boom",
            Self::Realistic => "Inflation 4% to 4.5%, rates 11% to 11.5%, no shocks",
            Self::Pessimistic => "Inflation accelerating to 8%, volatile rates up to 15%, crisis then recession",
        }
    }

    /// Matching scenario kind.
    pub fn kind(&self) -> ScenarioKind {
        match self {
            Self::Optimistic => ScenarioKind::Optimistic,
            Self::Realistic => ScenarioKind::Realistic,
            Self::Pessimistic => ScenarioKind::Pessimistic,
        }
    }

    /// Build the scenario.
    pub fn generate(&self) -> Scenario {
        Scenario::new(self.id(), self.name(), self.kind(), self.parameters())
            .with_description(self.description())
    }

    fn parameters(&self) -> ScenarioParameters {
        match self {
            Self::Optimistic => ScenarioParameters::new(
                Trajectory::linear(3.5, 3.0),
                Trajectory::linear(10.5, 9.5),
            )
            .with_volatility(VolatilityIndicators::new(10.0, 8.0, 12.0))
            .with_growth(GrowthIndicators {
                gdp: Trajectory::linear(2.5, 3.5),
                unemployment: Trajectory::linear(8.0, 6.5),
                exchange_rate: Trajectory::linear(5.0, 4.6),
            })
            .with_event(PresetEvent::CommodityBoom.generate(6, 18)),
            Self::Realistic => ScenarioParameters::new(
                Trajectory::linear(4.0, 4.5),
                Trajectory::linear(11.0, 11.5),
            )
            .with_volatility(VolatilityIndicators::new(15.0, 12.0, 18.0)),
            Self::Pessimistic => ScenarioParameters::new(
                Trajectory::exponential(6.0, 8.0),
                Trajectory::volatile(13.0, 15.0),
            )
            .with_volatility(VolatilityIndicators::new(30.0, 25.0, 35.0))
            .with_growth(GrowthIndicators {
                gdp: Trajectory::volatile(1.0, -1.5),
                unemployment: Trajectory::linear(9.0, 12.0),
                exchange_rate: Trajectory::volatile(5.0, 6.5),
            })
            .with_event(PresetEvent::FinancialCrisis.generate(3, 12))
            .with_event(PresetEvent::Recession.generate(13, 24)),
        }
    }
}

/// Types of preset economic events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetEvent {
    /// Banking / credit crisis
    FinancialCrisis,
    /// Commodity price boom
    CommodityBoom,
    /// Economic contraction
    Recession,
    /// Post-crisis recovery
    Recovery,
}

impl PresetEvent {
    /// Get all preset events.
    pub fn all() -> [Self; 4] {
        [
            Self::FinancialCrisis,
            Self::CommodityBoom,
            Self::Recession,
            Self::Recovery,
        ]
    }

    /// Stable identifier prefix.
    pub fn id(&self) -> &'static str {
        match self {
            Self::FinancialCrisis => "financial_crisis",
            Self::CommodityBoom => "commodity_boom",
            Self::Recession => "recession",
            Self::Recovery => "recovery",
        }
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FinancialCrisis => "Financial Crisis",
            Self::CommodityBoom => "Commodity Boom",
            Self::Recession => "Recession",
            Self::Recovery => "Recovery",
        }
    }

    /// Event classification.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::FinancialCrisis => EventKind::Crisis,
            Self::CommodityBoom => EventKind::Boom,
            Self::Recession => EventKind::Recession,
            Self::Recovery => EventKind::Recovery,
        }
    }

    fn impact(&self, duration_months: u32) -> (EventImpact, f64) {
        let (inflation, interest_rate, market, probability) = match self {
            Self::FinancialCrisis => (2.5, 3.0, 20.0, 0.15),
            Self::CommodityBoom => (1.0, 0.5, -3.0, 0.25),
            Self::Recession => (-1.0, -1.5, 8.0, 0.2),
            Self::Recovery => (0.5, 0.5, -5.0, 0.4),
        };
        (
            EventImpact {
                inflation,
                interest_rate,
                market,
                duration_months,
            },
            probability,
        )
    }

    /// Build the event over the inclusive window `[month_start, month_end]`.
    pub fn generate(&self, month_start: u32, month_end: u32) -> EconomicEvent {
        let duration = month_end.saturating_sub(month_start) + 1;
        let (impact, probability) = self.impact(duration);
        EconomicEvent::new(
            format!("{}_{}_{}", self.id(), month_start, month_end),
            self.name(),
            self.kind(),
            month_start,
            month_end,
        )
        .with_impact(impact)
        .with_probability(probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use econ_core::types::VariationModel;

    #[test]
    fn test_realistic_matches_reference_paths() {
        let scenario = PresetScenarioType::Realistic.generate();
        assert_eq!(scenario.id, "realistic");
        assert_eq!(scenario.kind, ScenarioKind::Realistic);
        assert_eq!(scenario.parameters.inflation, Trajectory::linear(4.0, 4.5));
        assert_eq!(scenario.parameters.interest_rate, Trajectory::linear(11.0, 11.5));
        assert!(scenario.parameters.events.is_empty());
    }

    #[test]
    fn test_pessimistic_has_events() {
        let scenario = PresetScenarioType::Pessimistic.generate();
        assert_eq!(scenario.parameters.events.len(), 2);
        assert_eq!(scenario.parameters.inflation.variation, VariationModel::Exponential);
        assert_eq!(scenario.parameters.events[0].kind, EventKind::Crisis);
        assert_eq!(scenario.parameters.events[1].month_start, 13);
    }

    #[test]
    fn test_preset_ids_unique() {
        let ids: std::collections::HashSet<_> =
            PresetScenarioType::all().iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_preset_event_window() {
        let event = PresetEvent::Recovery.generate(10, 15);
        assert_eq!(event.id, "recovery_10_15");
        assert_eq!(event.impact.duration_months, 6);
        assert!(event.is_active(15));
        assert_eq!(PresetEvent::all().len(), 4);
    }
}
