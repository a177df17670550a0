//! Preset stress scenarios.
//!
//! Historical-style shock bundles for typical stress analysis:
//! - Global financial crisis: prolonged market crash followed by a U recovery
//! - Stagflation: persistent inflation with a slow L recovery
//! - Rate spike, currency crisis, pandemic

use super::shock::{RecoveryPattern, RecoverySpec, Shock, ShockKind, ShockShape};

/// Types of preset stress scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StressPreset {
    /// 2008-style credit and equity collapse
    GlobalFinancialCrisis,
    /// High inflation with weak growth
    Stagflation,
    /// Sudden monetary tightening
    RateSpike,
    /// Home currency devaluation
    CurrencyCrisis,
    /// Economic shutdown
    Pandemic,
}

impl StressPreset {
    /// Get all presets.
    pub fn all() -> [Self; 5] {
        [
            Self::GlobalFinancialCrisis,
            Self::Stagflation,
            Self::RateSpike,
            Self::CurrencyCrisis,
            Self::Pandemic,
        ]
    }

    /// Stable identifier used on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Self::GlobalFinancialCrisis => "gfc",
            Self::Stagflation => "stagflation",
            Self::RateSpike => "rate_spike",
            Self::CurrencyCrisis => "currency_crisis",
            Self::Pandemic => "pandemic",
        }
    }

    /// Look up a preset by identifier.
    pub fn parse(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.id() == id)
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GlobalFinancialCrisis => "Global Financial Crisis",
            Self::Stagflation => "Stagflation",
            Self::RateSpike => "Rate Spike",
            Self::CurrencyCrisis => "Currency Crisis",
            Self::Pandemic => "Pandemic",
        }
    }

    /// Get description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::GlobalFinancialCrisis => "Equities -45% over 18 months, rates +20%, U-shaped recovery",
            Self::Stagflation => "Inflation +35% for two years, equities -20%, L-shaped recovery",
            Self::RateSpike => "Policy rates +30% in one step, V-shaped recovery",
            Self::CurrencyCrisis => "Currency -40% with a second dip, W-shaped recovery",
            Self::Pandemic => "Shutdown shock -35% and market crash -30%, V-shaped recovery",
        }
    }

    /// Shocks of the preset.
    pub fn shocks(&self) -> Vec<Shock> {
        match self {
            Self::GlobalFinancialCrisis => vec![
                Shock::new(ShockKind::MarketCrash, 45.0, 18).with_shape(ShockShape::Prolonged),
                Shock::new(ShockKind::RateShock, 20.0, 6).with_shape(ShockShape::Gradual),
            ],
            Self::Stagflation => vec![
                Shock::new(ShockKind::InflationSpike, 35.0, 24).with_shape(ShockShape::Gradual),
                Shock::new(ShockKind::MarketCrash, 20.0, 12).with_shape(ShockShape::Prolonged),
            ],
            Self::RateSpike => vec![Shock::new(ShockKind::RateShock, 30.0, 6)],
            Self::CurrencyCrisis => vec![
                Shock::new(ShockKind::CurrencyCrisis, 40.0, 9),
                Shock::new(ShockKind::InflationSpike, 15.0, 12).with_shape(ShockShape::Gradual),
            ],
            Self::Pandemic => vec![
                Shock::new(ShockKind::Pandemic, 35.0, 3),
                Shock::new(ShockKind::MarketCrash, 30.0, 2),
            ],
        }
    }

    /// Recovery assumptions of the preset.
    pub fn recovery(&self) -> RecoverySpec {
        match self {
            Self::GlobalFinancialCrisis => RecoverySpec::new(RecoveryPattern::U),
            Self::Stagflation => RecoverySpec::new(RecoveryPattern::L).with_floor_pct(40.0),
            Self::RateSpike | Self::Pandemic => RecoverySpec::new(RecoveryPattern::V),
            Self::CurrencyCrisis => RecoverySpec::new(RecoveryPattern::W),
        }
    }
}
