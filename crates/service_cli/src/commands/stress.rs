//! Stress command implementation
//!
//! Applies preset or ad-hoc shocks to the base plan. Ad-hoc shocks are
//! given as `kind:magnitude:duration[:shape]`, e.g. `market_crash:30:6:gradual`.

use clap::ValueEnum;
use econ_core::types::BaseSimulationInput;
use econ_risk::stress::{
    RecoveryPattern, RecoverySpec, Shock, ShockKind, ShockShape, StressPreset, StressTestEngine,
    StressTestResult,
};
use serde::Serialize;
use tracing::info;

use crate::config::OutputFormat;
use crate::output::{money, pct, print_csv, print_json, render_table};
use crate::{CliError, Result};

/// Recovery pattern selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecoveryArg {
    /// Linear rebound
    V,
    /// Flat bottom, then rebound
    U,
    /// Partial rebound
    L,
    /// Double dip
    W,
}

impl From<RecoveryArg> for RecoveryPattern {
    fn from(arg: RecoveryArg) -> Self {
        match arg {
            RecoveryArg::V => RecoveryPattern::V,
            RecoveryArg::U => RecoveryPattern::U,
            RecoveryArg::L => RecoveryPattern::L,
            RecoveryArg::W => RecoveryPattern::W,
        }
    }
}

#[derive(Serialize)]
struct PathRow {
    month: usize,
    balance: f64,
}

/// Run the stress command
pub fn run(
    base: &BaseSimulationInput,
    preset: Option<&str>,
    shock_specs: &[String],
    recovery: Option<RecoveryArg>,
    floor_pct: Option<f64>,
    format: OutputFormat,
) -> Result<()> {
    let (shocks, recovery) = build_inputs(preset, shock_specs, recovery, floor_pct)?;
    info!(shocks = shocks.len(), preset = preset.unwrap_or("none"), "starting stress test");

    let result = StressTestEngine::new().run(base, &shocks, &recovery)?;

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Csv => print_csv(
            result
                .recovery_path
                .iter()
                .enumerate()
                .map(|(month, &balance)| PathRow { month, balance }),
        )?,
        OutputFormat::Table => print!("{}", render_stress(&result)),
    }

    info!(dominant = %result.dominant_shock, max_loss = result.max_loss, "stress test complete");
    Ok(())
}

fn build_inputs(
    preset: Option<&str>,
    shock_specs: &[String],
    recovery: Option<RecoveryArg>,
    floor_pct: Option<f64>,
) -> Result<(Vec<Shock>, RecoverySpec)> {
    let (mut shocks, mut recovery_spec) = match preset {
        Some(id) => {
            let preset = StressPreset::parse(id).ok_or_else(|| {
                let known: Vec<&str> = StressPreset::all().iter().map(|p| p.id()).collect();
                CliError::invalid_argument(format!(
                    "Unknown stress preset: {}. Supported: {}",
                    id,
                    known.join(", ")
                ))
            })?;
            (preset.shocks(), preset.recovery())
        }
        None => (Vec::new(), RecoverySpec::default()),
    };

    for spec_text in shock_specs {
        shocks.push(parse_shock(spec_text)?);
    }
    if let Some(pattern) = recovery {
        recovery_spec.pattern = pattern.into();
    }
    if let Some(floor) = floor_pct {
        recovery_spec.floor_pct = floor;
    }
    Ok((shocks, recovery_spec))
}

/// Parse `kind:magnitude:duration[:shape]`.
pub fn parse_shock(text: &str) -> Result<Shock> {
    let parts: Vec<&str> = text.split(':').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) {
        return Err(CliError::invalid_argument(format!(
            "Shock '{}' must look like kind:magnitude:duration[:shape]",
            text
        )));
    }
    let kind = parse_kind(parts[0])?;
    let magnitude: f64 = parts[1].parse().map_err(|_| {
        CliError::invalid_argument(format!("Invalid shock magnitude: {}", parts[1]))
    })?;
    let duration: u32 = parts[2].parse().map_err(|_| {
        CliError::invalid_argument(format!("Invalid shock duration: {}", parts[2]))
    })?;
    let shape = match parts.get(3) {
        Some(shape) => parse_shape(shape)?,
        None => ShockShape::default(),
    };
    Ok(Shock::new(kind, magnitude, duration).with_shape(shape))
}

fn parse_kind(text: &str) -> Result<ShockKind> {
    let kind = match text.to_lowercase().replace('-', "_").as_str() {
        "market_crash" => ShockKind::MarketCrash,
        "inflation_spike" => ShockKind::InflationSpike,
        "rate_shock" => ShockKind::RateShock,
        "currency_crisis" => ShockKind::CurrencyCrisis,
        "pandemic" => ShockKind::Pandemic,
        "custom" => ShockKind::Custom,
        other => {
            return Err(CliError::invalid_argument(format!(
                "Unknown shock kind: {}. Supported: market_crash, inflation_spike, rate_shock, currency_crisis, pandemic, custom",
                other
            )))
        }
    };
    Ok(kind)
}

fn parse_shape(text: &str) -> Result<ShockShape> {
    match text.to_lowercase().as_str() {
        "sudden" => Ok(ShockShape::Sudden),
        "gradual" => Ok(ShockShape::Gradual),
        "prolonged" => Ok(ShockShape::Prolonged),
        other => Err(CliError::invalid_argument(format!(
            "Unknown shock shape: {}. Supported: sudden, gradual, prolonged",
            other
        ))),
    }
}

fn render_stress(result: &StressTestResult) -> String {
    let rows: Vec<Vec<String>> = result
        .shock_impacts
        .iter()
        .map(|i| {
            vec![
                i.shock.kind.to_string(),
                pct(i.shock.magnitude_pct),
                i.shock.duration_months.to_string(),
                money(i.loss),
                i.recovery_months.to_string(),
                format!("{:.1}%", i.survival_factor * 100.0),
                if i.critical { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    let mut out = render_table(
        &["Shock", "Magnitude", "Months", "Loss", "Recovery", "Survival", "Critical"],
        &rows,
    );
    out.push_str(&format!(
        "dominant: {}  max loss: {} ({})  recovery: {} months\n",
        result.dominant_shock,
        money(result.max_loss),
        pct(result.impact_on_wealth_pct),
        result.recovery_months
    ));
    out.push_str(&format!(
        "survival probability: {:.1}%\n",
        result.survival_probability * 100.0
    ));
    if let Some(trough) = result.recovery_path.iter().copied().reduce(f64::min) {
        out.push_str(&format!("trough balance: {}\n", money(trough)));
    }
    for recommendation in &result.recommendations {
        out.push_str(&format!("- {}\n", recommendation));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_shock() {
        let shock = parse_shock("market_crash:30:6:gradual").unwrap();
        assert_eq!(shock.kind, ShockKind::MarketCrash);
        assert_relative_eq!(shock.magnitude_pct, 30.0);
        assert_eq!(shock.duration_months, 6);
        assert_eq!(shock.shape, ShockShape::Gradual);

        let shock = parse_shock("Rate-Shock:12.5:3").unwrap();
        assert_eq!(shock.kind, ShockKind::RateShock);
        assert_eq!(shock.shape, ShockShape::Sudden);
    }

    #[test]
    fn test_parse_shock_errors() {
        assert!(parse_shock("market_crash:30").is_err());
        assert!(parse_shock("meteor:30:2").is_err());
        assert!(parse_shock("pandemic:x:2").is_err());
        assert!(parse_shock("pandemic:10:2:spiral").is_err());
    }

    #[test]
    fn test_build_inputs_preset_with_overrides() {
        let (shocks, spec) = build_inputs(
            Some("pandemic"),
            &["custom:5:1".to_string()],
            Some(RecoveryArg::L),
            Some(25.0),
        )
        .unwrap();
        assert_eq!(shocks.len(), 3);
        assert_eq!(spec.pattern, RecoveryPattern::L);
        assert_eq!(spec.floor_pct, 25.0);
        assert!(build_inputs(Some("meteor"), &[], None, None).is_err());
    }

    #[test]
    fn test_oversized_duration_rejected() {
        let base = BaseSimulationInput::new(10_000.0, 0.0, 12);
        let shocks = ["custom:10:4000000000".to_string()];
        let err = run(&base, None, &shocks, None, None, OutputFormat::Json).unwrap_err();
        assert!(matches!(err, CliError::Engine(_)));
    }

    #[test]
    fn test_render_stress() {
        let base = BaseSimulationInput::new(10_000.0, 0.0, 12);
        let preset = StressPreset::GlobalFinancialCrisis;
        let result = StressTestEngine::new()
            .run(&base, &preset.shocks(), &preset.recovery())
            .unwrap();
        let text = render_stress(&result);
        assert!(text.contains("dominant: Market crash"));
        assert!(text.contains("trough balance: 7750.00"));
    }
}
