//! Rendering of command results as JSON, CSV or tables.

use econ_core::types::{RiskLevel, ScenarioResult};
use serde::Serialize;
use std::io::{self, Write};

use crate::Result;

/// One-line summary of a scenario result, used for CSV rows and tables.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResultSummary {
    /// Scenario identifier
    pub scenario_id: String,
    /// Final nominal balance
    pub final_balance: f64,
    /// Total contributions
    pub total_invested: f64,
    /// Cumulative return (%)
    pub total_return_pct: f64,
    /// Annualised return (%)
    pub annualized_return_pct: f64,
    /// Inflation-adjusted cumulative return (%)
    pub real_return_pct: f64,
    /// Risk bucket
    pub risk_level: RiskLevel,
    /// Risk score
    pub risk_score: f64,
    /// Annualised volatility (%)
    pub volatility_pct: f64,
    /// Maximum drawdown (%)
    pub max_drawdown_pct: f64,
    /// Historical VaR 95 (%)
    pub var_95: f64,
    /// Sharpe ratio
    pub sharpe_ratio: f64,
}

impl From<&ScenarioResult> for ResultSummary {
    fn from(result: &ScenarioResult) -> Self {
        Self {
            scenario_id: result.scenario_id.clone(),
            final_balance: result.final_balance,
            total_invested: result.total_invested,
            total_return_pct: result.total_return_pct,
            annualized_return_pct: result.annualized_return_pct,
            real_return_pct: result.real_return_pct(),
            risk_level: result.risk_assessment.level,
            risk_score: result.risk_assessment.score,
            volatility_pct: result.risk_metrics.volatility_pct,
            max_drawdown_pct: result.risk_metrics.max_drawdown_pct,
            var_95: result.risk_metrics.var_95,
            sharpe_ratio: result.risk_metrics.sharpe_ratio,
        }
    }
}

/// Write a value as pretty JSON to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}

/// Write serialisable rows as CSV (with header) to stdout.
pub fn print_csv<T, I>(rows: I) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    write_csv(io::stdout().lock(), rows)
}

/// Write serialisable rows as CSV (with header) to any writer.
pub fn write_csv<W, T, I>(writer: W, rows: I) -> Result<()>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Render a boxed table.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    if rows.is_empty() && !widths.is_empty() {
        widths[0] = widths[0].max("(no data)".len());
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                format!(" {:<width$} ", cell, width = w)
            })
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = rule("┌", "┬", "┐");
    out.push_str(&line(&header_cells));
    out.push_str(&rule("├", "┼", "┤"));
    if rows.is_empty() {
        out.push_str(&line(&["(no data)".to_string()]));
    }
    for row in rows {
        out.push_str(&line(row));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}

/// Format a currency amount.
pub fn money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a percentage.
pub fn pct(value: f64) -> String {
    format!("{:.2}%", value)
}
