//! Energy report: the document handed to the resident after an analysis.
//!
//! Layout fidelity is not a goal: the report renders as plain text and
//! serializes as JSON. Every report carries a fresh id and the time it
//! was generated.

use crate::{
    advice::{AnalyseRequest, Analysis},
    calculator::RoiCalculation,
    portfolio::{aggregate, CalculatorResult},
    profile::HouseholdProfile,
    relevance::RankedSubsidy,
    types::{Euro, ReportId},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use uuid::Uuid;

const DISCLAIMER: &str =
    "This advice is indicative and based on an automated analysis. It is not an official energy label.";

#[derive(Debug, Clone, Serialize)]
pub struct EnergyReport {
    pub report_id:    ReportId,
    pub generated_at: DateTime<Utc>,
    pub address:      String,
    pub profile:      HouseholdProfile,
    pub advice:       String,
    pub portfolio:    CalculatorResult,
    pub subsidies:    Vec<RankedSubsidy>,
}

impl EnergyReport {
    pub fn build(
        request: &AnalyseRequest,
        analysis: Analysis,
        subsidies: Vec<RankedSubsidy>,
    ) -> Self {
        Self::build_at(request, analysis, subsidies, Utc::now())
    }

    pub fn build_at(
        request: &AnalyseRequest,
        analysis: Analysis,
        subsidies: Vec<RankedSubsidy>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let report = Self {
            report_id: Uuid::new_v4().to_string(),
            generated_at,
            address: request.address.clone().unwrap_or_default(),
            profile: request.profile(),
            advice: analysis.advice,
            portfolio: aggregate(analysis.recommended),
            subsidies,
        };
        log::info!("report: built {} for '{}'", report.report_id, report.address);
        report
    }

    /// Suggested download name, e.g. `energy-report-20241003-142501.txt`.
    pub fn file_name(&self) -> String {
        format!("energy-report-{}.txt", self.generated_at.format("%Y%m%d-%H%M%S"))
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let p = &self.profile;

        let _ = writeln!(out, "ENERGY SCAN REPORT");
        let _ = writeln!(out, "Generated on: {}", self.generated_at.format("%-d %B %Y"));
        let _ = writeln!(out, "Report id:    {}", self.report_id);
        let _ = writeln!(out);

        let _ = writeln!(out, "== Home ==");
        let _ = writeln!(out, "  Address:       {}", self.address);
        if let Some(year) = p.build_year {
            let _ = writeln!(out, "  Build year:    {year}");
        }
        if let Some(kind) = &p.dwelling_type {
            let _ = writeln!(out, "  Dwelling type: {kind}");
        }
        let _ = writeln!(out, "  Energy label:  {}", p.energy_label);
        if let Some(heating) = &p.heating {
            let _ = writeln!(out, "  Heating:       {}", heating.describe());
        }
        let insulation = if p.insulation.is_empty() {
            "none".to_string()
        } else {
            p.insulation.iter().map(|i| i.describe()).collect::<Vec<_>>().join(", ")
        };
        let _ = writeln!(out, "  Insulation:    {insulation}");
        let _ = writeln!(out);

        let _ = writeln!(out, "== Personal advice ==");
        for line in self.advice.lines() {
            let _ = writeln!(out, "  {line}");
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "== Investments ==");
        if self.portfolio.investments.is_empty() {
            let _ = writeln!(out, "  (no investments recommended)");
        }
        for calc in &self.portfolio.investments {
            let _ = writeln!(out, "  {}", investment_row(calc));
        }
        let _ = writeln!(out, "  ---");
        let _ = writeln!(out, "  Total cost:           {}", format_euro(self.portfolio.total_cost));
        let _ = writeln!(out, "  Savings over 10 years: {}", format_euro(self.portfolio.total_savings_10y));
        let _ = writeln!(
            out,
            "  Average payback:      {}",
            format_payback(self.portfolio.average_payback_years)
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "== Subsidies ==");
        for ranked in &self.subsidies {
            let s = &ranked.subsidy;
            let _ = writeln!(out, "  {} ({})", s.name, s.amount);
            let _ = writeln!(out, "    {}", s.link);
        }
        let _ = writeln!(out);
        let _ = write!(out, "{DISCLAIMER}");
        out
    }
}

fn investment_row(calc: &RoiCalculation) -> String {
    format!(
        "{:<18} {:>10}  {:>8}/yr  payback {:<10} ROI {:.1}%",
        calc.investment.name,
        format_euro(calc.total_cost),
        format_euro(calc.annual_savings),
        format_payback(calc.payback_years),
        calc.roi_percent
    )
}

fn format_payback(years: f64) -> String {
    if years >= crate::calculator::PAYBACK_NEVER {
        "never".to_string()
    } else {
        format!("{years:.1} years")
    }
}

/// Dutch notation, whole euros: `€ 4.500`, `€ -1.250`.
pub fn format_euro(amount: Euro) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if whole < 0 { "-" } else { "" };
    format!("€ {sign}{grouped}")
}
