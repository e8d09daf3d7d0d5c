//! ROI calculator: cost, savings, payback and a ten-year projection for
//! one investment at one scale.
//!
//! Rounding is part of the contract with the UI and the report:
//!   - total cost, annual savings, ten-year savings: whole euros
//!   - payback years, ROI percentage: one decimal
//!   - projection points: unrounded
//!
//! Halves round towards +∞ (-0.5 → 0, 0.5 → 1), matching the web client.

use crate::{
    catalog::{Investment, InvestmentCategory},
    config::EnergyPrices,
    types::{Euro, Year},
};
use serde::Serialize;

/// Payback reported when an investment never earns itself back.
pub const PAYBACK_NEVER: f64 = 999.0;

/// Length of the projection and of the ROI window.
pub const HORIZON_YEARS: Year = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub year:               Year,
    /// Savings to date minus the up-front cost.
    pub cumulative_savings: Euro,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiCalculation {
    pub investment:     Investment,
    pub scale:          f64,
    pub total_cost:     Euro,
    pub annual_savings: Euro,
    /// Years; PAYBACK_NEVER when savings are zero or negative.
    pub payback_years:  f64,
    pub savings_10y:    Euro,
    pub roi_percent:    f64,
    pub projection:     Vec<ProjectionPoint>,
}

impl RoiCalculation {
    pub fn pays_back(&self) -> bool {
        self.payback_years < PAYBACK_NEVER
    }

    /// First projection year in which cumulative savings cover the cost.
    pub fn break_even_year(&self) -> Option<Year> {
        self.projection
            .iter()
            .find(|p| p.cumulative_savings >= 0.0)
            .map(|p| p.year)
    }
}

/// Price per kWh that values this investment's savings.
pub fn energy_price_for(investment: &Investment, prices: &EnergyPrices) -> f64 {
    match investment.category {
        InvestmentCategory::Solar => prices.electricity_per_kwh,
        _ => prices.gas_per_kwh,
    }
}

/// Caller scale if usable, else the catalog default, else 1.
pub fn effective_scale(investment: &Investment, scale: Option<f64>) -> f64 {
    scale
        .filter(|s| s.is_finite() && *s > 0.0)
        .or(investment.default_scale)
        .unwrap_or(1.0)
}

pub fn compute_roi(
    investment: &Investment,
    scale: Option<f64>,
    prices: &EnergyPrices,
) -> RoiCalculation {
    let scale = effective_scale(investment, scale);
    let price = energy_price_for(investment, prices);

    let total_cost = investment.cost_per_unit * scale;
    let annual_savings = investment.savings_per_unit * scale * price;

    let payback_years = if annual_savings > 0.0 {
        total_cost / annual_savings
    } else {
        PAYBACK_NEVER
    };

    let savings_10y = annual_savings * f64::from(HORIZON_YEARS);

    let roi_percent = if total_cost > 0.0 {
        (savings_10y - total_cost) / total_cost * 100.0
    } else {
        0.0
    };

    let projection = (1..=HORIZON_YEARS)
        .map(|year| ProjectionPoint {
            year,
            cumulative_savings: annual_savings * f64::from(year) - total_cost,
        })
        .collect();

    log::debug!(
        "calculator: {} x{scale} cost={total_cost:.2} savings/yr={annual_savings:.2} payback={payback_years:.2}",
        investment.id
    );

    RoiCalculation {
        investment: *investment,
        scale,
        total_cost: round_whole(total_cost),
        annual_savings: round_whole(annual_savings),
        payback_years: round_tenth(payback_years),
        savings_10y: round_whole(savings_10y),
        roi_percent: round_tenth(roi_percent),
        projection,
    }
}

pub(crate) fn round_whole(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
