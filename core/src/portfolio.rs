//! Portfolio aggregation: totals over several ROI calculations.

use crate::{
    calculator::{compute_roi, round_tenth, round_whole, RoiCalculation},
    catalog::select_investments,
    config::EnergyPrices,
    types::Euro,
};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CalculatorResult {
    pub investments:           Vec<RoiCalculation>,
    pub total_cost:            Euro,
    pub total_savings_10y:     Euro,
    /// Plain mean; a single 999 sentinel drags the average up on purpose.
    pub average_payback_years: f64,
}

pub fn aggregate(calculations: Vec<RoiCalculation>) -> CalculatorResult {
    if calculations.is_empty() {
        return CalculatorResult::default();
    }

    let total_cost: f64 = calculations.iter().map(|c| c.total_cost).sum();
    let total_savings: f64 = calculations.iter().map(|c| c.savings_10y).sum();
    let average_payback = calculations.iter().map(|c| c.payback_years).sum::<f64>()
        / calculations.len() as f64;

    CalculatorResult {
        total_cost:            round_whole(total_cost),
        total_savings_10y:     round_whole(total_savings),
        average_payback_years: round_tenth(average_payback),
        investments:           calculations,
    }
}

/// ROI for the selected catalog ids, each at its custom scale if one is
/// given. Unknown ids are skipped.
pub fn calculate_portfolio<S: AsRef<str>>(
    ids: &[S],
    custom_scales: &HashMap<String, f64>,
    prices: &EnergyPrices,
) -> CalculatorResult {
    let calculations: Vec<RoiCalculation> = select_investments(ids)
        .into_iter()
        .map(|inv| compute_roi(inv, custom_scales.get(inv.id).copied(), prices))
        .collect();

    let result = aggregate(calculations);
    log::info!(
        "portfolio: {} investments, total cost €{:.0}, 10y savings €{:.0}",
        result.investments.len(),
        result.total_cost,
        result.total_savings_10y
    );
    result
}
