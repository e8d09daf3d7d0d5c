//! ROI calculator tests.

use energy_advice_core::{
    calculator::{compute_roi, effective_scale, PAYBACK_NEVER},
    catalog::{find_investment, investments, Investment, InvestmentCategory, Unit},
    config::EnergyPrices,
};

fn prices() -> EnergyPrices {
    EnergyPrices::NATIONAL_AVERAGE
}

fn custom(cost_per_unit: f64, savings_per_unit: f64) -> Investment {
    Investment {
        id:               "test-measure",
        name:             "Test measure",
        category:         InvestmentCategory::WallInsulation,
        cost_per_unit,
        savings_per_unit,
        unit:             Unit::Area,
        default_scale:    Some(10.0),
        quick_win:        false,
    }
}

/// Wall insulation at its default 100 m² with gas at €0.25/kWh.
#[test]
fn wall_insulation_reference_figures() {
    let wall = find_investment("wall-insulation").unwrap();
    let calc = compute_roi(wall, None, &prices());

    assert_eq!(calc.scale, 100.0);
    assert_eq!(calc.total_cost, 4500.0);
    assert_eq!(calc.annual_savings, 200.0);
    assert_eq!(calc.payback_years, 22.5);
    assert_eq!(calc.savings_10y, 2000.0);
    assert_eq!(calc.roi_percent, -55.6);
}

/// Solar savings are valued at the electricity price, everything else at gas.
#[test]
fn solar_uses_electricity_price() {
    let solar = find_investment("solar-panels").unwrap();
    let calc = compute_roi(solar, None, &prices());

    assert_eq!(calc.total_cost, 2550.0);
    assert_eq!(calc.annual_savings, 765.0, "0.85 kWh/Wp × 3000 Wp × €0.30");
    assert_eq!(calc.payback_years, 3.3);
    assert_eq!(calc.roi_percent, 200.0);

    let gas_only = EnergyPrices { gas_per_kwh: 0.25, electricity_per_kwh: 0.0 };
    let calc = compute_roi(solar, None, &gas_only);
    assert_eq!(calc.payback_years, PAYBACK_NEVER, "no electricity price, no savings");
}

/// Halves round towards +∞, so -81.25% becomes -81.2%, not -81.3%.
#[test]
fn negative_halves_round_up() {
    let glazing = find_investment("hr-glazing").unwrap();
    let calc = compute_roi(glazing, None, &prices());

    assert_eq!(calc.total_cost, 4000.0);
    assert_eq!(calc.annual_savings, 75.0);
    assert_eq!(calc.roi_percent, -81.2);
}

/// 62.5 €/yr rounds to 63 in the reported figure; ROI uses the exact value.
#[test]
fn money_rounds_to_whole_euros_but_roi_uses_exact_values() {
    let fan = find_investment("radiator-fan").unwrap();
    let calc = compute_roi(fan, None, &prices());

    assert_eq!(calc.annual_savings, 63.0);
    assert_eq!(calc.savings_10y, 625.0);
    assert_eq!(calc.payback_years, 3.2);
    assert_eq!(calc.roi_percent, 212.5);
}

#[test]
fn custom_scale_overrides_default() {
    let wall = find_investment("wall-insulation").unwrap();
    let calc = compute_roi(wall, Some(50.0), &prices());

    assert_eq!(calc.scale, 50.0);
    assert_eq!(calc.total_cost, 2250.0);
    assert_eq!(calc.annual_savings, 100.0);
}

/// Zero, negative and NaN scales behave as if no scale was supplied.
#[test]
fn unusable_scale_falls_back_to_default() {
    let wall = find_investment("wall-insulation").unwrap();
    for bad in [0.0, -20.0, f64::NAN, f64::INFINITY] {
        assert_eq!(effective_scale(wall, Some(bad)), 100.0, "scale {bad} should fall back");
    }

    let mut no_default = custom(10.0, 5.0);
    no_default.default_scale = None;
    assert_eq!(effective_scale(&no_default, None), 1.0);
}

#[test]
fn zero_savings_never_pays_back() {
    let calc = compute_roi(&custom(30.0, 0.0), None, &prices());

    assert_eq!(calc.payback_years, PAYBACK_NEVER);
    assert!(!calc.pays_back());
    assert_eq!(calc.roi_percent, -100.0);
    assert_eq!(calc.break_even_year(), None);
}

#[test]
fn negative_savings_never_pays_back() {
    let calc = compute_roi(&custom(30.0, -4.0), None, &prices());
    assert_eq!(calc.payback_years, PAYBACK_NEVER);
}

#[test]
fn zero_cost_gives_zero_roi() {
    let calc = compute_roi(&custom(0.0, 5.0), None, &prices());

    assert_eq!(calc.total_cost, 0.0);
    assert_eq!(calc.roi_percent, 0.0);
    assert_eq!(calc.payback_years, 0.0);
}

/// payback × annual savings ≈ total cost for every catalog entry.
#[test]
fn payback_times_savings_matches_cost() {
    for inv in investments() {
        let calc = compute_roi(inv, None, &prices());
        assert!(calc.pays_back(), "{} should pay back at national prices", inv.id);

        let implied = calc.payback_years * calc.annual_savings;
        let tolerance = 0.05 * calc.annual_savings + 1.0;
        assert!(
            (implied - calc.total_cost).abs() <= tolerance,
            "{}: payback {} × savings {} = {implied}, cost {}",
            inv.id,
            calc.payback_years,
            calc.annual_savings,
            calc.total_cost
        );
    }
}

#[test]
fn projection_has_ten_increasing_years() {
    for inv in investments() {
        let calc = compute_roi(inv, None, &prices());
        let years: Vec<u32> = calc.projection.iter().map(|p| p.year).collect();
        assert_eq!(years, (1..=10).collect::<Vec<_>>(), "{}", inv.id);
    }
}

/// Projection points are unrounded: year N = annual × N − cost.
#[test]
fn projection_follows_annual_savings() {
    let fan = find_investment("radiator-fan").unwrap();
    let calc = compute_roi(fan, None, &prices());

    assert_eq!(calc.projection[0].cumulative_savings, 62.5 - 200.0);
    let spread = calc.projection[9].cumulative_savings - calc.projection[0].cumulative_savings;
    assert!((spread - 62.5 * 9.0).abs() < 1e-9, "spread was {spread}");
    assert_eq!(calc.break_even_year(), Some(4));
}
