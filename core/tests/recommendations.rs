//! Investment recommendation tests.

use energy_advice_core::{
    config::AdviceConfig,
    profile::{HeatingType, HouseholdProfile, InsulationType},
    recommend::{investment_candidates, ranked_candidates, recommend_investments},
};

fn ids(list: &[&energy_advice_core::catalog::Investment]) -> Vec<&'static str> {
    list.iter().map(|inv| inv.id).collect()
}

fn profile(heating: Option<HeatingType>, insulation: &[InsulationType]) -> HouseholdProfile {
    HouseholdProfile {
        heating,
        insulation: insulation.to_vec(),
        ..Default::default()
    }
}

fn fully_insulated() -> Vec<InsulationType> {
    vec![
        InsulationType::Roof,
        InsulationType::Wall,
        InsulationType::Floor,
        InsulationType::HrGlazing,
    ]
}

/// Candidates are gathered quick wins, missing insulation, heat pump, solar.
#[test]
fn candidates_follow_gathering_order() {
    let p = profile(Some(HeatingType::GasBoiler), &[]);
    let candidates = investment_candidates(&p);

    assert_eq!(
        ids(&candidates),
        vec![
            "radiator-foil",
            "radiator-fan",
            "roof-insulation",
            "wall-insulation",
            "floor-insulation",
            "hr-glazing",
            "heat-pump",
            "solar-panels",
        ]
    );
}

/// Quick wins lead; the rest follow by ten-year ROI, best first.
#[test]
fn uninsulated_home_gets_quick_wins_then_best_roi() {
    let config = AdviceConfig::national_average();
    let p = profile(Some(HeatingType::GasBoiler), &[]);

    let picked = recommend_investments(&p, &config);
    assert_eq!(
        ids(&picked),
        vec![
            "radiator-fan",
            "radiator-foil",
            "solar-panels",
            "roof-insulation",
            "floor-insulation",
        ]
    );

    // The heat pump is a candidate but its ROI (-66.7%) ranks it 7th of 8.
    let ranked = ranked_candidates(&p, &config);
    let position = ranked.iter().position(|c| c.investment.id == "heat-pump");
    assert_eq!(position, Some(6));
}

/// With insulation done, a gas-boiler home is steered to the heat pump.
#[test]
fn gas_boiler_with_insulation_done_includes_heat_pump() {
    let config = AdviceConfig::national_average();
    let p = profile(Some(HeatingType::GasBoiler), &fully_insulated());

    let picked = recommend_investments(&p, &config);
    assert_eq!(
        ids(&picked),
        vec!["radiator-fan", "radiator-foil", "solar-panels", "heat-pump"],
        "fewer than five candidates are returned as-is"
    );
}

#[test]
fn heat_pump_only_recommended_for_gas_boilers() {
    let config = AdviceConfig::national_average();
    for heating in [
        None,
        Some(HeatingType::HeatPump),
        Some(HeatingType::DistrictHeating),
        Some(HeatingType::Other("pelletkachel".into())),
    ] {
        let p = profile(heating.clone(), &fully_insulated());
        let picked = recommend_investments(&p, &config);
        assert!(
            !ids(&picked).contains(&"heat-pump"),
            "heating {heating:?} should not get a heat pump"
        );
        assert_eq!(ids(&picked), vec!["radiator-fan", "radiator-foil", "solar-panels"]);
    }
}

/// Either kind of glazing suppresses the HR++ glazing recommendation.
#[test]
fn double_glazing_counts_as_glazing() {
    for glazing in [InsulationType::DoubleGlazing, InsulationType::HrGlazing] {
        let p = profile(None, &[glazing]);
        let candidates = investment_candidates(&p);
        assert!(!ids(&candidates).contains(&"hr-glazing"));
        assert!(ids(&candidates).contains(&"roof-insulation"));
    }
}

#[test]
fn never_more_than_five_and_quick_wins_first() {
    let config = AdviceConfig::national_average();
    let profiles = [
        HouseholdProfile::default(),
        profile(Some(HeatingType::GasBoiler), &[]),
        profile(Some(HeatingType::GasBoiler), &[InsulationType::Roof]),
        profile(Some(HeatingType::HeatPump), &[InsulationType::Wall, InsulationType::Floor]),
    ];

    for p in &profiles {
        let picked = recommend_investments(p, &config);
        assert!(picked.len() <= 5, "got {} recommendations", picked.len());

        let first_regular = picked.iter().position(|inv| !inv.quick_win).unwrap_or(picked.len());
        assert!(
            picked[first_regular..].iter().all(|inv| !inv.quick_win),
            "quick win after a regular investment: {:?}",
            ids(&picked)
        );
        assert_eq!(first_regular, 2, "both radiator quick wins lead");
    }
}

#[test]
fn limit_comes_from_config() {
    let mut config = AdviceConfig::national_average();
    config.limits.max_investments = 2;

    let picked = recommend_investments(&HouseholdProfile::default(), &config);
    assert_eq!(ids(&picked), vec!["radiator-fan", "radiator-foil"]);
}

/// Repeated runs give identical rankings.
#[test]
fn ranking_is_deterministic() {
    let config = AdviceConfig::national_average();
    let p = profile(Some(HeatingType::GasBoiler), &[InsulationType::Roof]);

    let first = recommend_investments(&p, &config);
    for _ in 0..10 {
        assert_eq!(ids(&recommend_investments(&p, &config)), ids(&first));
    }
}

/// A hand-built config with a larger limit still yields at most five.
#[test]
fn oversized_limit_is_capped_at_five() {
    let mut config = AdviceConfig::national_average();
    config.limits.max_investments = 10;

    let p = profile(Some(HeatingType::GasBoiler), &[]);
    assert_eq!(investment_candidates(&p).len(), 8);
    assert_eq!(recommend_investments(&p, &config).len(), 5);
    assert_eq!(recommend_investments(&HouseholdProfile::default(), &config).len(), 5);
}
