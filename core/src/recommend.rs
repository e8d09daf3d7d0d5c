//! Investment recommendations for a household profile.
//!
//! Candidate gathering order is significant: it is the tie-break when two
//! candidates share an ROI.
//!   1. quick wins (catalog order)
//!   2. missing insulation: roof, wall, floor, glazing
//!   3. heat pump, when heated by a gas boiler
//!   4. solar, always
//!
//! Ranking: quick wins first, then ten-year ROI descending.

use crate::{
    calculator::{compute_roi, RoiCalculation},
    catalog::{investment_for, investments, Investment, InvestmentCategory},
    config::{AdviceConfig, MAX_RECOMMENDATIONS},
    profile::{HeatingType, HouseholdProfile, InsulationType},
};
use std::cmp::Ordering;

/// Unranked candidates in gathering order, without duplicates.
pub fn investment_candidates(profile: &HouseholdProfile) -> Vec<&'static Investment> {
    let mut candidates: Vec<&'static Investment> = investments()
        .iter()
        .filter(|inv| inv.quick_win)
        .collect();

    let missing = [
        (InvestmentCategory::RoofInsulation, !profile.has_insulation(&InsulationType::Roof)),
        (InvestmentCategory::WallInsulation, !profile.has_insulation(&InsulationType::Wall)),
        (InvestmentCategory::FloorInsulation, !profile.has_insulation(&InsulationType::Floor)),
        (InvestmentCategory::Glazing, !profile.has_glazing()),
    ];
    for (category, is_missing) in missing {
        if is_missing {
            push_unique(&mut candidates, investment_for(category));
        }
    }

    if profile.heated_by(&HeatingType::GasBoiler) {
        push_unique(&mut candidates, investment_for(InvestmentCategory::HeatPump));
    }

    push_unique(&mut candidates, investment_for(InvestmentCategory::Solar));

    candidates
}

fn push_unique(candidates: &mut Vec<&'static Investment>, investment: Option<&'static Investment>) {
    if let Some(inv) = investment {
        if !candidates.iter().any(|c| c.id == inv.id) {
            candidates.push(inv);
        }
    }
}

/// A candidate paired with its default-scale ROI.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub investment: &'static Investment,
    pub roi:        RoiCalculation,
}

/// Candidates with their default-scale ROI, ranked.
pub fn ranked_candidates(profile: &HouseholdProfile, config: &AdviceConfig) -> Vec<Candidate> {
    let mut ranked: Vec<Candidate> = investment_candidates(profile)
        .into_iter()
        .map(|investment| Candidate {
            investment,
            roi: compute_roi(investment, None, &config.energy_prices),
        })
        .collect();

    // sort_by is stable: equal keys keep gathering order.
    ranked.sort_by(rank_order);
    ranked
}

fn rank_order(a: &Candidate, b: &Candidate) -> Ordering {
    b.investment
        .quick_win
        .cmp(&a.investment.quick_win)
        .then_with(|| b.roi.roi_percent.total_cmp(&a.roi.roi_percent))
}

/// At most `config.limits.max_investments` investments, best first, and
/// never more than `MAX_RECOMMENDATIONS`.
pub fn recommend_investments(
    profile: &HouseholdProfile,
    config: &AdviceConfig,
) -> Vec<&'static Investment> {
    let ranked = ranked_candidates(profile, config);
    let total = ranked.len();

    let picked: Vec<&'static Investment> = ranked
        .into_iter()
        .take(config.limits.max_investments.min(MAX_RECOMMENDATIONS))
        .map(|c| c.investment)
        .collect();

    log::info!(
        "recommend: {} of {total} candidates kept: [{}]",
        picked.len(),
        picked.iter().map(|i| i.id).collect::<Vec<_>>().join(", ")
    );
    picked
}
