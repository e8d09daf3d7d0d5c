//! Subsidy relevance: re-ranks the subsidy catalog for a household.
//!
//! No subsidy is ever excluded. Each rule contributes an independent
//! additive delta to a working copy of the base priority; the catalog
//! itself is untouched. Final order is descending adjusted priority,
//! ties in catalog order.

use crate::{
    config::MAX_RECOMMENDATIONS,
    profile::{HeatingType, HouseholdProfile},
    subsidy::{subsidies, Subsidy, SubsidyCategory, PRE_2001_PROGRAM_ID},
};
use serde::Serialize;

/// Build years before this one qualify for the pre-2001 program.
pub const PRE_2001_CUTOFF: u32 = 2001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelevanceRule {
    /// Two or more measures present: -2 on insulation subsidies, else +1.
    InsulationSaturation,
    /// Heat pump already installed: -3 on heat-pump subsidies.
    HeatPumpInstalled,
    /// Gas boiler: +1 on heat-pump subsidies.
    GasBoilerUpgrade,
    /// Label E, F or G: +1 on everything.
    PoorEnergyLabel,
    /// Built before 2001: +1 on the pre-2001 program.
    PreTwoThousandOneBuild,
}

impl RelevanceRule {
    pub const ALL: [RelevanceRule; 5] = [
        RelevanceRule::InsulationSaturation,
        RelevanceRule::HeatPumpInstalled,
        RelevanceRule::GasBoilerUpgrade,
        RelevanceRule::PoorEnergyLabel,
        RelevanceRule::PreTwoThousandOneBuild,
    ];

    /// Priority delta this rule applies to `subsidy` for `profile`.
    pub fn adjustment(self, profile: &HouseholdProfile, subsidy: &Subsidy) -> i32 {
        match self {
            RelevanceRule::InsulationSaturation => {
                if !subsidy.has_category(SubsidyCategory::Insulation) {
                    0
                } else if profile.insulation_count() >= 2 {
                    -2
                } else {
                    1
                }
            }
            RelevanceRule::HeatPumpInstalled => {
                if profile.heated_by(&HeatingType::HeatPump)
                    && subsidy.has_category(SubsidyCategory::HeatPump)
                {
                    -3
                } else {
                    0
                }
            }
            RelevanceRule::GasBoilerUpgrade => {
                if profile.heated_by(&HeatingType::GasBoiler)
                    && subsidy.has_category(SubsidyCategory::HeatPump)
                {
                    1
                } else {
                    0
                }
            }
            RelevanceRule::PoorEnergyLabel => i32::from(profile.energy_label.is_poor()),
            RelevanceRule::PreTwoThousandOneBuild => {
                if subsidy.id == PRE_2001_PROGRAM_ID && profile.built_before(PRE_2001_CUTOFF) {
                    1
                } else {
                    0
                }
            }
        }
    }
}

/// A subsidy with its profile-adjusted priority.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSubsidy {
    #[serde(flatten)]
    pub subsidy:  Subsidy,
    pub priority: i32,
    /// Rules that moved the priority, in evaluation order.
    pub applied:  Vec<RelevanceRule>,
}

/// Scores every subsidy, in catalog order.
pub fn score_subsidies(profile: &HouseholdProfile) -> Vec<RankedSubsidy> {
    subsidies()
        .iter()
        .map(|subsidy| {
            let mut priority = subsidy.base_priority;
            let mut applied = Vec::new();
            for rule in RelevanceRule::ALL {
                let delta = rule.adjustment(profile, subsidy);
                if delta != 0 {
                    priority += delta;
                    applied.push(rule);
                }
            }
            log::debug!(
                "relevance: {} base={} adjusted={priority}",
                subsidy.id,
                subsidy.base_priority
            );
            RankedSubsidy {
                subsidy: *subsidy,
                priority,
                applied,
            }
        })
        .collect()
}

/// Top `limit` subsidies by adjusted priority, capped at `MAX_RECOMMENDATIONS`.
pub fn recommend_subsidies(profile: &HouseholdProfile, limit: usize) -> Vec<RankedSubsidy> {
    let mut ranked = score_subsidies(profile);
    ranked.sort_by(|a, b| b.priority.cmp(&a.priority));
    ranked.truncate(limit.min(MAX_RECOMMENDATIONS));

    log::info!(
        "relevance: top {} subsidies: [{}]",
        ranked.len(),
        ranked.iter().map(|r| r.subsidy.id).collect::<Vec<_>>().join(", ")
    );
    ranked
}
