//! Investment catalog: the energy-saving measures the advisor knows about.
//!
//! Costs and savings are Dutch market averages. The table is compiled in
//! and never mutated; every lookup hands out `&'static` references.

use crate::{
    error::{AdviceError, AdviceResult},
    types::{CatalogId, Euro, Kwh},
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvestmentCategory {
    WallInsulation,
    RoofInsulation,
    FloorInsulation,
    Glazing,
    Solar,
    HeatPump,
    RadiatorFoil,
    RadiatorFan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// m²
    Area,
    /// Wp
    Power,
    /// pieces
    Count,
}

impl Unit {
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Area  => "m²",
            Unit::Power => "Wp",
            Unit::Count => "pcs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Investment {
    pub id:               CatalogId,
    pub name:             &'static str,
    pub category:         InvestmentCategory,
    /// € per unit.
    pub cost_per_unit:    Euro,
    /// kWh saved per unit per year.
    pub savings_per_unit: Kwh,
    pub unit:             Unit,
    /// Typical quantity for an average home.
    pub default_scale:    Option<f64>,
    pub quick_win:        bool,
}

pub static INVESTMENTS: [Investment; 8] = [
    Investment {
        id:               "radiator-foil",
        name:             "Radiator foil",
        category:         InvestmentCategory::RadiatorFoil,
        cost_per_unit:    25.0,
        savings_per_unit: 30.0,
        unit:             Unit::Count,
        default_scale:    Some(10.0),
        quick_win:        true,
    },
    Investment {
        id:               "radiator-fan",
        name:             "Radiator fan",
        category:         InvestmentCategory::RadiatorFan,
        cost_per_unit:    40.0,
        savings_per_unit: 50.0,
        unit:             Unit::Count,
        default_scale:    Some(5.0),
        quick_win:        true,
    },
    Investment {
        id:               "wall-insulation",
        name:             "Wall insulation",
        category:         InvestmentCategory::WallInsulation,
        cost_per_unit:    45.0,
        savings_per_unit: 8.0,
        unit:             Unit::Area,
        default_scale:    Some(100.0),
        quick_win:        false,
    },
    Investment {
        id:               "roof-insulation",
        name:             "Roof insulation",
        category:         InvestmentCategory::RoofInsulation,
        cost_per_unit:    35.0,
        savings_per_unit: 12.0,
        unit:             Unit::Area,
        default_scale:    Some(80.0),
        quick_win:        false,
    },
    Investment {
        id:               "floor-insulation",
        name:             "Floor insulation",
        category:         InvestmentCategory::FloorInsulation,
        cost_per_unit:    30.0,
        savings_per_unit: 6.0,
        unit:             Unit::Area,
        default_scale:    Some(60.0),
        quick_win:        false,
    },
    Investment {
        id:               "hr-glazing",
        name:             "HR++ glazing",
        category:         InvestmentCategory::Glazing,
        cost_per_unit:    200.0,
        savings_per_unit: 15.0,
        unit:             Unit::Area,
        default_scale:    Some(20.0),
        quick_win:        false,
    },
    Investment {
        id:               "solar-panels",
        name:             "Solar panels",
        category:         InvestmentCategory::Solar,
        cost_per_unit:    0.85,
        savings_per_unit: 0.85,
        unit:             Unit::Power,
        default_scale:    Some(3000.0),
        quick_win:        false,
    },
    Investment {
        id:               "heat-pump",
        name:             "Heat pump",
        category:         InvestmentCategory::HeatPump,
        cost_per_unit:    15000.0,
        savings_per_unit: 2000.0,
        unit:             Unit::Count,
        default_scale:    Some(1.0),
        quick_win:        false,
    },
];

pub fn investments() -> &'static [Investment] {
    &INVESTMENTS
}

/// Single lookup. Unknown ids are an explicit error.
pub fn find_investment(id: &str) -> AdviceResult<&'static Investment> {
    INVESTMENTS
        .iter()
        .find(|inv| inv.id == id)
        .ok_or_else(|| AdviceError::InvestmentNotFound { id: id.to_string() })
}

/// First entry of a category, in declaration order.
pub fn investment_for(category: InvestmentCategory) -> Option<&'static Investment> {
    INVESTMENTS.iter().find(|inv| inv.category == category)
}

/// Catalog entries whose id appears in `ids`, in catalog order.
/// Unknown ids are skipped, not fatal.
pub fn select_investments<S: AsRef<str>>(ids: &[S]) -> Vec<&'static Investment> {
    for id in ids {
        let id = id.as_ref();
        if find_investment(id).is_err() {
            log::warn!("catalog: skipping unknown investment id '{id}'");
        }
    }

    INVESTMENTS
        .iter()
        .filter(|inv| ids.iter().any(|id| id.as_ref() == inv.id))
        .collect()
}
