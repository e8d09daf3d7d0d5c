//! Subsidy catalog: Dutch financial-assistance programs for home
//! energy measures.
//!
//! Conditions are informational text for the resident; nothing here
//! evaluates them. Relevance ranking lives in `relevance`.

use crate::{
    error::{AdviceError, AdviceResult},
    types::CatalogId,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubsidyCategory {
    Insulation,
    HeatPump,
    Solar,
    Heating,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subsidy {
    pub id:            CatalogId,
    pub name:          &'static str,
    pub description:   &'static str,
    /// Free text: amounts are percentages, caps or ranges depending on the program.
    pub amount:        &'static str,
    pub conditions:    &'static [&'static str],
    pub link:          &'static str,
    pub categories:    &'static [SubsidyCategory],
    /// 1–10, higher = more relevant before any profile adjustment.
    pub base_priority: i32,
}

impl Subsidy {
    pub fn has_category(&self, category: SubsidyCategory) -> bool {
        self.categories.contains(&category)
    }
}

/// The program whose age requirement targets homes built before 2001.
pub const PRE_2001_PROGRAM_ID: &str = "seeh";

pub static SUBSIDIES: [Subsidy; 7] = [
    Subsidy {
        id:          "isde",
        name:        "ISDE (Investeringssubsidie Duurzame Energie)",
        description: "Subsidy for heat pumps, solar water heaters, biomass boilers and heat \
                      networks. The amount depends on the type and capacity of the appliance.",
        amount:      "Up to €2,500",
        conditions:  &[
            "For heat pumps, solar water heaters and biomass boilers",
            "Minimum capacity required",
            "Appliance must be on the ISDE list",
            "Apply within 1 year of purchase",
        ],
        link:          "https://www.rvo.nl/subsidies-financiering/isde",
        categories:    &[SubsidyCategory::HeatPump, SubsidyCategory::Heating, SubsidyCategory::General],
        base_priority: 9,
    },
    Subsidy {
        id:          "seeh",
        name:        "SEEH (Subsidie Energiebesparing Eigen Huis)",
        description: "Subsidy for energy-saving measures such as insulation, HR++ glazing and \
                      solar panels. Covers 20% of the cost, up to a maximum.",
        amount:      "20% of the cost, max €5,000",
        conditions:  &[
            "For insulation, HR++ glazing and solar panels",
            "At least 2 measures must be carried out",
            "Home must be built before 2001",
            "Apply before work starts",
        ],
        link:          "https://www.rvo.nl/subsidies-financiering/seeh",
        categories:    &[SubsidyCategory::Insulation, SubsidyCategory::Solar, SubsidyCategory::General],
        base_priority: 10,
    },
    Subsidy {
        id:          "vat-refund-solar",
        name:        "VAT refund on solar panels",
        description: "The 21% VAT on purchase and installation of solar panels can be reclaimed \
                      from the Belastingdienst.",
        amount:      "21% VAT refunded",
        conditions:  &[
            "Solar panels only",
            "Register with the Belastingdienst as an entrepreneur",
            "File a VAT return",
            "Applies to households that feed power back to the grid",
        ],
        link:          "https://www.belastingdienst.nl/wps/wcm/connect/nl/particulier/content/btw-terugvragen-zonnepanelen",
        categories:    &[SubsidyCategory::Solar],
        base_priority: 8,
    },
    Subsidy {
        id:          "municipal-insulation",
        name:        "Municipal insulation subsidy",
        description: "Many municipalities add their own insulation subsidies. Amounts and \
                      conditions differ per municipality.",
        amount:      "Varies per municipality",
        conditions:  &[
            "Differs per municipality",
            "Often limited to specific neighbourhoods",
            "Sometimes combinable with SEEH",
            "Check your municipality's website",
        ],
        link:          "https://www.energiebesparen.nl/subsidies",
        categories:    &[SubsidyCategory::Insulation, SubsidyCategory::General],
        base_priority: 7,
    },
    Subsidy {
        id:          "isde-heat-pump",
        name:        "Heat pump subsidy (ISDE)",
        description: "ISDE subsidy specifically for heat pumps. The amount depends on the type \
                      and capacity of the heat pump.",
        amount:      "€1,200 - €2,500",
        conditions:  &[
            "Heat pump must be on the ISDE list",
            "Minimum capacity required",
            "Apply within 1 year of purchase",
            "Installed by a certified installer",
        ],
        link:          "https://www.rvo.nl/subsidies-financiering/isde/warmtepomp",
        categories:    &[SubsidyCategory::HeatPump, SubsidyCategory::Heating],
        base_priority: 9,
    },
    Subsidy {
        id:          "seeh-solar",
        name:        "Solar panel subsidy (SEEH)",
        description: "SEEH covers 20% of solar panel costs when combined with other \
                      energy-saving measures.",
        amount:      "20% of the cost",
        conditions:  &[
            "At least 2 energy-saving measures",
            "Home built before 2001",
            "Apply before work starts",
            "Panels must be on the ISDE list",
        ],
        link:          "https://www.rvo.nl/subsidies-financiering/seeh",
        categories:    &[SubsidyCategory::Solar],
        base_priority: 8,
    },
    Subsidy {
        id:          "energy-loan",
        name:        "Energy loan (Duurzaamheidslening)",
        description: "Low-interest, long-term loan for energy-saving measures, through the \
                      municipality or the Nationaal Warmtefonds.",
        amount:      "Up to €50,000, interest from 1.9%",
        conditions:  &[
            "For energy-saving measures",
            "Owner-occupied home",
            "Through the municipality or Nationaal Warmtefonds",
            "Apply before work starts",
        ],
        link:          "https://www.nationaalwarmtefonds.nl",
        categories:    &[SubsidyCategory::General],
        base_priority: 6,
    },
];

pub fn subsidies() -> &'static [Subsidy] {
    &SUBSIDIES
}

pub fn find_subsidy(id: &str) -> AdviceResult<&'static Subsidy> {
    SUBSIDIES
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| AdviceError::SubsidyNotFound { id: id.to_string() })
}
