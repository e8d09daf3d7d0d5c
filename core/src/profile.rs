//! Household profile: the caller's description of a dwelling.
//!
//! Tags arrive in the vocabulary of the Dutch web form ("cv-ketel",
//! "dakisolatie", "HR++ glas"). English aliases are accepted as well.
//! Unrecognised tags are kept verbatim so they survive a round trip and
//! still count towards the number of insulation measures present.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Dutch energy label, best (A++++) to worst (G).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EnergyLabel {
    APlus4,
    APlus3,
    APlus2,
    APlus1,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    #[default]
    Unknown,
}

impl EnergyLabel {
    /// E, F and G.
    pub fn is_poor(self) -> bool {
        matches!(self, EnergyLabel::E | EnergyLabel::F | EnergyLabel::G)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnergyLabel::APlus4  => "A++++",
            EnergyLabel::APlus3  => "A+++",
            EnergyLabel::APlus2  => "A++",
            EnergyLabel::APlus1  => "A+",
            EnergyLabel::A       => "A",
            EnergyLabel::B       => "B",
            EnergyLabel::C       => "C",
            EnergyLabel::D       => "D",
            EnergyLabel::E       => "E",
            EnergyLabel::F       => "F",
            EnergyLabel::G       => "G",
            EnergyLabel::Unknown => "unknown",
        }
    }
}

impl From<&str> for EnergyLabel {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A++++" => EnergyLabel::APlus4,
            "A+++"  => EnergyLabel::APlus3,
            "A++"   => EnergyLabel::APlus2,
            "A+"    => EnergyLabel::APlus1,
            "A"     => EnergyLabel::A,
            "B"     => EnergyLabel::B,
            "C"     => EnergyLabel::C,
            "D"     => EnergyLabel::D,
            "E"     => EnergyLabel::E,
            "F"     => EnergyLabel::F,
            "G"     => EnergyLabel::G,
            _       => EnergyLabel::Unknown,
        }
    }
}

impl From<String> for EnergyLabel {
    fn from(raw: String) -> Self {
        EnergyLabel::from(raw.as_str())
    }
}

impl From<EnergyLabel> for String {
    fn from(label: EnergyLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for EnergyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HeatingType {
    GasBoiler,
    HeatPump,
    DistrictHeating,
    Electric,
    Other(String),
}

impl HeatingType {
    pub fn wire_tag(&self) -> &str {
        match self {
            HeatingType::GasBoiler       => "cv-ketel",
            HeatingType::HeatPump        => "warmtepomp",
            HeatingType::DistrictHeating => "stadsverwarming",
            HeatingType::Electric        => "elektrisch",
            HeatingType::Other(tag)      => tag,
        }
    }

    /// Human-readable English description.
    pub fn describe(&self) -> &str {
        match self {
            HeatingType::GasBoiler       => "gas boiler",
            HeatingType::HeatPump        => "heat pump",
            HeatingType::DistrictHeating => "district heating",
            HeatingType::Electric        => "electric heating",
            HeatingType::Other(tag)      => tag,
        }
    }
}

impl From<&str> for HeatingType {
    fn from(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "cv-ketel" | "gas-boiler"               => HeatingType::GasBoiler,
            "warmtepomp" | "heat-pump"              => HeatingType::HeatPump,
            "stadsverwarming" | "district-heating"  => HeatingType::DistrictHeating,
            "elektrisch" | "electric"               => HeatingType::Electric,
            _ => HeatingType::Other(raw.trim().to_string()),
        }
    }
}

impl From<String> for HeatingType {
    fn from(raw: String) -> Self {
        HeatingType::from(raw.as_str())
    }
}

impl From<HeatingType> for String {
    fn from(heating: HeatingType) -> Self {
        heating.wire_tag().to_string()
    }
}

impl fmt::Display for HeatingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InsulationType {
    Roof,
    Wall,
    Floor,
    HrGlazing,
    DoubleGlazing,
    Other(String),
}

impl InsulationType {
    pub fn wire_tag(&self) -> &str {
        match self {
            InsulationType::Roof          => "dakisolatie",
            InsulationType::Wall          => "muurisolatie",
            InsulationType::Floor         => "vloerisolatie",
            InsulationType::HrGlazing     => "HR++ glas",
            InsulationType::DoubleGlazing => "dubbel glas",
            InsulationType::Other(tag)    => tag,
        }
    }

    pub fn describe(&self) -> &str {
        match self {
            InsulationType::Roof          => "roof insulation",
            InsulationType::Wall          => "wall insulation",
            InsulationType::Floor         => "floor insulation",
            InsulationType::HrGlazing     => "HR++ glazing",
            InsulationType::DoubleGlazing => "double glazing",
            InsulationType::Other(tag)    => tag,
        }
    }

    pub fn is_glazing(&self) -> bool {
        matches!(self, InsulationType::HrGlazing | InsulationType::DoubleGlazing)
    }
}

impl From<&str> for InsulationType {
    fn from(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "dakisolatie" | "roof"                  => InsulationType::Roof,
            "muurisolatie" | "wall"                 => InsulationType::Wall,
            "vloerisolatie" | "floor"               => InsulationType::Floor,
            "hr++ glas" | "hr-glas" | "hr-glazing"  => InsulationType::HrGlazing,
            "dubbel glas" | "double-glazing"        => InsulationType::DoubleGlazing,
            _ => InsulationType::Other(raw.trim().to_string()),
        }
    }
}

impl From<String> for InsulationType {
    fn from(raw: String) -> Self {
        InsulationType::from(raw.as_str())
    }
}

impl From<InsulationType> for String {
    fn from(kind: InsulationType) -> Self {
        kind.wire_tag().to_string()
    }
}

impl fmt::Display for InsulationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_tag())
    }
}

/// One request's description of a dwelling. Ephemeral; never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    #[serde(default, alias = "bouwjaar")]
    pub build_year: Option<u32>,
    #[serde(default, alias = "energielabel")]
    pub energy_label: EnergyLabel,
    #[serde(default, alias = "woningtype")]
    pub dwelling_type: Option<String>,
    #[serde(default, alias = "verwarming")]
    pub heating: Option<HeatingType>,
    #[serde(default, alias = "isolatie")]
    pub insulation: Vec<InsulationType>,
}

impl HouseholdProfile {
    pub fn has_insulation(&self, kind: &InsulationType) -> bool {
        self.insulation.contains(kind)
    }

    /// Either HR++ or double glazing counts.
    pub fn has_glazing(&self) -> bool {
        self.insulation.iter().any(InsulationType::is_glazing)
    }

    /// Number of distinct insulation measures present.
    pub fn insulation_count(&self) -> usize {
        self.insulation.iter().collect::<BTreeSet<_>>().len()
    }

    pub fn heated_by(&self, heating: &HeatingType) -> bool {
        self.heating.as_ref() == Some(heating)
    }

    pub fn built_before(&self, year: u32) -> bool {
        self.build_year.is_some_and(|y| y < year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(EnergyLabel::from("a++++"), EnergyLabel::APlus4);
        assert_eq!(EnergyLabel::from(" g "), EnergyLabel::G);
        assert_eq!(EnergyLabel::from("Z"), EnergyLabel::Unknown);
        assert!(EnergyLabel::F.is_poor());
        assert!(!EnergyLabel::D.is_poor());
        assert!(EnergyLabel::APlus4 < EnergyLabel::G, "labels order best to worst");
    }

    #[test]
    fn dutch_and_english_tags_map_to_the_same_variant() {
        assert_eq!(HeatingType::from("cv-ketel"), HeatingType::GasBoiler);
        assert_eq!(HeatingType::from("gas-boiler"), HeatingType::GasBoiler);
        assert_eq!(InsulationType::from("HR++ glas"), InsulationType::HrGlazing);
        assert_eq!(InsulationType::from("roof"), InsulationType::Roof);
    }

    #[test]
    fn unknown_tags_are_kept_verbatim() {
        let kind = InsulationType::from("spouwmuur");
        assert_eq!(kind, InsulationType::Other("spouwmuur".into()));
        assert_eq!(String::from(kind), "spouwmuur");
    }

    #[test]
    fn profile_accepts_dutch_keys() {
        let json = r#"{
            "bouwjaar": 1975,
            "energielabel": "F",
            "verwarming": "cv-ketel",
            "isolatie": ["dakisolatie", "dubbel glas"]
        }"#;
        let profile: HouseholdProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.build_year, Some(1975));
        assert_eq!(profile.energy_label, EnergyLabel::F);
        assert!(profile.heated_by(&HeatingType::GasBoiler));
        assert!(profile.has_glazing());
        assert_eq!(profile.insulation_count(), 2);
    }

    #[test]
    fn duplicate_tags_count_once() {
        let profile = HouseholdProfile {
            insulation: vec![InsulationType::Roof, InsulationType::Roof],
            ..Default::default()
        };
        assert_eq!(profile.insulation_count(), 1);
    }
}
