//! Home analysis: validates an analyse request, embeds the
//! recommended investments in a prompt and asks a language model for
//! advice.
//!
//! The model is an external collaborator behind `AdviceModel`. When none
//! is configured, or the call fails, a template built from the
//! recommendations is returned instead, so an analysis always succeeds
//! once the request itself is valid.

use crate::{
    calculator::{compute_roi, RoiCalculation},
    config::{AdviceConfig, AdvisorConfig},
    error::{AdviceError, AdviceResult},
    profile::{EnergyLabel, HeatingType, HouseholdProfile, InsulationType},
    recommend::recommend_investments,
};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyseRequest {
    #[serde(default, alias = "adres")]
    pub address: Option<String>,
    #[serde(default, alias = "bouwjaar")]
    pub build_year: Option<u32>,
    #[serde(default, alias = "woningtype")]
    pub dwelling_type: Option<String>,
    #[serde(default, alias = "energielabel")]
    pub energy_label: Option<EnergyLabel>,
    #[serde(default, alias = "verwarming")]
    pub heating: Option<HeatingType>,
    #[serde(default, alias = "isolatie")]
    pub insulation: Vec<InsulationType>,
}

impl AnalyseRequest {
    /// Address, build year, energy label and heating type are required.
    pub fn validate(&self) -> AdviceResult<()> {
        if self.address.as_deref().map_or(true, |a| a.trim().is_empty()) {
            return Err(AdviceError::MissingField { field: "address" });
        }
        if self.build_year.is_none() {
            return Err(AdviceError::MissingField { field: "build_year" });
        }
        if self.energy_label.is_none() {
            return Err(AdviceError::MissingField { field: "energy_label" });
        }
        if self.heating.is_none() {
            return Err(AdviceError::MissingField { field: "heating" });
        }
        Ok(())
    }

    pub fn profile(&self) -> HouseholdProfile {
        HouseholdProfile {
            build_year:    self.build_year,
            energy_label:  self.energy_label.unwrap_or_default(),
            dwelling_type: self.dwelling_type.clone(),
            heating:       self.heating.clone(),
            insulation:    self.insulation.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of a conversation with the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role:    ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into() }
    }
}

/// What is sent to the language model. `system` goes ahead of `messages`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model:       String,
    pub system:      String,
    pub messages:    Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens:  u32,
}

impl CompletionRequest {
    pub fn new(advisor: &AdvisorConfig, system: &str, messages: Vec<ChatMessage>) -> Self {
        Self {
            model:       advisor.model.clone(),
            system:      system.to_string(),
            messages,
            temperature: advisor.temperature,
            max_tokens:  advisor.max_tokens,
        }
    }
}

/// A hosted language model that turns a prompt into advice text.
pub trait AdviceModel: Send + Sync {
    fn name(&self) -> &str;

    fn complete(&self, request: &CompletionRequest) -> anyhow::Result<String>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub advice:      String,
    /// Where the advice text came from: the model name or "template".
    pub source:      String,
    pub savings:     String,
    pub tips:        Vec<String>,
    pub recommended: Vec<RoiCalculation>,
}

pub fn build_prompt(request: &AnalyseRequest, recommended: &[RoiCalculation]) -> String {
    let insulation = if request.insulation.is_empty() {
        "none reported".to_string()
    } else {
        request
            .insulation
            .iter()
            .map(|i| i.describe())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut prompt = String::new();
    let _ = writeln!(prompt, "You are a Dutch home-energy advisor.");
    let _ = writeln!(prompt, "Give short, concrete advice for this home:");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "- Address: {}", request.address.as_deref().unwrap_or_default());
    let _ = writeln!(
        prompt,
        "- Build year: {}",
        request.build_year.map(|y| y.to_string()).unwrap_or_default()
    );
    let _ = writeln!(
        prompt,
        "- Dwelling type: {}",
        request.dwelling_type.as_deref().unwrap_or("not given")
    );
    let _ = writeln!(prompt, "- Energy label: {}", request.energy_label.unwrap_or_default());
    let _ = writeln!(
        prompt,
        "- Heating: {}",
        request.heating.as_ref().map(HeatingType::describe).unwrap_or_default()
    );
    let _ = writeln!(prompt, "- Insulation present: {insulation}");

    if !recommended.is_empty() {
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "Recommended investments (national average prices):");
        for calc in recommended {
            let _ = writeln!(prompt, "- {}", summary_line(calc));
        }
    }

    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Include in your advice:");
    let _ = writeln!(prompt, "1. A short analysis of the current situation");
    let _ = writeln!(prompt, "2. Realistic savings in euros per year");
    let _ = writeln!(prompt, "3. Three practical tips, quick wins first");
    let _ = writeln!(prompt, "4. A pointer to the investment options above");
    let _ = writeln!(prompt);
    let _ = write!(prompt, "Keep it clear and to the point (max 300 words).");
    prompt
}

fn summary_line(calc: &RoiCalculation) -> String {
    let payback = if calc.pays_back() {
        format!("pays back in {:.1} years", calc.payback_years)
    } else {
        "never pays back".to_string()
    };
    format!(
        "{}: €{:.0} up front, €{:.0} saved per year, {payback}",
        calc.investment.name, calc.total_cost, calc.annual_savings
    )
}

fn template_advice(profile: &HouseholdProfile, recommended: &[RoiCalculation]) -> String {
    let mut text = String::new();
    let _ = write!(text, "For a home with energy label {}", profile.energy_label);
    if let Some(year) = profile.build_year {
        let _ = write!(text, " built in {year}");
    }
    let _ = writeln!(text, ", these measures give the best return:");
    for calc in recommended {
        let _ = writeln!(text, "- {}", summary_line(calc));
    }
    let _ = write!(text, "Start with the quick wins; they cost little and pay back fastest.");
    text
}

/// Validates, recommends, and asks `model` (if any) for advice.
pub fn analyse(
    request: &AnalyseRequest,
    config: &AdviceConfig,
    model: Option<&dyn AdviceModel>,
) -> AdviceResult<Analysis> {
    if let Err(e) = request.validate() {
        log::warn!("analyse: rejected request: {e}");
        return Err(e);
    }

    let profile = request.profile();
    let recommended: Vec<RoiCalculation> = recommend_investments(&profile, config)
        .into_iter()
        .map(|inv| compute_roi(inv, None, &config.energy_prices))
        .collect();

    let prompt = build_prompt(request, &recommended);
    let (advice, source) = match model {
        Some(model) => match model.complete(&CompletionRequest::new(
            &config.advisor,
            &config.advisor.system_prompt,
            vec![ChatMessage::user(prompt)],
        )) {
            Ok(text) if !text.trim().is_empty() => (text, model.name().to_string()),
            Ok(_) => {
                log::warn!("analyse: model {} returned no text, using template", model.name());
                (template_advice(&profile, &recommended), "template".to_string())
            }
            Err(e) => {
                log::warn!("analyse: model {} failed ({e:#}), using template", model.name());
                (template_advice(&profile, &recommended), "template".to_string())
            }
        },
        None => (template_advice(&profile, &recommended), "template".to_string()),
    };

    let annual: f64 = recommended.iter().map(|c| c.annual_savings).sum();
    let savings = format!("About €{annual:.0} per year with the recommended measures");
    let tips = recommended.iter().map(summary_line).collect();

    log::info!(
        "analyse: {} recommendations, €{annual:.0}/yr, advice from {source}",
        recommended.len()
    );

    Ok(Analysis {
        advice,
        source,
        savings,
        tips,
        recommended,
    })
}
