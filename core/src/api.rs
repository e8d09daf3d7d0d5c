//! Request dispatch: the JSON contract shared by every front end
//! (IPC loop, HTTP server).
//!
//! Transport-agnostic: a front end decodes its input into an
//! `ApiRequest`, calls `dispatch`, and maps `AdviceError` onto its own
//! error signalling.

use crate::{
    advice::{analyse, AdviceModel, AnalyseRequest, ChatMessage},
    calculator::{compute_roi, RoiCalculation},
    catalog::{find_investment, investments, Investment},
    chat::chat,
    config::AdviceConfig,
    error::{AdviceError, AdviceResult},
    portfolio::{calculate_portfolio, CalculatorResult},
    profile::{EnergyLabel, HeatingType, HouseholdProfile, InsulationType},
    recommend::recommend_investments,
    relevance::recommend_subsidies,
    report::EnergyReport,
    subsidy::subsidies,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

/// Every request the advisor understands.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApiRequest {
    Calculator(CalculatorRequest),
    Subsidies { query: String },
    Investment { id: String },
    Catalog,
    Analyse(AnalyseRequest),
    Report(AnalyseRequest),
    Chat { messages: Vec<ChatMessage> },
}

impl ApiRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiRequest::Calculator(_)   => "calculator",
            ApiRequest::Subsidies { .. } => "subsidies",
            ApiRequest::Investment { .. } => "investment",
            ApiRequest::Catalog         => "catalog",
            ApiRequest::Analyse(_)      => "analyse",
            ApiRequest::Report(_)       => "report",
            ApiRequest::Chat { .. }     => "chat",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculatorRequest {
    #[serde(default, alias = "investmentIds")]
    pub investment_ids: Option<Vec<String>>,
    #[serde(default, alias = "customOppervlaktes")]
    pub custom_scales:  Option<HashMap<String, f64>>,
    #[serde(default)]
    pub filters:        Option<HouseholdProfile>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CalculatorResponse {
    Portfolio(CalculatorResult),
    Recommendations {
        recommendations: Vec<&'static Investment>,
        calculations:    Vec<RoiCalculation>,
        all_investments: &'static [Investment],
    },
    Catalog {
        all_investments: &'static [Investment],
    },
}

/// Selected ids → portfolio; profile → recommendations; neither → catalog.
pub fn handle_calculator(request: &CalculatorRequest, config: &AdviceConfig) -> CalculatorResponse {
    let no_scales = HashMap::new();
    let scales = request.custom_scales.as_ref().unwrap_or(&no_scales);

    if let Some(ids) = &request.investment_ids {
        return CalculatorResponse::Portfolio(calculate_portfolio(ids, scales, &config.energy_prices));
    }

    if let Some(profile) = &request.filters {
        let recommendations = recommend_investments(profile, config);
        let calculations = recommendations
            .iter()
            .map(|inv| compute_roi(inv, scales.get(inv.id).copied(), &config.energy_prices))
            .collect();
        return CalculatorResponse::Recommendations {
            recommendations,
            calculations,
            all_investments: investments(),
        };
    }

    CalculatorResponse::Catalog {
        all_investments: investments(),
    }
}

/// Splits and percent-decodes a URL query. `+` is read as a space.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    let mut out = HashMap::new();
    for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
        let mut parts = pair.splitn(2, '=');
        if let Some(key) = parts.next() {
            let val = parts.next().unwrap_or("");
            out.insert(decode_component(key), decode_component(val));
        }
    }
    out
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Builds a profile from subsidy-query parameters. English and Dutch
/// parameter names are both accepted; empty values count as absent.
pub fn profile_from_query(query: &str) -> AdviceResult<HouseholdProfile> {
    let params = parse_query(query);
    let get = |en: &str, nl: &str| {
        params
            .get(en)
            .or_else(|| params.get(nl))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    };

    let build_year = match get("build_year", "bouwjaar") {
        Some(raw) => Some(raw.parse::<u32>().map_err(|_| AdviceError::InvalidRequest {
            reason: format!("build_year '{raw}' is not a year"),
        })?),
        None => None,
    };

    Ok(HouseholdProfile {
        build_year,
        energy_label: get("energy_label", "energielabel")
            .map(EnergyLabel::from)
            .unwrap_or_default(),
        dwelling_type: get("dwelling_type", "woningtype").map(str::to_string),
        heating: get("heating", "verwarming").map(HeatingType::from),
        insulation: get("insulation", "isolatie")
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(InsulationType::from)
                    .collect()
            })
            .unwrap_or_default(),
    })
}

pub fn dispatch(
    request: &ApiRequest,
    config: &AdviceConfig,
    model: Option<&dyn AdviceModel>,
) -> AdviceResult<serde_json::Value> {
    log::debug!("api: dispatching {}", request.kind());

    let value = match request {
        ApiRequest::Calculator(req) => serde_json::to_value(handle_calculator(req, config))?,
        ApiRequest::Subsidies { query } => {
            let profile = profile_from_query(query)?;
            let ranked = recommend_subsidies(&profile, config.limits.max_subsidies);
            json!({ "subsidies": ranked })
        }
        ApiRequest::Investment { id } => serde_json::to_value(find_investment(id)?)?,
        ApiRequest::Catalog => json!({
            "investments": investments(),
            "subsidies":   subsidies(),
        }),
        ApiRequest::Analyse(req) => serde_json::to_value(analyse(req, config, model)?)?,
        ApiRequest::Report(req) => {
            let analysis = analyse(req, config, model)?;
            let ranked = recommend_subsidies(&req.profile(), config.limits.max_subsidies);
            let report = EnergyReport::build(req, analysis, ranked);
            json!({
                "file_name": report.file_name(),
                "text":      report.render_text(),
                "report":    report,
            })
        }
        ApiRequest::Chat { messages } => serde_json::to_value(chat(messages, config, model)?)?,
    };
    Ok(value)
}
