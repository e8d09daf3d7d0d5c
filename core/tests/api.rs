//! Request dispatch tests: JSON in, JSON out.

use energy_advice_core::{
    api::{dispatch, parse_query, profile_from_query, ApiRequest},
    config::AdviceConfig,
    profile::{EnergyLabel, HeatingType, InsulationType},
};
use serde_json::{json, Value};

fn send(request: Value) -> energy_advice_core::error::AdviceResult<Value> {
    let request: ApiRequest = serde_json::from_value(request)?;
    dispatch(&request, &AdviceConfig::national_average(), None)
}

#[test]
fn calculator_with_ids_returns_portfolio() {
    let response = send(json!({
        "type": "calculator",
        "investmentIds": ["wall-insulation"],
        "customOppervlaktes": { "wall-insulation": 50 }
    }))
    .unwrap();

    assert_eq!(response["total_cost"], 2250.0);
    assert_eq!(response["total_savings_10y"], 1000.0);
    assert_eq!(response["investments"][0]["scale"], 50.0);
    assert!(response.get("all_investments").is_none());
}

#[test]
fn calculator_with_profile_returns_recommendations() {
    let response = send(json!({
        "type": "calculator",
        "filters": { "verwarming": "cv-ketel", "isolatie": [] }
    }))
    .unwrap();

    let recommended = response["recommendations"].as_array().unwrap();
    assert_eq!(recommended.len(), 5);
    assert_eq!(recommended[0]["id"], "radiator-fan");
    assert_eq!(response["calculations"].as_array().unwrap().len(), 5);
    assert_eq!(response["all_investments"].as_array().unwrap().len(), 8);
}

#[test]
fn calculator_without_input_returns_catalog() {
    let response = send(json!({ "type": "calculator" })).unwrap();

    assert_eq!(response["all_investments"].as_array().unwrap().len(), 8);
    assert!(response.get("recommendations").is_none());
}

#[test]
fn query_strings_are_percent_decoded() {
    let params = parse_query("?insulation=HR%2B%2B+glas,dakisolatie&heating=cv-ketel");
    assert_eq!(params["insulation"], "HR++ glas,dakisolatie");
    assert_eq!(params["heating"], "cv-ketel");
}

#[test]
fn query_accepts_dutch_keys_and_ignores_empty_values() {
    let profile = profile_from_query("bouwjaar=1975&energielabel=f&verwarming=&isolatie=vloerisolatie").unwrap();

    assert_eq!(profile.build_year, Some(1975));
    assert_eq!(profile.energy_label, EnergyLabel::F);
    assert_eq!(profile.heating, None);
    assert_eq!(profile.insulation, vec![InsulationType::Floor]);
}

#[test]
fn subsidy_query_ranks_for_the_household() {
    let response = send(json!({
        "type": "subsidies",
        "query": "heating=cv-ketel&insulation=HR%2B%2B+glas,dakisolatie&energy_label=F&build_year=1975"
    }))
    .unwrap();

    let ids: Vec<&str> = response["subsidies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["isde", "isde-heat-pump", "seeh", "vat-refund-solar", "seeh-solar"]);
    assert_eq!(response["subsidies"][0]["priority"], 11);
}

#[test]
fn non_numeric_build_year_is_rejected() {
    let err = profile_from_query("build_year=old").unwrap_err();
    assert!(err.is_client_error());
    assert!(!err.is_not_found());
}

#[test]
fn unknown_heating_tag_is_kept() {
    let profile = profile_from_query("heating=pelletkachel").unwrap();
    assert_eq!(profile.heating, Some(HeatingType::Other("pelletkachel".into())));
}

#[test]
fn investment_lookup() {
    let response = send(json!({ "type": "investment", "id": "heat-pump" })).unwrap();
    assert_eq!(response["name"], "Heat pump");
    assert_eq!(response["category"], "heat-pump");

    let err = send(json!({ "type": "investment", "id": "nuclear-reactor" })).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn catalog_lists_both_tables() {
    let response = send(json!({ "type": "catalog" })).unwrap();
    assert_eq!(response["investments"].as_array().unwrap().len(), 8);
    assert_eq!(response["subsidies"].as_array().unwrap().len(), 7);
}

#[test]
fn analyse_requires_mandatory_fields() {
    let err = send(json!({ "type": "analyse", "adres": "Dorpsstraat 1, Utrecht" })).unwrap_err();
    assert!(err.is_client_error());
    assert!(err.to_string().contains("build_year"), "{err}");
}

#[test]
fn analyse_without_model_uses_template() {
    let response = send(json!({
        "type": "analyse",
        "adres": "Dorpsstraat 1, Utrecht",
        "bouwjaar": 1975,
        "energielabel": "F",
        "verwarming": "cv-ketel",
        "isolatie": ["dakisolatie"]
    }))
    .unwrap();

    assert_eq!(response["source"], "template");
    assert_eq!(response["tips"].as_array().unwrap().len(), 5);
    assert!(response["advice"].as_str().unwrap().contains("energy label F"));
}

#[test]
fn report_carries_file_name_and_text() {
    let response = send(json!({
        "type": "report",
        "address": "Dorpsstraat 1, Utrecht",
        "build_year": 1975,
        "energy_label": "F",
        "heating": "cv-ketel"
    }))
    .unwrap();

    let file_name = response["file_name"].as_str().unwrap();
    assert!(file_name.starts_with("energy-report-") && file_name.ends_with(".txt"));
    assert!(response["text"].as_str().unwrap().starts_with("ENERGY SCAN REPORT"));
    assert_eq!(response["report"]["subsidies"].as_array().unwrap().len(), 5);
}

#[test]
fn unknown_request_type_fails_to_decode() {
    let err = send(json!({ "type": "teleport" })).unwrap_err();
    assert!(err.is_client_error());
}
