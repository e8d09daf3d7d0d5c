use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Unit energy prices used to value annual savings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyPrices {
    /// €/kWh gas-equivalent. Used for every non-solar investment.
    pub gas_per_kwh: f64,
    /// €/kWh electricity. Used for solar.
    pub electricity_per_kwh: f64,
}

impl EnergyPrices {
    /// Dutch national averages (2024).
    pub const NATIONAL_AVERAGE: EnergyPrices = EnergyPrices {
        gas_per_kwh: 0.25,
        electricity_per_kwh: 0.30,
    };
}

impl Default for EnergyPrices {
    fn default() -> Self {
        Self::NATIONAL_AVERAGE
    }
}

/// Hard ceiling on any recommendation list, whatever the config says.
pub const MAX_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationLimits {
    pub max_investments: usize,
    pub max_subsidies: usize,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            max_investments: MAX_RECOMMENDATIONS,
            max_subsidies: MAX_RECOMMENDATIONS,
        }
    }
}

/// Parameters forwarded to the language-model provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// System prompt for one-shot home analyses.
    pub system_prompt: String,
    /// System prompt for the conversational energy coach.
    #[serde(default = "default_coach_prompt")]
    pub coach_prompt: String,
}

fn default_coach_prompt() -> String {
    "You are Walter, a friendly and proactive Dutch energy coach. You help people \
     with little or no knowledge of making their home sustainable. If the \
     conversation is empty, introduce yourself and ask the first question. Ask \
     step by step about build year, energy label, dwelling type, heating and \
     insulation, and explain why you ask each question. Then give personal, \
     practical advice with realistic savings in euros. Avoid jargon, be \
     encouraging, and say so when you are not sure."
        .into()
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".into(),
            temperature: 0.7,
            max_tokens: 800,
            system_prompt: "You are an experienced Dutch home-energy advisor who helps \
                            residents save energy. Give practical, concrete advice with \
                            realistic savings."
                .into(),
            coach_prompt: default_coach_prompt(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdviceConfig {
    #[serde(default)]
    pub energy_prices: EnergyPrices,
    #[serde(default)]
    pub limits: RecommendationLimits,
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

impl AdviceConfig {
    /// Load from the data/ directory.
    /// In tests, use AdviceConfig::national_average().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/config/advice_config.json");
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Cannot read {path}"))?;
        let config: AdviceConfig = serde_json::from_str(&content)
            .with_context(|| format!("Cannot parse {path}"))?;

        let limits = [config.limits.max_investments, config.limits.max_subsidies];
        if limits.contains(&0) {
            anyhow::bail!("{path}: recommendation limits must be at least 1");
        }
        if limits.iter().any(|&l| l > MAX_RECOMMENDATIONS) {
            anyhow::bail!("{path}: recommendation limits must be at most {MAX_RECOMMENDATIONS}");
        }
        if config.energy_prices.gas_per_kwh < 0.0 || config.energy_prices.electricity_per_kwh < 0.0 {
            anyhow::bail!("{path}: energy prices must not be negative");
        }

        log::info!(
            "config: loaded {path} (gas €{:.2}/kWh, electricity €{:.2}/kWh)",
            config.energy_prices.gas_per_kwh,
            config.energy_prices.electricity_per_kwh
        );
        Ok(config)
    }

    /// Hardcoded national-average configuration.
    pub fn national_average() -> Self {
        Self::default()
    }
}
