//! advice-runner: headless front end for the home energy advisor.
//!
//! Usage:
//!   advice-runner --profile home.json [--data-dir ./data]
//!   advice-runner --ipc-mode
//!   advice-runner --port 8787

mod http;

use anyhow::{Context, Result};
use energy_advice_core::{
    api::{dispatch, ApiRequest},
    calculator::compute_roi,
    config::AdviceConfig,
    error::AdviceError,
    portfolio::aggregate,
    profile::HouseholdProfile,
    recommend::recommend_investments,
    relevance::recommend_subsidies,
    report::format_euro,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let port = parse_arg::<u16>(&args, "--port");
    let data_dir = string_arg(&args, "--data-dir").unwrap_or("./data");
    let profile_path = string_arg(&args, "--profile");

    let config = load_config(data_dir)?;

    if ipc_mode {
        return run_ipc_loop(&config);
    }
    if let Some(port) = port {
        return http::serve(port, &config);
    }

    let profile = match profile_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Cannot read {path}"))?;
            serde_json::from_str::<HouseholdProfile>(&content)
                .with_context(|| format!("Cannot parse profile {path}"))?
        }
        None => {
            log::warn!("no --profile given, using an empty household profile");
            HouseholdProfile::default()
        }
    };

    print_summary(&profile, &config);
    Ok(())
}

fn load_config(data_dir: &str) -> Result<AdviceConfig> {
    let path = format!("{data_dir}/config/advice_config.json");
    if Path::new(&path).exists() {
        AdviceConfig::load(data_dir)
    } else {
        log::warn!("{path} not found, using national-average defaults");
        Ok(AdviceConfig::national_average())
    }
}

/// One JSON request per line in, one JSON response per line out.
fn run_ipc_loop(config: &AdviceConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }

        let value: serde_json::Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                writeln!(stdout, "{}", serde_json::json!({ "error": e.to_string() }))?;
                stdout.flush()?;
                continue;
            }
        };
        if value["type"] == "quit" {
            break;
        }

        let response = serde_json::from_value::<ApiRequest>(value)
            .map_err(AdviceError::from)
            .and_then(|request| dispatch(&request, config, None));
        match response {
            Ok(value) => writeln!(stdout, "{value}")?,
            Err(e) => {
                log::warn!("ipc: request failed: {e}");
                writeln!(stdout, "{}", serde_json::json!({ "error": e.to_string() }))?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn print_summary(profile: &HouseholdProfile, config: &AdviceConfig) {
    let recommended = recommend_investments(profile, config);
    let calculations = recommended
        .iter()
        .map(|inv| compute_roi(inv, None, &config.energy_prices))
        .collect();
    let portfolio = aggregate(calculations);
    let subsidies = recommend_subsidies(profile, config.limits.max_subsidies);

    println!("=== HOUSEHOLD ===");
    println!("  build year:   {}", profile.build_year.map(|y| y.to_string()).unwrap_or_else(|| "-".into()));
    println!("  energy label: {}", profile.energy_label);
    println!(
        "  heating:      {}",
        profile.heating.as_ref().map(|h| h.describe()).unwrap_or("-")
    );
    println!("  insulation:   {} measure(s)", profile.insulation_count());
    println!();

    println!("=== RECOMMENDED INVESTMENTS ===");
    for calc in &portfolio.investments {
        let payback = if calc.pays_back() {
            format!("{:.1} yr", calc.payback_years)
        } else {
            "never".into()
        };
        println!(
            "  {:<18} cost {:>10} | {:>8}/yr | payback {:>8} | ROI {:>6.1}%{}",
            calc.investment.name,
            format_euro(calc.total_cost),
            format_euro(calc.annual_savings),
            payback,
            calc.roi_percent,
            if calc.investment.quick_win { "  (quick win)" } else { "" }
        );
    }
    println!("  total cost:       {}", format_euro(portfolio.total_cost));
    println!("  10-year savings:  {}", format_euro(portfolio.total_savings_10y));
    println!("  average payback:  {:.1} yr", portfolio.average_payback_years);
    println!();

    println!("=== SUBSIDIES ===");
    for ranked in &subsidies {
        println!("  [{:>2}] {} - {}", ranked.priority, ranked.subsidy.name, ranked.subsidy.amount);
    }
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    string_arg(args, flag).and_then(|v| v.parse().ok())
}
