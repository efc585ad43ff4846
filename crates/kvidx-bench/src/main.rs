mod config;
mod latency;
mod report;
mod runner;
mod tiers;

use clap::Parser;
use config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::parse();

    if config.list_tiers {
        println!("Available tiers:");
        for (i, name) in tiers::TIER_NAMES.iter().enumerate() {
            println!("  {:>2}  {name}", i + 1);
        }
        return ExitCode::SUCCESS;
    }

    let models = match tiers::models_for(&config.tiers) {
        Ok(models) => models,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if !config.json {
        println!("kvidx benchmark");
        println!("  entities per run:  {}", config.entities);
        println!("  latency per trip:  {}us", config.latency_us);
        println!(
            "  tiers:             {}",
            config
                .tiers
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
    }

    match runner::run_all(&config, &models) {
        Ok(results) => {
            if config.json {
                report::print_json(&results, config.latency_us);
            } else {
                report::print_table(&results);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("benchmark aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
