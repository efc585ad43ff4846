use crate::runner::RunResult;
use serde::Serialize;

///
/// Report
///
/// JSON envelope for one benchmark run.
///

#[derive(Debug, Serialize)]
struct Report<'a> {
    latency_us: u64,
    results: &'a [RunResult],
}

pub fn print_json(results: &[RunResult], latency_us: u64) {
    let report = Report {
        latency_us,
        results,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize report: {err}"),
    }
}

pub fn print_table(results: &[RunResult]) {
    println!(
        "{:<14} {:>7} {:<8} {:<12} {:>10} {:>12} {:>10} {:>12} {:>10}",
        "tier", "indices", "op", "mode", "entities", "elapsed_ms", "ops/s", "round_trips", "commands"
    );

    for result in results {
        println!(
            "{:<14} {:>7} {:<8} {:<12} {:>10} {:>12.2} {:>10.0} {:>12} {:>10}",
            result.tier,
            result.indices,
            result.op,
            result.mode,
            result.entities,
            result.elapsed_ms,
            result.ops_per_sec,
            result.round_trips,
            result.commands,
        );
    }
}
