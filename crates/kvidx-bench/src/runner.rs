use crate::{config::Config, latency::LatencyClient};
use kvidx::{
    entity::{EntityId, Record},
    index::{ExecMode, IndexError, IndexMaintainer},
    model::EntityModel,
    registry::IndexRegistry,
    store::{MemoryStore, StoreStats},
    value::Value,
};
use serde::Serialize;
use std::time::{Duration, Instant};

///
/// RunResult
///
/// One tier/mode/operation measurement.
///

#[derive(Clone, Debug, Serialize)]
pub struct RunResult {
    pub tier: &'static str,
    pub indices: usize,
    pub op: &'static str,
    pub mode: &'static str,
    pub entities: u32,
    pub elapsed_ms: f64,
    pub ops_per_sec: f64,
    pub round_trips: u64,
    pub commands: u64,
}

/// Run every tier under both execution modes: flush the store, create the
/// configured number of entities, and time the maintenance calls. The delete
/// path is timed separately against the freshly created state.
pub fn run_all(
    config: &Config,
    models: &[&'static EntityModel],
) -> Result<Vec<RunResult>, IndexError> {
    let mut registry = IndexRegistry::new();
    for &model in models {
        registry.register(model);
    }
    let maintainer = IndexMaintainer::new(&registry);
    let delay = Duration::from_micros(config.latency_us);

    let mut results = Vec::new();
    for &model in models {
        let mut client = LatencyClient::new(MemoryStore::new(), delay);

        for mode in [ExecMode::PerCommand, ExecMode::Pipelined] {
            client.inner_mut().flush();
            client.inner_mut().reset_stats();

            let entities = build_entities(model, config.entities);

            let started = Instant::now();
            for entity in &entities {
                maintainer.add_to_indices(&mut client, entity, mode)?;
            }
            results.push(measure(
                model,
                "create",
                mode,
                config.entities,
                started.elapsed(),
                client.inner().stats(),
            ));

            if config.include_delete {
                client.inner_mut().reset_stats();

                let started = Instant::now();
                for entity in &entities {
                    maintainer.remove_from_indices(&mut client, entity, mode)?;
                }
                results.push(measure(
                    model,
                    "delete",
                    mode,
                    config.entities,
                    started.elapsed(),
                    client.inner().stats(),
                ));
            }
        }
    }

    Ok(results)
}

/// Entities for one run: sequential ids, every indexed attribute set to
/// `j % 7` so index sets accumulate shared members across entities.
fn build_entities(model: &EntityModel, count: u32) -> Vec<Record> {
    (0..count)
        .map(|j| {
            let mut record = Record::new(model.entity_name, EntityId::new(j.to_string()));
            for attribute in model.indexed {
                record.set(attribute.name, Value::Uint(u64::from(j % 7)));
            }
            record
        })
        .collect()
}

fn measure(
    model: &EntityModel,
    op: &'static str,
    mode: ExecMode,
    entities: u32,
    elapsed: Duration,
    stats: StoreStats,
) -> RunResult {
    let secs = elapsed.as_secs_f64();
    RunResult {
        tier: model.entity_name,
        indices: model.indexed.len(),
        op,
        mode: mode.label(),
        entities,
        elapsed_ms: secs * 1_000.0,
        ops_per_sec: if secs > 0.0 {
            f64::from(entities) / secs
        } else {
            0.0
        },
        round_trips: stats.round_trips,
        commands: stats.commands,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiers;
    use clap::Parser;

    fn test_config(args: &[&str]) -> Config {
        let mut argv = vec!["kvidx-bench"];
        argv.extend_from_slice(args);
        Config::parse_from(argv)
    }

    #[test]
    fn run_counts_round_trips_per_mode() {
        let config = test_config(&["--entities", "10", "--tiers", "2"]);
        let models = tiers::models_for(&config.tiers).unwrap();
        let results = run_all(&config, &models).unwrap();

        assert_eq!(results.len(), 2);
        let per_command = &results[0];
        let pipelined = &results[1];

        // Two indexed attributes: 4 commands per entity.
        assert_eq!(per_command.round_trips, 40);
        assert_eq!(per_command.commands, 40);
        assert_eq!(pipelined.round_trips, 10);
        assert_eq!(pipelined.commands, 40);
    }

    #[test]
    fn delete_runs_are_reported_when_requested() {
        let config = test_config(&["--entities", "5", "--tiers", "1", "--include-delete"]);
        let models = tiers::models_for(&config.tiers).unwrap();
        let results = run_all(&config, &models).unwrap();

        assert_eq!(results.len(), 4);
        assert_eq!(results[1].op, "delete");
        // Per entity: SMEMBERS + one SREM per recorded key + DEL.
        assert_eq!(results[1].round_trips, 5 * 3);
    }
}
