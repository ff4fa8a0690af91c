use crate::{save_items, BenchmarkConfig, CsvResultSink, ResultRow, ResultSink, Schedule};
use anyhow::{anyhow, Result};
use knapbench_challenges::knapsack::{Challenge, Track};
use knapbench_utils::{cell_seed, jsonify};
use log::{debug, info, warn};
use std::time::Instant;

pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    schedule: Schedule,
    seed: String,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig, seed: String) -> Result<Self> {
        config.validate()?;
        let schedule = Schedule::from_config(&config);
        Ok(Self {
            config,
            schedule,
            seed,
        })
    }

    /// Regenerates the instance for one grid cell.
    pub fn generate_instance(&self, track: &Track) -> Result<Challenge> {
        Challenge::generate_instance_with(
            &cell_seed(&self.seed, track.capacity, track.n_items),
            track,
            &self.config.distribution,
        )
    }

    /// Sweeps capacities (outer) and item counts (inner), running every solver
    /// the schedule admits. Each row goes to `sink` as soon as it is measured.
    pub fn run(&self, sink: &mut dyn ResultSink) -> Result<Vec<ResultRow>> {
        let mut rows = Vec::new();
        for (c_idx, &capacity) in self.config.capacities.iter().enumerate() {
            for &n_items in &self.config.item_counts {
                info!("Processing n={}, C={}...", n_items, capacity);
                let track = Track { n_items, capacity };
                let challenge = self.generate_instance(&track)?;

                if c_idx == 0 {
                    self.maybe_export_items(&challenge);
                }

                for algorithm in self.schedule.applicable(&track) {
                    let start = Instant::now();
                    let output = (algorithm.solve_fn())(&challenge).map_err(|e| {
                        anyhow!("{} failed on n={}, C={}: {}", algorithm, n_items, capacity, e)
                    })?;
                    let time_ms = start.elapsed().as_secs_f64() * 1000.0;

                    if self.config.verify_solutions {
                        challenge.verify_output(&output).map_err(|e| {
                            anyhow!(
                                "{} returned an invalid solution on n={}, C={}: {}",
                                algorithm,
                                n_items,
                                capacity,
                                e
                            )
                        })?;
                    }

                    info!(
                        "  {}: value={:.2}, time={:.2}ms",
                        algorithm, output.value, time_ms
                    );
                    debug!(
                        "  {}: visited_states={}, selected={}",
                        algorithm,
                        output.visited_states,
                        output.solution.num_selected()
                    );

                    let row = ResultRow {
                        algorithm: algorithm.name().to_string(),
                        n_items,
                        capacity,
                        value: output.value,
                        time_ms,
                        visited_states: output.visited_states,
                    };
                    sink.record(&row)?;
                    rows.push(row);
                }
            }
        }
        Ok(rows)
    }

    fn maybe_export_items(&self, challenge: &Challenge) {
        let Some(export) = &self.config.items_export else {
            return;
        };
        if export.n_items != challenge.num_items() {
            return;
        }
        match save_items(&export.path, &challenge.items) {
            Ok(()) => info!(
                "Saved {} items to {}",
                challenge.num_items(),
                export.path.display()
            ),
            Err(e) => warn!("Skipping item export: {}", e),
        }
    }
}

/// Runs a full sweep with results written to `config.results_path`. Fails
/// without measuring anything when the config is invalid or the results file
/// cannot be created.
pub fn run_benchmark(config: BenchmarkConfig) -> Result<Vec<ResultRow>> {
    let seed = config.resolve_seed();
    info!("Seed: {}", seed);
    match jsonify(&config) {
        Ok(json) => info!("Config: {}", json),
        Err(_) => info!("Config: {:?}", config),
    }

    let results_path = config.results_path.clone();
    let runner = BenchmarkRunner::new(config, seed)?;
    let mut sink = CsvResultSink::create(&results_path)?;
    let rows = runner.run(&mut sink)?;
    info!(
        "All benchmarks finished. Results saved to {}",
        results_path.display()
    );
    Ok(rows)
}
