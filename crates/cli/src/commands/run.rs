use log::info;

use netfit_engine::{runner, walker};
use netfit_extractor::NetStats;

use crate::{input, output};

pub fn run(
    ensemble_path: &str,
    baseline: Option<&str>,
    replicates_only: bool,
    config_path: Option<&str>,
    workers: usize,
    json: bool,
    describe: bool,
) -> anyhow::Result<()> {
    let ensemble = input::load_ensemble(ensemble_path, baseline, replicates_only)?;
    let config = input::load_config(config_path, workers)?;
    let extractor = NetStats::new();

    info!("loaded {} networks from {}", ensemble.len(), ensemble_path);

    let start = std::time::Instant::now();
    let table = walker::walk_parallel(&ensemble, &extractor, config.workers)?;
    let report = runner::summarize(&table, &config)?;
    let elapsed = start.elapsed();

    if json {
        output::print_json(&report)?;
    } else {
        output::print_report(&report, elapsed);
        if describe {
            output::print_describe(&table, &config)?;
        }
    }
    Ok(())
}
