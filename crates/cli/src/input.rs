use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

use netfit_shared::config::FitConfig;
use netfit_shared::network::{Baseline, Ensemble};

pub fn read_json<T: DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let text = fs::read_to_string(Path::new(path)).with_context(|| format!("reading {}", path))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path))
}

/// Loads the ensemble, optionally checking or completing draw 0 from a baseline.
pub fn load_ensemble(
    path: &str,
    baseline: Option<&str>,
    replicates_only: bool,
) -> anyhow::Result<Ensemble> {
    let ensemble: Ensemble = read_json(path)?;
    let baseline: Option<Baseline> = baseline.map(read_json::<Baseline>).transpose()?;

    match baseline {
        Some(baseline) if replicates_only => {
            let replicates = ensemble.networks.into_iter().map(|e| e.draws).collect();
            Ok(Ensemble::with_baseline(&baseline, replicates)?)
        }
        Some(baseline) => {
            ensemble.check_baseline(&baseline)?;
            Ok(ensemble)
        }
        None => Ok(ensemble),
    }
}

pub fn load_config(path: Option<&str>, workers: usize) -> anyhow::Result<FitConfig> {
    let config = match path {
        Some(path) => read_json(path)?,
        None => FitConfig::default(),
    };
    let workers = if workers == 0 { None } else { Some(workers) };
    Ok(config.with_workers(workers))
}
