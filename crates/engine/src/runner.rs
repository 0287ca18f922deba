use log::{info, warn};

use netfit_extractor::StatisticExtractor;
use netfit_shared::config::{FitConfig, MomentSpec};
use netfit_shared::error::FitError;
use netfit_shared::network::Ensemble;
use netfit_shared::result::{FitReport, MomentSummary};

use crate::aggregate::{across_networks, collapse, Center};
use crate::mixing::mixing_summary;
use crate::table::{StatisticTable, View};
use crate::walker;

fn weighted(table: &StatisticTable, view: View, column: usize, center: Center, label: &str) -> f64 {
    let value = across_networks(&collapse(table, view, column, center));
    if value.is_nan() {
        warn!("empty weight base for '{}' ({} draws, {:?})", label, view.name(), center);
    }
    value
}

pub fn summarize_moment(table: &StatisticTable, spec: &MomentSpec) -> Result<MomentSummary, FitError> {
    let column = table.column(&spec.column)?;
    Ok(MomentSummary {
        column: spec.column.clone(),
        label: spec.label.clone(),
        section: spec.section,
        model_mean: weighted(table, View::Simulated, column, Center::Mean, &spec.column),
        model_median: weighted(table, View::Simulated, column, Center::Median, &spec.column),
        data: weighted(table, View::Observed, column, Center::Mean, &spec.column),
    })
}

/// Aggregates a complete table. Reads only; repeated calls give identical reports.
pub fn summarize(table: &StatisticTable, config: &FitConfig) -> Result<FitReport, FitError> {
    let moments = config
        .moments
        .iter()
        .map(|spec| summarize_moment(table, spec))
        .collect::<Result<Vec<_>, _>>()?;
    let mixing = mixing_summary(table, &config.mixing)?;
    Ok(FitReport {
        n_networks: table.networks().len(),
        n_simulated_draws: table.view(View::Simulated).count(),
        total_nodes: table.total_nodes(),
        moments,
        mixing,
    })
}

/// Walks the ensemble on a worker pool, then aggregates once every row exists.
pub fn run_fit<E>(ensemble: &Ensemble, extractor: &E, config: &FitConfig) -> anyhow::Result<FitReport>
where
    E: StatisticExtractor + ?Sized,
{
    let table = walker::walk_parallel(ensemble, extractor, config.workers)?;
    info!(
        "statistic table: {} rows over {} networks",
        table.len(),
        table.networks().len()
    );
    Ok(summarize(&table, config)?)
}
