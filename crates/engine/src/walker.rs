use log::{debug, info};
use rayon::prelude::*;

use netfit_extractor::StatisticExtractor;
use netfit_shared::config::MAX_DEFAULT_WORKERS;
use netfit_shared::error::FitError;
use netfit_shared::network::{Ensemble, EnsembleEntry};

use crate::table::{StatisticRow, StatisticTable};

/// Extracts one row per draw of `entry`. Any failing draw fails the whole entry.
pub fn walk_entry<E>(
    network_id: usize,
    entry: &EnsembleEntry,
    extractor: &E,
) -> Result<Vec<StatisticRow>, FitError>
where
    E: StatisticExtractor + ?Sized,
{
    let network_size = entry
        .observed()
        .ok_or(FitError::MissingDraw { network_id })?
        .size();
    let schema = extractor.schema();

    let mut rows = Vec::with_capacity(entry.n_draws());
    for (draw_index, draw) in entry.draws.iter().enumerate() {
        if draw.size() != network_size {
            return Err(FitError::SizeInconsistency {
                network_id,
                draw_index,
                expected: network_size,
                found: draw.size(),
            });
        }
        let stats = extractor
            .extract(draw)
            .map_err(|source| FitError::Extraction {
                network_id,
                draw_index,
                source,
            })?;
        if !schema.conforms(&stats) {
            return Err(FitError::ShapeMismatch {
                network_id,
                draw_index,
                expected: schema.labels().to_vec(),
                found: stats.labels,
            });
        }
        rows.push(StatisticRow {
            network_id,
            network_size,
            draw_index,
            values: stats.into_values(),
        });
    }

    debug!(
        "network {}: size {}, {} simulated draws",
        network_id,
        network_size,
        rows.len() - 1
    );
    Ok(rows)
}

fn assemble<E>(extractor: &E, blocks: Vec<Vec<StatisticRow>>) -> StatisticTable
where
    E: StatisticExtractor + ?Sized,
{
    let mut table = StatisticTable::new(extractor.schema().clone());
    for block in blocks {
        table.append(block);
    }
    table
}

/// Walks the ensemble on the calling thread.
pub fn walk<E>(ensemble: &Ensemble, extractor: &E) -> Result<StatisticTable, FitError>
where
    E: StatisticExtractor + ?Sized,
{
    let blocks = ensemble
        .networks
        .iter()
        .enumerate()
        .map(|(idx, entry)| walk_entry(idx + 1, entry, extractor))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(assemble(extractor, blocks))
}

/// Walks the ensemble with entries fanned out over a worker pool. Blocks are
/// appended in entry order once every entry has finished.
pub fn walk_parallel<E>(
    ensemble: &Ensemble,
    extractor: &E,
    n_workers: Option<usize>,
) -> anyhow::Result<StatisticTable>
where
    E: StatisticExtractor + ?Sized,
{
    let n_threads = n_workers.unwrap_or_else(|| rayon::current_num_threads().min(MAX_DEFAULT_WORKERS));
    let pool = rayon::ThreadPoolBuilder::new().num_threads(n_threads).build()?;

    info!(
        "extracting statistics for {} networks on {} workers",
        ensemble.len(),
        n_threads
    );

    let blocks: Result<Vec<Vec<StatisticRow>>, FitError> = pool.install(|| {
        ensemble
            .networks
            .par_iter()
            .enumerate()
            .map(|(idx, entry)| walk_entry(idx + 1, entry, extractor))
            .collect()
    });

    Ok(assemble(extractor, blocks?))
}
