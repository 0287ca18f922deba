use netfit_shared::config::MixingColumns;
use netfit_shared::error::FitError;
use netfit_shared::result::{MixingCounts, MixingShares, MixingSummary};

use crate::aggregate::{across_networks, collapse, Center};
use crate::table::{StatisticTable, View};

#[inline]
fn percent(count: f64, total: f64) -> f64 {
    if total == 0.0 {
        f64::NAN
    } else {
        100.0 * count / total
    }
}

/// Row-normalizes aggregated counts: each nominator row sums to 100.
pub fn row_shares(counts: &MixingCounts) -> MixingShares {
    let member_row = counts.ss + counts.sn;
    let other_row = counts.ns + counts.nn;
    MixingShares {
        ss: percent(counts.ss, member_row),
        sn: percent(counts.sn, member_row),
        ns: percent(counts.ns, other_row),
        nn: percent(counts.nn, other_row),
    }
}

/// Size-weighted raw counts for one view. Counts are aggregated before any
/// normalization.
pub fn aggregate_counts(
    table: &StatisticTable,
    view: View,
    columns: &MixingColumns,
) -> Result<MixingCounts, FitError> {
    let weighted = |label: &str| -> Result<f64, FitError> {
        let column = table.column(label)?;
        Ok(across_networks(&collapse(table, view, column, Center::Mean)))
    };
    Ok(MixingCounts {
        nn: weighted(columns.nn.as_str())?,
        ns: weighted(columns.ns.as_str())?,
        sn: weighted(columns.sn.as_str())?,
        ss: weighted(columns.ss.as_str())?,
    })
}

pub fn mixing_summary(
    table: &StatisticTable,
    columns: &MixingColumns,
) -> Result<MixingSummary, FitError> {
    let model = aggregate_counts(table, View::Simulated, columns)?;
    let data = aggregate_counts(table, View::Observed, columns)?;
    Ok(MixingSummary {
        model_shares: row_shares(&model),
        model,
        data_shares: row_shares(&data),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::StatisticRow;
    use netfit_shared::schema::StatSchema;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_row_shares_scenario() {
        let shares = row_shares(&MixingCounts {
            nn: 40.0,
            ns: 20.0,
            sn: 15.0,
            ss: 50.0,
        });
        assert!((shares.ss - 100.0 * 50.0 / 65.0).abs() < EPS);
        assert!((shares.sn - 100.0 * 15.0 / 65.0).abs() < EPS);
        assert!((shares.ss - 76.923).abs() < 1e-3);
        assert!((shares.ss + shares.sn - 100.0).abs() < EPS);
        assert!((shares.ns + shares.nn - 100.0).abs() < EPS);
    }

    #[test]
    fn test_empty_row_is_nan() {
        let shares = row_shares(&MixingCounts {
            nn: 3.0,
            ns: 1.0,
            sn: 0.0,
            ss: 0.0,
        });
        assert!(shares.ss.is_nan());
        assert!(shares.sn.is_nan());
        assert_eq!(shares.nn, 75.0);
    }

    fn row(network_id: usize, network_size: usize, draw_index: usize, c: [f64; 4]) -> StatisticRow {
        StatisticRow {
            network_id,
            network_size,
            draw_index,
            values: c.to_vec(),
        }
    }

    #[test]
    fn test_counts_aggregate_before_normalizing() {
        let mut table = StatisticTable::new(StatSchema::new(["nn", "ns", "sn", "ss"]));
        table.append(vec![
            row(1, 10, 0, [1.0, 1.0, 1.0, 9.0]),
            row(1, 10, 1, [1.0, 1.0, 1.0, 9.0]),
        ]);
        table.append(vec![
            row(2, 30, 0, [1.0, 1.0, 3.0, 1.0]),
            row(2, 30, 1, [1.0, 1.0, 3.0, 1.0]),
        ]);
        let summary = mixing_summary(&table, &MixingColumns::default()).unwrap();

        // ss = (10*9 + 30*1)/40 = 3, sn = (10*1 + 30*3)/40 = 2.5
        assert!((summary.data.ss - 3.0).abs() < EPS);
        assert!((summary.data.sn - 2.5).abs() < EPS);
        assert!((summary.data_shares.ss - 100.0 * 3.0 / 5.5).abs() < EPS);

        // averaging per-network shares would give (10*90 + 30*25)/40 = 41.25
        assert!((summary.data_shares.ss - 41.25).abs() > 1.0);
        assert_eq!(summary.model, summary.data);
    }

    #[test]
    fn test_missing_column() {
        let table = StatisticTable::new(StatSchema::new(["nn", "ns", "sn"]));
        assert_eq!(
            mixing_summary(&table, &MixingColumns::default()).unwrap_err(),
            FitError::UnknownStatistic {
                label: "ss".to_string()
            }
        );
    }
}
