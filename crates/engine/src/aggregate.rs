//! Two-pass aggregation: collapse a column within each network, then weight
//! the per-network values across networks by network size.
//!
//! Null values are `NaN`. They are skipped within a network and masked out of
//! both numerator and denominator across networks; an empty weight base gives
//! `NaN` rather than zero.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::table::{StatisticTable, View};

/// Central tendency used for the within-network collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Center {
    Mean,
    Median,
}

/// A per-network scalar together with the network's weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NetworkValue {
    pub network_id: usize,
    pub network_size: usize,
    pub value: f64,
}

#[inline]
fn is_null(value: f64) -> bool {
    value.is_nan()
}

pub fn mean(values: &[f64]) -> f64 {
    let (sum, count) = values
        .iter()
        .filter(|v| !is_null(**v))
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

pub fn median(values: &[f64]) -> f64 {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !is_null(*v)).collect();
    if sorted.is_empty() {
        return f64::NAN;
    }
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

fn grouped(table: &StatisticTable, view: View, column: usize) -> BTreeMap<usize, (usize, Vec<f64>)> {
    let mut groups: BTreeMap<usize, (usize, Vec<f64>)> = BTreeMap::new();
    for row in table.view(view) {
        groups
            .entry(row.network_id)
            .or_insert_with(|| (row.network_size, Vec::new()))
            .1
            .push(row.values[column]);
    }
    groups
}

/// Per-network mean or median of `column` over the rows of `view`.
/// Networks without rows in the view are absent from the output.
pub fn collapse(table: &StatisticTable, view: View, column: usize, center: Center) -> Vec<NetworkValue> {
    grouped(table, view, column)
        .into_iter()
        .map(|(network_id, (network_size, values))| NetworkValue {
            network_id,
            network_size,
            value: match center {
                Center::Mean => mean(&values),
                Center::Median => median(&values),
            },
        })
        .collect()
}

/// `Σ w·v / Σ w·notnull(v)` over `(weight, value)` pairs.
pub fn weighted_average<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (num, den) = pairs
        .into_iter()
        .filter(|&(_, v)| !is_null(v))
        .fold((0.0, 0.0), |(num, den), (w, v)| (num + w * v, den + w));
    if den == 0.0 {
        f64::NAN
    } else {
        num / den
    }
}

/// Weighted median over `(weight, value)` pairs: the smallest value whose
/// cumulative weight exceeds half the total. When the cumulative weight lands
/// exactly on the half, the midpoint with the next value is returned.
pub fn weighted_median<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut items: Vec<(f64, f64)> = pairs
        .into_iter()
        .filter(|&(w, v)| !is_null(v) && w > 0.0)
        .collect();
    if items.is_empty() {
        return f64::NAN;
    }
    items.sort_by(|a, b| a.1.total_cmp(&b.1));

    let total: f64 = items.iter().map(|&(w, _)| w).sum();
    let half = total / 2.0;
    let tol = total * 1e-12;
    let mut cumulative = 0.0;
    for (idx, &(w, v)) in items.iter().enumerate() {
        cumulative += w;
        if (cumulative - half).abs() <= tol {
            return match items.get(idx + 1) {
                Some(&(_, next)) => (v + next) / 2.0,
                None => v,
            };
        }
        if cumulative > half {
            return v;
        }
    }
    items[items.len() - 1].1
}

/// Size-weighted average of per-network values.
pub fn across_networks(values: &[NetworkValue]) -> f64 {
    weighted_average(values.iter().map(|v| (v.network_size as f64, v.value)))
}

/// Size-weighted median of per-network values.
pub fn median_across_networks(values: &[NetworkValue]) -> f64 {
    weighted_median(values.iter().map(|v| (v.network_size as f64, v.value)))
}

/// Single-pass size-weighted average over every row of `view`.
pub fn weighted_average_rows(table: &StatisticTable, view: View, column: usize) -> f64 {
    weighted_average(
        table
            .view(view)
            .map(|row| (row.network_size as f64, row.values[column])),
    )
}

/// Null-masked weighted average per group key over `(key, weight, value)` triples.
pub fn weighted_average_by_group<K, I>(items: I) -> BTreeMap<K, f64>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64, f64)>,
{
    let mut sums: BTreeMap<K, (f64, f64)> = BTreeMap::new();
    for (key, w, v) in items {
        let entry = sums.entry(key).or_insert((0.0, 0.0));
        if !is_null(v) {
            entry.0 += w * v;
            entry.1 += w;
        }
    }
    sums.into_iter()
        .map(|(key, (num, den))| (key, if den == 0.0 { f64::NAN } else { num / den }))
        .collect()
}

/// Descriptive statistics of one column within one network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Describe {
    pub network_id: usize,
    pub network_size: usize,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

pub fn describe(table: &StatisticTable, view: View, column: usize) -> Vec<Describe> {
    grouped(table, view, column)
        .into_iter()
        .map(|(network_id, (network_size, values))| {
            let present: Vec<f64> = values.into_iter().filter(|v| !is_null(*v)).collect();
            let count = present.len();
            let mean = mean(&present);
            let std = if count > 1 {
                let ss: f64 = present.iter().map(|v| (v - mean).powi(2)).sum();
                (ss / (count - 1) as f64).sqrt()
            } else {
                f64::NAN
            };
            let min = present.iter().copied().reduce(f64::min).unwrap_or(f64::NAN);
            let max = present.iter().copied().reduce(f64::max).unwrap_or(f64::NAN);
            Describe {
                network_id,
                network_size,
                count,
                mean,
                std,
                min,
                median: median(&present),
                max,
            }
        })
        .collect()
}
