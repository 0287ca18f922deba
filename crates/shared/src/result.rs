use serde::Serialize;

use crate::config::Section;

/// Model-vs-data summary of one statistic. `NaN` marks an empty weight base.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MomentSummary {
    pub column: String,
    pub label: String,
    pub section: Section,
    /// Size-weighted average of per-network means over simulated draws.
    pub model_mean: f64,
    /// Size-weighted average of per-network medians over simulated draws.
    pub model_median: f64,
    /// Size-weighted average of the observed draws.
    pub data: f64,
}

/// Size-weighted link counts, indexed (nominator, nominee) with n = 0, s = 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MixingCounts {
    pub nn: f64,
    pub ns: f64,
    pub sn: f64,
    pub ss: f64,
}

/// Row-normalized percentages of a `MixingCounts`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MixingShares {
    pub ss: f64,
    pub sn: f64,
    pub ns: f64,
    pub nn: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixingSummary {
    pub model: MixingCounts,
    pub model_shares: MixingShares,
    pub data: MixingCounts,
    pub data_shares: MixingShares,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitReport {
    pub n_networks: usize,
    pub n_simulated_draws: usize,
    pub total_nodes: usize,
    pub moments: Vec<MomentSummary>,
    pub mixing: MixingSummary,
}

impl FitReport {
    pub fn section(&self, section: Section) -> impl Iterator<Item = &MomentSummary> {
        self.moments.iter().filter(move |m| m.section == section)
    }

    pub fn moment(&self, column: &str) -> Option<&MomentSummary> {
        self.moments.iter().find(|m| m.column == column)
    }
}
