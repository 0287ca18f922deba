use serde::{Deserialize, Serialize};

// Upper bound on the default extraction pool
pub const MAX_DEFAULT_WORKERS: usize = 8;

// Columns of the reference extractor that feed the mixing matrix
pub const MIXING_NN: &str = "nn";
pub const MIXING_NS: &str = "ns";
pub const MIXING_SN: &str = "sn";
pub const MIXING_SS: &str = "ss";

/// (column, display label, section) for the default moment list.
pub const DEFAULT_MOMENTS: [(&str, &str, Section); 12] = [
    ("prev", "Prevalence", Section::Structure),
    ("density", "Density", Section::Structure),
    ("avg_deg", "Avg degree", Section::Structure),
    ("min_deg", "Min degree", Section::Structure),
    ("max_deg", "Max degree", Section::Structure),
    ("aga", "a_i g_ij a_j / n", Section::Structure),
    ("iagia", "(1-a_i) g_ij (1-a_j) / n", Section::Structure),
    ("two_paths", "Two-paths / n", Section::Structure),
    ("tri", "Triangles / n", Section::Structure),
    ("hi", "HI", Section::Mixing),
    ("chi", "CHI", Section::Mixing),
    ("fsi", "FSI", Section::Mixing),
];

/// Report block a moment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Structure,
    Mixing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentSpec {
    pub column: String,
    pub label: String,
    pub section: Section,
}

impl MomentSpec {
    pub fn new(column: &str, label: &str, section: Section) -> Self {
        Self {
            column: column.to_string(),
            label: label.to_string(),
            section,
        }
    }
}

/// Column names of the four mixing-matrix link counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixingColumns {
    pub nn: String,
    pub ns: String,
    pub sn: String,
    pub ss: String,
}

impl Default for MixingColumns {
    fn default() -> Self {
        Self {
            nn: MIXING_NN.to_string(),
            ns: MIXING_NS.to_string(),
            sn: MIXING_SN.to_string(),
            ss: MIXING_SS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    pub moments: Vec<MomentSpec>,
    pub mixing: MixingColumns,
    /// Extraction workers; `None` picks `min(available, MAX_DEFAULT_WORKERS)`.
    pub workers: Option<usize>,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            moments: DEFAULT_MOMENTS
                .iter()
                .map(|&(column, label, section)| MomentSpec::new(column, label, section))
                .collect(),
            mixing: MixingColumns::default(),
            workers: None,
        }
    }
}

impl FitConfig {
    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        if workers.is_some() {
            self.workers = workers;
        }
        self
    }

    pub fn moments_in(&self, section: Section) -> impl Iterator<Item = &MomentSpec> {
        self.moments.iter().filter(move |m| m.section == section)
    }
}
