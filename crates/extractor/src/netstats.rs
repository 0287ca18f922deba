use netfit_shared::config::{MIXING_NN, MIXING_NS, MIXING_SN, MIXING_SS};
use netfit_shared::error::ExtractError;
use netfit_shared::network::NetworkInstance;
use netfit_shared::schema::{StatSchema, StatVector};

use crate::extractor::StatisticExtractor;
use crate::homophily::homophily;
use crate::mixing::mixing_counts;
use crate::structure::structure;

pub const NETSTATS_LABELS: [&str; 16] = [
    "prev",
    "density",
    "avg_deg",
    "min_deg",
    "max_deg",
    "aga",
    "iagia",
    "two_paths",
    "tri",
    "hi",
    "chi",
    "fsi",
    MIXING_NN,
    MIXING_NS,
    MIXING_SN,
    MIXING_SS,
];

/// Reference extractor: structural moments, homophily indices and the
/// mixing-matrix counts of a binary attribute.
#[derive(Debug, Clone)]
pub struct NetStats {
    schema: StatSchema,
}

impl Default for NetStats {
    fn default() -> Self {
        Self {
            schema: StatSchema::new(NETSTATS_LABELS),
        }
    }
}

impl NetStats {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatisticExtractor for NetStats {
    fn schema(&self) -> &StatSchema {
        &self.schema
    }

    fn extract(&self, network: &NetworkInstance) -> Result<StatVector, ExtractError> {
        if network.size() == 0 {
            return Err(ExtractError::EmptyNetwork);
        }
        let mixing = mixing_counts(network);
        let mut values = Vec::with_capacity(NETSTATS_LABELS.len());
        values.extend(structure(network).values());
        values.extend(homophily(network).values());
        values.extend([mixing.nn, mixing.ns, mixing.sn, mixing.ss]);
        Ok(self.schema.vector(values))
    }
}
