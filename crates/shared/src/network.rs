use serde::{Deserialize, Serialize};

use crate::error::{FitError, InstanceError};

/// One network draw: dense 0/1 adjacency (row = nominator, column = nominee)
/// and a binary node attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInstance")]
pub struct NetworkInstance {
    adjacency: Vec<Vec<u8>>,
    attributes: Vec<u8>,
}

#[derive(Deserialize)]
struct RawInstance {
    adjacency: Vec<Vec<u8>>,
    attributes: Vec<u8>,
}

impl TryFrom<RawInstance> for NetworkInstance {
    type Error = InstanceError;

    fn try_from(raw: RawInstance) -> Result<Self, Self::Error> {
        NetworkInstance::new(raw.adjacency, raw.attributes)
    }
}

impl NetworkInstance {
    pub fn new(adjacency: Vec<Vec<u8>>, attributes: Vec<u8>) -> Result<Self, InstanceError> {
        let size = adjacency.len();
        if let Some((row, r)) = adjacency.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(InstanceError::NotSquare {
                row,
                len: r.len(),
                size,
            });
        }
        if attributes.len() != size {
            return Err(InstanceError::AttributeLength {
                attributes: attributes.len(),
                nodes: size,
            });
        }
        Ok(Self {
            adjacency,
            attributes,
        })
    }

    /// Builds an instance from a directed edge list over `attributes.len()` nodes.
    pub fn from_edges(attributes: Vec<u8>, edges: &[(usize, usize)]) -> Result<Self, InstanceError> {
        let n = attributes.len();
        let mut adjacency = vec![vec![0u8; n]; n];
        for &(i, j) in edges {
            if i >= n || j >= n {
                return Err(InstanceError::NodeOutOfRange {
                    node: i.max(j),
                    size: n,
                });
            }
            adjacency[i][j] = 1;
        }
        Self::new(adjacency, attributes)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.attributes.len()
    }

    #[inline]
    pub fn link(&self, i: usize, j: usize) -> bool {
        i != j && self.adjacency[i][j] != 0
    }

    #[inline]
    pub fn member(&self, i: usize) -> bool {
        self.attributes[i] != 0
    }

    pub fn adjacency(&self) -> &[Vec<u8>] {
        &self.adjacency
    }

    pub fn attributes(&self) -> &[u8] {
        &self.attributes
    }
}

/// One empirical network and its draws. Draw 0 is observed, the rest simulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleEntry {
    pub draws: Vec<NetworkInstance>,
}

impl EnsembleEntry {
    pub fn new(observed: NetworkInstance, simulated: Vec<NetworkInstance>) -> Self {
        let mut draws = Vec::with_capacity(simulated.len() + 1);
        draws.push(observed);
        draws.extend(simulated);
        Self { draws }
    }

    pub fn observed(&self) -> Option<&NetworkInstance> {
        self.draws.first()
    }

    pub fn simulated(&self) -> &[NetworkInstance] {
        self.draws.get(1..).unwrap_or(&[])
    }

    pub fn n_draws(&self) -> usize {
        self.draws.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ensemble {
    pub networks: Vec<EnsembleEntry>,
}

impl Ensemble {
    pub fn new(networks: Vec<EnsembleEntry>) -> Self {
        Self { networks }
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Checks that every entry has an observed draw and that every simulated
    /// draw preserves the observed size.
    pub fn validate(&self) -> Result<(), FitError> {
        for (idx, entry) in self.networks.iter().enumerate() {
            let network_id = idx + 1;
            let expected = entry
                .observed()
                .ok_or(FitError::MissingDraw { network_id })?
                .size();
            for (draw_index, draw) in entry.draws.iter().enumerate().skip(1) {
                if draw.size() != expected {
                    return Err(FitError::SizeInconsistency {
                        network_id,
                        draw_index,
                        expected,
                        found: draw.size(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Checks draw 0 of every entry against the empirical baseline.
    pub fn check_baseline(&self, baseline: &Baseline) -> Result<(), FitError> {
        baseline.validate()?;
        if baseline.num_nets != self.len() {
            return Err(FitError::BaselineCount {
                expected: baseline.num_nets,
                found: self.len(),
            });
        }
        for (idx, (entry, observed)) in self.networks.iter().zip(&baseline.observed).enumerate() {
            let network_id = idx + 1;
            let draw0 = entry.observed().ok_or(FitError::MissingDraw { network_id })?;
            if draw0.size() != baseline.sizes[idx] {
                return Err(FitError::SizeInconsistency {
                    network_id,
                    draw_index: 0,
                    expected: baseline.sizes[idx],
                    found: draw0.size(),
                });
            }
            if draw0.attributes() != observed.attributes() {
                return Err(FitError::BaselineMismatch {
                    network_id,
                    reason: "attributes differ".to_string(),
                });
            }
            if draw0.adjacency() != observed.adjacency() {
                return Err(FitError::BaselineMismatch {
                    network_id,
                    reason: "adjacency differs".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Assembles an ensemble from replicate-only simulation output, taking draw 0
    /// of every entry from the baseline.
    pub fn with_baseline(
        baseline: &Baseline,
        replicates: Vec<Vec<NetworkInstance>>,
    ) -> Result<Self, FitError> {
        baseline.validate()?;
        if replicates.len() != baseline.num_nets {
            return Err(FitError::BaselineCount {
                expected: baseline.num_nets,
                found: replicates.len(),
            });
        }
        let networks = baseline
            .observed
            .iter()
            .cloned()
            .zip(replicates)
            .map(|(observed, simulated)| EnsembleEntry::new(observed, simulated))
            .collect();
        Ok(Self { networks })
    }
}

/// Empirical companion to an ensemble: network count, sizes and the observed draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub num_nets: usize,
    pub sizes: Vec<usize>,
    pub observed: Vec<NetworkInstance>,
}

impl Baseline {
    pub fn validate(&self) -> Result<(), FitError> {
        if self.sizes.len() != self.num_nets || self.observed.len() != self.num_nets {
            return Err(FitError::BaselineCount {
                expected: self.num_nets,
                found: self.sizes.len().min(self.observed.len()),
            });
        }
        for (idx, (size, observed)) in self.sizes.iter().zip(&self.observed).enumerate() {
            if observed.size() != *size {
                return Err(FitError::SizeInconsistency {
                    network_id: idx + 1,
                    draw_index: 0,
                    expected: *size,
                    found: observed.size(),
                });
            }
        }
        Ok(())
    }

    pub fn total_nodes(&self) -> usize {
        self.sizes.iter().sum()
    }
}
