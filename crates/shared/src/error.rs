/// Malformed network instance (rejected at construction).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstanceError {
    #[error("adjacency row {row} has {len} entries, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("attribute vector has {attributes} entries for {nodes} nodes")]
    AttributeLength { attributes: usize, nodes: usize },
    #[error("edge endpoint {node} out of range for {size} nodes")]
    NodeOutOfRange { node: usize, size: usize },
}

/// Failure inside a statistic extractor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractError {
    #[error("network has no nodes")]
    EmptyNetwork,
    #[error("extraction failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    #[error("network {network_id} has no observed draw")]
    MissingDraw { network_id: usize },
    #[error(
        "network {network_id} draw {draw_index}: extractor returned labels {found:?}, schema declares {expected:?}"
    )]
    ShapeMismatch {
        network_id: usize,
        draw_index: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("network {network_id} draw {draw_index}: size {found} differs from observed size {expected}")]
    SizeInconsistency {
        network_id: usize,
        draw_index: usize,
        expected: usize,
        found: usize,
    },
    #[error("network {network_id} draw {draw_index}: {source}")]
    Extraction {
        network_id: usize,
        draw_index: usize,
        #[source]
        source: ExtractError,
    },
    #[error("unknown statistic '{label}'")]
    UnknownStatistic { label: String },
    #[error("baseline describes {expected} networks, ensemble has {found}")]
    BaselineCount { expected: usize, found: usize },
    #[error("network {network_id}: observed draw does not match baseline ({reason})")]
    BaselineMismatch { network_id: usize, reason: String },
}
