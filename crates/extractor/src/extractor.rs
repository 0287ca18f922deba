use netfit_shared::error::ExtractError;
use netfit_shared::network::NetworkInstance;
use netfit_shared::schema::{StatSchema, StatVector};

/// Maps one network draw to a fixed, labelled vector of statistics.
///
/// Implementations must be deterministic and free of side effects: the walker
/// may call them from several threads and never retries a failed call.
pub trait StatisticExtractor: Send + Sync {
    fn schema(&self) -> &StatSchema;

    fn extract(&self, network: &NetworkInstance) -> Result<StatVector, ExtractError>;
}

/// A plain function computing statistic values in schema order.
pub type StatFn = fn(&NetworkInstance) -> Result<Vec<f64>, ExtractError>;

/// Extractor backed by a `StatFn` (no state beyond the declared schema).
#[derive(Clone)]
pub struct FnExtractor {
    schema: StatSchema,
    stat_fn: StatFn,
}

impl FnExtractor {
    pub fn new(schema: StatSchema, stat_fn: StatFn) -> Self {
        Self { schema, stat_fn }
    }
}

impl StatisticExtractor for FnExtractor {
    fn schema(&self) -> &StatSchema {
        &self.schema
    }

    #[inline]
    fn extract(&self, network: &NetworkInstance) -> Result<StatVector, ExtractError> {
        (self.stat_fn)(network).map(|values| self.schema.vector(values))
    }
}
