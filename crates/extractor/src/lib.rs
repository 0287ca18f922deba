pub mod extractor;
pub mod homophily;
pub mod mixing;
pub mod netstats;
pub mod structure;

pub use extractor::{FnExtractor, StatFn, StatisticExtractor};
pub use netstats::{NetStats, NETSTATS_LABELS};
