// Keyword pair statistics: co-occurrence counting and the frequency histogram.

pub mod aggregate;
pub mod histogram;

pub use aggregate::{
    record_pairs, KeywordPair, PairAggregator, PairFrequencyTable, RetainedPair,
    DEFAULT_RETENTION_THRESHOLD,
};
pub use histogram::{FrequencyHistogram, HistogramBucket};
