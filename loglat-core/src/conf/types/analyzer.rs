use crate::extract::ExtractionPolicy;
use crate::percentile::DEFAULT_PERCENTILES;
use crate::pipeline::DEFAULT_CHANNEL_CAPACITY;
use crate::scan::DEFAULT_MAX_LINE_BYTES;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Percentile ranks to report, each in 0..=100.
    pub percentiles: Vec<u32>,

    /// Matches buffered between the scanner and the aggregator.
    pub channel_capacity: usize,

    /// Longest accepted input line in bytes. Raise for pathological logs.
    pub max_line_bytes: usize,

    pub extraction: ExtractionPolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            percentiles: DEFAULT_PERCENTILES.to_vec(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
            extraction: ExtractionPolicy::default(),
        }
    }
}
