use crate::extract::ExtractionPolicy;
use crate::filter::ScanStats;
use crate::percentile::{PercentileResult, Percentiles};
use crate::publish::{PublishStats, ReadingFormat, ReadingSink};
use crate::scan::DEFAULT_MAX_LINE_BYTES;
use crate::verbs::VerbSet;
use std::path::PathBuf;
use std::sync::Arc;

/// Matches buffered between scanner and aggregator before the scanner blocks.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 10_000;

/// Everything one analysis run needs.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub input: PathBuf,
    pub verbs: VerbSet,
    pub percentiles: Percentiles,
    pub extraction: ExtractionPolicy,
    pub max_line_bytes: usize,
    pub channel_capacity: usize,
}

impl AnalyzeRequest {
    pub fn new(input: impl Into<PathBuf>, verbs: VerbSet) -> Self {
        Self {
            input: input.into(),
            verbs,
            percentiles: Percentiles::default(),
            extraction: ExtractionPolicy::default(),
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Optional side channel receiving every parsed reading.
pub struct Publisher {
    pub format: ReadingFormat,
    pub sink: Box<dyn ReadingSink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub result: PercentileResult,
    /// Per-verb counts in verb-set order, duplicates listed once.
    pub verb_counts: Vec<(Arc<str>, usize)>,
    pub scan: ScanStats,
    /// Matches dropped because they carried no readable value.
    pub skipped: u64,
    pub publish: Option<PublishStats>,
}
