use crate::extract::{ExtractError, ExtractionPolicy};
use crate::filter::LineMatch;
use crate::verbs::VerbSet;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Running accumulation of every reading seen during one scan.
///
/// Owned by the consumer side of the pipeline only. `values.len()` always
/// equals the sum of `counts`.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    values: Vec<f32>,
    sum: f32,
    counts: HashMap<Arc<str>, usize>,
    skipped: u64,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successfully extracted reading for `verb`.
    pub fn record(&mut self, verb: &Arc<str>, value: f32) {
        self.values.push(value);
        self.sum += value;
        *self.counts.entry(verb.clone()).or_insert(0) += 1;
    }

    /// Extract the reading from `m` and fold it in.
    ///
    /// A line without a usable reading is logged and counted as skipped; it
    /// leaves values, sum and counts untouched.
    pub fn ingest(&mut self, m: &LineMatch, policy: &ExtractionPolicy) -> Result<f32, ExtractError> {
        match policy.extract(&m.line) {
            Ok(value) => {
                self.record(&m.verb, value);
                Ok(value)
            }
            Err(e) => {
                self.skipped += 1;
                warn!(
                    token = e.token().unwrap_or(""),
                    line = %m.line,
                    verb = %m.verb,
                    error = %e,
                    "skipping line without a latency reading"
                );
                Err(e)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn sum(&self) -> f32 {
        self.sum
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Matches recorded for `verb`; zero when never seen.
    pub fn count(&self, verb: &str) -> usize {
        self.counts.get(verb).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &HashMap<Arc<str>, usize> {
        &self.counts
    }

    /// Per-verb counts in the order the verbs were given, each verb once.
    pub fn counts_in_order(&self, verbs: &VerbSet) -> Vec<(Arc<str>, usize)> {
        verbs
            .distinct()
            .into_iter()
            .map(|verb| {
                let n = self.count(&verb);
                (verb, n)
            })
            .collect()
    }

    pub(crate) fn into_values(self) -> (Vec<f32>, f32) {
        (self.values, self.sum)
    }
}
