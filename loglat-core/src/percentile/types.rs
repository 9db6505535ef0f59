use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

pub const DEFAULT_PERCENTILES: [u32; 6] = [0, 10, 50, 90, 99, 100];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("percentile rank {0} is outside 0..=100")]
    OutOfRange(u32),

    #[error("percentile rank {0} is listed more than once")]
    Duplicate(u32),

    #[error("at least one percentile rank is required")]
    Empty,
}

/// Validated set of requested percentile ranks, kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Percentiles {
    ranks: BTreeSet<u32>,
}

impl Percentiles {
    pub fn new(ranks: impl IntoIterator<Item = u32>) -> Result<Self, RankError> {
        let mut set = BTreeSet::new();
        for rank in ranks {
            if rank > 100 {
                return Err(RankError::OutOfRange(rank));
            }
            if !set.insert(rank) {
                return Err(RankError::Duplicate(rank));
            }
        }
        if set.is_empty() {
            return Err(RankError::Empty);
        }
        Ok(Self { ranks: set })
    }

    /// Parse `"10,50,99"`.
    pub fn parse(raw: &str) -> Result<Self, PercentileParseError> {
        let ranks = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<u32>()
                    .map_err(|_| PercentileParseError::NotARank(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(ranks)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ranks.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl Default for Percentiles {
    fn default() -> Self {
        Self {
            ranks: DEFAULT_PERCENTILES.into_iter().collect(),
        }
    }
}

impl fmt::Display for Percentiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranks: Vec<String> = self.ranks.iter().map(u32::to_string).collect();
        f.write_str(&ranks.join(","))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercentileParseError {
    #[error("'{0}' is not a percentile rank")]
    NotARank(String),

    #[error(transparent)]
    Rank(#[from] RankError),
}

/// Statistics over a non-empty set of readings.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentileStats {
    pub count: usize,
    pub min: f32,
    pub max: f32,
    pub average: f32,
    pub percentiles: BTreeMap<u32, f32>,
}

/// Outcome of one run. No readings is its own state rather than a
/// placeholder number.
#[derive(Debug, Clone, PartialEq)]
pub enum PercentileResult {
    Empty { ranks: Percentiles },
    Computed(PercentileStats),
}

impl PercentileResult {
    pub fn count(&self) -> usize {
        match self {
            Self::Empty { .. } => 0,
            Self::Computed(stats) => stats.count,
        }
    }

    pub fn stats(&self) -> Option<&PercentileStats> {
        match self {
            Self::Empty { .. } => None,
            Self::Computed(stats) => Some(stats),
        }
    }

    pub fn percentile(&self, rank: u32) -> Option<f32> {
        self.stats()
            .and_then(|s| s.percentiles.get(&rank).copied())
    }
}
