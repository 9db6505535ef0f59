use super::types::{PercentileResult, PercentileStats, Percentiles};
use crate::aggregate::Aggregate;

/// Sort the readings once and compute min, max, average and every requested
/// rank.
pub fn compute(aggregate: Aggregate, ranks: &Percentiles) -> PercentileResult {
    let (mut values, sum) = aggregate.into_values();
    if values.is_empty() {
        return PercentileResult::Empty {
            ranks: ranks.clone(),
        };
    }

    values.sort_unstable_by(f32::total_cmp);

    let count = values.len();
    let percentiles = ranks
        .iter()
        .map(|rank| (rank, value_at_rank(&values, rank)))
        .collect();

    PercentileResult::Computed(PercentileStats {
        count,
        min: values[0],
        max: values[count - 1],
        average: sum / count as f32,
        percentiles,
    })
}

/// Nearest rank by truncation: index `rank * count / 100`, no interpolation.
///
/// `sorted` must be non-empty and ascending.
pub(crate) fn value_at_rank(sorted: &[f32], rank: u32) -> f32 {
    let count = sorted.len();
    if count == 1 {
        return sorted[0];
    }
    if rank >= 100 {
        return sorted[count - 1];
    }

    let index = (rank as usize * count) / 100;
    sorted[index]
}
