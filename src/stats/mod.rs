use crate::error::SeqLenError;
use itertools::{Itertools, MinMaxResult};

/// Summary statistics over the lengths of every record in a file.
#[derive(Clone, Debug, PartialEq)]
pub struct LengthStats {
    pub count: usize,
    pub total: u64,
    pub mean: f64,
    pub median: usize,
    pub min: usize,
    pub max: usize,
    pub n50: u64,
}

impl LengthStats {
    /// Computes the statistics of a list of lengths given in input order.
    ///
    /// # Errors
    ///
    /// `EmptyDataset` if `lengths` is empty.
    pub fn from_lengths(lengths: &[usize]) -> Result<Self, SeqLenError> {
        let (min, max) = match lengths.iter().minmax() {
            MinMaxResult::NoElements => return Err(SeqLenError::EmptyDataset),
            MinMaxResult::OneElement(&x) => (x, x),
            MinMaxResult::MinMax(&lo, &hi) => (lo, hi),
        };

        let mut sorted = lengths.to_vec();
        sorted.sort_unstable();

        let count = sorted.len();
        let total: u64 = sorted.iter().map(|&x| x as u64).sum();

        Ok(LengthStats {
            count,
            total,
            mean: total as f64 / count as f64,
            median: median(&sorted),
            min,
            max,
            n50: n50(&sorted),
        })
    }
}

/// The element at index `len / 2` of an ascending list. For an even number of elements this is
/// the upper of the two middle values, not their average.
///
/// `sorted` must be non-empty and in ascending order.
fn median(sorted: &[usize]) -> usize {
    sorted[sorted.len() / 2]
}

/// N50 as the median of the length-weighted multiset: every length `L` is counted `L` times.
/// For an even number of bases the two middle values are averaged, and the result is truncated
/// to an integer. Returns 0 if there are no bases at all.
///
/// `sorted` must be in ascending order. The multiset is never built: the value at a position
/// in it is found by binary search over the running totals of `sorted`.
pub fn n50(sorted: &[usize]) -> u64 {
    // cumulative[i] is the number of bases in sorted[..=i]
    let cumulative: Vec<u64> = sorted
        .iter()
        .scan(0u64, |acc, &x| {
            *acc += x as u64;
            Some(*acc)
        })
        .collect();

    let total = cumulative.last().copied().unwrap_or(0);
    if total == 0 {
        return 0;
    }

    let at = |pos: u64| -> u64 { sorted[cumulative.partition_point(|&c| c <= pos)] as u64 };

    let mid = total / 2;
    if total % 2 == 0 {
        (at(mid - 1) + at(mid)) / 2
    } else {
        at(mid)
    }
}
