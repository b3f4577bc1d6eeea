use num_traits::{Float, FromPrimitive};
use std::cmp::Ordering;

use super::Statistic;

/// Ascending ranks starting at 1, tied values share the average of their ranks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranks;

/// Siegel-Tukey ranks: the smallest value gets 1, the two largest get 2 and 3,
/// the next two smallest 4 and 5, and so on alternating between the tails.
/// Tied values share the average of their ranks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiegelTukeyRanks;

impl<D, T> Statistic<D, Vec<T>> for Ranks
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> Vec<T> {
        let slice = data.as_ref();
        let order = argsort(slice);
        let raw: Vec<usize> = (1..=slice.len()).collect();
        average_ties(slice, &order, &raw)
    }
}

impl<D, T> Statistic<D, Vec<T>> for SiegelTukeyRanks
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> Vec<T> {
        let slice = data.as_ref();
        let n = slice.len();
        let order = argsort(slice);

        // raw[j] is the rank of the j-th order statistic
        let mut raw = vec![0usize; n];
        let (mut lo, mut hi) = (0, n);
        let mut from_low = true;
        let mut take = 1;
        let mut next_rank = 1;
        while lo < hi {
            for _ in 0..take {
                if lo >= hi {
                    break;
                }
                let pos = if from_low {
                    lo += 1;
                    lo - 1
                } else {
                    hi -= 1;
                    hi
                };
                raw[pos] = next_rank;
                next_rank += 1;
            }
            from_low = !from_low;
            take = 2;
        }

        average_ties(slice, &order, &raw)
    }
}

/// Indices that sort `data` ascending; incomparable values are treated as equal.
fn argsort<T: Float>(data: &[T]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..data.len()).collect();
    idx.sort_by(|&a, &b| data[a].partial_cmp(&data[b]).unwrap_or(Ordering::Equal));
    idx
}

/// Maps per-order-statistic ranks back onto the original positions, averaging
/// over runs of equal values.
fn average_ties<T: Float + FromPrimitive>(data: &[T], order: &[usize], raw: &[usize]) -> Vec<T> {
    let mut ranks = vec![T::zero(); data.len()];
    let mut start = 0;
    while start < order.len() {
        let value = data[order[start]];
        let mut end = start + 1;
        while end < order.len() && data[order[end]].partial_cmp(&value) == Some(Ordering::Equal) {
            end += 1;
        }

        let total: usize = raw[start..end].iter().sum();
        let avg = T::from_usize(total).expect("rank sum fits in float")
            / T::from_usize(end - start).expect("run length fits in float");
        for &i in &order[start..end] {
            ranks[i] = avg;
        }
        start = end;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_ranks(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(*a, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn distinct_values_get_their_positions() {
        let r: Vec<f64> = Ranks.compute(&[3.0_f64, 1.0, 2.0]);
        assert_ranks(&r, &[3.0, 1.0, 2.0]);
    }

    #[test]
    fn ties_share_average_rank() {
        let r: Vec<f64> = Ranks.compute(&[10.0_f64, 20.0, 10.0, 30.0, 20.0, 20.0]);
        assert_ranks(&r, &[1.5, 4.0, 1.5, 6.0, 4.0, 4.0]);
    }

    #[test]
    fn siegel_tukey_alternates_between_tails() {
        // order statistics 1..=7 receive 1, 4, 5, 7, 6, 3, 2
        let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let r: Vec<f64> = SiegelTukeyRanks.compute(&data);
        assert_ranks(&r, &[1.0, 4.0, 5.0, 7.0, 6.0, 3.0, 2.0]);
    }

    #[test]
    fn siegel_tukey_ranks_are_a_permutation() {
        let data: Vec<f64> = (0..10).map(|i| f64::from(i) * 1.5).rev().collect();
        let mut r: Vec<f64> = SiegelTukeyRanks.compute(&data);
        r.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let expected: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_ranks(&r, &expected);
    }

    #[test]
    fn siegel_tukey_ties_are_averaged() {
        let r: Vec<f64> = SiegelTukeyRanks.compute(&[1.0_f64, 5.0, 5.0, 9.0]);
        // raw ranks in order: 1, 4, 3, 2
        assert_ranks(&r, &[1.0, 3.5, 3.5, 2.0]);
    }
}
