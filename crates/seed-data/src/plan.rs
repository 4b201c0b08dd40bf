//! Batch planning: split a total row count into bounded batch sizes.

use crate::error::SeedError;

/// A plan for splitting `total_rows` rows into batches of at most
/// `max_batch_size` rows each.
///
/// The plan itself stores only the two counts; [`iter`](Self::iter) produces
/// the batch sizes lazily and can be restarted any number of times. Every
/// produced size is positive, no size exceeds `max_batch_size`, and the sizes
/// sum exactly to `total_rows`. Only the last batch may be short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    total_rows: usize,
    max_batch_size: usize,
}

impl BatchPlan {
    /// Creates a plan. Fails with [`SeedError::InvalidArgument`] when
    /// `max_batch_size` is zero.
    pub fn new(total_rows: usize, max_batch_size: usize) -> Result<Self, SeedError> {
        if max_batch_size == 0 {
            return Err(SeedError::InvalidArgument(
                "max_batch_size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            total_rows,
            max_batch_size,
        })
    }

    /// Total rows across all batches.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Number of batches the plan produces.
    pub fn batch_count(&self) -> usize {
        self.total_rows.div_ceil(self.max_batch_size)
    }

    /// True when the plan produces no batches.
    pub fn is_empty(&self) -> bool {
        self.total_rows == 0
    }

    /// Returns a fresh iterator over the batch sizes.
    pub fn iter(&self) -> BatchSizes {
        BatchSizes {
            remaining: self.total_rows,
            max_batch_size: self.max_batch_size,
        }
    }
}

impl IntoIterator for &BatchPlan {
    type Item = usize;
    type IntoIter = BatchSizes;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the batch sizes of a [`BatchPlan`].
#[derive(Debug, Clone)]
pub struct BatchSizes {
    remaining: usize,
    max_batch_size: usize,
}

impl Iterator for BatchSizes {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }

        let size = self.remaining.min(self.max_batch_size);
        self.remaining -= size;
        Some(size)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.remaining.div_ceil(self.max_batch_size);
        (count, Some(count))
    }
}

impl ExactSizeIterator for BatchSizes {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_sum_to_total_and_stay_in_bounds() {
        for total in [0usize, 1, 7, 999, 1000, 1001, 2500, 10_000] {
            for max in [1usize, 3, 50, 999, 1000, 5000] {
                let plan = BatchPlan::new(total, max).unwrap();
                let sizes: Vec<usize> = plan.iter().collect();

                assert_eq!(sizes.iter().sum::<usize>(), total);
                assert!(sizes.iter().all(|&s| s > 0 && s <= max));
                assert_eq!(sizes.len(), plan.batch_count());
            }
        }
    }

    #[test]
    fn test_2500_by_1000_splits_into_three() {
        let plan = BatchPlan::new(2500, 1000).unwrap();
        let sizes: Vec<usize> = plan.iter().collect();
        assert_eq!(sizes, vec![1000, 1000, 500]);
    }

    #[test]
    fn test_999_by_1000_is_a_single_batch() {
        let plan = BatchPlan::new(999, 1000).unwrap();
        let sizes: Vec<usize> = plan.iter().collect();
        assert_eq!(sizes, vec![999]);
    }

    #[test]
    fn test_zero_rows_yields_empty_sequence() {
        let plan = BatchPlan::new(0, 1000).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.batch_count(), 0);
        assert_eq!(plan.iter().next(), None);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let plan = BatchPlan::new(2500, 1000).unwrap();
        let first: Vec<usize> = plan.iter().collect();
        let second: Vec<usize> = (&plan).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let err = BatchPlan::new(100, 0).unwrap_err();
        assert!(matches!(err, SeedError::InvalidArgument(_)));
    }

    #[test]
    fn test_size_hint_is_exact() {
        let plan = BatchPlan::new(2500, 1000).unwrap();
        let mut sizes = plan.iter();
        assert_eq!(sizes.len(), 3);
        sizes.next();
        assert_eq!(sizes.len(), 2);
    }
}
