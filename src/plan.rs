use std::ops::Range;

/// How many parts a dataset is cut into and how many records each part takes.
///
/// The part count is derived from the compressed size of the whole dataset,
/// assuming every record compresses about as well as the average. That is a
/// heuristic: a part can still come out above the limit when compressibility
/// is uneven, and the `+ 1` biases both numbers so the last part tends to be
/// short rather than a part overflowing into an extra one.
///
/// Absurdly small limits are not guarded against: the part count saturates at
/// `usize::MAX` instead of overflowing, and the splitter then writes
/// header-only parts until the disk or the user stops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionPlan {
    pub part_count: usize,
    pub records_per_part: usize,
    pub record_count: usize,
}

impl PartitionPlan {
    /// `part_count = floor(size / max) + 1`, `records_per_part = floor(records / part_count) + 1`.
    pub fn compute(size_mb: f64, max_size_mb: f64, record_count: usize) -> Self {
        let part_count = ((size_mb / max_size_mb).floor() as usize).saturating_add(1);
        let records_per_part = record_count / part_count + 1;
        Self { part_count, records_per_part, record_count }
    }

    /// Half-open record range of part `n` (1-based), clipped to the dataset.
    /// Trailing parts can be empty.
    pub fn record_range(&self, n: usize) -> Range<usize> {
        let start = n.saturating_sub(1).saturating_mul(self.records_per_part).min(self.record_count);
        let end = n.saturating_mul(self.records_per_part).min(self.record_count);
        start..end
    }

    /// Ranges for parts `1..=part_count`, in order.
    pub fn ranges(&self) -> impl Iterator<Item = (usize, Range<usize>)> + '_ {
        (1..=self.part_count).map(move |n| (n, self.record_range(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_million_records_three_times_over() {
        let plan = PartitionPlan::compute(30.0, 10.0, 1_000_000);
        assert_eq!(plan.part_count, 4);
        assert_eq!(plan.records_per_part, 250_001);

        assert_eq!(plan.record_range(1), 0..250_001);
        assert_eq!(plan.record_range(4), 750_003..1_000_000);
        assert_eq!(plan.record_range(4).len(), 249_997);
    }

    #[test]
    fn test_over_limit_gives_at_least_two_parts() {
        let plan = PartitionPlan::compute(10.0001, 10.0, 50);
        assert_eq!(plan.part_count, 2);
        assert_eq!(plan.records_per_part, 26);
        assert_eq!(plan.record_range(2), 26..50);
    }

    #[test]
    fn test_fractional_ratio_floors() {
        let plan = PartitionPlan::compute(2.9, 1.0, 100);
        assert_eq!(plan.part_count, 3);
        assert_eq!(plan.records_per_part, 34);
    }

    #[test]
    fn test_ranges_cover_every_record_once() {
        for &(size, max, count) in &[(5.5, 1.0, 17), (3.0, 1.0, 1_000), (12.0, 0.5, 7), (2.0, 1.0, 0)] {
            let plan = PartitionPlan::compute(size, max, count);
            let mut next = 0;
            for (_, range) in plan.ranges() {
                assert_eq!(range.start, next.min(count));
                next = range.end;
            }
            assert_eq!(next, count);
        }
    }

    #[test]
    fn test_tiny_limit_saturates() {
        let plan = PartitionPlan::compute(1.0, 1e-300, 10);
        assert_eq!(plan.part_count, usize::MAX);
        assert_eq!(plan.records_per_part, 1);
        assert_eq!(plan.record_range(10), 9..10);
        assert!(plan.record_range(usize::MAX).is_empty());
    }

    #[test]
    fn test_trailing_parts_can_be_empty() {
        // 25 parts of 1 record each over 7 records.
        let plan = PartitionPlan::compute(12.0, 0.5, 7);
        assert_eq!(plan.part_count, 25);
        assert_eq!(plan.records_per_part, 1);
        assert_eq!(plan.record_range(7), 6..7);
        assert!(plan.record_range(8).is_empty());
        assert!(plan.record_range(25).is_empty());
    }
}
