//! Synthetic workload generation.

use rand::Rng;

use crate::models::{TrackRange, Workload};

/// Draws random workloads with uniformly distributed tracks.
///
/// Head position and every request are uniform over the range; the
/// request count is uniform over `min_requests..=max_requests`.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    range: TrackRange,
    min_requests: usize,
    max_requests: usize,
}

impl WorkloadGenerator {
    /// Creates a generator over `range` with 5 to 24 requests per workload.
    pub fn new(range: TrackRange) -> Self {
        Self {
            range,
            min_requests: 5,
            max_requests: 24,
        }
    }

    /// Sets the request count bounds (inclusive). `max` is raised to `min`
    /// if smaller.
    pub fn with_request_count(mut self, min: usize, max: usize) -> Self {
        self.min_requests = min;
        self.max_requests = max.max(min);
        self
    }

    /// Track range workloads are drawn from.
    pub fn range(&self) -> &TrackRange {
        &self.range
    }

    /// Draws one workload.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Workload {
        let max_track = self.range.max_track();
        let count = rng.random_range(self.min_requests..=self.max_requests);
        let head = rng.random_range(0..=max_track);
        let pending = (0..count)
            .map(|_| rng.random_range(0..=max_track))
            .collect();
        Workload::new(head, pending)
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(TrackRange::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_workloads_are_valid() {
        let mut rng = SmallRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new(TrackRange::new(49).unwrap());
        for _ in 0..100 {
            let w = generator.generate(&mut rng);
            assert!((5..=24).contains(&w.len()));
            assert!(validation::validate(&w, generator.range()).is_ok());
        }
    }

    #[test]
    fn test_request_count_bounds() {
        let mut rng = SmallRng::seed_from_u64(1);
        let generator = WorkloadGenerator::default().with_request_count(3, 3);
        assert_eq!(generator.generate(&mut rng).len(), 3);

        let idle = WorkloadGenerator::default().with_request_count(0, 0);
        assert!(idle.generate(&mut rng).is_empty());
    }

    #[test]
    fn test_inverted_bounds_are_fixed() {
        let mut rng = SmallRng::seed_from_u64(5);
        let generator = WorkloadGenerator::default().with_request_count(8, 2);
        assert_eq!(generator.generate(&mut rng).len(), 8);
    }

    #[test]
    fn test_same_seed_same_workload() {
        let generator = WorkloadGenerator::default();
        let a = generator.generate(&mut SmallRng::seed_from_u64(9));
        let b = generator.generate(&mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
