//! Workload feature extraction.

use serde::{Deserialize, Serialize};

use crate::models::{TrackRange, Workload};

/// Request count that maps to feature value 1.0.
pub const REQUEST_COUNT_SCALE: f64 = 50.0;

/// Coarse, normalized description of a workload.
///
/// Track features are divided by the number of tracks in the range, the
/// request count by [`REQUEST_COUNT_SCALE`]. An empty workload reports the
/// head position as both its lowest and highest request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkloadFeatures {
    /// Head position.
    pub head: f64,
    /// Highest pending request.
    pub max_request: f64,
    /// Lowest pending request.
    pub min_request: f64,
    /// Number of pending requests.
    pub request_count: f64,
}

impl WorkloadFeatures {
    /// Extracts features of `workload` relative to `range`.
    pub fn extract(workload: &Workload, range: &TrackRange) -> Self {
        let scale = range.track_count() as f64;
        let head = workload.head_position();
        let pending = workload.pending();
        let max = pending.iter().copied().max().unwrap_or(head);
        let min = pending.iter().copied().min().unwrap_or(head);

        Self {
            head: head as f64 / scale,
            max_request: max as f64 / scale,
            min_request: min as f64 / scale,
            request_count: pending.len() as f64 / REQUEST_COUNT_SCALE,
        }
    }

    /// Features as a fixed-size vector.
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.head,
            self.max_request,
            self.min_request,
            self.request_count,
        ]
    }

    /// Squared Euclidean distance.
    pub fn distance_squared(&self, other: &Self) -> f64 {
        self.as_array()
            .iter()
            .zip(other.as_array())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_classic() {
        let w = Workload::new(50, vec![100, 10, 150]);
        let f = WorkloadFeatures::extract(&w, &TrackRange::default());
        assert!((f.head - 0.25).abs() < 1e-10);
        assert!((f.max_request - 0.75).abs() < 1e-10);
        assert!((f.min_request - 0.05).abs() < 1e-10);
        assert!((f.request_count - 0.06).abs() < 1e-10);
    }

    #[test]
    fn test_extract_empty_uses_head() {
        let f = WorkloadFeatures::extract(&Workload::idle(100), &TrackRange::default());
        assert!((f.max_request - 0.5).abs() < 1e-10);
        assert!((f.min_request - 0.5).abs() < 1e-10);
        assert!((f.request_count - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance() {
        let range = TrackRange::default();
        let a = WorkloadFeatures::extract(&Workload::new(0, vec![0]), &range);
        let b = WorkloadFeatures::extract(&Workload::new(100, vec![0]), &range);
        assert!((a.distance_squared(&a) - 0.0).abs() < 1e-12);
        assert!((a.distance_squared(&b) - 0.25).abs() < 1e-12);
    }
}
