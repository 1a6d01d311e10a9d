//! Workload (scheduling input) model.

use serde::{Deserialize, Serialize};

/// A batch of pending requests together with the starting head position.
///
/// Requests keep the order the caller supplied them in (FCFS depends on
/// it) and may contain duplicates. A workload is immutable once built;
/// the builder methods consume `self` and return a new value.
///
/// Track numbers are not range-checked here. The engine validates them
/// against an explicit [`TrackRange`](super::TrackRange) before running.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Workload {
    head_position: i64,
    pending: Vec<i64>,
}

impl Workload {
    /// Creates a workload from a head position and requests in submission order.
    pub fn new(head_position: i64, pending: Vec<i64>) -> Self {
        Self {
            head_position,
            pending,
        }
    }

    /// Creates a workload with no pending requests.
    pub fn idle(head_position: i64) -> Self {
        Self::new(head_position, Vec::new())
    }

    /// Appends one request.
    pub fn with_request(mut self, track: i64) -> Self {
        self.pending.push(track);
        self
    }

    /// Appends several requests, preserving their order.
    pub fn with_requests(mut self, tracks: impl IntoIterator<Item = i64>) -> Self {
        self.pending.extend(tracks);
        self
    }

    /// Starting head position.
    #[inline]
    pub fn head_position(&self) -> i64 {
        self.head_position
    }

    /// Pending requests in submission order.
    #[inline]
    pub fn pending(&self) -> &[i64] {
        &self.pending
    }

    /// Number of pending requests.
    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether there is nothing to service.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workload_builder() {
        let w = Workload::idle(53)
            .with_request(98)
            .with_requests([183, 37, 98]);

        assert_eq!(w.head_position(), 53);
        assert_eq!(w.pending(), &[98, 183, 37, 98]);
        assert_eq!(w.len(), 4);
        assert!(!w.is_empty());
    }

    #[test]
    fn test_workload_empty() {
        let w = Workload::idle(0);
        assert!(w.is_empty());
        assert_eq!(w.len(), 0);
    }

    #[test]
    fn test_workload_serde() {
        let w = Workload::new(10, vec![5, 7]);
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["head_position"], 10);
        assert_eq!(json["pending"], serde_json::json!([5, 7]));
    }
}
