//! Addressable track range.

use serde::{Deserialize, Serialize};

use super::Workload;
use crate::SchedulingError;

/// Upper track bound used by [`TrackRange::default`].
///
/// A 200-cylinder disk (tracks 0..=199). This is only a default; every
/// engine entry point takes the range explicitly.
pub const DEFAULT_MAX_TRACK: i64 = 199;

/// Closed interval `[0, max_track]` bounding all valid track numbers.
///
/// # Invariant
/// `max_track >= 0`. Construction (and deserialization) rejects negative
/// bounds with [`SchedulingError::EmptyTrackRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TrackRange {
    max_track: i64,
}

impl TrackRange {
    /// Creates the range `[0, max_track]`.
    pub fn new(max_track: i64) -> Result<Self, SchedulingError> {
        if max_track < 0 {
            return Err(SchedulingError::EmptyTrackRange { max_track });
        }
        Ok(Self { max_track })
    }

    /// Derives the smallest range covering the workload's head and requests.
    ///
    /// This is the "dynamic" boundary convention: the sweep end is the
    /// largest track actually in play rather than the physical disk end.
    /// It is never applied implicitly by the engine.
    pub fn spanning(workload: &Workload) -> Self {
        let max_track = workload
            .pending()
            .iter()
            .copied()
            .chain(std::iter::once(workload.head_position()))
            .max()
            .unwrap_or(0)
            .max(0);
        Self { max_track }
    }

    /// Highest valid track.
    #[inline]
    pub fn max_track(&self) -> i64 {
        self.max_track
    }

    /// Whether `track` lies in `[0, max_track]`.
    #[inline]
    pub fn contains(&self, track: i64) -> bool {
        (0..=self.max_track).contains(&track)
    }

    /// Number of addressable tracks (`max_track + 1`).
    ///
    /// Unsigned so that a range ending at `i64::MAX` still has a count.
    #[inline]
    pub fn track_count(&self) -> u64 {
        self.max_track.unsigned_abs() + 1
    }
}

impl Default for TrackRange {
    fn default() -> Self {
        Self {
            max_track: DEFAULT_MAX_TRACK,
        }
    }
}

impl TryFrom<i64> for TrackRange {
    type Error = SchedulingError;

    fn try_from(max_track: i64) -> Result<Self, Self::Error> {
        Self::new(max_track)
    }
}

impl From<TrackRange> for i64 {
    fn from(range: TrackRange) -> Self {
        range.max_track
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let range = TrackRange::new(199).unwrap();
        assert_eq!(range.max_track(), 199);
        assert_eq!(range.track_count(), 200);
    }

    #[test]
    fn test_track_count_at_i64_max() {
        let range = TrackRange::new(i64::MAX).unwrap();
        assert_eq!(range.track_count(), i64::MAX as u64 + 1);
        assert!(range.contains(i64::MAX));
    }

    #[test]
    fn test_single_track_range() {
        let range = TrackRange::new(0).unwrap();
        assert!(range.contains(0));
        assert!(!range.contains(1));
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(
            TrackRange::new(-1),
            Err(SchedulingError::EmptyTrackRange { max_track: -1 })
        );
    }

    #[test]
    fn test_contains_bounds() {
        let range = TrackRange::new(10).unwrap();
        assert!(range.contains(0));
        assert!(range.contains(10));
        assert!(!range.contains(-1));
        assert!(!range.contains(11));
    }

    #[test]
    fn test_default_is_200_cylinders() {
        assert_eq!(TrackRange::default().max_track(), DEFAULT_MAX_TRACK);
    }

    #[test]
    fn test_spanning_uses_largest_track() {
        let w = Workload::new(53, vec![98, 183, 37]);
        assert_eq!(TrackRange::spanning(&w).max_track(), 183);

        let head_high = Workload::new(150, vec![10, 20]);
        assert_eq!(TrackRange::spanning(&head_high).max_track(), 150);
    }

    #[test]
    fn test_spanning_negative_head_clamps() {
        let w = Workload::new(-5, vec![]);
        assert_eq!(TrackRange::spanning(&w).max_track(), 0);
    }

    #[test]
    fn test_serde_roundtrip_and_rejection() {
        let json = serde_json::to_string(&TrackRange::new(42).unwrap()).unwrap();
        assert_eq!(json, "42");
        let back: TrackRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_track(), 42);
        assert!(serde_json::from_str::<TrackRange>("-3").is_err());
    }
}
