//! Error types for the scheduling engine.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which part of a workload carried an offending track number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackRole {
    /// The starting head position.
    Head,
    /// A pending request, identified by its position in submission order.
    Request {
        /// Index into `Workload::pending`.
        index: usize,
    },
}

impl fmt::Display for TrackRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackRole::Head => write!(f, "head position"),
            TrackRole::Request { index } => write!(f, "request #{index}"),
        }
    }
}

/// Errors returned by the scheduling engine.
///
/// All errors are detected before any discipline runs, so a failed call
/// never yields a partially computed result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulingError {
    /// A request or the head position lies outside `[0, max_track]`.
    #[error("{role} at track {track} is outside the track range [0, {max_track}]")]
    OutOfRange {
        /// The offending track number.
        track: i64,
        /// Upper bound of the range it was checked against.
        max_track: i64,
        /// Where the track came from.
        role: TrackRole,
    },

    /// A discipline tag did not name one of the six supported disciplines.
    #[error("unknown scheduling discipline: {0:?}")]
    InvalidDiscipline(String),

    /// The configured range has `max_track < 0`.
    #[error("track range is empty: max_track = {max_track}")]
    EmptyTrackRange {
        /// The rejected upper bound.
        max_track: i64,
    },

    /// A learned predictor was asked for a prediction before it saw any samples.
    #[error("predictor has no training samples")]
    UntrainedPredictor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = SchedulingError::OutOfRange {
            track: 250,
            max_track: 199,
            role: TrackRole::Request { index: 3 },
        };
        assert_eq!(
            err.to_string(),
            "request #3 at track 250 is outside the track range [0, 199]"
        );
    }

    #[test]
    fn test_head_message() {
        let err = SchedulingError::OutOfRange {
            track: -1,
            max_track: 10,
            role: TrackRole::Head,
        };
        assert!(err.to_string().starts_with("head position at track -1"));
    }

    #[test]
    fn test_invalid_discipline_message() {
        let err = SchedulingError::InvalidDiscipline("elevator".into());
        assert_eq!(err.to_string(), "unknown scheduling discipline: \"elevator\"");
    }
}
