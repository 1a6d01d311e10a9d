//! Input validation for disk workloads.
//!
//! Checks that every track a workload mentions lies inside the track
//! range before any discipline runs. Two entry points:
//! - [`validate`]: fail-fast, returns the first problem as a
//!   [`SchedulingError`]. The engine uses this.
//! - [`find_violations`]: collects every problem, for callers that want
//!   to report all bad inputs at once.

use std::fmt;

use crate::models::{TrackRange, Workload};
use crate::{SchedulingError, TrackRole};

/// Collect-all validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// One track that lies outside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    /// Where the track came from.
    pub role: TrackRole,
    /// The offending track number.
    pub track: i64,
    /// Upper bound of the range it was checked against.
    pub max_track: i64,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The head starts outside the track range.
    HeadOutOfRange,
    /// A pending request lies outside the track range.
    RequestOutOfRange,
}

impl ValidationError {
    /// Error category, derived from the role.
    pub fn kind(&self) -> ValidationErrorKind {
        match self.role {
            TrackRole::Head => ValidationErrorKind::HeadOutOfRange,
            TrackRole::Request { .. } => ValidationErrorKind::RequestOutOfRange,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (track {}) is outside [0, {}]",
            self.role, self.track, self.max_track
        )
    }
}

impl From<ValidationError> for SchedulingError {
    fn from(e: ValidationError) -> Self {
        SchedulingError::OutOfRange {
            track: e.track,
            max_track: e.max_track,
            role: e.role,
        }
    }
}

/// Validates a workload against a track range, stopping at the first problem.
///
/// The head position is checked before the requests; requests are checked
/// in submission order.
pub fn validate(workload: &Workload, range: &TrackRange) -> Result<(), SchedulingError> {
    // Deserialized ranges are checked by TrackRange itself; this guards
    // against a bound that slipped past construction.
    if range.max_track() < 0 {
        return Err(SchedulingError::EmptyTrackRange {
            max_track: range.max_track(),
        });
    }

    match violations(workload, range).next() {
        Some(violation) => {
            log::warn!("rejecting workload: {violation}");
            Err(violation.into())
        }
        None => Ok(()),
    }
}

/// Validates a workload and reports every out-of-range track.
///
/// # Returns
/// `Ok(())` if all tracks are in range, `Err(errors)` with all detected issues,
/// head first, then requests in submission order.
pub fn find_violations(workload: &Workload, range: &TrackRange) -> ValidationResult {
    let errors: Vec<ValidationError> = violations(workload, range).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn violations<'a>(
    workload: &'a Workload,
    range: &'a TrackRange,
) -> impl Iterator<Item = ValidationError> + 'a {
    let head = std::iter::once((TrackRole::Head, workload.head_position()));
    let requests = workload
        .pending()
        .iter()
        .enumerate()
        .map(|(index, &track)| (TrackRole::Request { index }, track));

    head.chain(requests)
        .filter(move |&(_, track)| !range.contains(track))
        .map(move |(role, track)| ValidationError {
            role,
            track,
            max_track: range.max_track(),
        })
}
