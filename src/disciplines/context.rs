//! Sweep context for sequence generation.

use serde::{Deserialize, Serialize};

use crate::models::TrackRange;

/// Initial head travel direction for the sweeping disciplines.
///
/// FCFS and SSTF ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepDirection {
    /// Toward `max_track` first.
    #[default]
    Up,
    /// Toward track 0 first.
    Down,
}

/// Whether SCAN and C-SCAN travel to the range end on every run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Always reach the end of the range in the sweep direction, even when
    /// nothing lies beyond the last request. C-SCAN always makes the
    /// return jump as well.
    #[default]
    Always,
    /// Travel to the end (and, for C-SCAN, jump back) only when requests
    /// remain behind the head.
    WhenNeeded,
}

/// Runtime state passed to sequence generators.
///
/// Carries the track range plus the sweep configuration. Generators
/// assume the workload was already validated against `range`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepContext {
    /// Valid track interval.
    pub range: TrackRange,
    /// Initial travel direction.
    pub direction: SweepDirection,
    /// Boundary visit policy for SCAN and C-SCAN.
    pub boundary_policy: BoundaryPolicy,
}

impl SweepContext {
    /// Creates a context over `range` with the default direction and policy.
    pub fn over(range: TrackRange) -> Self {
        Self {
            range,
            ..Default::default()
        }
    }

    /// Sets the initial direction.
    pub fn with_direction(mut self, direction: SweepDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the boundary policy.
    pub fn with_boundary_policy(mut self, policy: BoundaryPolicy) -> Self {
        self.boundary_policy = policy;
        self
    }

    /// Range end reached by the first sweep.
    pub fn far_end(&self) -> i64 {
        match self.direction {
            SweepDirection::Up => self.range.max_track(),
            SweepDirection::Down => 0,
        }
    }

    /// Range end the circular disciplines jump back to.
    pub fn near_end(&self) -> i64 {
        match self.direction {
            SweepDirection::Up => 0,
            SweepDirection::Down => self.range.max_track(),
        }
    }
}
