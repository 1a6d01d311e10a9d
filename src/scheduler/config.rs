//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::disciplines::{BoundaryPolicy, SweepContext, SweepDirection};
use crate::models::TrackRange;

/// Sweep configuration shared by every run of a [`SchedulingEngine`](super::SchedulingEngine).
///
/// The defaults reproduce the classic textbook behaviour: sweep upward
/// first and always travel to the end of the range.
///
/// # Example
/// ```
/// use disk_schedule::scheduler::EngineConfig;
/// use disk_schedule::disciplines::{BoundaryPolicy, SweepDirection};
///
/// let config: EngineConfig =
///     serde_json::from_str(r#"{"direction":"down","boundary_policy":"when_needed"}"#).unwrap();
/// assert_eq!(config.direction, SweepDirection::Down);
/// assert_eq!(config.boundary_policy, BoundaryPolicy::WhenNeeded);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Initial sweep direction.
    pub direction: SweepDirection,
    /// Boundary visit policy for SCAN and C-SCAN.
    pub boundary_policy: BoundaryPolicy,
}

impl EngineConfig {
    /// Builds the generator context for a run over `range`.
    pub fn context(&self, range: TrackRange) -> SweepContext {
        SweepContext::over(range)
            .with_direction(self.direction)
            .with_boundary_policy(self.boundary_policy)
    }
}
