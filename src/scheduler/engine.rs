//! Stateless scheduling engine.
//!
//! # Algorithm
//!
//! 1. Validate the workload against the track range.
//! 2. Generate the service sequence for each requested discipline.
//! 3. Price each sequence with [`seek_cost`].
//! 4. Select the cheapest discipline, earliest in enumeration order on ties.
//!
//! # Complexity
//! O(n log n) per sweeping discipline, O(n²) for SSTF.

use std::collections::BTreeMap;

use super::cost::{average_seek, seek_cost};
use super::EngineConfig;
use crate::disciplines::{self, BoundaryPolicy, SweepContext, SweepDirection};
use crate::models::{Discipline, EvaluationReport, ServiceResult, TrackRange, Workload};
use crate::validation;
use crate::SchedulingError;

/// Runs disciplines over workloads and selects the cheapest.
///
/// The engine holds only its immutable [`EngineConfig`]; every call is a
/// pure function of its arguments, so one engine can serve any number of
/// threads without synchronization.
///
/// # Example
///
/// ```
/// use disk_schedule::SchedulingEngine;
/// use disk_schedule::disciplines::BoundaryPolicy;
/// use disk_schedule::models::{Discipline, TrackRange, Workload};
///
/// let engine = SchedulingEngine::new().with_boundary_policy(BoundaryPolicy::WhenNeeded);
/// let range = TrackRange::new(199).unwrap();
/// let workload = Workload::new(10, vec![20, 30]);
///
/// let scan = engine.run(Discipline::Scan, &workload, &range).unwrap();
/// assert_eq!(scan.sequence, vec![20, 30]);
/// assert_eq!(scan.total_seek, 20);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingEngine {
    config: EngineConfig,
}

impl SchedulingEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the initial sweep direction.
    pub fn with_direction(mut self, direction: SweepDirection) -> Self {
        self.config.direction = direction;
        self
    }

    /// Sets the boundary policy for SCAN and C-SCAN.
    pub fn with_boundary_policy(mut self, policy: BoundaryPolicy) -> Self {
        self.config.boundary_policy = policy;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs one discipline.
    ///
    /// # Errors
    /// [`SchedulingError::OutOfRange`] if the head or any request lies
    /// outside `range`. Nothing is generated in that case.
    pub fn run(
        &self,
        discipline: Discipline,
        workload: &Workload,
        range: &TrackRange,
    ) -> Result<ServiceResult, SchedulingError> {
        validation::validate(workload, range)?;
        let context = self.config.context(*range);
        Ok(price(discipline, workload, &context))
    }

    /// Runs all six disciplines and selects the cheapest.
    ///
    /// Validation happens once, before any discipline runs, so the call
    /// either succeeds for all six or fails without computing anything.
    pub fn evaluate_all(
        &self,
        workload: &Workload,
        range: &TrackRange,
    ) -> Result<EvaluationReport, SchedulingError> {
        validation::validate(workload, range)?;
        let context = self.config.context(*range);

        let per_discipline: BTreeMap<Discipline, ServiceResult> = Discipline::ALL
            .iter()
            .map(|&d| (d, price(d, workload, &context)))
            .collect();

        // Non-empty by construction, so the fallback is never taken.
        let best = select_best(&per_discipline).unwrap_or(Discipline::Fcfs);
        log::debug!(
            "evaluated {} requests from head {}: best {} ({} tracks)",
            workload.len(),
            workload.head_position(),
            best,
            per_discipline.get(&best).map_or(0, |r| r.total_seek)
        );

        Ok(EvaluationReport {
            per_discipline,
            best,
        })
    }
}

/// Runs one discipline with the default engine configuration.
///
/// Sweeps upward first and always travels to the range end (SCAN, C-SCAN).
pub fn run(
    discipline: Discipline,
    workload: &Workload,
    range: &TrackRange,
) -> Result<ServiceResult, SchedulingError> {
    SchedulingEngine::new().run(discipline, workload, range)
}

/// Evaluates all disciplines with the default engine configuration.
pub fn evaluate_all(
    workload: &Workload,
    range: &TrackRange,
) -> Result<EvaluationReport, SchedulingError> {
    SchedulingEngine::new().evaluate_all(workload, range)
}

/// Picks the discipline with strictly minimal `total_seek`.
///
/// Iterates in enumeration order and only replaces the incumbent on a
/// strictly smaller cost, so the earliest discipline wins ties. Returns
/// `None` for an empty map.
pub fn select_best(results: &BTreeMap<Discipline, ServiceResult>) -> Option<Discipline> {
    let mut best: Option<(Discipline, u64)> = None;
    for (&discipline, result) in results {
        match best {
            Some((_, cost)) if result.total_seek >= cost => {}
            _ => best = Some((discipline, result.total_seek)),
        }
    }
    best.map(|(discipline, _)| discipline)
}

fn price(discipline: Discipline, workload: &Workload, context: &SweepContext) -> ServiceResult {
    let sequence = disciplines::generate(discipline, workload, context);
    let total_seek = seek_cost(&sequence, workload.head_position());
    log::debug!(
        "{discipline}: {} positions, total seek {total_seek}",
        sequence.len()
    );

    ServiceResult {
        discipline,
        average_seek: average_seek(total_seek, sequence.len()),
        sequence,
        total_seek,
    }
}
