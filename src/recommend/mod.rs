//! Advisory discipline recommendation.
//!
//! A predictor *suggests* a discipline for a workload, typically from
//! coarse statistics, without running every discipline. Suggestions are
//! advisory: [`evaluate_all`](crate::evaluate_all) remains the exact and
//! authoritative selector, and is also what produces training labels.
//!
//! # Components
//!
//! - [`DisciplinePredictor`]: the `predict(workload) -> (discipline, confidence)`
//!   capability
//! - [`ExhaustivePredictor`]: answers by running the exact selector
//! - [`NearestNeighborPredictor`]: k-NN vote over labelled feature vectors
//! - [`WorkloadGenerator`] / [`generate_training_set`]: seeded synthetic data
//!
//! # Usage
//!
//! ```
//! use disk_schedule::recommend::{
//!     generate_training_set, DisciplinePredictor, NearestNeighborPredictor, WorkloadGenerator,
//! };
//! use disk_schedule::models::{TrackRange, Workload};
//! use disk_schedule::SchedulingEngine;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
//! let generator = WorkloadGenerator::default();
//! let samples =
//!     generate_training_set(&mut rng, &generator, &SchedulingEngine::new(), 200).unwrap();
//!
//! let predictor = NearestNeighborPredictor::new(5).with_samples(samples);
//! let workload = Workload::new(53, vec![98, 183, 37, 122, 14, 124, 65, 67]);
//! let prediction = predictor.predict(&workload, &TrackRange::default()).unwrap();
//! assert!(prediction.confidence > 0.0 && prediction.confidence <= 1.0);
//! ```

mod features;
mod generator;
mod knn;

pub use features::{WorkloadFeatures, REQUEST_COUNT_SCALE};
pub use generator::WorkloadGenerator;
pub use knn::{generate_training_set, NearestNeighborPredictor, TrainingSample};

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::{Discipline, TrackRange, Workload};
use crate::{SchedulingEngine, SchedulingError};

/// A suggested discipline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Suggested discipline.
    pub discipline: Discipline,
    /// Predictor's confidence in `0.0..=1.0`.
    pub confidence: f64,
}

/// Suggests a discipline for a workload.
pub trait DisciplinePredictor: Send + Sync + Debug {
    /// Predictor name (e.g., "k-NN").
    fn name(&self) -> &'static str;

    /// Suggests a discipline.
    ///
    /// # Errors
    /// Fails for workloads outside `range` and for predictors that cannot
    /// answer yet (e.g., untrained).
    fn predict(&self, workload: &Workload, range: &TrackRange)
        -> Result<Prediction, SchedulingError>;
}

/// Predictor backed by the exact selector.
///
/// Always right, always confidence 1.0. Useful as a reference when
/// measuring an approximate predictor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustivePredictor {
    engine: SchedulingEngine,
}

impl ExhaustivePredictor {
    /// Creates a predictor that runs `engine`.
    pub fn new(engine: SchedulingEngine) -> Self {
        Self { engine }
    }
}

impl DisciplinePredictor for ExhaustivePredictor {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn predict(
        &self,
        workload: &Workload,
        range: &TrackRange,
    ) -> Result<Prediction, SchedulingError> {
        let report = self.engine.evaluate_all(workload, range)?;
        Ok(Prediction {
            discipline: report.best,
            confidence: 1.0,
        })
    }
}

/// Fraction of workloads where `predictor` agrees with the exact selector.
///
/// Returns 1.0 for an empty slice.
pub fn accuracy(
    predictor: &dyn DisciplinePredictor,
    workloads: &[Workload],
    range: &TrackRange,
    engine: &SchedulingEngine,
) -> Result<f64, SchedulingError> {
    if workloads.is_empty() {
        return Ok(1.0);
    }

    let mut hits = 0usize;
    for workload in workloads {
        let predicted = predictor.predict(workload, range)?.discipline;
        if predicted == engine.evaluate_all(workload, range)?.best {
            hits += 1;
        }
    }

    let rate = hits as f64 / workloads.len() as f64;
    log::debug!(
        "{} agreed with exact selection on {hits}/{} workloads",
        predictor.name(),
        workloads.len()
    );
    Ok(rate)
}
