//! k-nearest-neighbour discipline predictor.
//!
//! # Algorithm
//!
//! 1. Extract [`WorkloadFeatures`] from the query workload.
//! 2. Rank stored samples by squared Euclidean distance (stable, so
//!    equidistant samples keep training order).
//! 3. Take the `k` nearest and vote on their labels.
//! 4. The most voted discipline wins; equal votes go to the earliest in
//!    enumeration order. Confidence is the winner's vote share.
//!
//! # Reference
//! Cover & Hart (1967), "Nearest Neighbor Pattern Classification"

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{DisciplinePredictor, Prediction, WorkloadFeatures, WorkloadGenerator};
use crate::models::{Discipline, TrackRange, Workload};
use crate::validation;
use crate::{SchedulingEngine, SchedulingError};

/// A feature vector labelled with the exact cheapest discipline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Workload features.
    pub features: WorkloadFeatures,
    /// Discipline chosen by the exact selector.
    pub label: Discipline,
}

impl TrainingSample {
    /// Labels a workload by running the exact selector on it.
    pub fn labelled(
        workload: &Workload,
        range: &TrackRange,
        engine: &SchedulingEngine,
    ) -> Result<Self, SchedulingError> {
        let report = engine.evaluate_all(workload, range)?;
        Ok(Self {
            features: WorkloadFeatures::extract(workload, range),
            label: report.best,
        })
    }
}

/// Draws `count` workloads from `generator` and labels each one.
pub fn generate_training_set<R: Rng>(
    rng: &mut R,
    generator: &WorkloadGenerator,
    engine: &SchedulingEngine,
    count: usize,
) -> Result<Vec<TrainingSample>, SchedulingError> {
    let samples = (0..count)
        .map(|_| {
            let workload = generator.generate(rng);
            TrainingSample::labelled(&workload, generator.range(), engine)
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("generated {} labelled training samples", samples.len());
    Ok(samples)
}

/// Predicts by majority vote among the `k` most similar training samples.
#[derive(Debug, Clone)]
pub struct NearestNeighborPredictor {
    k: usize,
    samples: Vec<TrainingSample>,
}

impl NearestNeighborPredictor {
    /// Creates an untrained predictor voting over `k` neighbours (at least 1).
    pub fn new(k: usize) -> Self {
        Self {
            k: k.max(1),
            samples: Vec::new(),
        }
    }

    /// Sets the training samples.
    pub fn with_samples(mut self, samples: Vec<TrainingSample>) -> Self {
        self.samples = samples;
        self
    }

    /// Adds training samples.
    pub fn train(&mut self, samples: impl IntoIterator<Item = TrainingSample>) {
        self.samples.extend(samples);
    }

    /// Number of neighbours consulted per prediction.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of stored samples.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

impl DisciplinePredictor for NearestNeighborPredictor {
    fn name(&self) -> &'static str {
        "k-NN"
    }

    fn predict(
        &self,
        workload: &Workload,
        range: &TrackRange,
    ) -> Result<Prediction, SchedulingError> {
        validation::validate(workload, range)?;
        if self.samples.is_empty() {
            return Err(SchedulingError::UntrainedPredictor);
        }

        let query = WorkloadFeatures::extract(workload, range);
        let mut ranked: Vec<(f64, Discipline)> = self
            .samples
            .iter()
            .map(|s| (query.distance_squared(&s.features), s.label))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        let neighbours = &ranked[..self.k.min(ranked.len())];
        let mut votes = Discipline::ALL.map(|_| 0usize);
        for &(_, label) in neighbours {
            votes[label.index()] += 1;
        }

        let mut winner = Discipline::ALL[0];
        for d in Discipline::ALL {
            if votes[d.index()] > votes[winner.index()] {
                winner = d;
            }
        }

        Ok(Prediction {
            discipline: winner,
            confidence: votes[winner.index()] as f64 / neighbours.len() as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample(head: f64, label: Discipline) -> TrainingSample {
        TrainingSample {
            features: WorkloadFeatures {
                head,
                max_request: 0.5,
                min_request: 0.5,
                request_count: 0.1,
            },
            label,
        }
    }

    fn query(head: i64) -> Workload {
        // 5 requests at track 100 → max/min 0.5, count 0.1 on a 200-track range.
        Workload::new(head, vec![100; 5])
    }

    #[test]
    fn test_nearest_label_wins() {
        let predictor = NearestNeighborPredictor::new(1).with_samples(vec![
            sample(0.0, Discipline::Look),
            sample(1.0, Discipline::Scan),
        ]);
        let p = predictor.predict(&query(10), &TrackRange::default()).unwrap();
        assert_eq!(p.discipline, Discipline::Look);
        assert!((p.confidence - 1.0).abs() < 1e-10);

        let p = predictor.predict(&query(190), &TrackRange::default()).unwrap();
        assert_eq!(p.discipline, Discipline::Scan);
    }

    #[test]
    fn test_majority_vote_confidence() {
        let predictor = NearestNeighborPredictor::new(3).with_samples(vec![
            sample(0.0, Discipline::Look),
            sample(0.05, Discipline::CLook),
            sample(0.1, Discipline::Look),
            sample(0.9, Discipline::Scan),
        ]);
        let p = predictor.predict(&query(0), &TrackRange::default()).unwrap();
        assert_eq!(p.discipline, Discipline::Look);
        assert!((p.confidence - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_vote_tie_goes_to_enumeration_order() {
        let predictor = NearestNeighborPredictor::new(2).with_samples(vec![
            sample(0.0, Discipline::Sstf),
            sample(0.0, Discipline::Fcfs),
        ]);
        let p = predictor.predict(&query(0), &TrackRange::default()).unwrap();
        assert_eq!(p.discipline, Discipline::Fcfs);
        assert!((p.confidence - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_k_larger_than_samples() {
        let mut predictor = NearestNeighborPredictor::new(10);
        predictor.train([sample(0.2, Discipline::CScan)]);
        assert_eq!(predictor.sample_count(), 1);
        let p = predictor.predict(&query(0), &TrackRange::default()).unwrap();
        assert_eq!(p.discipline, Discipline::CScan);
        assert!((p.confidence - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_untrained() {
        let predictor = NearestNeighborPredictor::new(0);
        assert_eq!(predictor.k(), 1);
        assert_eq!(
            predictor.predict(&query(0), &TrackRange::default()),
            Err(SchedulingError::UntrainedPredictor)
        );
    }

    #[test]
    fn test_out_of_range_checked_before_training_state() {
        let predictor = NearestNeighborPredictor::new(1);
        let err = predictor
            .predict(&Workload::new(-1, vec![]), &TrackRange::default())
            .unwrap_err();
        assert!(matches!(err, SchedulingError::OutOfRange { .. }));
    }

    #[test]
    fn test_training_labels_match_exact_selector() {
        let mut rng = SmallRng::seed_from_u64(99);
        let generator = WorkloadGenerator::default();
        let engine = SchedulingEngine::new();

        let mut replay = SmallRng::seed_from_u64(99);
        let samples = generate_training_set(&mut rng, &generator, &engine, 30).unwrap();
        assert_eq!(samples.len(), 30);

        for s in &samples {
            let w = generator.generate(&mut replay);
            let best = engine.evaluate_all(&w, generator.range()).unwrap().best;
            assert_eq!(s.label, best);
            assert_eq!(s.features, WorkloadFeatures::extract(&w, generator.range()));
        }
    }

    #[test]
    fn test_trained_predictor_is_advisory_but_valid() {
        let mut rng = SmallRng::seed_from_u64(2024);
        let generator = WorkloadGenerator::default();
        let engine = SchedulingEngine::new();
        let samples = generate_training_set(&mut rng, &generator, &engine, 300).unwrap();
        let predictor = NearestNeighborPredictor::new(7).with_samples(samples);

        for _ in 0..20 {
            let w = generator.generate(&mut rng);
            let p = predictor.predict(&w, generator.range()).unwrap();
            assert!(p.confidence >= 1.0 / 7.0 && p.confidence <= 1.0);
        }
    }
}
