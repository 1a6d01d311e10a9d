//! Service results (scheduling output) models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Discipline;

/// Outcome of running one discipline over a workload.
///
/// # Sequence Convention
/// `sequence` lists the positions the head visits *after* leaving its
/// starting position, in service order: serviced requests plus any
/// boundary visits the discipline makes (SCAN and C-SCAN). The starting
/// head position is never included; it only enters the cost walk
/// `[head] ++ sequence`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResult {
    /// Discipline that produced this result.
    pub discipline: Discipline,
    /// Visited positions in service order (head excluded).
    pub sequence: Vec<i64>,
    /// Total head movement.
    pub total_seek: u64,
    /// `total_seek / sequence.len()`, or 0 for an empty sequence.
    pub average_seek: f64,
}

impl ServiceResult {
    /// Number of positions visited.
    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether the head never moved to service anything.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// All six disciplines evaluated on the same workload.
///
/// `per_discipline` iterates in enumeration order (see [`Discipline::ALL`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Result of every discipline.
    pub per_discipline: BTreeMap<Discipline, ServiceResult>,
    /// Discipline with minimal `total_seek`; ties go to the earliest in
    /// enumeration order.
    pub best: Discipline,
}

impl EvaluationReport {
    /// Result for the best discipline.
    pub fn best_result(&self) -> Option<&ServiceResult> {
        self.per_discipline.get(&self.best)
    }

    /// Result for a given discipline.
    pub fn result(&self, discipline: Discipline) -> Option<&ServiceResult> {
        self.per_discipline.get(&discipline)
    }

    /// Results ordered from cheapest to most expensive.
    ///
    /// Equal costs keep enumeration order, so the first entry is always
    /// the result for [`best`](Self::best).
    pub fn ranking(&self) -> Vec<&ServiceResult> {
        let mut ranked: Vec<&ServiceResult> = self.per_discipline.values().collect();
        ranked.sort_by_key(|r| (r.total_seek, r.discipline));
        ranked
    }

    /// Seek distance saved by `best` compared to `discipline`.
    pub fn savings_vs(&self, discipline: Discipline) -> Option<u64> {
        let best = self.best_result()?;
        let other = self.result(discipline)?;
        Some(other.total_seek.saturating_sub(best.total_seek))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(discipline: Discipline, total_seek: u64) -> ServiceResult {
        ServiceResult {
            discipline,
            sequence: vec![1, 2],
            total_seek,
            average_seek: total_seek as f64 / 2.0,
        }
    }

    fn make_report(costs: [u64; 6], best: Discipline) -> EvaluationReport {
        let per_discipline = Discipline::ALL
            .iter()
            .zip(costs)
            .map(|(&d, c)| (d, make_result(d, c)))
            .collect();
        EvaluationReport {
            per_discipline,
            best,
        }
    }

    #[test]
    fn test_ranking_orders_by_cost_then_enumeration() {
        let report = make_report([640, 236, 236, 382, 299, 322], Discipline::Sstf);
        let order: Vec<Discipline> = report.ranking().iter().map(|r| r.discipline).collect();
        assert_eq!(
            order,
            vec![
                Discipline::Sstf,
                Discipline::Scan,
                Discipline::Look,
                Discipline::CLook,
                Discipline::CScan,
                Discipline::Fcfs,
            ]
        );
    }

    #[test]
    fn test_best_result_and_savings() {
        let report = make_report([640, 236, 331, 382, 299, 322], Discipline::Sstf);
        assert_eq!(report.best_result().unwrap().total_seek, 236);
        assert_eq!(report.savings_vs(Discipline::Fcfs), Some(404));
        assert_eq!(report.savings_vs(Discipline::Sstf), Some(0));
    }

    #[test]
    fn test_service_result_len() {
        let r = make_result(Discipline::Fcfs, 10);
        assert_eq!(r.len(), 2);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_report_serializes_with_tag_keys() {
        let report = make_report([1, 2, 3, 4, 5, 6], Discipline::Fcfs);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["best"], "fcfs");
        assert_eq!(json["per_discipline"]["clook"]["total_seek"], 6);
    }
}
