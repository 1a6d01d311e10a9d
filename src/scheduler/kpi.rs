//! Seek performance indicators (KPIs).
//!
//! Summarises the head path of a single [`ServiceResult`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total seek | Sum of all head moves |
//! | Average seek | Total / positions visited |
//! | Longest seek | Largest single move |
//! | Reversals | Times the head changed travel direction |
//! | Long jumps | Moves longer than half the range (e.g. C-SCAN return) |

use crate::models::{ServiceResult, TrackRange};

/// Head-path metrics of one result.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekKpi {
    /// Sum of all head moves.
    pub total_seek: u64,
    /// Mean move per visited position (0 when nothing was visited).
    pub average_seek: f64,
    /// Largest single move.
    pub longest_seek: u64,
    /// Number of travel direction changes. Zero-length moves do not count.
    pub reversals: usize,
    /// Moves longer than half the track range.
    pub long_jumps: usize,
    /// Positions visited (length of the sequence).
    pub positions_visited: usize,
}

impl SeekKpi {
    /// Computes KPIs for a result that started from `head`.
    ///
    /// # Arguments
    /// * `result` - The service result to summarise.
    /// * `head` - Starting head position of the run.
    /// * `range` - Track range the run used (for the long-jump threshold).
    pub fn calculate(result: &ServiceResult, head: i64, range: &TrackRange) -> Self {
        let half_range = (range.max_track() / 2).unsigned_abs();
        let mut longest_seek: u64 = 0;
        let mut reversals: usize = 0;
        let mut long_jumps: usize = 0;
        let mut last_direction: Option<std::cmp::Ordering> = None;
        let mut current = head;

        for &next in &result.sequence {
            let step = next.abs_diff(current);
            longest_seek = longest_seek.max(step);
            if step > half_range {
                long_jumps += 1;
            }

            let direction = next.cmp(&current);
            if direction != std::cmp::Ordering::Equal {
                if last_direction.is_some_and(|d| d != direction) {
                    reversals += 1;
                }
                last_direction = Some(direction);
            }
            current = next;
        }

        Self {
            total_seek: result.total_seek,
            average_seek: result.average_seek,
            longest_seek,
            reversals,
            long_jumps,
            positions_visited: result.sequence.len(),
        }
    }
}
