//! Built-in scheduling disciplines.
//!
//! # Categories
//!
//! - **Arrival order**: FCFS
//! - **Greedy nearest**: SSTF
//! - **Sweeping (elevator)**: SCAN, LOOK
//! - **Circular sweeping**: C-SCAN, C-LOOK
//!
//! # Sweep Layout
//! The sweeping disciplines split the sorted requests around the head:
//! the *ahead* side lies in the sweep direction (including requests on
//! the head's own track), the *behind* side is everything else. With the
//! default upward sweep, ahead = `>= head` and behind = `< head`.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"

use super::{BoundaryPolicy, SeekDiscipline, SweepContext, SweepDirection};
use crate::models::{Discipline, Workload};

// ======================== Arrival order ========================

/// First Come First Serve.
///
/// Services requests exactly in submission order. Ignores the head
/// position and sweep configuration.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SeekDiscipline for Fcfs {
    fn discipline(&self) -> Discipline {
        Discipline::Fcfs
    }

    fn generate(&self, workload: &Workload, _context: &SweepContext) -> Vec<i64> {
        workload.pending().to_vec()
    }
}

// ======================== Greedy nearest ========================

/// Shortest Seek Time First.
///
/// Repeatedly services the remaining request closest to the current head
/// position. Equidistant requests resolve to the smaller track.
///
/// # Complexity
/// O(n²); batches are small.
#[derive(Debug, Clone, Copy)]
pub struct Sstf;

impl SeekDiscipline for Sstf {
    fn discipline(&self) -> Discipline {
        Discipline::Sstf
    }

    fn generate(&self, workload: &Workload, _context: &SweepContext) -> Vec<i64> {
        let mut remaining = workload.pending().to_vec();
        let mut sequence = Vec::with_capacity(remaining.len());
        let mut current = workload.head_position();

        while let Some(idx) = nearest(&remaining, current) {
            // Equal keys imply equal tracks, so swap_remove cannot change the outcome.
            let next = remaining.swap_remove(idx);
            log::trace!("SSTF: {current} -> {next} (distance {})", next.abs_diff(current));
            sequence.push(next);
            current = next;
        }

        sequence
    }
}

fn nearest(remaining: &[i64], current: i64) -> Option<usize> {
    remaining
        .iter()
        .enumerate()
        .min_by_key(|&(_, &track)| (track.abs_diff(current), track))
        .map(|(idx, _)| idx)
}

// ======================== Sweeping ========================

/// SCAN (elevator).
///
/// Services the ahead side in sweep order, travels to the range end, then
/// reverses and services the behind side. Under [`BoundaryPolicy::WhenNeeded`]
/// the trip to the end is skipped when nothing lies behind the head.
#[derive(Debug, Clone, Copy)]
pub struct Scan;

impl SeekDiscipline for Scan {
    fn discipline(&self) -> Discipline {
        Discipline::Scan
    }

    fn generate(&self, workload: &Workload, context: &SweepContext) -> Vec<i64> {
        let Some(split) = Split::of(workload, context.direction) else {
            return Vec::new();
        };
        let head = workload.head_position();
        let visit_end = visits_boundary(context.boundary_policy, &split);

        let mut sequence = split.ahead;
        if visit_end {
            push_boundary(&mut sequence, head, context.far_end());
        }
        sequence.extend(split.behind.into_iter().rev());
        sequence
    }
}

/// LOOK.
///
/// Like SCAN but reverses at the last request instead of the range end.
#[derive(Debug, Clone, Copy)]
pub struct Look;

impl SeekDiscipline for Look {
    fn discipline(&self) -> Discipline {
        Discipline::Look
    }

    fn generate(&self, workload: &Workload, context: &SweepContext) -> Vec<i64> {
        let Some(split) = Split::of(workload, context.direction) else {
            return Vec::new();
        };
        let mut sequence = split.ahead;
        sequence.extend(split.behind.into_iter().rev());
        sequence
    }
}

// ======================== Circular sweeping ========================

/// Circular SCAN.
///
/// Services the ahead side, travels to the range end, jumps to the opposite
/// end (charged as the direct distance), then services the behind side in
/// the same direction as the first sweep.
#[derive(Debug, Clone, Copy)]
pub struct CScan;

impl SeekDiscipline for CScan {
    fn discipline(&self) -> Discipline {
        Discipline::CScan
    }

    fn generate(&self, workload: &Workload, context: &SweepContext) -> Vec<i64> {
        let Some(split) = Split::of(workload, context.direction) else {
            return Vec::new();
        };
        let head = workload.head_position();
        let wrap = visits_boundary(context.boundary_policy, &split);

        let mut sequence = split.ahead;
        if wrap {
            push_boundary(&mut sequence, head, context.far_end());
            let near_end = context.near_end();
            if split.behind.first() != Some(&near_end) {
                push_boundary(&mut sequence, head, near_end);
            }
        }
        sequence.extend(split.behind);
        sequence
    }
}

/// Circular LOOK.
///
/// Services the ahead side, then wraps straight to the farthest behind
/// request and continues in the same direction. No boundary visits.
#[derive(Debug, Clone, Copy)]
pub struct CLook;

impl SeekDiscipline for CLook {
    fn discipline(&self) -> Discipline {
        Discipline::CLook
    }

    fn generate(&self, workload: &Workload, context: &SweepContext) -> Vec<i64> {
        let Some(split) = Split::of(workload, context.direction) else {
            return Vec::new();
        };
        let mut sequence = split.ahead;
        sequence.extend(split.behind);
        sequence
    }
}

// ======================== Helpers ========================

/// Requests split around the head, both halves in sweep order.
struct Split {
    /// In the sweep direction, nearest to the head first.
    ahead: Vec<i64>,
    /// Behind the head, farthest from the head first.
    behind: Vec<i64>,
}

impl Split {
    /// Returns `None` for an empty workload.
    fn of(workload: &Workload, direction: SweepDirection) -> Option<Self> {
        if workload.is_empty() {
            return None;
        }

        let head = workload.head_position();
        let mut sorted = workload.pending().to_vec();
        sorted.sort_unstable();

        let (behind, ahead): (Vec<i64>, Vec<i64>) = match direction {
            SweepDirection::Up => sorted.into_iter().partition(|&t| t < head),
            SweepDirection::Down => sorted.into_iter().rev().partition(|&t| t > head),
        };

        Some(Self { ahead, behind })
    }
}

fn visits_boundary(policy: BoundaryPolicy, split: &Split) -> bool {
    match policy {
        BoundaryPolicy::Always => true,
        BoundaryPolicy::WhenNeeded => !split.behind.is_empty(),
    }
}

/// Records a boundary visit unless the head is already on that track,
/// either after the last serviced request or, with nothing serviced yet,
/// at its starting position.
fn push_boundary(sequence: &mut Vec<i64>, head: i64, boundary: i64) {
    if sequence.last().copied().unwrap_or(head) != boundary {
        sequence.push(boundary);
    }
}
