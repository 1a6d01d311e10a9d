//! Disk head scheduling engine.
//!
//! Simulates how a seek-bound, linearly addressed device services a batch of
//! pending requests under six classic head-scheduling disciplines, and reports
//! the service order together with the total head movement ("seek cost").
//!
//! # Modules
//!
//! - **`models`**: Value types: `TrackRange`, `Workload`, `Discipline`,
//!   `ServiceResult`, `EvaluationReport`
//! - **`disciplines`**: One sequence generator per discipline, plus the
//!   `SweepContext` they run in
//! - **`scheduler`**: Seek cost, metrics, and the `SchedulingEngine` that runs
//!   one discipline or selects the cheapest of all six
//! - **`validation`**: Range checks on workloads
//! - **`recommend`**: Optional advisory predictor (never replaces the exact
//!   selector)
//!
//! # Example
//!
//! ```
//! use disk_schedule::{evaluate_all, run};
//! use disk_schedule::models::{Discipline, TrackRange, Workload};
//!
//! let range = TrackRange::new(199).unwrap();
//! let workload = Workload::new(53, vec![98, 183, 37, 122, 14, 124, 65, 67]);
//!
//! let sstf = run(Discipline::Sstf, &workload, &range).unwrap();
//! assert_eq!(sstf.sequence, vec![65, 67, 37, 14, 98, 122, 124, 183]);
//! assert_eq!(sstf.total_seek, 236);
//!
//! let report = evaluate_all(&workload, &range).unwrap();
//! assert_eq!(report.per_discipline.len(), 6);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"

pub mod disciplines;
mod error;
pub mod models;
pub mod recommend;
pub mod scheduler;
pub mod validation;

pub use error::{SchedulingError, TrackRole};
pub use scheduler::{evaluate_all, run, SchedulingEngine};
